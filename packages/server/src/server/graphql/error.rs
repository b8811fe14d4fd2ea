//! Mapping of domain errors onto GraphQL errors.
//!
//! Every error carries `extensions.code`; validation failures also carry
//! `extensions.violations` as `[{field, kind, message}]`.

use juniper::{FieldError, IntoFieldError, Object, ScalarValue, Value};
use tracing::error;

use crate::domains::projects::errors::ProjectError;
use crate::domains::projects::validation::FieldViolation;

impl<S: ScalarValue> IntoFieldError<S> for ProjectError {
    fn into_field_error(self) -> FieldError<S> {
        let code = self.code();

        let message = match &self {
            ProjectError::Internal(e) => {
                error!(error = ?e, "Internal error while handling GraphQL request");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let mut extensions = Object::with_capacity(2);
        extensions.add_field("code", Value::scalar(code.to_string()));
        if let ProjectError::ValidationFailed(violations) = &self {
            extensions.add_field(
                "violations",
                Value::list(violations.iter().map(violation_value).collect()),
            );
        }

        FieldError::new(message, Value::object(extensions))
    }
}

fn violation_value<S: ScalarValue>(violation: &FieldViolation) -> Value<S> {
    let mut object = Object::with_capacity(3);
    object.add_field("field", Value::scalar(violation.field.to_string()));
    object.add_field("kind", Value::scalar(violation.kind.as_str().to_string()));
    object.add_field("message", Value::scalar(violation.message.clone()));
    Value::object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juniper::DefaultScalarValue;

    use crate::common::ProjectId;
    use crate::domains::projects::models::ProjectStatus;
    use crate::domains::projects::validation::ViolationKind;

    fn field_error(err: ProjectError) -> FieldError<DefaultScalarValue> {
        err.into_field_error()
    }

    fn code_of(err: &FieldError<DefaultScalarValue>) -> Option<String> {
        err.extensions()
            .as_object_value()?
            .get_field_value("code")?
            .as_string_value()
            .map(str::to_string)
    }

    #[test]
    fn test_codes_are_carried_in_extensions() {
        let err = field_error(ProjectError::InvalidTransition {
            id: ProjectId::new(),
            current: ProjectStatus::Active,
        });
        assert_eq!(code_of(&err).as_deref(), Some("INVALID_TRANSITION"));

        let err = field_error(ProjectError::MissingReason);
        assert_eq!(code_of(&err).as_deref(), Some("MISSING_REASON"));
    }

    #[test]
    fn test_violations_are_listed() {
        let err = field_error(ProjectError::ValidationFailed(vec![FieldViolation {
            field: "goalAmount",
            kind: ViolationKind::GoalOutOfRange,
            message: "Goal amount must be at least $1".to_string(),
        }]));

        let violations = err
            .extensions()
            .as_object_value()
            .and_then(|o| o.get_field_value("violations"))
            .and_then(|v| v.as_list_value())
            .unwrap();
        assert_eq!(violations.len(), 1);

        let first = violations[0].as_object_value().unwrap();
        assert_eq!(
            first.get_field_value("field").and_then(|v| v.as_string_value()),
            Some("goalAmount")
        );
        assert_eq!(
            first.get_field_value("kind").and_then(|v| v.as_string_value()),
            Some("GOAL_OUT_OF_RANGE")
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = field_error(ProjectError::Internal(anyhow::anyhow!(
            "connection refused to 10.0.0.5"
        )));
        assert_eq!(err.message(), "Internal server error");
        assert_eq!(code_of(&err).as_deref(), Some("INTERNAL"));
    }
}
