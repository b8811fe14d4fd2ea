//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::Variables;
use serde_json::Value;
use server_core::common::Session;
use server_core::kernel::ServerDeps;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use std::sync::Arc;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// One GraphQL error, flattened for assertions.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    pub message: String,
    pub extensions: Value,
}

impl GraphQLError {
    pub fn code(&self) -> Option<&str> {
        self.extensions["code"].as_str()
    }

    /// `field` of every entry in `extensions.violations`
    pub fn violation_fields(&self) -> Vec<String> {
        self.extensions["violations"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|v| v["field"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<GraphQLError>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// The `extensions.code` of the first error, if any
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().and_then(GraphQLError::code)
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let status = result.get("submitProject.status");
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl GraphQLClient {
    /// Creates a new GraphQL client acting with the given session.
    pub fn new(deps: Arc<ServerDeps>, session: Session) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(deps, session),
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        // Convert juniper::Value to serde_json::Value
        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let errors = errors
            .iter()
            .map(|e| GraphQLError {
                message: e.error().message().to_string(),
                extensions: serde_json::to_value(e.error().extensions())
                    .expect("Failed to serialize error extensions"),
            })
            .collect();

        GraphQLResult { data, errors }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
