//! Submission validation - pure logic, no I/O.
//!
//! Every rule runs independently so the caller gets the full list of
//! problems in one round trip instead of fixing fields one at a time.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use url::Url;

use crate::domains::projects::data::SubmitProjectInput;
use crate::domains::projects::models::ProjectCategory;

pub const TITLE_LEN: (usize, usize) = (10, 100);
pub const DESCRIPTION_LEN: (usize, usize) = (50, 2000);
pub const CONTACT_NAME_LEN: (usize, usize) = (2, 100);
pub const MIN_GOAL: Decimal = Decimal::ONE;
pub const MAX_GOAL: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Matches the `NUMERIC(12, 2)` goal column.
pub const GOAL_DECIMAL_PLACES: u32 = 2;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email regex is valid");
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    TooShort,
    TooLong,
    InvalidEmail,
    InvalidCampaignLink,
    InvalidImageUrl,
    InvalidCategory,
    GoalOutOfRange,
    GoalTooPrecise,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::TooShort => "TOO_SHORT",
            ViolationKind::TooLong => "TOO_LONG",
            ViolationKind::InvalidEmail => "INVALID_EMAIL",
            ViolationKind::InvalidCampaignLink => "INVALID_CAMPAIGN_LINK",
            ViolationKind::InvalidImageUrl => "INVALID_IMAGE_URL",
            ViolationKind::InvalidCategory => "INVALID_CATEGORY",
            ViolationKind::GoalOutOfRange => "GOAL_OUT_OF_RANGE",
            ViolationKind::GoalTooPrecise => "GOAL_TOO_PRECISE",
        }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the field (camelCase, as the client sent it)
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// A submission that passed every rule, normalized and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub campaign_link: String,
    pub image_url: Option<String>,
    pub category: ProjectCategory,
    pub goal_amount: Decimal,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

/// Validate a raw submission.
///
/// `campaign_domain` is the host substring every campaign link must carry
/// (e.g. `gofundme.com`).
pub fn validate_submission(
    input: &SubmitProjectInput,
    campaign_domain: &str,
) -> Result<ProjectDraft, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = input.title.trim();
    check_length("title", "Title", title, TITLE_LEN, &mut violations);

    let description = input.description.trim();
    check_length(
        "description",
        "Description",
        description,
        DESCRIPTION_LEN,
        &mut violations,
    );

    let contact_name = input.contact_name.trim();
    check_length(
        "contactName",
        "Name",
        contact_name,
        CONTACT_NAME_LEN,
        &mut violations,
    );

    let contact_email = input.contact_email.trim();
    if !is_valid_email(contact_email) {
        violations.push(FieldViolation::new(
            "contactEmail",
            ViolationKind::InvalidEmail,
            "Must be a valid email",
        ));
    }

    let campaign_link = input.campaign_link.trim();
    if !is_campaign_link(campaign_link, campaign_domain) {
        violations.push(FieldViolation::new(
            "campaignLink",
            ViolationKind::InvalidCampaignLink,
            format!("Must be a valid URL on {}", campaign_domain),
        ));
    }

    let image_url = non_empty(input.image_url.as_deref());
    if let Some(image_url) = image_url {
        if Url::parse(image_url).is_err() {
            violations.push(FieldViolation::new(
                "imageUrl",
                ViolationKind::InvalidImageUrl,
                "Must be a valid URL",
            ));
        }
    }

    let category = ProjectCategory::from_str(input.category.trim()).ok();
    if category.is_none() {
        violations.push(FieldViolation::new(
            "category",
            ViolationKind::InvalidCategory,
            "Must be one of: education, healthcare, technology, community, other",
        ));
    }

    let goal_amount = match parse_goal_amount(&input.goal_amount) {
        GoalAmount::Parsed(amount) => amount,
        GoalAmount::TooLarge => MAX_GOAL + Decimal::ONE,
    };
    if goal_amount < MIN_GOAL {
        violations.push(FieldViolation::new(
            "goalAmount",
            ViolationKind::GoalOutOfRange,
            "Goal amount must be at least $1",
        ));
    } else if goal_amount > MAX_GOAL {
        violations.push(FieldViolation::new(
            "goalAmount",
            ViolationKind::GoalOutOfRange,
            "Goal amount must be at most $1,000,000",
        ));
    } else if goal_amount.normalize().scale() > GOAL_DECIMAL_PLACES {
        violations.push(FieldViolation::new(
            "goalAmount",
            ViolationKind::GoalTooPrecise,
            "Goal amount can have at most 2 decimal places",
        ));
    }

    match category {
        Some(category) if violations.is_empty() => Ok(ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            campaign_link: campaign_link.to_string(),
            image_url: image_url.map(String::from),
            category,
            goal_amount,
            contact_name: contact_name.to_string(),
            contact_email: contact_email.to_string(),
            contact_phone: non_empty(input.contact_phone.as_deref()).map(String::from),
        }),
        _ => Err(violations),
    }
}

/// Parse a category filter value the same way submissions are parsed.
pub fn parse_category(raw: &str) -> Result<ProjectCategory, FieldViolation> {
    ProjectCategory::from_str(raw.trim()).map_err(|_| {
        FieldViolation::new(
            "category",
            ViolationKind::InvalidCategory,
            "Must be one of: education, healthcare, technology, community, other",
        )
    })
}

fn check_length(
    field: &'static str,
    label: &str,
    value: &str,
    (min, max): (usize, usize),
    violations: &mut Vec<FieldViolation>,
) {
    let len = value.chars().count();
    if len < min {
        violations.push(FieldViolation::new(
            field,
            ViolationKind::TooShort,
            format!("{} must be at least {} characters", label, min),
        ));
    } else if len > max {
        violations.push(FieldViolation::new(
            field,
            ViolationKind::TooLong,
            format!("{} must be at most {} characters", label, max),
        ));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn is_campaign_link(value: &str, campaign_domain: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    url.host_str()
        .map(|host| host.to_lowercase().contains(&campaign_domain.to_lowercase()))
        .unwrap_or(false)
}

enum GoalAmount {
    Parsed(Decimal),
    /// Numeric, but beyond what `Decimal` can hold
    TooLarge,
}

/// Non-numeric input becomes zero so it fails the lower bound explicitly.
/// Trailing garbage such as `500abc` counts as non-numeric.
fn parse_goal_amount(raw: &str) -> GoalAmount {
    let raw = raw.trim();
    if let Ok(amount) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return GoalAmount::Parsed(amount);
    }

    match raw.parse::<f64>() {
        Ok(value) if value > 1_000_000.0 => GoalAmount::TooLarge,
        _ => GoalAmount::Parsed(Decimal::ZERO),
    }
}
