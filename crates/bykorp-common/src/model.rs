//! API model types
//!
//! These types define the JSON shapes exchanged between the API server and its
//! clients, plus the validated write-side inputs handed to persistence.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::BykorpError;

/// Message used when any of the mandatory contact-form fields is blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and service type are required";

/// Record identifier.
///
/// SQL backends hand out integers, the document backend hands out strings.
/// Serialized untagged so clients see a bare number or string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Int(value.into())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

/// A service offered by the agency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price_starting: Option<String>,
    /// Comma-separated feature list
    pub features: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A showcased client project
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub client_name: Option<String>,
    /// `YYYY-MM-DD`
    pub completion_date: Option<String>,
    /// Comma-separated technology list
    pub technologies: Option<String>,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A client testimonial
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    pub name: String,
    pub company: String,
    pub role: String,
    pub review: String,
    pub rating: i32,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A stored contact-form submission as shown to administrators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response body for a successfully stored reservation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreated {
    pub message: String,
    pub id: RecordId,
}

impl ReservationCreated {
    pub fn new(id: RecordId) -> Self {
        Self {
            message: crate::RESERVATION_CREATED_MESSAGE.to_string(),
            id,
        }
    }
}

/// Contact-form submission as received from the browser.
///
/// Every field defaults to empty, and `null` reads as empty, so that missing
/// fields are reported as a validation failure rather than a malformed body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateReservation {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(
        email(message = "Valid email is required"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "Phone must be at most 255 characters"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "Company must be at most 255 characters"))]
    pub company: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 255, message = "Service type must be at most 255 characters"))]
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Field order used when reporting the first validation failure
const RESERVATION_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "company",
    "service_type",
    "message",
];

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn trimmed_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    for field in RESERVATION_FIELDS {
        if let Some(error) = fields.get(*field).and_then(|errs| errs.first()) {
            return error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field));
        }
    }
    "Invalid reservation".to_string()
}

/// Parse a preferred date given either as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_preferred_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

impl CreateReservation {
    /// Validate the submission and normalise it for storage.
    ///
    /// `today` is the current UTC date. Preferred dates one day behind it are
    /// still accepted so that visitors west of UTC can book "today".
    pub fn validate_submission(&self, today: NaiveDate) -> Result<NewReservation, BykorpError> {
        let normalized = CreateReservation {
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            phone: trimmed_optional(&self.phone),
            company: trimmed_optional(&self.company),
            service_type: trimmed(&self.service_type),
            message: trimmed_optional(&self.message),
            preferred_date: trimmed_optional(&self.preferred_date),
        };

        if normalized.name.is_empty()
            || normalized.email.is_empty()
            || normalized.service_type.is_empty()
        {
            return Err(BykorpError::illegal_argument(REQUIRED_FIELDS_MESSAGE));
        }

        normalized
            .validate()
            .map_err(|e| BykorpError::illegal_argument(first_validation_message(&e)))?;

        let preferred_date = match normalized.preferred_date.as_deref() {
            Some(raw) => {
                let date = parse_preferred_date(raw).ok_or_else(|| {
                    BykorpError::illegal_argument("Preferred date must be a valid date")
                })?;
                if date < today - Duration::days(1) {
                    return Err(BykorpError::illegal_argument(
                        "Preferred date cannot be in the past",
                    ));
                }
                Some(date)
            }
            None => None,
        };

        Ok(NewReservation {
            name: normalized.name,
            email: normalized.email,
            phone: normalized.phone,
            company: normalized.company,
            service_type: normalized.service_type,
            message: normalized.message,
            preferred_date,
        })
    }
}

/// A validated reservation ready to be stored
#[derive(Clone, Debug, PartialEq)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub preferred_date: Option<NaiveDate>,
}

/// Service definition used when seeding storage
#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price_starting: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
}

/// Portfolio item definition used when seeding storage
#[derive(Clone, Debug, PartialEq)]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub client_name: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub technologies: Vec<String>,
    pub is_featured: bool,
}

/// Review definition used when seeding storage
#[derive(Clone, Debug, PartialEq)]
pub struct NewReview {
    pub name: String,
    pub company: String,
    pub role: String,
    pub review: String,
    pub rating: i32,
    pub photo_url: Option<String>,
    pub is_featured: bool,
}
