use crate::utils::error::{LandingError, Result};
use crate::utils::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A validated waitlist entry: trimmed and lower-cased before storage so
/// lookups are case- and whitespace-insensitive. Only `parse` constructs
/// one, so an in-scope `EmailAddress` is always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self> {
        if !validation::is_valid_email(raw) {
            return Err(LandingError::InvalidEmailError {
                value: raw.to_string(),
            });
        }
        Ok(Self(validation::normalize_email(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub title: String,
    pub price: String,
}

/// Result of a waitlist submission. None of these are fatal: invalid input
/// re-prompts, duplicates are an idempotent no-op, and a failed persist
/// keeps the in-memory entry (soft durability).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
    InvalidEmail,
    PersistenceFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCategory {
    Success,
    Error,
}

/// How long the presentation layer keeps a feedback message visible before
/// fading it out. A newer message overwrites the surface and with it the
/// pending clear.
pub const FEEDBACK_CLEAR_AFTER: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub category: FeedbackCategory,
    /// Marks the email field invalid (aria-invalid in the page rendition).
    pub mark_field_invalid: bool,
    pub clear_after: Duration,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: FeedbackCategory::Success,
            mark_field_invalid: false,
            clear_after: FEEDBACK_CLEAR_AFTER,
        }
    }

    pub fn field_error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: FeedbackCategory::Error,
            mark_field_invalid: true,
            clear_after: FEEDBACK_CLEAR_AFTER,
        }
    }
}

/// Render request for the testimonial carousel: the visible record plus the
/// position data the indicator dots need.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub testimonial: Testimonial,
    pub index: usize,
    pub total: usize,
}
