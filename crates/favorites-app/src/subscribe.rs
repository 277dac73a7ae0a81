//! Subscribe-to-restock form validation.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Accepted phone shapes: optional leading `+`, then 10-18 digits with
/// common separators.
const PHONE_PATTERN: &str = r"^\+?[\d\s().-]{10,18}$";

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// A field-level validation failure on the subscribe form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Пожалуйста, выберите размер")]
    SizeRequired,
    #[error("Пожалуйста, введите корректный номер телефона")]
    PhoneInvalid,
    #[error("Необходимо согласие с условиями")]
    ConsentRequired,
}

/// The subscribe form as submitted by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeForm {
    pub product_id: u64,
    /// Selected size. Availability is not required for subscribing.
    pub size: Option<String>,
    pub phone: String,
    pub consent: bool,
}

impl SubscribeForm {
    /// Validate all fields, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.size.as_deref().map_or(true, str::is_empty) {
            errors.push(FieldError::SizeRequired);
        }
        if !phone_regex().is_match(self.phone.trim()) {
            errors.push(FieldError::PhoneInvalid);
        }
        if !self.consent {
            errors.push(FieldError::ConsentRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
