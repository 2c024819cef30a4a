//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// URI scheme handed to the dial handler.
pub const TEL_SCHEME: &str = "tel:";

/// A dialable phone number.
///
/// Address book entries carry free-form numbers, so validation is lenient:
/// the number must contain at least one digit and only characters a dialer
/// understands (including `*`, `#` and the `,`/`;` pause markers).
///
/// # Example
///
/// ```
/// use contacts_mcp_server::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.tel_uri(), "tel:+1 (555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// Surrounding whitespace is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` for a blank number and
    /// `ValidationError::InvalidPhone` for anything else that is not dialable.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(phone: &str) -> bool {
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        phone.chars().all(|c| {
            c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.' | '*' | '#' | ',' | ';')
        })
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Build the `tel:` URI for this number.
    ///
    /// `#` would start a URI fragment, so it is percent-encoded.
    pub fn tel_uri(&self) -> String {
        format!("{}{}", TEL_SCHEME, self.0.replace('#', "%23"))
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
