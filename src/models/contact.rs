//! Contact model representing one address book entry.

use crate::domain::{PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};

/// Treats a `null` string field as empty.
///
/// Address book exports routinely carry entries without a display name;
/// the similarity filter expects plain strings, so the gap is closed here.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A contact as read from the device's address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Display name
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,

    /// Phone number exactly as stored in the address book
    #[serde(
        default,
        alias = "phoneNumber",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Validate the stored number for dialing.
    pub fn dialable_number(&self) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::new(self.phone_number.as_str())
    }
}
