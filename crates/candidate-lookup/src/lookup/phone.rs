use std::fmt;

use phonenumber::{country, Mode};
use serde::Serialize;

/// Phone number in E.164 form (`+4796005939`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("'{input}' is not a recognizable phone number")]
    InvalidPhoneNumber { input: String },
}

/// Parses free-form phone numbers, assuming `default_region` when no country code is given.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNormalizer {
    default_region: country::Id,
}

impl PhoneNormalizer {
    pub fn new(default_region: country::Id) -> Self {
        Self { default_region }
    }

    pub fn normalize(&self, raw: &str) -> Result<CanonicalNumber, PhoneError> {
        let trimmed = raw.trim();
        let parsed = phonenumber::parse(None, trimmed)
            .or_else(|_| phonenumber::parse(Some(self.default_region), trimmed))
            .map_err(|_| PhoneError::InvalidPhoneNumber {
                input: raw.to_string(),
            })?;

        Ok(CanonicalNumber(
            parsed.format().mode(Mode::E164).to_string(),
        ))
    }

    /// Compare a stored phone against the target. Unparseable input never matches.
    pub fn matches(&self, raw: &str, target: &CanonicalNumber) -> bool {
        match self.normalize(raw) {
            Ok(candidate) => &candidate == target,
            Err(_) => false,
        }
    }
}
