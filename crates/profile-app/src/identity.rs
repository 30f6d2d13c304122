//! # Usernames
//!
//! Every username that crosses into the core is already lower-case
//! normalized. A mixed-case name is rejected, never silently corrected.

use crate::errors::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-empty, lower-case-normalized username.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        if raw.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if raw != raw.to_lowercase() {
            return Err(ProfileError::MixedCaseUsername {
                username: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        let name = Username::parse("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_parse_rejects_mixed_case() {
        assert_eq!(
            Username::parse("Bob"),
            Err(ProfileError::MixedCaseUsername {
                username: "Bob".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Username::parse(""), Err(ProfileError::EmptyUsername));
    }

    #[test]
    fn test_digits_and_underscores_are_already_normalized() {
        assert!(Username::parse("max_42").is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Username = serde_json::from_str("\"carol\"").unwrap();
        assert_eq!(ok.as_str(), "carol");
        assert!(serde_json::from_str::<Username>("\"Carol\"").is_err());
    }
}
