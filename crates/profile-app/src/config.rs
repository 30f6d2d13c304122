//! Profile view configuration
//!
//! Loaded from TOML (all fields optional) or from the environment:
//!
//! ```toml
//! testing = false
//! profile_root_tab = "tabs:peopleTab"
//! ```

use crate::errors::ProfileError;
use crate::routing::PEOPLE_TAB;
use serde::{Deserialize, Serialize};

/// Environment variable that switches the core into test mode.
pub const TESTING_ENV_VAR: &str = "PROFILE_APP_TESTING";

fn default_profile_root_tab() -> String {
    PEOPLE_TAB.to_string()
}

/// Configuration for the profile projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Test execution context: forces `loading = false` so snapshots stay
    /// deterministic.
    #[serde(default)]
    pub testing: bool,

    /// Landing tab of the identity hub. A route consisting of only this tab is
    /// the profile root, which has nowhere to go back to.
    #[serde(default = "default_profile_root_tab")]
    pub profile_root_tab: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            testing: false,
            profile_root_tab: default_profile_root_tab(),
        }
    }
}

impl ProfileConfig {
    /// Config used by test harnesses.
    pub fn testing() -> Self {
        Self {
            testing: true,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ProfileError> {
        toml::from_str(source).map_err(|e| ProfileError::config(e.to_string()))
    }

    /// Defaults, with `PROFILE_APP_TESTING` applied on top.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(TESTING_ENV_VAR) {
            config.testing = parse_flag(&value);
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
