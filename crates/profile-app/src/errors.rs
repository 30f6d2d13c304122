//! Profile core errors
//!
//! Only caller bugs surface as errors here. A tracking record of the wrong
//! kind is *not* an error at this level: the projector folds it into
//! [`ProfileView::Error`](crate::views::ProfileView::Error).

use std::fmt;

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller passed malformed input (programming error)
    Input,
    /// Configuration could not be loaded
    Config,
}

impl ErrorCategory {
    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Config => "Config",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Errors produced by the profile core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// A username that is not lower-case normalized reached the core
    #[error("Attempted to navigate to mixed case username: {username}")]
    MixedCaseUsername {
        /// The offending username, as received
        username: String,
    },

    /// An empty string was offered as a username
    #[error("Username must not be empty")]
    EmptyUsername,

    /// Neither routing parameters nor the authenticated identity name a profile
    #[error("No username to show a profile for")]
    MissingUsername,

    /// A folder path outside `/keybase/{public,private}/`
    #[error("Invalid folder path: {path}")]
    InvalidFolderPath {
        /// The rejected path
        path: String,
    },

    /// Configuration could not be parsed
    #[error("Config error: {message}")]
    Config {
        /// Parser message
        message: String,
    },
}

impl ProfileError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Category used by frontends to route the error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MixedCaseUsername { .. }
            | Self::EmptyUsername
            | Self::MissingUsername
            | Self::InvalidFolderPath { .. } => ErrorCategory::Input,
            Self::Config { .. } => ErrorCategory::Config,
        }
    }

    /// True when the error signals a bug in the caller rather than a runtime condition.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }
}
