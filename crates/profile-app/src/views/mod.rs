//! # View Module
//!
//! Output contract of the projector. A projection produces exactly one
//! [`ProfileView`] variant; renderers match on it exhaustively.

pub mod profile;

use std::fmt;
use std::sync::Arc;

pub use profile::{BioEditFns, Callback, Callback1, ProfileSnapshot, ProfileViewModel};

/// Message shown when a profile is requested for a non-user tracker.
pub const NON_USER_PROFILE_ERROR: &str =
    "Expected a tracker type, trying to show profile for non user";

/// Degraded output shown instead of a profile
#[derive(Clone)]
pub struct ErrorViewModel {
    /// Short human-readable message
    pub message: String,
    /// "Go back" action; `None` when there is nowhere to go back to
    pub back_action: Option<Callback>,
}

impl fmt::Debug for ErrorViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorViewModel")
            .field("message", &self.message)
            .field("back_action", &self.back_action.is_some())
            .finish()
    }
}

/// Result of one projection
#[derive(Debug, Clone)]
pub enum ProfileView {
    /// A trackable user's profile
    Ok(Box<ProfileViewModel>),
    /// Profile could not be shown
    Error(ErrorViewModel),
}

impl ProfileView {
    /// Whether the projection succeeded
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The view model, if the projection succeeded
    pub fn ok(&self) -> Option<&ProfileViewModel> {
        match self {
            Self::Ok(model) => Some(model.as_ref()),
            Self::Error(_) => None,
        }
    }

    /// The error view, if the projection degraded
    pub fn error(&self) -> Option<&ErrorViewModel> {
        match self {
            Self::Ok(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::Error(_) => "error",
        }
    }
}

/// Actions the search header above the profile needs
#[derive(Clone, Default)]
pub struct HeaderView {
    /// Go back; `None` at the root or on an error view
    pub on_back: Option<Callback>,
    /// Open people search; `None` on an error view
    pub on_search: Option<Callback>,
}

impl From<&ProfileView> for HeaderView {
    fn from(view: &ProfileView) -> Self {
        match view {
            ProfileView::Ok(model) => Self {
                on_back: model.on_back.clone(),
                on_search: Some(Arc::clone(&model.on_search)),
            },
            ProfileView::Error(_) => Self::default(),
        }
    }
}

impl fmt::Debug for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderView")
            .field("on_back", &self.on_back.is_some())
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}
