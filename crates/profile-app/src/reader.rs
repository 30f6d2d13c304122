//! # State Reader
//!
//! Extracts the minimal typed slice of global state one profile view needs.

use crate::errors::ProfileError;
use crate::identity::Username;
use crate::routing::RouteParams;
use crate::state::{AppState, TrackerEntry};

/// Everything the projector reads from global state and routing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSlice {
    /// Authenticated identity, if any
    pub my_username: Option<Username>,
    /// Identity whose profile is shown
    pub target_username: Username,
    /// Whether the viewer belongs to any team
    pub is_in_any_team: bool,
    /// Tracking record for the target, if one was ever looked up
    pub tracking: Option<TrackerEntry>,
    /// Whether the view sits alone at the root of the identity hub
    pub profile_is_root: bool,
}

/// Read the profile slice for the route.
///
/// The target is the navigation parameter, else the route parameter, else
/// the authenticated identity. A mixed-case target is a caller bug and is
/// returned as [`ProfileError::MixedCaseUsername`].
pub fn read_profile_slice(
    state: &AppState,
    route: &RouteParams,
    root_tab: &str,
) -> Result<ProfileSlice, ProfileError> {
    let my_username = state.config.username.clone();

    let target_username = match route.requested_username() {
        Some(requested) => Username::parse(requested)?,
        None => my_username.clone().ok_or(ProfileError::MissingUsername)?,
    };

    Ok(ProfileSlice {
        tracking: state.tracker.entry(target_username.as_str()),
        is_in_any_team: state.teams.is_in_some_team(),
        profile_is_root: route.path.is_root_of(root_tab),
        my_username,
        target_username,
    })
}
