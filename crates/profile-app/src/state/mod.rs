//! # Application State Snapshot
//!
//! The slices of global state the profile core reads. The core never
//! mutates these; frontends hand in a snapshot per projection.

pub mod tracker;

use crate::identity::Username;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use tracker::{
    Folder, FriendshipUserInfo, MissingProof, NonUserRecord, Proof, SimpleProofState,
    TeamShowcase, TrackerEntry, TrackerKind, TrackerStore, TrackingRecord, UserInfo,
};

/// Session configuration state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Authenticated identity; `None` when logged out
    pub username: Option<Username>,
}

/// Team membership state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsState {
    /// Names of teams the user belongs to
    pub team_names: BTreeSet<String>,
}

impl TeamsState {
    /// Whether the user is a member of at least one team.
    pub fn is_in_some_team(&self) -> bool {
        !self.team_names.is_empty()
    }
}

/// Read-only snapshot of global application state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Session state
    pub config: ConfigState,
    /// Tracking records
    pub tracker: TrackerStore,
    /// Team membership
    pub teams: TeamsState,
}

impl AppState {
    /// Snapshot with `username` logged in and nothing else known.
    pub fn logged_in(username: Username) -> Self {
        Self {
            config: ConfigState {
                username: Some(username),
            },
            ..Self::default()
        }
    }
}
