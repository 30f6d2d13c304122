//! # Tracker State
//!
//! What is known about identities the user has looked up: proofs,
//! followers/following and loading status.

use crate::core::{FolderPath, FolderVisibility};
use crate::identity::Username;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Proofs
// =============================================================================

/// Summarized state of a proof (or of the tracker as a whole)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimpleProofState {
    /// Everything checks out
    #[default]
    Normal,
    /// Proof could not be verified right now
    Warning,
    /// Proof is broken
    Error,
    /// Verification in flight
    Checking,
    /// Proof was revoked by its owner
    Revoked,
}

/// An identity proof on an external platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Proof identifier
    pub id: String,
    /// Platform name ("twitter", "github", "dns", ...)
    pub platform: String,
    /// Handle on that platform
    pub handle: String,
    /// Public URL of the proof, if any
    pub human_url: Option<String>,
    /// Verification state
    pub state: SimpleProofState,
}

/// A platform the user could still prove an identity on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingProof {
    /// Platform name
    pub platform: String,
    /// Prompt shown to the user
    pub message: String,
}

// =============================================================================
// People
// =============================================================================

/// Summary of an identity in a followers/following list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipUserInfo {
    /// Username
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Whether this identity follows the viewer
    pub follows_you: bool,
    /// Whether the viewer follows this identity
    pub following: bool,
}

/// Profile card details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name
    pub full_name: String,
    /// Free-form bio
    pub bio: String,
    /// Free-form location
    pub location: String,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Follower count; `None` until the server has answered
    pub followers_count: Option<u32>,
    /// Following count; `None` until the server has answered
    pub following_count: Option<u32>,
    /// Whether the target follows the viewer
    pub follows_you: bool,
}

/// A KBFS folder shown on the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Validated folder path; records naming any other path fail to load
    pub path: FolderPath,
}

impl Folder {
    /// Whether the folder is public
    pub fn is_public(&self) -> bool {
        self.path.visibility() == FolderVisibility::Public
    }
}

/// A team the target chose to showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamShowcase {
    /// Team name
    pub name: String,
    /// Team description
    pub description: String,
    /// Number of members
    pub num_members: u32,
    /// Whether the team is open to join
    pub is_open: bool,
}

// =============================================================================
// Tracking records
// =============================================================================

/// Tracking record of a Keybase user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    /// Card details; `None` until the first identify completes
    pub user_info: Option<UserInfo>,
    /// Identity proofs
    pub proofs: Vec<Proof>,
    /// Identities following the target
    pub trackers: Vec<FriendshipUserInfo>,
    /// Identities the target follows
    pub tracking: Vec<FriendshipUserInfo>,
    /// Whether `trackers`/`tracking` have been fetched
    pub trackers_loaded: bool,
    /// Whether the viewer currently follows the target
    pub currently_following: bool,
    /// Overall tracker verdict
    pub tracker_status: SimpleProofState,
    /// KBFS folders
    pub folders: Vec<Folder>,
    /// Showcased teams
    pub team_showcase: Vec<TeamShowcase>,
    /// Stellar federation address (`user*keybase.io`)
    pub stellar_federation_address: Option<String>,
}

impl TrackingRecord {
    /// A record is loading until the card and its follower count arrive.
    pub fn is_loading(&self) -> bool {
        self.user_info
            .as_ref()
            .map_or(true, |info| info.followers_count.is_none())
    }
}

/// Tracking record of an identity that exists only on an external service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonUserRecord {
    /// Service the identity lives on
    pub service_name: String,
    /// Handle on that service
    pub username: String,
    /// Invite link, if one was generated
    pub invite_link: Option<String>,
}

/// Kind tag of a [`TrackerEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerKind {
    /// A Keybase user; the only kind a profile can show
    TrackableUser,
    /// An identity not (yet) on Keybase
    NonUserTracker,
}

impl TrackerKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrackableUser => "trackableUser",
            Self::NonUserTracker => "nonUserTracker",
        }
    }
}

/// A tracking record as found in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TrackerEntry {
    /// Keybase user
    TrackableUser(TrackingRecord),
    /// External-service identity
    NonUserTracker(NonUserRecord),
}

impl TrackerEntry {
    /// Kind tag of this entry
    pub fn kind(&self) -> TrackerKind {
        match self {
            Self::TrackableUser(_) => TrackerKind::TrackableUser,
            Self::NonUserTracker(_) => TrackerKind::NonUserTracker,
        }
    }

    /// The user record, if this is a trackable user
    pub fn as_trackable(&self) -> Option<&TrackingRecord> {
        match self {
            Self::TrackableUser(record) => Some(record),
            Self::NonUserTracker(_) => None,
        }
    }

    /// Consume the entry, keeping only a trackable user's record
    pub fn into_trackable(self) -> Option<TrackingRecord> {
        match self {
            Self::TrackableUser(record) => Some(record),
            Self::NonUserTracker(_) => None,
        }
    }
}

// =============================================================================
// TrackerStore
// =============================================================================

/// All tracking records, keyed by username
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStore {
    user_trackers: HashMap<String, TrackingRecord>,
    non_user_trackers: HashMap<String, NonUserRecord>,
}

impl TrackerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub fn insert_user(&mut self, username: &Username, record: TrackingRecord) {
        self.user_trackers
            .insert(username.as_str().to_string(), record);
    }

    /// Insert or replace a non-user record.
    pub fn insert_non_user(&mut self, key: impl Into<String>, record: NonUserRecord) {
        self.non_user_trackers.insert(key.into(), record);
    }

    /// Look up a record, preferring user records over non-user ones.
    pub fn entry(&self, username: &str) -> Option<TrackerEntry> {
        self.user_trackers
            .get(username)
            .cloned()
            .map(TrackerEntry::TrackableUser)
            .or_else(|| {
                self.non_user_trackers
                    .get(username)
                    .cloned()
                    .map(TrackerEntry::NonUserTracker)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_info() -> UserInfo {
        UserInfo {
            followers_count: Some(3),
            following_count: Some(4),
            ..UserInfo::default()
        }
    }

    #[test]
    fn test_loading_without_user_info() {
        assert!(TrackingRecord::default().is_loading());
    }

    #[test]
    fn test_loading_until_followers_count_known() {
        let mut record = TrackingRecord {
            user_info: Some(UserInfo::default()),
            ..TrackingRecord::default()
        };
        assert!(record.is_loading());
        record.user_info = Some(loaded_info());
        assert!(!record.is_loading());
    }

    #[test]
    fn test_entry_prefers_user_record() {
        let mut store = TrackerStore::new();
        let name = Username::parse("dana").unwrap();
        store.insert_user(&name, TrackingRecord::default());
        store.insert_non_user(
            "dana",
            NonUserRecord {
                service_name: "twitter".to_string(),
                username: "dana".to_string(),
                invite_link: None,
            },
        );
        assert_eq!(
            store.entry("dana").map(|e| e.kind()),
            Some(TrackerKind::TrackableUser)
        );
    }

    #[test]
    fn test_entry_falls_back_to_non_user() {
        let mut store = TrackerStore::new();
        store.insert_non_user(
            "erin@twitter",
            NonUserRecord {
                service_name: "twitter".to_string(),
                username: "erin".to_string(),
                invite_link: None,
            },
        );
        let entry = store.entry("erin@twitter").unwrap();
        assert_eq!(entry.kind().as_str(), "nonUserTracker");
        assert!(entry.as_trackable().is_none());
        assert!(store.entry("nobody").is_none());
    }

    #[test]
    fn test_folder_paths_validated_on_load() {
        let folder: Folder =
            serde_json::from_str(r#"{"path":"/keybase/private/bob,alice"}"#).unwrap();
        assert!(!folder.is_public());
        assert_eq!(folder.path.writers(), ["bob", "alice"]);

        let team = serde_json::from_str::<Folder>(r#"{"path":"/keybase/team/acme"}"#);
        assert!(team.is_err());
    }

    #[test]
    fn test_entry_serializes_with_kind_tag() {
        let entry = TrackerEntry::TrackableUser(TrackingRecord::default());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "trackableUser");
    }
}
