//! # Profile View Model
//!
//! Render-ready, immutable output of a successful projection. Every action
//! is a closure with the target username already bound, so a renderer can
//! never aim an action at the wrong identity.

use crate::core::{AvatarImage, FolderPath};
use crate::identity::Username;
use crate::state::{
    Folder, FriendshipUserInfo, MissingProof, Proof, SimpleProofState, TeamShowcase, UserInfo,
};
use crate::tab_cache::FriendshipsTab;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Zero-argument action
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Single-argument action
pub type Callback1<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Edit actions, only exposed on the viewer's own profile.
///
/// Absence means "not editable"; renderers must not infer editability on
/// their own.
#[derive(Clone)]
pub struct BioEditFns {
    /// Edit the bio
    pub on_bio_edit: Callback,
    /// Open the avatar editor, optionally with a picked image
    pub on_edit_avatar_click: Callback1<Option<AvatarImage>>,
    /// Open the profile editor
    pub on_edit_profile: Callback,
    /// Edit the location
    pub on_location_edit: Callback,
    /// Edit the display name
    pub on_name_edit: Callback,
}

impl fmt::Debug for BioEditFns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BioEditFns").finish_non_exhaustive()
    }
}

/// View model for a Keybase user's profile
#[derive(Clone)]
pub struct ProfileViewModel {
    // Identity
    /// Viewed identity
    pub username: Username,
    /// Whether the viewer is looking at their own profile
    pub is_you: bool,
    /// Whether the viewer belongs to any team
    pub you_are_in_teams: bool,

    // Tracking data
    /// Card details, if loaded
    pub user_info: Option<UserInfo>,
    /// Identity proofs
    pub proofs: Vec<Proof>,
    /// Overall tracker verdict
    pub tracker_status: SimpleProofState,
    /// Whether the viewer follows the target
    pub currently_following: bool,
    /// KBFS folders shared with the target
    pub folders: Vec<Folder>,
    /// Showcased teams
    pub team_showcase: Vec<TeamShowcase>,
    /// Stellar federation address, if published
    pub stellar_federation_address: Option<String>,
    /// Identities following the target
    pub followers: Vec<FriendshipUserInfo>,
    /// Identities the target follows
    pub following: Vec<FriendshipUserInfo>,
    /// Whether the friendship lists have been fetched
    pub followers_loaded: bool,
    /// Whether the card is still loading
    pub loading: bool,
    /// Selected friendships tab
    pub current_friendships_tab: FriendshipsTab,

    // Capabilities
    /// Edit actions; present only on the viewer's own profile
    pub bio_edit_fns: Option<BioEditFns>,
    /// `None` at the root of the identity hub
    pub on_back: Option<Callback>,

    // Target-bound actions
    /// Accept the target's proofs by following
    pub on_accept_proofs: Callback,
    /// Add the target to one of the viewer's teams
    pub on_add_to_team: Callback,
    /// Open the target's public folder
    pub on_browse_public_folder: Callback,
    /// Open a conversation with the target
    pub on_chat: Callback,
    /// Avatar tapped
    pub on_click_avatar: Callback,
    /// Open the showcase-a-team prompt
    pub on_click_showcase_offer: Callback,
    /// Copy the stellar address; no-op without one
    pub on_copy_stellar_address: Callback,
    /// Follow the target
    pub on_follow: Callback,
    /// Unfollow the target
    pub on_unfollow: Callback,
    /// Open the folder shared by viewer and target
    pub on_open_private_folder: Callback,
    /// Request lumens from the target
    pub on_request_lumens: Callback,
    /// Send lumens to the target
    pub on_send_lumens: Callback,
    /// Open people search
    pub on_search: Callback,
    /// Reload the card and the friendship lists
    pub refresh: Callback,

    // Argument-taking actions
    /// Send (`false`) or request (`true`) lumens
    pub on_send_or_request_stellar_address: Callback1<bool>,
    /// Select a friendships tab
    pub on_change_friendships_tab: Callback1<FriendshipsTab>,
    /// Show another user's profile
    pub on_user_click: Callback1<Username>,
    /// Open one of [`Self::folders`]
    pub on_folder_click: Callback1<FolderPath>,
    /// Start proving on a platform
    pub on_missing_proof_click: Callback1<MissingProof>,
    /// Re-run proof checks
    pub on_recheck_proof: Callback1<Proof>,
    /// Open the revoke confirmation for a proof
    pub on_revoke_proof: Callback1<Proof>,
    /// Open a proof in a browser
    pub on_view_proof: Callback1<Proof>,
    /// Report a file picker failure
    pub on_file_picker_error: Callback1<String>,
}

impl ProfileViewModel {
    /// Data-only view of the model, for logging and snapshot comparison.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            username: self.username.clone(),
            is_you: self.is_you,
            you_are_in_teams: self.you_are_in_teams,
            user_info: self.user_info.clone(),
            proofs: self.proofs.clone(),
            tracker_status: self.tracker_status,
            currently_following: self.currently_following,
            folders: self.folders.clone(),
            team_showcase: self.team_showcase.clone(),
            stellar_federation_address: self.stellar_federation_address.clone(),
            followers: self.followers.clone(),
            following: self.following.clone(),
            followers_loaded: self.followers_loaded,
            loading: self.loading,
            current_friendships_tab: self.current_friendships_tab,
            editable: self.bio_edit_fns.is_some(),
            can_go_back: self.on_back.is_some(),
        }
    }

    /// The list selected by `current_friendships_tab`.
    pub fn visible_friendships(&self) -> &[FriendshipUserInfo] {
        match self.current_friendships_tab {
            FriendshipsTab::Followers => &self.followers,
            FriendshipsTab::Following => &self.following,
        }
    }
}

impl fmt::Debug for ProfileViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProfileViewModel")
            .field(&self.snapshot())
            .finish()
    }
}

/// Serializable data of a [`ProfileViewModel`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Viewed identity
    pub username: Username,
    /// Whether the viewer is looking at their own profile
    pub is_you: bool,
    /// Whether the viewer belongs to any team
    pub you_are_in_teams: bool,
    /// Card details, if loaded
    pub user_info: Option<UserInfo>,
    /// Identity proofs
    pub proofs: Vec<Proof>,
    /// Overall tracker verdict
    pub tracker_status: SimpleProofState,
    /// Whether the viewer follows the target
    pub currently_following: bool,
    /// KBFS folders shared with the target
    pub folders: Vec<Folder>,
    /// Showcased teams
    pub team_showcase: Vec<TeamShowcase>,
    /// Stellar federation address, if published
    pub stellar_federation_address: Option<String>,
    /// Identities following the target
    pub followers: Vec<FriendshipUserInfo>,
    /// Identities the target follows
    pub following: Vec<FriendshipUserInfo>,
    /// Whether the friendship lists have been fetched
    pub followers_loaded: bool,
    /// Whether the card is still loading
    pub loading: bool,
    /// Selected friendships tab
    pub current_friendships_tab: FriendshipsTab,
    /// Whether [`ProfileViewModel::bio_edit_fns`] was present
    pub editable: bool,
    /// Whether [`ProfileViewModel::on_back`] was present
    pub can_go_back: bool,
}
