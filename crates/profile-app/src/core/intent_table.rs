//! # Intent Table
//!
//! The fixed catalog of named forwarding calls the profile view may make.
//! Each call shapes its arguments into [`ProfileIntent`]s and hands them to
//! the dispatcher; nothing here inspects results.

use super::dispatcher::IntentDispatcher;
use super::intent::{AvatarImage, CounterpartyType, FolderPath, ProfileIntent, Route};
use crate::identity::Username;
use crate::routing::PEOPLE_TAB;
use crate::state::{MissingProof, Proof};
use std::fmt;
use std::sync::Arc;

/// Search context used by the profile search bar.
pub const PROFILE_SEARCH_KEY: &str = "profileSearch";

/// Named, parameterized intents bound to one dispatcher.
#[derive(Clone)]
pub struct IntentTable {
    dispatcher: Arc<dyn IntentDispatcher>,
}

impl fmt::Debug for IntentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentTable").finish_non_exhaustive()
    }
}

impl IntentTable {
    /// Bind the catalog to `dispatcher`.
    pub fn new(dispatcher: Arc<dyn IntentDispatcher>) -> Self {
        Self { dispatcher }
    }

    fn send(&self, intent: ProfileIntent) {
        tracing::trace!(intent = intent.description(), "forwarding intent");
        self.dispatcher.dispatch(intent);
    }

    fn navigate_append(&self, route: Route) {
        self.send(ProfileIntent::NavigateAppend {
            route,
            parent: None,
        });
    }

    // =========================================================================
    // Username-bound intents
    // =========================================================================

    /// Copy `text` to the clipboard.
    pub fn copy_stellar_address(&self, text: &str) {
        self.send(ProfileIntent::CopyToClipboard {
            text: text.to_string(),
        });
    }

    /// Reset the add-to-team banner, then open the add-to-team route.
    pub fn add_to_team(&self, username: &Username) {
        self.send(ProfileIntent::ClearAddUserToTeamsResults);
        self.navigate_append(Route::AddToTeam {
            username: username.clone(),
        });
    }

    /// Open `/keybase/public/<username>`.
    pub fn browse_public_folder(&self, username: &Username) {
        self.send(ProfileIntent::OpenPathInFilesTab {
            path: FolderPath::public(username),
        });
    }

    /// Preview a conversation with `username`.
    pub fn chat(&self, username: &Username) {
        self.send(ProfileIntent::PreviewConversation {
            participants: vec![username.clone()],
            reason: "profile".to_string(),
        });
    }

    /// Report a tap on `username`'s avatar.
    pub fn click_avatar(&self, username: &Username) {
        self.send(ProfileIntent::ClickAvatar {
            username: username.clone(),
        });
    }

    /// Follow `username`.
    pub fn follow(&self, username: &Username) {
        self.send(ProfileIntent::Follow {
            username: username.clone(),
            local_ignore: false,
        });
    }

    /// Unfollow `username`.
    pub fn unfollow(&self, username: &Username) {
        self.send(ProfileIntent::Unfollow {
            username: username.clone(),
        });
    }

    /// Open the private folder shared by `theirs` and `mine`.
    ///
    /// Skipped without an authenticated identity; there is no folder to open.
    pub fn open_private_folder(&self, mine: Option<&Username>, theirs: &Username) {
        let Some(mine) = mine else {
            tracing::trace!(target_user = %theirs, "no identity, skipping private folder");
            return;
        };
        self.send(ProfileIntent::OpenPathInFilesTab {
            path: FolderPath::private([theirs, mine]),
        });
    }

    /// Open the lumens form addressed to `to`.
    pub fn send_or_request_lumens(
        &self,
        to: &Username,
        is_request: bool,
        recipient_type: CounterpartyType,
    ) {
        self.send(ProfileIntent::OpenSendRequestForm {
            from: None,
            to: to.clone(),
            is_request,
            recipient_type,
        });
    }

    /// Fetch `username`'s profile card.
    pub fn get_profile(&self, username: &Username) {
        self.send(ProfileIntent::GetProfile {
            username: username.clone(),
        });
    }

    /// Fetch `username`'s followers and following.
    pub fn update_trackers(&self, username: &Username) {
        self.send(ProfileIntent::UpdateTrackers {
            username: username.clone(),
        });
    }

    /// Show `username`'s profile.
    pub fn user_click(&self, username: &Username) {
        self.send(ProfileIntent::ShowUserProfile {
            username: username.clone(),
        });
    }

    // =========================================================================
    // Unbound intents
    // =========================================================================

    /// Pop the current route.
    pub fn navigate_up(&self) {
        self.send(ProfileIntent::NavigateUp);
    }

    /// Open the showcase-a-team prompt.
    pub fn click_showcase_offer(&self) {
        self.navigate_append(Route::ShowcaseTeamOffer);
    }

    /// Open the avatar editor.
    pub fn edit_avatar(&self, image: Option<AvatarImage>) {
        self.navigate_append(Route::EditAvatar { image });
    }

    /// Open the profile editor.
    pub fn edit_profile(&self) {
        self.navigate_append(Route::EditProfile);
    }

    /// Report a file picker failure.
    pub fn file_picker_error(&self, message: &str) {
        self.send(ProfileIntent::FilePickerError {
            message: message.to_string(),
        });
    }

    /// Open `path` in the files tab.
    pub fn folder_click(&self, path: &FolderPath) {
        self.send(ProfileIntent::OpenPathInFilesTab { path: path.clone() });
    }

    /// Start proving an identity on the missing platform.
    pub fn missing_proof_click(&self, missing: &MissingProof) {
        self.send(ProfileIntent::AddProof {
            platform: missing.platform.clone(),
        });
    }

    /// Re-run proof checks.
    pub fn recheck_proof(&self, _proof: &Proof) {
        self.send(ProfileIntent::CheckProof);
    }

    /// Revocation is confirmed from the identity hub, whatever tab we are on.
    pub fn revoke_proof(&self, proof: &Proof) {
        self.send(ProfileIntent::NavigateAppend {
            route: Route::Revoke {
                platform: proof.platform.clone(),
                platform_handle: proof.handle.clone(),
                proof_id: proof.id.clone(),
            },
            parent: Some(PEOPLE_TAB.to_string()),
        });
    }

    /// Prepare search suggestions, then open search.
    pub fn search(&self) {
        self.send(ProfileIntent::CreateSearchSuggestions {
            search_key: PROFILE_SEARCH_KEY.to_string(),
        });
        self.navigate_append(Route::Search);
    }

    /// Open `proof` in a browser.
    pub fn view_proof(&self, proof: &Proof) {
        self.send(ProfileIntent::OpenProofUrl {
            proof: proof.clone(),
        });
    }
}
