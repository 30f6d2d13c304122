//! # Profile Intents
//!
//! An intent is a request for some other part of the system to act:
//! dispatch to the store, open a route, kick off an RPC. The profile core
//! builds intents and hands them to an [`IntentDispatcher`]; it never waits
//! on their outcome.
//!
//! [`IntentDispatcher`]: super::IntentDispatcher

use crate::errors::ProfileError;
use crate::identity::Username;
use crate::state::Proof;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Folder paths
// =============================================================================

/// Visibility segment of a KBFS path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderVisibility {
    /// `/keybase/public/...`
    Public,
    /// `/keybase/private/...`
    Private,
}

impl FolderVisibility {
    fn segment(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// A `/keybase/{public|private}/<user[,user...]>` folder path
///
/// Serialized as the path string and validated on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderPath {
    visibility: FolderVisibility,
    writers: Vec<String>,
}

impl FolderPath {
    /// Public folder of one user.
    pub fn public(owner: &Username) -> Self {
        Self {
            visibility: FolderVisibility::Public,
            writers: vec![owner.as_str().to_string()],
        }
    }

    /// Private folder shared by `writers`, in the given order.
    pub fn private<'a>(writers: impl IntoIterator<Item = &'a Username>) -> Self {
        Self {
            visibility: FolderVisibility::Private,
            writers: writers
                .into_iter()
                .map(|w| w.as_str().to_string())
                .collect(),
        }
    }

    /// Parse a path string. Anything outside `/keybase/{public,private}/`
    /// with at least one writer is rejected.
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let invalid = || ProfileError::InvalidFolderPath {
            path: raw.to_string(),
        };
        let rest = raw.strip_prefix("/keybase/").ok_or_else(invalid)?;
        let (segment, tlf) = rest.split_once('/').ok_or_else(invalid)?;
        let visibility = match segment {
            "public" => FolderVisibility::Public,
            "private" => FolderVisibility::Private,
            _ => return Err(invalid()),
        };
        let tlf = tlf.trim_end_matches('/');
        if tlf.is_empty() || tlf.contains('/') || tlf.split(',').any(str::is_empty) {
            return Err(invalid());
        }
        Ok(Self {
            visibility,
            writers: tlf.split(',').map(str::to_string).collect(),
        })
    }

    /// Folder visibility
    pub fn visibility(&self) -> FolderVisibility {
        self.visibility
    }

    /// Writers named in the path
    pub fn writers(&self) -> &[String] {
        &self.writers
    }
}

impl TryFrom<String> for FolderPath {
    type Error = ProfileError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<FolderPath> for String {
    fn from(path: FolderPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/keybase/{}/{}",
            self.visibility.segment(),
            self.writers.join(",")
        )
    }
}

// =============================================================================
// Supporting types
// =============================================================================

/// Kind of party on the other side of a lumens transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterpartyType {
    /// A Keybase user
    KeybaseUser,
    /// A raw Stellar public key
    StellarPublicKey,
    /// Another of the sender's own accounts
    OtherAccount,
}

/// Image picked for a new avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarImage {
    /// Local URI of the picked image
    pub uri: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Routes the profile view can push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Add `username` to one of the viewer's teams
    AddToTeam {
        /// User to add
        username: Username,
    },
    /// Showcase-a-team prompt
    ShowcaseTeamOffer,
    /// Avatar editor
    EditAvatar {
        /// Pre-picked image, if any
        image: Option<AvatarImage>,
    },
    /// Profile editor
    EditProfile,
    /// Revoke-proof confirmation
    Revoke {
        /// Proof platform
        platform: String,
        /// Handle on the platform
        platform_handle: String,
        /// Proof identifier
        proof_id: String,
    },
    /// People search
    Search,
}

impl Route {
    /// Route name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToTeam { .. } => "addToTeam",
            Self::ShowcaseTeamOffer => "showcaseTeamOffer",
            Self::EditAvatar { .. } => "editAvatar",
            Self::EditProfile => "editProfile",
            Self::Revoke { .. } => "revoke",
            Self::Search => "search",
        }
    }
}

// =============================================================================
// Intent
// =============================================================================

/// An action forwarded out of the profile core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileIntent {
    /// Put text on the system clipboard
    CopyToClipboard {
        /// Text to copy
        text: String,
    },
    /// Reset the add-to-team result banner
    ClearAddUserToTeamsResults,
    /// Push a route
    NavigateAppend {
        /// Route to push
        route: Route,
        /// Tab the route must be pushed under, if not the current one
        parent: Option<String>,
    },
    /// Pop the current route
    NavigateUp,
    /// Open a folder in the files tab
    OpenPathInFilesTab {
        /// Folder to open
        path: FolderPath,
    },
    /// Open (without creating) a conversation
    PreviewConversation {
        /// Conversation participants
        participants: Vec<Username>,
        /// Why the preview was requested
        reason: String,
    },
    /// Avatar tapped
    ClickAvatar {
        /// Owner of the avatar
        username: Username,
    },
    /// Follow a user
    Follow {
        /// User to follow
        username: Username,
        /// Follow without pushing to the server
        local_ignore: bool,
    },
    /// Unfollow a user
    Unfollow {
        /// User to unfollow
        username: Username,
    },
    /// Open the send/request lumens form
    OpenSendRequestForm {
        /// Source account; `None` picks the default account
        from: Option<String>,
        /// Recipient
        to: Username,
        /// Request instead of send
        is_request: bool,
        /// Recipient kind
        recipient_type: CounterpartyType,
    },
    /// Fetch the profile card
    GetProfile {
        /// Profile owner
        username: Username,
    },
    /// Fetch followers/following
    UpdateTrackers {
        /// Profile owner
        username: Username,
    },
    /// File picker failed
    FilePickerError {
        /// Picker error message
        message: String,
    },
    /// Start proving an identity on a platform
    AddProof {
        /// Platform to prove on
        platform: String,
    },
    /// Re-run proof checks
    CheckProof,
    /// Open a proof in a browser
    OpenProofUrl {
        /// Proof to open
        proof: Proof,
    },
    /// Prepare search suggestions
    CreateSearchSuggestions {
        /// Search context
        search_key: String,
    },
    /// Show another user's profile
    ShowUserProfile {
        /// User to show
        username: Username,
    },
}

impl ProfileIntent {
    /// Get a human-readable description of this intent
    pub fn description(&self) -> &'static str {
        match self {
            Self::CopyToClipboard { .. } => "copy to clipboard",
            Self::ClearAddUserToTeamsResults => "clear add-to-team results",
            Self::NavigateAppend { .. } => "navigate",
            Self::NavigateUp => "go back",
            Self::OpenPathInFilesTab { .. } => "open folder",
            Self::PreviewConversation { .. } => "preview conversation",
            Self::ClickAvatar { .. } => "click avatar",
            Self::Follow { .. } => "follow",
            Self::Unfollow { .. } => "unfollow",
            Self::OpenSendRequestForm { .. } => "send or request lumens",
            Self::GetProfile { .. } => "get profile",
            Self::UpdateTrackers { .. } => "update trackers",
            Self::FilePickerError { .. } => "file picker error",
            Self::AddProof { .. } => "add proof",
            Self::CheckProof => "check proof",
            Self::OpenProofUrl { .. } => "open proof url",
            Self::CreateSearchSuggestions { .. } => "search suggestions",
            Self::ShowUserProfile { .. } => "show user profile",
        }
    }
}
