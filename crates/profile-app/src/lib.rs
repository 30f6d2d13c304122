//! # Profile App
//!
//! Headless core of the profile view. It reads a snapshot of application
//! state, binds the profile's intents to the viewed identity, and produces a
//! render-ready [`ProfileView`]:
//!
//! ```text
//! AppState + RouteParams → State Reader → Projector → ProfileView::{Ok, Error}
//!                                            ↑    ↑
//!                              IntentTable ──┘    └── FriendshipsTabCache
//! ```
//!
//! Rendering, navigation and the RPCs behind each intent live elsewhere;
//! everything leaves this crate through [`IntentDispatcher`].

pub mod config;
pub mod core;
pub mod errors;
pub mod identity;
pub mod projector;
pub mod reader;
pub mod routing;
pub mod state;
pub mod tab_cache;
pub mod views;

pub use config::ProfileConfig;
pub use crate::core::{
    CounterpartyType, FolderPath, IntentDispatcher, IntentTable, ProfileIntent,
    RecordingDispatcher, Route,
};
pub use errors::{ErrorCategory, ProfileError};
pub use identity::Username;
pub use projector::Projector;
pub use reader::{read_profile_slice, ProfileSlice};
pub use routing::{RouteParams, RoutePath, PEOPLE_TAB};
pub use state::{AppState, TrackerEntry, TrackerKind, TrackingRecord};
pub use tab_cache::{FriendshipsTab, FriendshipsTabCache};
pub use views::{ErrorViewModel, HeaderView, ProfileView, ProfileViewModel, NON_USER_PROFILE_ERROR};
