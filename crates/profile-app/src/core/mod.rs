//! # Core Intent Module
//!
//! - [`ProfileIntent`]: actions forwarded out of the core
//! - [`IntentDispatcher`]: the seam intents leave through
//! - [`IntentTable`]: the named catalog the projector binds closures to

mod dispatcher;
mod intent;
mod intent_table;

pub use dispatcher::{IntentDispatcher, RecordingDispatcher};
pub use intent::{
    AvatarImage, CounterpartyType, FolderPath, FolderVisibility, ProfileIntent, Route,
};
pub use intent_table::{IntentTable, PROFILE_SEARCH_KEY};
