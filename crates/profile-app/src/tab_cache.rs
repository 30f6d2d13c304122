//! # Friendships Tab Cache
//!
//! View-local UI state that deliberately lives outside [`AppState`]: which
//! friendships list the profile shows. It survives across projections for
//! the lifetime of the process and is never persisted or shared between
//! independently constructed caches.
//!
//! [`AppState`]: crate::state::AppState

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Friendships list selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FriendshipsTab {
    /// Identities following the target
    #[default]
    Followers,
    /// Identities the target follows
    Following,
}

impl FriendshipsTab {
    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            Self::Followers => "Followers",
            Self::Following => "Following",
        }
    }
}

/// Holder of the selected [`FriendshipsTab`].
///
/// Last writer wins; the next read observes the most recent write.
#[derive(Debug, Default)]
pub struct FriendshipsTabCache {
    current: RwLock<FriendshipsTab>,
}

impl FriendshipsTabCache {
    /// Create a cache holding the default tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected tab
    pub fn read(&self) -> FriendshipsTab {
        *self.current.read()
    }

    /// Select a tab
    pub fn write(&self, tab: FriendshipsTab) {
        *self.current.write() = tab;
        tracing::trace!(tab = tab.title(), "friendships tab selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cache_reads_followers() {
        assert_eq!(FriendshipsTabCache::new().read(), FriendshipsTab::Followers);
    }

    #[test]
    fn test_write_then_read() {
        let cache = FriendshipsTabCache::new();
        cache.write(FriendshipsTab::Following);
        assert_eq!(cache.read(), FriendshipsTab::Following);
        cache.write(FriendshipsTab::Following);
        assert_eq!(cache.read(), FriendshipsTab::Following);
    }

    #[test]
    fn test_caches_are_independent() {
        let a = FriendshipsTabCache::new();
        let b = FriendshipsTabCache::new();
        a.write(FriendshipsTab::Following);
        assert_eq!(b.read(), FriendshipsTab::Followers);
    }

    #[test]
    fn test_titles() {
        assert_eq!(FriendshipsTab::Followers.title(), "Followers");
        assert_eq!(FriendshipsTab::Following.title(), "Following");
    }
}
