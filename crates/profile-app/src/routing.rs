//! Routing inputs consumed by the profile view.

use serde::{Deserialize, Serialize};

/// Landing tab of the identity hub.
pub const PEOPLE_TAB: &str = "tabs:peopleTab";

/// Parameters the navigation layer hands to the profile view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// `username` from the navigation stack (takes precedence)
    pub navigation_username: Option<String>,
    /// `username` carried by the route tree
    pub route_username: Option<String>,
    /// Current route path, root first
    pub path: RoutePath,
}

impl RouteParams {
    /// Params addressing `username` via the navigation stack.
    pub fn for_username(username: impl Into<String>) -> Self {
        Self {
            navigation_username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Replace the route path.
    #[must_use]
    pub fn with_path(mut self, path: RoutePath) -> Self {
        self.path = path;
        self
    }

    /// First non-empty username parameter, navigation before route.
    pub fn requested_username(&self) -> Option<&str> {
        [&self.navigation_username, &self.route_username]
            .into_iter()
            .filter_map(|param| param.as_deref())
            .find(|name| !name.is_empty())
    }
}

/// Route path as a list of route names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// Build a path from route names, root first.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }

    /// True when the path is exactly `[root_tab]`.
    pub fn is_root_of(&self, root_tab: &str) -> bool {
        matches!(self.0.as_slice(), [only] if only == root_tab)
    }
}
