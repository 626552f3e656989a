//! Page addressing.

use serde::{Deserialize, Serialize};

/// The two navigable views of the portal.
///
/// Login is the only page reachable without a session; everything else
/// is the authenticated home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Home,
}

impl Page {
    /// Returns true for the login page.
    pub fn is_login(&self) -> bool {
        matches!(self, Page::Login)
    }
}
