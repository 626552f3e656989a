//! Portal session context and page-open orchestration.

use std::sync::Arc;

use campus_core::disclaimer::DisclaimerModal;
use campus_core::page::Page;
use campus_core::session::SessionGate;
use campus_core::storage::TabStore;

use crate::login_form::LoginForm;

/// Result of opening a page.
pub struct PageInit {
    /// Redirect target demanded by the access guard, if any. When set,
    /// the caller opens that page instead; nothing else initializes.
    pub redirect: Option<Page>,
    /// The disclaimer overlay for this page open (absent on redirect).
    pub disclaimer: Option<DisclaimerModal>,
}

/// The injectable session context for one tab.
///
/// `Portal` owns the tab store and the session gate, and runs the
/// page-open sequence: access guard first, then the disclaimer's
/// initial-display check. Created at app init, dropped at tab teardown;
/// there are no ambient globals.
pub struct Portal {
    store: Arc<dyn TabStore>,
    gate: SessionGate,
}

impl Portal {
    /// Creates the portal context over a tab store.
    pub fn new(store: Arc<dyn TabStore>) -> Self {
        let gate = SessionGate::new(store.clone());
        Self { store, gate }
    }

    /// The session gate.
    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// A login form bound to this portal's gate.
    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(self.gate.clone())
    }

    /// Clears the session and yields the unconditional logout target.
    pub fn logout(&self) -> Page {
        self.gate.logout();
        Page::Login
    }

    /// Runs the page-open sequence.
    ///
    /// The guard runs before any other initialization; when it demands a
    /// redirect, no component for the requested page is constructed.
    pub fn open_page(&self, page: Page, viewport_width: u16) -> PageInit {
        if let Some(target) = self.gate.guard(page) {
            tracing::debug!(?page, ?target, "guard redirect");
            return PageInit {
                redirect: Some(target),
                disclaimer: None,
            };
        }

        let disclaimer = DisclaimerModal::at_page_open(self.store.clone(), page, viewport_width);
        PageInit {
            redirect: None,
            disclaimer: Some(disclaimer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_infrastructure::InMemoryTabStore;

    fn portal() -> Portal {
        Portal::new(Arc::new(InMemoryTabStore::new()))
    }

    #[test]
    fn test_home_redirects_to_login_without_session() {
        let portal = portal();
        let init = portal.open_page(Page::Home, 375);
        assert_eq!(init.redirect, Some(Page::Login));
        assert!(init.disclaimer.is_none());
    }

    #[test]
    fn test_login_redirects_home_with_session() {
        let portal = portal();
        assert!(portal.gate().validate_login("23321013"));

        let init = portal.open_page(Page::Login, 375);
        assert_eq!(init.redirect, Some(Page::Home));
    }

    #[test]
    fn test_home_shows_disclaimer_on_mobile_once() {
        let portal = portal();
        assert!(portal.gate().validate_login("23321013"));

        let init = portal.open_page(Page::Home, 375);
        let mut modal = init.disclaimer.unwrap();
        assert!(modal.is_shown());
        modal.dismiss();

        let again = portal.open_page(Page::Home, 375);
        assert!(!again.disclaimer.unwrap().is_shown());
    }

    #[test]
    fn test_logout_targets_login() {
        let portal = portal();
        assert!(portal.gate().validate_login("2025"));

        assert_eq!(portal.logout(), Page::Login);
        assert!(!portal.gate().is_authenticated());
    }
}
