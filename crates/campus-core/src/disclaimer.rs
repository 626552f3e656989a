//! Disclaimer modal state machine.
//!
//! A two-state machine (hidden/shown) shown at most once per tab, and
//! only on mobile-width viewports outside the login page. While shown,
//! background page scroll is suppressed.

use std::sync::Arc;

use crate::page::Page;
use crate::storage::TabStore;

/// Tab-store key for the already-shown flag.
pub const DISCLAIMER_KEY: &str = "disclaimer_shown";

/// Viewport widths at or below this count as mobile view.
pub const MOBILE_BREAKPOINT: u16 = 768;

/// The modal's two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Shown,
}

/// The disclaimer overlay for one page open.
///
/// Initial state is decided once at construction; the only transition is
/// `Shown -> Hidden` via [`DisclaimerModal::dismiss`], which records the
/// per-tab flag so the modal never re-shows within the same store's life.
pub struct DisclaimerModal {
    state: ModalState,
    store: Arc<dyn TabStore>,
}

impl DisclaimerModal {
    /// Evaluates the initial-display condition for a page open.
    ///
    /// Shown iff the page is not the login page, the viewport is at or
    /// below [`MOBILE_BREAKPOINT`], and the flag is unset.
    pub fn at_page_open(store: Arc<dyn TabStore>, page: Page, viewport_width: u16) -> Self {
        let state = if !page.is_login()
            && viewport_width <= MOBILE_BREAKPOINT
            && store.get(DISCLAIMER_KEY).is_none()
        {
            tracing::debug!(viewport_width, "showing disclaimer");
            ModalState::Shown
        } else {
            ModalState::Hidden
        };
        Self { state, store }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == ModalState::Shown
    }

    /// Background scroll is suppressed exactly while the modal is shown.
    pub fn scroll_locked(&self) -> bool {
        self.is_shown()
    }

    /// Transitions to hidden and records the already-shown flag.
    ///
    /// Idempotent: dismissing a second time has no further effect.
    pub fn dismiss(&mut self) {
        self.state = ModalState::Hidden;
        self.store.set(DISCLAIMER_KEY, "true");
    }
}
