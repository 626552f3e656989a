//! Disclaimer modal view-model.

use campus_core::disclaimer::DisclaimerModal;

/// Disclaimer copy rendered inside the modal content region.
pub const DISCLAIMER_TEXT: &str = "This portal is a student-maintained tool. \
GPA figures are estimates only; the registrar's records are authoritative. \
Login is a convenience gate, not a security feature.";

/// View-model wrapping the modal for one page open.
///
/// Both dismissal paths (the explicit close action, and an interaction
/// on the backdrop outside the content region) funnel into the same
/// idempotent dismiss.
pub struct DisclaimerView {
    modal: DisclaimerModal,
}

impl DisclaimerView {
    pub fn new(modal: DisclaimerModal) -> Self {
        Self { modal }
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_shown()
    }

    /// True while the overlay suppresses background scroll.
    pub fn scroll_locked(&self) -> bool {
        self.modal.scroll_locked()
    }

    /// The explicit close action.
    pub fn close(&mut self) {
        self.modal.dismiss();
    }

    /// An interaction on the backdrop, outside the content region.
    pub fn backdrop_interaction(&mut self) {
        self.modal.dismiss();
    }
}
