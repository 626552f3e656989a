//! Login form view-model.

use campus_core::page::Page;
use campus_core::session::SessionGate;

/// Fixed error text shown for a rejected identifier.
pub const INVALID_ID_MESSAGE: &str = "Invalid Student ID. Please try again.";

/// View-model for the login form.
///
/// Holds the raw identifier text and the inline error. Submitting with a
/// valid identifier clears the error and yields a navigation to the home
/// view; a rejected identifier sets the fixed message and leaves the
/// input editable for another attempt.
pub struct LoginForm {
    gate: SessionGate,
    student_id: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(gate: SessionGate) -> Self {
        Self {
            gate,
            student_id: String::new(),
            error: None,
        }
    }

    pub fn set_student_id(&mut self, text: impl Into<String>) {
        self.student_id = text.into();
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The inline error text, if the last submit was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submits the current identifier. The login action and the Enter key
    /// both land here.
    ///
    /// # Returns
    ///
    /// `Some(Page::Home)` on success, `None` on rejection.
    pub fn submit(&mut self) -> Option<Page> {
        if self.gate.validate_login(&self.student_id) {
            self.error = None;
            Some(Page::Home)
        } else {
            self.error = Some(INVALID_ID_MESSAGE.to_string());
            None
        }
    }
}
