//! Session domain model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Represents a logged-in student for the duration of one tab.
///
/// A stored `StudentSession` implies the identifier passed allow-list
/// validation; nothing else about the student is known or tracked.
/// The record dies with the tab store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSession {
    /// The validated student identifier
    pub student_id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub logged_in_at: String,
}

impl StudentSession {
    /// Creates a new session for an already-validated identifier.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            logged_in_at: Utc::now().to_rfc3339(),
        }
    }
}
