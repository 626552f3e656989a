//! Login validation and the global page-access guard.

use std::sync::Arc;

use crate::page::Page;
use crate::storage::TabStore;

use super::allow_list::is_valid_student_id;
use super::model::StudentSession;

/// Tab-store key holding the serialized [`StudentSession`].
pub const SESSION_KEY: &str = "logged_in_student_id";

/// The login gate.
///
/// `SessionGate` is responsible for:
/// - Validating a user-supplied identifier against the allow-list
/// - Persisting the session record in the per-tab store
/// - Answering the global access-control question for every page open
/// - Logout
///
/// The gate owns a handle to the tab store; presence of a stored record
/// implies a prior successful validation.
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn TabStore>,
}

impl SessionGate {
    /// Creates a gate over the given tab store.
    pub fn new(store: Arc<dyn TabStore>) -> Self {
        Self { store }
    }

    /// Validates a raw identifier and, on success, stores the session.
    ///
    /// The identifier is trimmed and tested for exact, case-sensitive
    /// membership in the allow-list. On success the session record is
    /// written and `true` is returned. On failure nothing is written.
    pub fn validate_login(&self, identifier: &str) -> bool {
        let id = identifier.trim();

        if !is_valid_student_id(id) {
            tracing::debug!(student_id = id, "login rejected");
            return false;
        }

        let session = StudentSession::new(id);
        let Ok(json) = serde_json::to_string(&session) else {
            tracing::warn!("failed to serialize session record");
            return false;
        };
        self.store.set(SESSION_KEY, &json);
        tracing::info!(student_id = id, "login accepted");
        true
    }

    /// Returns the stored session, if one exists and is readable.
    ///
    /// An unreadable record counts as no session.
    pub fn current_session(&self) -> Option<StudentSession> {
        let raw = self.store.get(SESSION_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// True when a session record is present.
    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Clears the stored session unconditionally.
    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
        tracing::info!("logged out");
    }

    /// The global access guard, run once per page open before any other
    /// initialization.
    ///
    /// # Returns
    ///
    /// - `Some(Page::Home)` when the login page is opened with a live session
    /// - `Some(Page::Login)` when any other page is opened without one
    /// - `None` when the requested page may be shown as-is
    pub fn guard(&self, page: Page) -> Option<Page> {
        match page {
            Page::Login if self.is_authenticated() => Some(Page::Home),
            Page::Login => None,
            _ if !self.is_authenticated() => Some(Page::Login),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Minimal in-memory fake for gate tests
    #[derive(Default)]
    struct FakeStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl TabStore for FakeStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }

        fn clear(&self) {
            self.entries.lock().unwrap().clear();
        }
    }

    fn gate() -> SessionGate {
        SessionGate::new(Arc::new(FakeStore::default()))
    }

    #[test]
    fn test_valid_login_stores_session() {
        let gate = gate();

        assert!(gate.validate_login("23321013"));
        let session = gate.current_session().expect("session should be stored");
        assert_eq!(session.student_id, "23321013");
    }

    #[test]
    fn test_login_trims_whitespace() {
        let gate = gate();

        assert!(gate.validate_login("  2025  "));
        assert_eq!(gate.current_session().unwrap().student_id, "2025");
    }

    #[test]
    fn test_invalid_login_writes_nothing() {
        let gate = gate();

        assert!(!gate.validate_login("not-a-student"));
        assert!(gate.current_session().is_none());
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_guard_redirects_unauthenticated_home() {
        let gate = gate();

        assert_eq!(gate.guard(Page::Home), Some(Page::Login));
        assert_eq!(gate.guard(Page::Login), None);
    }

    #[test]
    fn test_guard_redirects_authenticated_login() {
        let gate = gate();
        assert!(gate.validate_login("1000056944"));

        assert_eq!(gate.guard(Page::Login), Some(Page::Home));
        assert_eq!(gate.guard(Page::Home), None);
    }

    #[test]
    fn test_logout_clears_session() {
        let gate = gate();
        assert!(gate.validate_login("1000056944"));

        gate.logout();

        assert!(!gate.is_authenticated());
        assert_eq!(gate.guard(Page::Home), Some(Page::Login));
    }

    #[test]
    fn test_unreadable_record_counts_as_no_session() {
        let store = Arc::new(FakeStore::default());
        store.set(SESSION_KEY, "not json");
        let gate = SessionGate::new(store);

        assert!(!gate.is_authenticated());
    }
}
