//! Session domain module.
//!
//! Contains the student session model, the baked-in allow-list, and the
//! login gate that guards page access.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`StudentSession`)
//! - `allow_list`: The fixed set of identifiers accepted at login
//! - `gate`: Login validation and the global page-access guard

mod allow_list;
mod gate;
mod model;

// Re-export public API
pub use allow_list::{VALID_STUDENT_IDS, is_valid_student_id};
pub use gate::{SESSION_KEY, SessionGate};
pub use model::StudentSession;
