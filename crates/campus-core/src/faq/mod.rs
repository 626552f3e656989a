//! FAQ domain module.
//!
//! # Module Structure
//!
//! - `model`: The static FAQ entry
//! - `filter`: Substring + category visibility computation

mod filter;
mod model;

// Re-export public API
pub use filter::{ALL_CATEGORIES, FaqFilter, entry_matches};
pub use model::FaqEntry;
