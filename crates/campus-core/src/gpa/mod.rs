//! GPA calculation domain module.
//!
//! # Module Structure
//!
//! - `model`: Course entries, the grade scale, derived aggregates, and
//!   the performance tier table
//! - `numeric`: The single home of the optional-number coercion policy
//! - `engine`: Row collection and the recompute pass

mod engine;
mod model;
mod numeric;

// Re-export public API
pub use engine::{GpaEngine, SEED_ROW_COUNT};
pub use model::{Aggregates, CourseEntry, CourseId, Grade, PerformanceTier, PriorRecord, TierStyle};
pub use numeric::{parse_optional_number, parse_or_zero};
