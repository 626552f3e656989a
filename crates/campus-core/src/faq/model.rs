//! FAQ entry model.

use serde::{Deserialize, Serialize};

/// One question/answer pair in the FAQ list.
///
/// Entries are static at runtime; visibility and expansion are
/// projections computed by the view layer, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}
