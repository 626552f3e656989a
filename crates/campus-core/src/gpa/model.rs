//! GPA domain models.
//!
//! Course entries keep the raw text the user typed; all parsing happens
//! inside the recompute pass through the coercion helper so the policy
//! lives in one place.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// The fixed letter-grade scale and its point values.
///
/// This scale deliberately has no plain "A": A+ sits at 4.00 and the
/// next step down is A- at 3.70.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Grade {
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    #[strum(serialize = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    B,
    #[strum(serialize = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    C,
    #[strum(serialize = "C-")]
    #[serde(rename = "C-")]
    CMinus,
    #[strum(serialize = "D+")]
    #[serde(rename = "D+")]
    DPlus,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    D,
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// The grade-point value used as the weight in GPA computation.
    pub fn points(&self) -> f64 {
        match self {
            Grade::APlus => 4.00,
            Grade::AMinus => 3.70,
            Grade::BPlus => 3.30,
            Grade::B => 3.00,
            Grade::BMinus => 2.70,
            Grade::CPlus => 2.30,
            Grade::C => 2.00,
            Grade::CMinus => 1.70,
            Grade::DPlus => 1.30,
            Grade::D => 1.00,
            Grade::F => 0.00,
        }
    }
}

/// Opaque handle for one course row, returned by the engine on add and
/// used for later removal and field updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One course row as the user entered it.
///
/// `credit_hours` stays raw text; whether the row participates in the
/// averages is decided per recompute, not at entry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub name: String,
    pub credit_hours: String,
    pub grade: Option<Grade>,
}

/// The prior academic record, user-entered and optional.
///
/// Both fields are raw text; non-numeric input contributes zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorRecord {
    pub gpa: String,
    pub credits: String,
}

/// Categorical label derived from cumulative GPA via the ordered
/// threshold table, lower bound inclusive, first match descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    #[strum(serialize = "Exceptional")]
    Exceptional,
    #[strum(serialize = "Excellent")]
    Excellent,
    #[strum(serialize = "Good Standing")]
    GoodStanding,
    #[strum(serialize = "Academic Probation")]
    AcademicProbation,
}

impl PerformanceTier {
    /// Maps a cumulative GPA to its tier.
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.90 {
            PerformanceTier::Exceptional
        } else if gpa >= 3.50 {
            PerformanceTier::Excellent
        } else if gpa >= 2.00 {
            PerformanceTier::GoodStanding
        } else {
            PerformanceTier::AcademicProbation
        }
    }

    /// The visual style class associated with the tier.
    pub fn style(&self) -> TierStyle {
        match self {
            PerformanceTier::Exceptional => TierStyle::Accent,
            PerformanceTier::Excellent | PerformanceTier::GoodStanding => TierStyle::Neutral,
            PerformanceTier::AcademicProbation => TierStyle::Warning,
        }
    }
}

/// Visual style classes the tier banner renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierStyle {
    Accent,
    Neutral,
    Warning,
}

/// The four derived results plus the tier.
///
/// Recomputed from scratch on every mutation; never stored or mutated
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub current_gpa: f64,
    pub current_credits: f64,
    pub cumulative_gpa: f64,
    pub cumulative_credits: f64,
    pub tier: PerformanceTier,
}
