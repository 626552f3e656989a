//! Row collection and the recompute pass.

use super::model::{Aggregates, CourseEntry, CourseId, Grade, PerformanceTier, PriorRecord};
use super::numeric::{parse_optional_number, parse_or_zero};

/// Number of blank course rows present when the calculator page loads.
pub const SEED_ROW_COUNT: usize = 3;

/// The central state holder for the GPA calculator.
///
/// `GpaEngine` owns the course rows and the prior-record fields. Every
/// mutation is expected to be followed by a [`GpaEngine::recompute`] call;
/// the engine itself keeps no derived state.
#[derive(Debug, Clone, Default)]
pub struct GpaEngine {
    courses: Vec<CourseEntry>,
    prior: PriorRecord,
}

impl GpaEngine {
    /// Creates an engine with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine pre-populated with [`SEED_ROW_COUNT`] blank rows,
    /// matching what the calculator page shows on load.
    pub fn with_seed_rows() -> Self {
        let mut engine = Self::new();
        for _ in 0..SEED_ROW_COUNT {
            engine.add_course("", "", None);
        }
        engine
    }

    /// Appends a course row and returns its handle.
    ///
    /// Blank name/credits and an unselected grade are valid: such a row
    /// simply contributes nothing until it is filled in.
    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        credit_hours: impl Into<String>,
        grade: Option<Grade>,
    ) -> CourseId {
        let id = CourseId::new();
        self.courses.push(CourseEntry {
            id: id.clone(),
            name: name.into(),
            credit_hours: credit_hours.into(),
            grade,
        });
        id
    }

    /// Removes the row with the given handle. Returns false if the handle
    /// no longer refers to a row.
    pub fn remove_course(&mut self, id: &CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| &course.id != id);
        self.courses.len() != before
    }

    /// Removes every row and resets the prior-record fields to empty text.
    pub fn clear_all(&mut self) {
        self.courses.clear();
        self.prior = PriorRecord::default();
    }

    /// Updates a row's course name. Returns false for a stale handle.
    pub fn set_course_name(&mut self, id: &CourseId, name: impl Into<String>) -> bool {
        match self.course_mut(id) {
            Some(course) => {
                course.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Updates a row's raw credit-hours text. Returns false for a stale handle.
    pub fn set_course_credits(&mut self, id: &CourseId, credit_hours: impl Into<String>) -> bool {
        match self.course_mut(id) {
            Some(course) => {
                course.credit_hours = credit_hours.into();
                true
            }
            None => false,
        }
    }

    /// Updates a row's grade selection. `None` deselects.
    pub fn set_course_grade(&mut self, id: &CourseId, grade: Option<Grade>) -> bool {
        match self.course_mut(id) {
            Some(course) => {
                course.grade = grade;
                true
            }
            None => false,
        }
    }

    /// Sets the raw prior-GPA text.
    pub fn set_prior_gpa(&mut self, text: impl Into<String>) {
        self.prior.gpa = text.into();
    }

    /// Sets the raw prior-credits text.
    pub fn set_prior_credits(&mut self, text: impl Into<String>) {
        self.prior.credits = text.into();
    }

    /// The current rows, in insertion order.
    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    /// The prior-record fields as entered.
    pub fn prior(&self) -> &PriorRecord {
        &self.prior
    }

    /// Recomputes all four aggregates and the tier from scratch.
    ///
    /// A row participates only when its credit hours parse to a value
    /// strictly greater than zero AND a grade is selected. An unselected
    /// grade excludes the row silently; it is not a zero-point grade.
    /// Non-numeric prior fields contribute exactly zero. Both divisions
    /// define 0/0 as 0.
    pub fn recompute(&self) -> Aggregates {
        let mut current_grade_points = 0.0;
        let mut current_credits = 0.0;

        for course in &self.courses {
            let Some(credits) = parse_optional_number(&course.credit_hours) else {
                continue;
            };
            if credits <= 0.0 {
                continue;
            }
            let Some(grade) = course.grade else {
                continue;
            };
            current_grade_points += credits * grade.points();
            current_credits += credits;
        }

        let current_gpa = if current_credits > 0.0 {
            current_grade_points / current_credits
        } else {
            0.0
        };

        let prior_gpa = parse_or_zero(&self.prior.gpa);
        let prior_credits = parse_or_zero(&self.prior.credits);

        let cumulative_credits = prior_credits + current_credits;
        let cumulative_grade_points = prior_gpa * prior_credits + current_grade_points;
        let cumulative_gpa = if cumulative_credits > 0.0 {
            cumulative_grade_points / cumulative_credits
        } else {
            0.0
        };

        let aggregates = Aggregates {
            current_gpa,
            current_credits,
            cumulative_gpa,
            cumulative_credits,
            tier: PerformanceTier::from_gpa(cumulative_gpa),
        };

        tracing::debug!(
            rows = self.courses.len(),
            current_gpa,
            cumulative_gpa,
            "recomputed aggregates"
        );

        aggregates
    }

    fn course_mut(&mut self, id: &CourseId) -> Option<&mut CourseEntry> {
        self.courses.iter_mut().find(|course| &course.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_engine_yields_zeros() {
        let engine = GpaEngine::new();
        let agg = engine.recompute();

        assert_close(agg.current_gpa, 0.0);
        assert_close(agg.cumulative_gpa, 0.0);
        assert_eq!(agg.tier, PerformanceTier::AcademicProbation);
    }

    #[test]
    fn test_current_semester_average() {
        let mut engine = GpaEngine::new();
        engine.add_course("Calculus", "3", Some(Grade::APlus));
        engine.add_course("Physics", "3", Some(Grade::BPlus));

        let agg = engine.recompute();

        // (3*4.00 + 3*3.30) / 6 = 3.65
        assert_close(agg.current_gpa, 3.65);
        assert_close(agg.current_credits, 6.0);
        // No prior record: cumulative equals current
        assert_close(agg.cumulative_gpa, 3.65);
        assert_close(agg.cumulative_credits, 6.0);
    }

    #[test]
    fn test_cumulative_with_prior_record() {
        let mut engine = GpaEngine::new();
        engine.add_course("Calculus", "3", Some(Grade::APlus));
        engine.add_course("Physics", "3", Some(Grade::BPlus));
        engine.set_prior_gpa("3.00");
        engine.set_prior_credits("30");

        let agg = engine.recompute();

        // (3.00*30 + 21.90) / 36
        assert_close(agg.cumulative_gpa, 111.90 / 36.0);
        assert_close(agg.cumulative_credits, 36.0);
        assert_eq!(agg.tier, PerformanceTier::GoodStanding);
    }

    #[test]
    fn test_zero_credit_row_is_excluded() {
        let mut engine = GpaEngine::new();
        engine.add_course("Seminar", "0", Some(Grade::APlus));
        engine.add_course("Calculus", "3", Some(Grade::B));

        let agg = engine.recompute();

        assert_close(agg.current_gpa, 3.0);
        assert_close(agg.current_credits, 3.0);
    }

    #[test]
    fn test_negative_credit_row_is_excluded() {
        let mut engine = GpaEngine::new();
        engine.add_course("Oops", "-3", Some(Grade::APlus));

        let agg = engine.recompute();

        assert_close(agg.current_gpa, 0.0);
        assert_close(agg.current_credits, 0.0);
    }

    #[test]
    fn test_ungraded_row_contributes_nothing() {
        let mut engine = GpaEngine::new();
        engine.add_course("Pending", "3", None);
        engine.add_course("Calculus", "3", Some(Grade::B));

        let agg = engine.recompute();

        // The ungraded row is excluded entirely, not counted as F
        assert_close(agg.current_gpa, 3.0);
        assert_close(agg.current_credits, 3.0);
    }

    #[test]
    fn test_non_numeric_credits_row_is_excluded() {
        let mut engine = GpaEngine::new();
        engine.add_course("Typo", "three", Some(Grade::APlus));

        let agg = engine.recompute();

        assert_close(agg.current_credits, 0.0);
    }

    #[test]
    fn test_non_numeric_prior_fields_coerce_to_zero() {
        let mut engine = GpaEngine::new();
        engine.add_course("Calculus", "3", Some(Grade::B));
        engine.set_prior_gpa("   ");
        engine.set_prior_credits("n/a");

        let agg = engine.recompute();

        assert_close(agg.cumulative_gpa, 3.0);
        assert_close(agg.cumulative_credits, 3.0);
    }

    #[test]
    fn test_remove_course() {
        let mut engine = GpaEngine::new();
        let keep = engine.add_course("Calculus", "3", Some(Grade::APlus));
        let drop = engine.add_course("Physics", "3", Some(Grade::F));

        assert!(engine.remove_course(&drop));
        assert!(!engine.remove_course(&drop));

        let agg = engine.recompute();
        assert_close(agg.current_gpa, 4.0);
        assert!(engine.courses().iter().any(|c| c.id == keep));
    }

    #[test]
    fn test_clear_all_resets_prior_fields() {
        let mut engine = GpaEngine::new();
        engine.add_course("Calculus", "3", Some(Grade::APlus));
        engine.set_prior_gpa("3.2");
        engine.set_prior_credits("60");

        engine.clear_all();

        assert!(engine.courses().is_empty());
        assert_eq!(engine.prior(), &PriorRecord::default());
        assert_close(engine.recompute().cumulative_gpa, 0.0);
    }

    #[test]
    fn test_seed_rows_are_blank_and_inert() {
        let engine = GpaEngine::with_seed_rows();

        assert_eq!(engine.courses().len(), SEED_ROW_COUNT);
        let agg = engine.recompute();
        assert_close(agg.current_gpa, 0.0);
    }

    #[test]
    fn test_stale_handle_mutators_return_false() {
        let mut engine = GpaEngine::new();
        let id = engine.add_course("Calculus", "3", Some(Grade::B));
        engine.clear_all();

        assert!(!engine.set_course_name(&id, "x"));
        assert!(!engine.set_course_credits(&id, "4"));
        assert!(!engine.set_course_grade(&id, None));
    }

    #[test]
    fn test_fractional_credit_hours() {
        let mut engine = GpaEngine::new();
        engine.add_course("Lab", "0.5", Some(Grade::APlus));
        engine.add_course("Lecture", "1.5", Some(Grade::B));

        let agg = engine.recompute();

        // (0.5*4.00 + 1.5*3.00) / 2.0 = 3.25
        assert_close(agg.current_gpa, 3.25);
    }
}
