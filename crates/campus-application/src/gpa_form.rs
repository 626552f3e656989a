//! GPA form view-model.

use campus_core::error::Result;
use campus_core::gpa::{
    Aggregates, CourseEntry, CourseId, GpaEngine, Grade, PriorRecord, TierStyle,
};

/// Display-ready projection of the aggregates.
///
/// All four numeric results are formatted to exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpaDisplay {
    pub current_gpa: String,
    pub current_credits: String,
    pub cumulative_gpa: String,
    pub cumulative_credits: String,
    pub tier_label: String,
    pub tier_style: TierStyle,
}

impl From<&Aggregates> for GpaDisplay {
    fn from(agg: &Aggregates) -> Self {
        Self {
            current_gpa: format!("{:.2}", agg.current_gpa),
            current_credits: format!("{:.2}", agg.current_credits),
            cumulative_gpa: format!("{:.2}", agg.cumulative_gpa),
            cumulative_credits: format!("{:.2}", agg.cumulative_credits),
            tier_label: agg.tier.to_string(),
            tier_style: agg.tier.style(),
        }
    }
}

/// View-model for the GPA calculator form.
///
/// Wraps the engine and keeps the display projection fresh: every typed
/// mutator triggers a full recompute, the same way the page recalculates
/// on every input event.
pub struct GpaForm {
    engine: GpaEngine,
    aggregates: Aggregates,
    display: GpaDisplay,
}

impl GpaForm {
    /// A form as the calculator page loads it: seed rows present and an
    /// initial recompute already run.
    pub fn new() -> Self {
        Self::with_engine(GpaEngine::with_seed_rows())
    }

    /// A form over an empty engine.
    pub fn empty() -> Self {
        Self::with_engine(GpaEngine::new())
    }

    fn with_engine(engine: GpaEngine) -> Self {
        let aggregates = engine.recompute();
        let display = GpaDisplay::from(&aggregates);
        Self {
            engine,
            aggregates,
            display,
        }
    }

    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        credit_hours: impl Into<String>,
        grade: Option<Grade>,
    ) -> CourseId {
        let id = self.engine.add_course(name, credit_hours, grade);
        self.refresh();
        id
    }

    pub fn remove_course(&mut self, id: &CourseId) -> bool {
        let removed = self.engine.remove_course(id);
        self.refresh();
        removed
    }

    pub fn clear_all(&mut self) {
        self.engine.clear_all();
        self.refresh();
    }

    pub fn set_course_name(&mut self, id: &CourseId, name: impl Into<String>) -> bool {
        let updated = self.engine.set_course_name(id, name);
        self.refresh();
        updated
    }

    pub fn set_course_credits(&mut self, id: &CourseId, credit_hours: impl Into<String>) -> bool {
        let updated = self.engine.set_course_credits(id, credit_hours);
        self.refresh();
        updated
    }

    pub fn set_course_grade(&mut self, id: &CourseId, grade: Option<Grade>) -> bool {
        let updated = self.engine.set_course_grade(id, grade);
        self.refresh();
        updated
    }

    pub fn set_prior_gpa(&mut self, text: impl Into<String>) {
        self.engine.set_prior_gpa(text);
        self.refresh();
    }

    pub fn set_prior_credits(&mut self, text: impl Into<String>) {
        self.engine.set_prior_credits(text);
        self.refresh();
    }

    /// The rows, in display order.
    pub fn rows(&self) -> &[CourseEntry] {
        self.engine.courses()
    }

    /// The prior-record fields as entered.
    pub fn prior(&self) -> &PriorRecord {
        self.engine.prior()
    }

    /// The latest aggregates.
    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    /// The formatted display values.
    pub fn display(&self) -> &GpaDisplay {
        &self.display
    }

    /// JSON snapshot of the aggregates (the `export` action).
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.aggregates)?)
    }

    fn refresh(&mut self) {
        self.aggregates = self.engine.recompute();
        self.display = GpaDisplay::from(&self.aggregates);
    }
}

impl Default for GpaForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_displays_zeros() {
        let form = GpaForm::new();
        let display = form.display();

        assert_eq!(display.current_gpa, "0.00");
        assert_eq!(display.cumulative_gpa, "0.00");
        assert_eq!(display.tier_label, "Academic Probation");
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let mut form = GpaForm::empty();
        form.add_course("Calculus", "3", Some(Grade::APlus));
        form.add_course("Physics", "3", Some(Grade::BPlus));

        assert_eq!(form.display().current_gpa, "3.65");
        assert_eq!(form.display().current_credits, "6.00");
        assert_eq!(form.display().cumulative_gpa, "3.65");
    }

    #[test]
    fn test_cumulative_display_with_prior_record() {
        let mut form = GpaForm::empty();
        form.add_course("Calculus", "3", Some(Grade::APlus));
        form.add_course("Physics", "3", Some(Grade::BPlus));
        form.set_prior_gpa("3.00");
        form.set_prior_credits("30");

        // (3.00*30 + 21.90) / 36 = 3.1083..., rounded for display
        assert_eq!(form.display().cumulative_gpa, "3.11");
        assert_eq!(form.display().cumulative_credits, "36.00");
        assert_eq!(form.display().tier_label, "Good Standing");
    }

    #[test]
    fn test_every_mutation_refreshes_display() {
        let mut form = GpaForm::empty();
        let id = form.add_course("Calculus", "3", Some(Grade::B));
        assert_eq!(form.display().current_gpa, "3.00");

        form.set_course_grade(&id, Some(Grade::APlus));
        assert_eq!(form.display().current_gpa, "4.00");

        form.set_course_credits(&id, "");
        assert_eq!(form.display().current_gpa, "0.00");

        form.remove_course(&id);
        assert_eq!(form.display().current_credits, "0.00");
    }

    #[test]
    fn test_tier_style_follows_cumulative_gpa() {
        let mut form = GpaForm::empty();
        form.add_course("Calculus", "3", Some(Grade::APlus));

        assert_eq!(form.display().tier_label, "Exceptional");
        assert_eq!(form.display().tier_style, TierStyle::Accent);

        form.set_course_grade(&form.rows()[0].id.clone(), Some(Grade::F));
        assert_eq!(form.display().tier_label, "Academic Probation");
        assert_eq!(form.display().tier_style, TierStyle::Warning);
    }

    #[test]
    fn test_snapshot_json_carries_aggregates() {
        let mut form = GpaForm::empty();
        form.add_course("Calculus", "3", Some(Grade::B));

        let json = form.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["current_gpa"], 3.0);
        assert_eq!(value["tier"], "good_standing");
    }
}
