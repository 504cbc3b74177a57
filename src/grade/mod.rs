#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Competency (CBET) status computation.
pub mod competency;
/// Computed result and status types.
pub mod results;
/// Rubric average computation.
pub mod rubric;
/// Checklist, percentage, and pass/fail computation.
pub mod simple;
/// Raw score validation and normalization.
pub mod validate;
/// Weighted total computation.
pub mod weighted;

pub use results::{ComputedResult, GradeStatus};
pub use simple::ChecklistSummary;

use crate::{config::GradingConfig, record::StudentGradeRecord};

/// Rounds to two decimal places, after all multiplication has happened.
///
/// Totals near a pass mark depend on rounding the aggregated sum rather
/// than the addends.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl GradingConfig {
    /// Computes the displayed aggregate and status for one student.
    ///
    /// Pure and synchronous: reads the schema and the record, returns a
    /// fresh [`ComputedResult`]. Results are always re-derived from raw
    /// scores, never stored.
    pub fn compute(&self, record: &StudentGradeRecord) -> ComputedResult {
        match self {
            GradingConfig::Weighted {
                components,
                pass_mark,
            } => {
                let total = weighted::total(components, &record.grades);
                ComputedResult::with_status(total, weighted::status(total, *pass_mark))
            }
            GradingConfig::Competency { levels, components } => {
                ComputedResult::status_only(competency::status(levels, components, &record.grades))
            }
            GradingConfig::Rubric { criteria, .. } => {
                ComputedResult::score_only(rubric::average(criteria, &record.grades))
            }
            GradingConfig::Checklist { items } => {
                let summary = simple::checklist_summary(items, &record.grades);
                ComputedResult::status_only(summary.status())
            }
            GradingConfig::Percentage { pass_mark } => {
                simple::percentage_result(*pass_mark, &record.grades)
            }
            GradingConfig::PassFail => {
                ComputedResult::status_only(simple::pass_fail_status(&record.grades))
            }
        }
    }
}
