#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    results::{ComputedResult, GradeStatus},
    round2, weighted,
};
use crate::{config::ChecklistItem, record::ComponentGrades};

/// Checklist progress for one student: items checked out of items
/// configured.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistSummary {
    /// Number of configured items recorded as done.
    pub checked: usize,
    /// Number of configured items.
    pub total:   usize,
}

impl ChecklistSummary {
    /// `Complete` iff every configured item is checked and the item list is
    /// non-empty.
    pub fn status(&self) -> GradeStatus {
        if self.total > 0 && self.checked == self.total {
            GradeStatus::Complete
        } else {
            GradeStatus::Incomplete
        }
    }
}

impl Display for ChecklistSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.checked, self.total)
    }
}

/// Counts how many configured checklist items are recorded as done.
pub fn checklist_summary(items: &[ChecklistItem], grades: &ComponentGrades) -> ChecklistSummary {
    let checked = items
        .iter()
        .filter(|item| grades.get(&item.key).is_some_and(|value| value.is_checked()))
        .count();

    ChecklistSummary {
        checked,
        total: items.len(),
    }
}

/// Computes the percentage-mode result: the mean of recorded scores
/// clamped to the 0-100 scale, rounded to two decimals, resolved against
/// the pass mark. An empty record averages to 0.0.
pub fn percentage_result(pass_mark: f64, grades: &ComponentGrades) -> ComputedResult {
    let scores: Vec<f64> = grades
        .components
        .values()
        .filter_map(|value| value.as_number())
        .map(|score| score.clamp(0.0, 100.0))
        .collect();

    let mean = if scores.is_empty() {
        0.0
    } else {
        round2(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    ComputedResult::with_status(mean, weighted::status(mean, pass_mark))
}

/// Computes the pass/fail status for one student.
///
/// `Pass` requires at least one recorded component and every recorded
/// component to be a pass marker; the empty record fails, matching the
/// competency policy that absence of data never defaults to passing.
pub fn pass_fail_status(grades: &ComponentGrades) -> GradeStatus {
    if grades.is_empty() {
        return GradeStatus::Fail;
    }

    let all_pass = grades
        .components
        .values()
        .all(|value| value.is_pass_marker());

    if all_pass {
        GradeStatus::Pass
    } else {
        GradeStatus::Fail
    }
}
