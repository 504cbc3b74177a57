#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::round1;
use crate::record::ComponentGrades;

/// Computes the rubric average for one student, rounded to one decimal.
///
/// Only recorded criterion scores greater than zero enter the average;
/// unscored criteria are excluded from the denominator, so a partially
/// graded rubric averages over what has been scored so far. Returns 0.0
/// when nothing is scored. There is no pass/fail threshold in this mode.
pub fn average(criteria: &[String], grades: &ComponentGrades) -> f64 {
    let scores: Vec<f64> = criteria
        .iter()
        .filter_map(|criterion| grades.numeric(criterion))
        .filter(|score| *score > 0.0)
        .collect();

    if scores.is_empty() {
        return 0.0;
    }

    round1(scores.iter().sum::<f64>() / scores.len() as f64)
}
