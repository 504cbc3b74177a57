#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{results::GradeStatus, round2};
use crate::{config::WeightedComponent, record::ComponentGrades};

/// Computes the weighted total for one student on the 0-100 scale.
///
/// Each configured component contributes `clamp(score, 0, 100) * weight`;
/// a component with no recorded score contributes 0. The sum is rounded to
/// two decimal places after all multiplication.
pub fn total(components: &[WeightedComponent], grades: &ComponentGrades) -> f64 {
    let sum: f64 = components
        .iter()
        .map(|component| {
            let score = grades
                .numeric(&component.key)
                .map_or(0.0, |s| s.clamp(0.0, 100.0));
            score * component.weight
        })
        .sum();

    round2(sum)
}

/// Resolves a weighted or percentage total against a pass mark.
pub fn status(total: f64, pass_mark: f64) -> GradeStatus {
    if total >= pass_mark {
        GradeStatus::Pass
    } else {
        GradeStatus::Fail
    }
}
