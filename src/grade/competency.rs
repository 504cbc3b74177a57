#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::results::GradeStatus;
use crate::{config::CompetencyLevel, record::ComponentGrades};

/// Computes the overall CBET status for one student.
///
/// `Competent` requires every configured assessment area to carry a value
/// equal to the label of a passing level, and at least one area to be
/// recorded at all. Everything else, the empty record included, is
/// `Not Yet Competent`: absence of evidence never defaults to passing, and
/// an unrecorded area is counted as non-passing rather than skipped.
pub fn status(
    levels: &[CompetencyLevel],
    areas: &[String],
    grades: &ComponentGrades,
) -> GradeStatus {
    if areas.is_empty() || grades.is_empty() {
        return GradeStatus::NotYetCompetent;
    }

    let passing_labels: Vec<&str> = levels
        .iter()
        .filter(|level| level.passing)
        .map(|level| level.label.as_str())
        .collect();

    for area in areas {
        let recorded_pass = grades
            .get(area)
            .and_then(|value| value.as_text())
            .is_some_and(|label| passing_labels.contains(&label));

        if !recorded_pass {
            return GradeStatus::NotYetCompetent;
        }
    }

    GradeStatus::Competent
}
