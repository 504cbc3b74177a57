#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The pass/fail-style status a grading mode attaches to a result.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeStatus {
    /// A weighted or percentage total met the pass mark.
    Pass,
    /// A weighted or percentage total fell short of the pass mark.
    Fail,
    /// Every assessment area recorded a passing level.
    Competent,
    /// At least one assessment area is unrecorded or below a passing level.
    #[serde(rename = "Not Yet Competent")]
    NotYetCompetent,
    /// Every checklist item is checked off.
    Complete,
    /// At least one checklist item is unchecked.
    Incomplete,
}

impl GradeStatus {
    /// Whether this status counts as a passing outcome.
    pub fn is_passing(&self) -> bool {
        matches!(self, GradeStatus::Pass | GradeStatus::Competent | GradeStatus::Complete)
    }
}

impl Display for GradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GradeStatus::Pass => "Pass",
            GradeStatus::Fail => "Fail",
            GradeStatus::Competent => "Competent",
            GradeStatus::NotYetCompetent => "Not Yet Competent",
            GradeStatus::Complete => "Complete",
            GradeStatus::Incomplete => "Incomplete",
        };
        write!(f, "{label}")
    }
}

/// A derived grading outcome: the displayed aggregate and/or status.
///
/// Never persisted separately from the raw inputs; callers re-derive it
/// whenever a score changes, so it cannot go stale. Rubric results carry a
/// score with no status (the average is display-only); competency,
/// checklist, and pass/fail results carry a status with no score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResult {
    /// Aggregate score, when the mode produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score:  Option<f64>,
    /// Status label, when the mode produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GradeStatus>,
}

impl ComputedResult {
    /// A result carrying both an aggregate and a status.
    pub fn with_status(score: f64, status: GradeStatus) -> Self {
        Self {
            score:  Some(score),
            status: Some(status),
        }
    }

    /// A result carrying only an aggregate (rubric averages).
    pub fn score_only(score: f64) -> Self {
        Self {
            score:  Some(score),
            status: None,
        }
    }

    /// A result carrying only a status.
    pub fn status_only(status: GradeStatus) -> Self {
        Self {
            score:  None,
            status: Some(status),
        }
    }
}

impl Display for ComputedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.score, self.status) {
            (Some(score), Some(status)) => write!(f, "{score} ({status})"),
            (Some(score), None) => write!(f, "{score}"),
            (None, Some(status)) => write!(f, "{status}"),
            (None, None) => write!(f, "-"),
        }
    }
}
