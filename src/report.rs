#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{
    book::Gradebook,
    config::GradingConfig,
    grade::{ComputedResult, simple},
    record::StudentGradeRecord,
};

/// One rendered gradebook row.
#[derive(Tabled)]
struct GradebookRow {
    /// Student display name.
    #[tabled(rename = "Student")]
    student:  String,
    /// Recorded raw scores, joined per component.
    #[tabled(rename = "Recorded")]
    recorded: String,
    /// Aggregate score or checklist progress for the row.
    #[tabled(rename = "Result")]
    result:   String,
    /// Status label for the row.
    #[tabled(rename = "Status")]
    status:   String,
}

/// Formats the recorded raw scores for one student.
///
/// Modes with configured component keys render every configured key, unset
/// ones as `-`; percentage and pass/fail render whatever was recorded.
fn recorded_cell(config: &GradingConfig, student: &StudentGradeRecord) -> String {
    match config.component_keys() {
        Some(keys) => keys
            .iter()
            .map(|key| match student.score(key) {
                Some(value) => format!("{key}: {value}"),
                None => format!("{key}: -"),
            })
            .join("\n"),
        None => {
            if student.grades.is_empty() {
                "-".to_string()
            } else {
                student
                    .grades
                    .components
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .join("\n")
            }
        }
    }
}

/// Formats the aggregate cell for one student, mode-aware.
fn result_cell(
    config: &GradingConfig,
    student: &StudentGradeRecord,
    result: &ComputedResult,
) -> String {
    match config {
        GradingConfig::Checklist { items } => {
            simple::checklist_summary(items, &student.grades).to_string()
        }
        GradingConfig::Weighted { .. } | GradingConfig::Percentage { .. } => result
            .score
            .map_or_else(|| "-".to_string(), |score| format!("{score:.2}")),
        GradingConfig::Rubric { .. } => result
            .score
            .map_or_else(|| "-".to_string(), |score| format!("{score:.1}")),
        GradingConfig::Competency { .. } | GradingConfig::PassFail => "-".to_string(),
    }
}

/// Renders the computed gradebook as a terminal table.
pub fn render(book: &Gradebook) -> String {
    let rows: Vec<GradebookRow> = book
        .results()
        .into_iter()
        .map(|(student, result)| GradebookRow {
            student:  student.name.clone(),
            recorded: recorded_cell(&book.config, student),
            result:   result_cell(&book.config, student, &result),
            status:   result
                .status
                .map_or_else(|| "-".to_string(), |status| status.to_string()),
        })
        .collect();

    Table::new(&rows)
        .with(Panel::header(format!("{} ({} mode)", book.title, book.config.mode())))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(36).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// One student's computed result, as exported toward the presentation
/// layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    /// Enrollment the result belongs to.
    pub enrollment_id: String,
    /// Student display name.
    pub name:          String,
    /// The derived aggregate and status.
    #[serde(flatten)]
    pub result:        ComputedResult,
}

/// Computes every student's result in export form.
pub fn export(book: &Gradebook) -> Vec<StudentResult> {
    book.results()
        .into_iter()
        .map(|(student, result)| StudentResult {
            enrollment_id: student.enrollment_id.clone(),
            name: student.name.clone(),
            result,
        })
        .collect()
}
