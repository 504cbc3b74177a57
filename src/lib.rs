//! # markbook
//!
//! A gradebook computation engine for multi-mode grading schemas:
//! weighted, competency (CBET), rubric, checklist, percentage, and
//! pass/fail.
//!
//! The engine is pure and synchronous. It reads a [`GradingConfig`] and a
//! [`StudentGradeRecord`], derives a [`ComputedResult`] on demand, and
//! hands normalized [`ScoreUpdate`] intents back to the caller; it never
//! persists anything itself.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Gradebook documents and their load/save/edit surface.
pub mod book;
/// Grading schemas, modes, and schema checking.
pub mod config;
/// The per-mode computation engine.
pub mod grade;
/// Student records, raw score values, and mutation intents.
pub mod record;
/// Result-table rendering and results export.
pub mod report;

pub use book::{Gradebook, GradebookError};
pub use config::{GradingConfig, GradingMode, SchemaWarning, WeightCheck};
pub use grade::{ChecklistSummary, ComputedResult, GradeStatus};
pub use record::{ScoreUpdate, ScoreValue, StudentGradeRecord};
