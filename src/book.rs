#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, path::Path};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    config::{GradingConfig, GradingMode},
    grade::ComputedResult,
    record::{ScoreUpdate, StudentGradeRecord},
};

/// Errors raised while loading, saving, or editing a gradebook document.
///
/// These are document-level failures; the computation engine itself has no
/// error type, and schema problems are advisory warnings, not errors.
#[derive(thiserror::Error, Debug)]
pub enum GradebookError {
    /// The gradebook file could not be read.
    #[error("could not read gradebook file `{path}`")]
    Read {
        /// Path that failed to read.
        path:   String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The gradebook file could not be written.
    #[error("could not write gradebook file `{path}`")]
    Write {
        /// Path that failed to write.
        path:   String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A remote gradebook could not be fetched.
    #[error("could not fetch gradebook from `{url}`")]
    Fetch {
        /// URL that failed to fetch.
        url:    String,
        /// Underlying HTTP failure.
        #[source]
        source: reqwest::Error,
    },
    /// The document is not a valid gradebook.
    #[error("could not parse gradebook document")]
    Parse(#[from] serde_json::Error),
    /// An edit referenced an enrollment the book does not contain.
    #[error("no student with enrollment id `{0}`")]
    UnknownEnrollment(String),
    /// An edit referenced a component the schema does not configure.
    #[error("`{component}` is not a component of this {mode} schema")]
    UnknownComponent {
        /// The unrecognized component key.
        component: String,
        /// The grading mode of the loaded schema.
        mode:      GradingMode,
    },
}

/// A gradebook document: one grading schema and the students graded
/// against it.
///
/// This is the JSON document the CLI operates on. The engine reads it and
/// computes results; all persistence stays with the caller.
#[derive(Serialize, Deserialize, Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct Gradebook {
    /// Display title, e.g. the course or assignment name.
    pub title:    String,
    /// The grading schema every student is computed against.
    pub config:   GradingConfig,
    /// Per-student identity and recorded raw scores.
    #[builder(default)]
    #[serde(default)]
    pub students: Vec<StudentGradeRecord>,
}

impl Gradebook {
    /// Whether `source` names a remote gradebook rather than a local file.
    pub fn is_remote(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

    /// Loads a gradebook from a local path or an http(s) URL.
    pub fn load(source: &str) -> Result<Self, GradebookError> {
        let text = if Self::is_remote(source) {
            reqwest::blocking::get(source)
                .and_then(reqwest::blocking::Response::error_for_status)
                .and_then(|response| response.text())
                .map_err(|source_err| GradebookError::Fetch {
                    url:    source.to_string(),
                    source: source_err,
                })?
        } else {
            fs::read_to_string(source).map_err(|source_err| GradebookError::Read {
                path:   source.to_string(),
                source: source_err,
            })?
        };

        Self::from_json(&text)
    }

    /// Parses a gradebook from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, GradebookError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the gradebook to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GradebookError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Saves the gradebook back to `path`.
    pub fn save(&self, path: &Path) -> Result<(), GradebookError> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|source_err| GradebookError::Write {
            path:   path.display().to_string(),
            source: source_err,
        })
    }

    /// Looks up a student by enrollment id.
    pub fn student(&self, enrollment_id: &str) -> Option<&StudentGradeRecord> {
        self.students
            .iter()
            .find(|student| student.enrollment_id == enrollment_id)
    }

    /// Computes every student's result against the book's schema.
    pub fn results(&self) -> Vec<(&StudentGradeRecord, ComputedResult)> {
        self.students
            .iter()
            .map(|student| (student, self.config.compute(student)))
            .collect()
    }

    /// Applies a normalized score update to the in-memory document.
    ///
    /// The update's value is stored as carried; build updates through
    /// [`ScoreUpdate::normalized`] so only normalized values reach the
    /// document. Saving the result is the caller's job.
    pub fn apply(&mut self, update: &ScoreUpdate) -> Result<(), GradebookError> {
        if let Some(keys) = self.config.component_keys() {
            if !keys.contains(&update.component_key.as_str()) {
                return Err(GradebookError::UnknownComponent {
                    component: update.component_key.clone(),
                    mode:      self.config.mode(),
                });
            }
        }

        let student = self
            .students
            .iter_mut()
            .find(|student| student.enrollment_id == update.enrollment_id)
            .ok_or_else(|| GradebookError::UnknownEnrollment(update.enrollment_id.clone()))?;

        student
            .grades
            .set(update.component_key.clone(), update.value.clone());

        Ok(())
    }
}
