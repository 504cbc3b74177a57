#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{config::GradingMode, grade::validate};

/// A raw score value as recorded in a gradebook or carried by a UI edit.
///
/// The shape is mode-dependent: numeric scores for weighted and percentage
/// schemas, level labels for competency schemas, 1-4 integers for rubrics,
/// and done/pass markers for checklists and pass/fail schemas. "Unset" is
/// represented by absence from the component map, never by a sentinel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ScoreValue {
    /// A numeric score, e.g. `87.5`.
    Number(f64),
    /// A boolean marker, used by checklist items.
    Flag(bool),
    /// A textual value, e.g. a competency level label or `"Pass"`.
    Text(String),
}

impl ScoreValue {
    /// Parses a command-line or form string into the closest value shape.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<f64>() {
            ScoreValue::Number(n)
        } else if let Ok(b) = raw.parse::<bool>() {
            ScoreValue::Flag(b)
        } else {
            ScoreValue::Text(raw.to_string())
        }
    }

    /// Returns the numeric reading of this value, if it has one.
    ///
    /// Numeric text parses; markers and other text do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScoreValue::Number(n) => Some(*n),
            ScoreValue::Text(s) => s.trim().parse::<f64>().ok(),
            ScoreValue::Flag(_) => None,
        }
    }

    /// Returns the textual reading of this value, if it has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScoreValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this value marks a checklist item as done.
    pub fn is_checked(&self) -> bool {
        match self {
            ScoreValue::Flag(b) => *b,
            ScoreValue::Number(n) => *n != 0.0,
            ScoreValue::Text(s) => {
                matches!(
                    s.trim().to_lowercase().as_str(),
                    "yes" | "y" | "true" | "done" | "complete" | "checked" | "1"
                )
            }
        }
    }

    /// Whether this value marks a pass in a pass/fail schema.
    pub fn is_pass_marker(&self) -> bool {
        match self {
            ScoreValue::Flag(b) => *b,
            ScoreValue::Number(n) => *n != 0.0,
            ScoreValue::Text(s) => {
                matches!(s.trim().to_lowercase().as_str(), "pass" | "passed" | "p" | "yes" | "true")
            }
        }
    }
}

impl Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Number(n) => write!(f, "{n}"),
            ScoreValue::Flag(b) => write!(f, "{}", if *b { "done" } else { "-" }),
            ScoreValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for ScoreValue {
    fn from(n: f64) -> Self {
        ScoreValue::Number(n)
    }
}

impl From<bool> for ScoreValue {
    fn from(b: bool) -> Self {
        ScoreValue::Flag(b)
    }
}

impl From<&str> for ScoreValue {
    fn from(s: &str) -> Self {
        ScoreValue::Text(s.to_string())
    }
}

/// Recorded raw scores for one enrollment, keyed by component key.
///
/// Keys are ordered so renders and round-trips are deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ComponentGrades {
    /// Mapping from component key to the recorded raw value.
    #[serde(default)]
    pub components: BTreeMap<String, ScoreValue>,
}

impl ComponentGrades {
    /// Returns the recorded value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ScoreValue> {
        self.components.get(key)
    }

    /// Returns the numeric reading of the recorded value for `key`.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.components.get(key).and_then(ScoreValue::as_number)
    }

    /// Records `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ScoreValue>) {
        self.components.insert(key.into(), value.into());
    }

    /// Whether any component has a recorded value.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// One student's row in a gradebook: identity plus recorded raw scores.
///
/// Owned by the enrollment collaborator; the engine only reads it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Builder, PartialEq)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct StudentGradeRecord {
    /// Enrollment identifier the external persistence layer keys on.
    pub enrollment_id: String,
    /// Student display name.
    pub name:          String,
    /// Student email address.
    pub email:         String,
    /// Recorded raw scores, keyed by component key.
    #[builder(default)]
    #[serde(default)]
    pub grades:        ComponentGrades,
}

impl StudentGradeRecord {
    /// Convenience accessor for the recorded raw value of one component.
    pub fn score(&self, component_key: &str) -> Option<&ScoreValue> {
        self.grades.get(component_key)
    }
}

/// A mutation intent emitted toward the external save path.
///
/// The engine never writes scores itself; it hands one of these to the
/// caller after validating and normalizing the edited value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    /// Enrollment the edit applies to.
    pub enrollment_id: String,
    /// Component key the edit applies to.
    pub component_key: String,
    /// The normalized value to store.
    pub value:         ScoreValue,
}

impl ScoreUpdate {
    /// Builds an update with `value` normalized for the given grading mode.
    pub fn normalized(
        mode: GradingMode,
        enrollment_id: impl Into<String>,
        component_key: impl Into<String>,
        value: ScoreValue,
    ) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            component_key: component_key.into(),
            value:         validate::normalize(&value, mode),
        }
    }
}
