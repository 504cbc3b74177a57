#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that weighted components sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// One named sub-assessment contributing to a weighted schema.
#[derive(Serialize, Deserialize, Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct WeightedComponent {
    /// Stable key the gradebook records scores under.
    pub key:    String,
    /// Display label, e.g. `"CAT 1"` or `"Final Exam"`.
    pub label:  String,
    /// Contribution of this component as a 0-1 fraction.
    pub weight: f64,
}

/// One achievement level in a competency (CBET) schema.
#[derive(Serialize, Deserialize, Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct CompetencyLevel {
    /// Stable key for the level.
    pub key:     String,
    /// Display label recorded against assessment areas, e.g. `"Competent"`.
    pub label:   String,
    /// Whether recording this level counts as passing the area.
    pub passing: bool,
}

/// One scoring level in a rubric schema.
#[derive(Serialize, Deserialize, Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct RubricLevel {
    /// Numeric score for the level, on the 1-4 scale.
    pub score: u8,
    /// Display label, e.g. `"Exceeds expectations"`.
    pub label: String,
}

/// One item in a checklist schema.
#[derive(Serialize, Deserialize, Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct ChecklistItem {
    /// Stable key the gradebook records completion under.
    pub key:   String,
    /// Display label for the item.
    pub label: String,
}

/// The grading mode a schema uses, without its mode-specific payload.
///
/// Used wherever only the dispatch decision matters, e.g. score
/// normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingMode {
    /// Weighted components with a pass mark.
    Weighted,
    /// Competency-based (CBET) areas with achievement levels.
    Competency,
    /// Rubric criteria on a 1-4 scale.
    Rubric,
    /// Checklist of done/not-done items.
    Checklist,
    /// Single percentage with a pass mark.
    Percentage,
    /// Bare pass/fail markers.
    PassFail,
}

impl Display for GradingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GradingMode::Weighted => "weighted",
            GradingMode::Competency => "competency",
            GradingMode::Rubric => "rubric",
            GradingMode::Checklist => "checklist",
            GradingMode::Percentage => "percentage",
            GradingMode::PassFail => "pass_fail",
        };
        write!(f, "{name}")
    }
}

/// A grading schema: one variant per grading mode, each carrying only the
/// fields that mode uses.
///
/// Owned by the course/blueprint collaborator; the engine only reads it.
/// Serialized internally tagged on `mode`, so a gradebook document reads
/// `{"mode": "weighted", "components": [...], "pass_mark": 40.0}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GradingConfig {
    /// Weighted components aggregated against a pass mark.
    Weighted {
        /// Ordered component list; weights are 0-1 fractions.
        components: Vec<WeightedComponent>,
        /// Pass threshold on the 0-100 scale.
        pass_mark:  f64,
    },
    /// Competency-based assessment over named areas.
    #[serde(alias = "cbet")]
    Competency {
        /// Achievement levels a grader can record.
        levels:     Vec<CompetencyLevel>,
        /// Assessment-area keys scores are recorded under.
        components: Vec<String>,
    },
    /// Rubric scoring of criteria on a 1-4 scale.
    Rubric {
        /// The rubric's scoring levels.
        levels:   Vec<RubricLevel>,
        /// Criteria names scores are recorded under.
        criteria: Vec<String>,
    },
    /// A list of done/not-done items.
    Checklist {
        /// The items to check off.
        items: Vec<ChecklistItem>,
    },
    /// A single overall percentage against a pass mark.
    Percentage {
        /// Pass threshold on the 0-100 scale.
        pass_mark: f64,
    },
    /// Bare pass/fail markers with no further configuration.
    PassFail,
}

impl GradingConfig {
    /// Returns the schema's grading mode.
    pub fn mode(&self) -> GradingMode {
        match self {
            GradingConfig::Weighted { .. } => GradingMode::Weighted,
            GradingConfig::Competency { .. } => GradingMode::Competency,
            GradingConfig::Rubric { .. } => GradingMode::Rubric,
            GradingConfig::Checklist { .. } => GradingMode::Checklist,
            GradingConfig::Percentage { .. } => GradingMode::Percentage,
            GradingConfig::PassFail => GradingMode::PassFail,
        }
    }

    /// Returns the component keys this schema records scores under, for
    /// modes that configure them. Percentage and pass/fail schemas accept
    /// any key.
    pub fn component_keys(&self) -> Option<Vec<&str>> {
        match self {
            GradingConfig::Weighted { components, .. } => {
                Some(components.iter().map(|c| c.key.as_str()).collect())
            }
            GradingConfig::Competency { components, .. } => {
                Some(components.iter().map(String::as_str).collect())
            }
            GradingConfig::Rubric { criteria, .. } => {
                Some(criteria.iter().map(String::as_str).collect())
            }
            GradingConfig::Checklist { items } => {
                Some(items.iter().map(|i| i.key.as_str()).collect())
            }
            GradingConfig::Percentage { .. } | GradingConfig::PassFail => None,
        }
    }

    /// Checks the schema for configuration problems.
    ///
    /// Warnings are advisory, surfaced to the schema author; a schema with
    /// warnings still grades. Mirrors what the schema-builder UI surfaces
    /// while a schema is being edited.
    pub fn check(&self) -> Vec<SchemaWarning> {
        let mut warnings = vec![];

        match self {
            GradingConfig::Weighted {
                components,
                pass_mark,
            } => {
                if components.is_empty() {
                    warnings.push(SchemaWarning::NoComponents);
                }
                let weight_check = WeightCheck::of(components);
                if !components.is_empty() && !weight_check.is_valid() {
                    warnings.push(SchemaWarning::WeightSum {
                        sum:    weight_check.sum_percent(),
                        advice: weight_check.advice(),
                    });
                }
                for component in components {
                    if !(0.0..=1.0).contains(&component.weight) {
                        warnings.push(SchemaWarning::WeightOutOfRange {
                            key:    component.key.clone(),
                            weight: component.weight,
                        });
                    }
                }
                warn_duplicates(components.iter().map(|c| c.key.as_str()), &mut warnings);
                if !(0.0..=100.0).contains(pass_mark) {
                    warnings.push(SchemaWarning::PassMarkOutOfRange {
                        pass_mark: *pass_mark,
                    });
                }
            }
            GradingConfig::Competency { levels, components } => {
                if levels.is_empty() {
                    warnings.push(SchemaWarning::NoLevels);
                } else if !levels.iter().any(|l| l.passing) {
                    warnings.push(SchemaWarning::NoPassingLevel);
                }
                if components.is_empty() {
                    warnings.push(SchemaWarning::NoComponents);
                }
                warn_duplicates(levels.iter().map(|l| l.key.as_str()), &mut warnings);
                warn_duplicates(components.iter().map(String::as_str), &mut warnings);
            }
            GradingConfig::Rubric { levels, criteria } => {
                if levels.is_empty() {
                    warnings.push(SchemaWarning::NoLevels);
                }
                if criteria.is_empty() {
                    warnings.push(SchemaWarning::NoCriteria);
                }
                for level in levels {
                    if !(1..=4).contains(&level.score) {
                        warnings.push(SchemaWarning::RubricLevelOutOfRange { score: level.score });
                    }
                }
                warn_duplicates(criteria.iter().map(String::as_str), &mut warnings);
            }
            GradingConfig::Checklist { items } => {
                if items.is_empty() {
                    warnings.push(SchemaWarning::NoItems);
                }
                warn_duplicates(items.iter().map(|i| i.key.as_str()), &mut warnings);
            }
            GradingConfig::Percentage { pass_mark } => {
                if !(0.0..=100.0).contains(pass_mark) {
                    warnings.push(SchemaWarning::PassMarkOutOfRange {
                        pass_mark: *pass_mark,
                    });
                }
            }
            GradingConfig::PassFail => {}
        }

        warnings
    }
}

/// Pushes a [`SchemaWarning::DuplicateKey`] for every key that appears more
/// than once in `keys`.
fn warn_duplicates<'a>(keys: impl Iterator<Item = &'a str>, warnings: &mut Vec<SchemaWarning>) {
    for key in keys.duplicates() {
        warnings.push(SchemaWarning::DuplicateKey {
            key: key.to_string(),
        });
    }
}

/// The result of checking that a weighted schema's weights sum to 100%.
///
/// Advisory only: the schema UI surfaces the deviation, the data layer
/// never rejects it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightCheck {
    /// Sum of the configured component weights (0-1 fractions).
    sum: f64,
}

impl WeightCheck {
    /// Sums the weights of `components`.
    pub fn of(components: &[WeightedComponent]) -> Self {
        Self {
            sum: components.iter().map(|c| c.weight).sum(),
        }
    }

    /// Whether the weights sum to 1.0 within tolerance.
    pub fn is_valid(&self) -> bool {
        (self.sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE
    }

    /// The weight sum expressed as a percentage, rounded to one decimal.
    pub fn sum_percent(&self) -> f64 {
        (self.sum * 1000.0).round() / 10.0
    }

    /// How far the sum is from 100%, in percentage points. Positive means
    /// weight is missing, negative means the schema is over-allocated.
    pub fn delta_percent(&self) -> f64 {
        ((1.0 - self.sum) * 1000.0).round() / 10.0
    }

    /// Human feedback for the schema author, e.g. `"need 40% more"`.
    pub fn advice(&self) -> String {
        let delta = self.delta_percent();
        if delta > 0.0 {
            format!("need {delta}% more")
        } else if delta < 0.0 {
            format!("over 100% by {}%", -delta)
        } else {
            "weights balance".to_string()
        }
    }
}

/// An advisory problem found in a grading schema.
///
/// These render as warnings next to the schema editor; none of them block
/// grading.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SchemaWarning {
    /// Weighted components do not sum to 100%.
    #[error("component weights sum to {sum}%, {advice}")]
    WeightSum {
        /// The actual sum, in percent.
        sum:    f64,
        /// Feedback on how to fix it.
        advice: String,
    },
    /// A component weight is not a 0-1 fraction.
    #[error("weight for `{key}` is {weight}, expected a fraction between 0 and 1")]
    WeightOutOfRange {
        /// Offending component key.
        key:    String,
        /// The configured weight.
        weight: f64,
    },
    /// A pass mark is outside the 0-100 scale.
    #[error("pass mark {pass_mark} is outside the 0-100 scale")]
    PassMarkOutOfRange {
        /// The configured pass mark.
        pass_mark: f64,
    },
    /// The same key is configured more than once.
    #[error("duplicate key `{key}`")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },
    /// The schema configures no components or assessment areas.
    #[error("no components configured")]
    NoComponents,
    /// The schema configures no levels.
    #[error("no levels configured")]
    NoLevels,
    /// No configured competency level counts as passing.
    #[error("no passing level configured, nobody can be judged competent")]
    NoPassingLevel,
    /// A rubric level is outside the 1-4 scale.
    #[error("rubric level {score} is outside the 1-4 scale")]
    RubricLevelOutOfRange {
        /// The configured level score.
        score: u8,
    },
    /// The rubric configures no criteria.
    #[error("no criteria configured")]
    NoCriteria,
    /// The checklist configures no items.
    #[error("no checklist items configured")]
    NoItems,
}
