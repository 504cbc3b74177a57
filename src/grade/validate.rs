#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{config::GradingMode, record::ScoreValue};

/// Validates and normalizes a raw UI edit for the given grading mode.
///
/// Invalid input is never rejected, only coerced:
/// - weighted/percentage: clamp to [0, 100]; non-numeric input becomes 0
///   (numeric text parses first);
/// - rubric: round to the nearest integer and clamp to [1, 4], with 0
///   meaning "unset";
/// - checklist: reduce to a done/not-done flag;
/// - pass/fail: reduce to the `"Pass"` / `"Fail"` markers.
///
/// Idempotent: normalizing an already-normalized value returns it
/// unchanged, so the value handed to the save path round-trips.
pub fn normalize(value: &ScoreValue, mode: GradingMode) -> ScoreValue {
    match mode {
        GradingMode::Weighted | GradingMode::Percentage => {
            let score = value.as_number().filter(|n| n.is_finite()).unwrap_or(0.0);
            ScoreValue::Number(score.clamp(0.0, 100.0))
        }
        GradingMode::Rubric => {
            let score = value
                .as_number()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0)
                .round();
            if score <= 0.0 {
                ScoreValue::Number(0.0)
            } else {
                ScoreValue::Number(score.clamp(1.0, 4.0))
            }
        }
        GradingMode::Checklist => ScoreValue::Flag(value.is_checked()),
        GradingMode::Competency => match value.as_text() {
            Some(label) => ScoreValue::Text(label.trim().to_string()),
            None => ScoreValue::Text(value.to_string()),
        },
        GradingMode::PassFail => {
            let marker = if value.is_pass_marker() { "Pass" } else { "Fail" };
            ScoreValue::Text(marker.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_zero_stays_unset() {
        let normalized = normalize(&ScoreValue::Number(0.0), GradingMode::Rubric);
        assert_eq!(normalized, ScoreValue::Number(0.0));
    }

    #[test]
    fn rubric_negative_collapses_to_unset() {
        let normalized = normalize(&ScoreValue::Number(-2.0), GradingMode::Rubric);
        assert_eq!(normalized, ScoreValue::Number(0.0));
    }

    #[test]
    fn weighted_non_numeric_text_coerces_to_zero() {
        let normalized = normalize(&ScoreValue::Text("absent".into()), GradingMode::Weighted);
        assert_eq!(normalized, ScoreValue::Number(0.0));
    }
}
