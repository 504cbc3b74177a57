use markbook::{GradingMode, ScoreValue, grade::validate::normalize};

#[test]
fn weighted_scores_clamp_to_the_percentage_scale() {
    assert_eq!(
        normalize(&ScoreValue::Number(150.0), GradingMode::Weighted),
        ScoreValue::Number(100.0)
    );
    assert_eq!(
        normalize(&ScoreValue::Number(-10.0), GradingMode::Weighted),
        ScoreValue::Number(0.0)
    );
    assert_eq!(
        normalize(&ScoreValue::Number(72.5), GradingMode::Percentage),
        ScoreValue::Number(72.5)
    );
}

#[test]
fn numeric_text_parses_before_coercion() {
    assert_eq!(
        normalize(&ScoreValue::Text(" 88 ".into()), GradingMode::Weighted),
        ScoreValue::Number(88.0)
    );
}

#[test]
fn non_numeric_input_coerces_to_zero() {
    assert_eq!(
        normalize(&ScoreValue::Text("absent".into()), GradingMode::Percentage),
        ScoreValue::Number(0.0)
    );
    assert_eq!(
        normalize(&ScoreValue::Flag(true), GradingMode::Weighted),
        ScoreValue::Number(0.0)
    );
}

#[test]
fn rubric_scores_clamp_to_the_four_point_scale() {
    assert_eq!(normalize(&ScoreValue::Number(9.0), GradingMode::Rubric), ScoreValue::Number(4.0));
    assert_eq!(normalize(&ScoreValue::Number(0.4), GradingMode::Rubric), ScoreValue::Number(0.0));
    assert_eq!(normalize(&ScoreValue::Number(2.6), GradingMode::Rubric), ScoreValue::Number(3.0));
    assert_eq!(normalize(&ScoreValue::Number(0.0), GradingMode::Rubric), ScoreValue::Number(0.0));
}

#[test]
fn checklist_values_reduce_to_flags() {
    assert_eq!(
        normalize(&ScoreValue::Text("done".into()), GradingMode::Checklist),
        ScoreValue::Flag(true)
    );
    assert_eq!(
        normalize(&ScoreValue::Text("nope".into()), GradingMode::Checklist),
        ScoreValue::Flag(false)
    );
    assert_eq!(
        normalize(&ScoreValue::Number(1.0), GradingMode::Checklist),
        ScoreValue::Flag(true)
    );
}

#[test]
fn pass_fail_values_reduce_to_markers() {
    assert_eq!(
        normalize(&ScoreValue::Text("passed".into()), GradingMode::PassFail),
        ScoreValue::Text("Pass".into())
    );
    assert_eq!(
        normalize(&ScoreValue::Flag(false), GradingMode::PassFail),
        ScoreValue::Text("Fail".into())
    );
}

#[test]
fn normalization_is_idempotent_in_every_mode() {
    let samples = [
        (GradingMode::Weighted, ScoreValue::Number(350.0)),
        (GradingMode::Weighted, ScoreValue::Text("not a number".into())),
        (GradingMode::Percentage, ScoreValue::Number(-3.0)),
        (GradingMode::Rubric, ScoreValue::Number(2.5)),
        (GradingMode::Rubric, ScoreValue::Number(-1.0)),
        (GradingMode::Competency, ScoreValue::Text("  Competent ".into())),
        (GradingMode::Checklist, ScoreValue::Text("yes".into())),
        (GradingMode::PassFail, ScoreValue::Number(0.0)),
        (GradingMode::PassFail, ScoreValue::Text("Pass".into())),
    ];

    for (mode, raw) in samples {
        let once = normalize(&raw, mode);
        let twice = normalize(&once, mode);
        assert_eq!(once, twice, "double normalization drifted for {mode}: {raw:?}");
    }
}
