use std::path::PathBuf;

use markbook::{
    Gradebook, GradebookError, GradeStatus, GradingMode, ScoreUpdate, ScoreValue, report,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn weighted_book() -> Gradebook {
    let path = fixture("weighted_book.json");
    Gradebook::load(path.to_str().expect("fixture path")).expect("load gradebook")
}

#[test]
fn fixture_loads_and_computes() {
    let book = weighted_book();
    let results = book.results();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].1.score, Some(59.0));
    assert_eq!(results[0].1.status, Some(GradeStatus::Pass));
    assert_eq!(results[1].1.score, Some(27.0));
    assert_eq!(results[1].1.status, Some(GradeStatus::Fail));
    assert_eq!(results[2].1.score, Some(0.0));
    assert_eq!(results[2].1.status, Some(GradeStatus::Fail));
}

#[test]
fn applying_a_normalized_update_recomputes_the_row() {
    let mut book = weighted_book();
    let update = ScoreUpdate::normalized(
        book.config.mode(),
        "en-002",
        "exam",
        ScoreValue::Text("95".into()),
    );

    book.apply(&update).expect("apply update");

    let student = book.student("en-002").expect("student");
    let result = book.config.compute(student);
    assert_eq!(result.score, Some(72.5));
    assert_eq!(result.status, Some(GradeStatus::Pass));
}

#[test]
fn out_of_range_edits_store_clamped() {
    let mut book = weighted_book();
    let update = ScoreUpdate::normalized(
        book.config.mode(),
        "en-003",
        "cat",
        ScoreValue::Number(400.0),
    );

    book.apply(&update).expect("apply update");

    let student = book.student("en-003").expect("student");
    assert_eq!(student.score("cat"), Some(&ScoreValue::Number(100.0)));
}

#[test]
fn unknown_enrollment_is_an_error() {
    let mut book = weighted_book();
    let update = ScoreUpdate::normalized(
        book.config.mode(),
        "en-999",
        "cat",
        ScoreValue::Number(50.0),
    );

    let err = book.apply(&update).expect_err("should reject");
    assert!(matches!(err, GradebookError::UnknownEnrollment(id) if id == "en-999"));
}

#[test]
fn unknown_component_is_an_error() {
    let mut book = weighted_book();
    let update = ScoreUpdate::normalized(
        book.config.mode(),
        "en-001",
        "quiz9",
        ScoreValue::Number(50.0),
    );

    let err = book.apply(&update).expect_err("should reject");
    assert!(matches!(err, GradebookError::UnknownComponent { component, .. } if component == "quiz9"));
}

#[test]
fn gradebook_round_trips_through_save_and_reload() {
    let book = weighted_book();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("book.json");

    book.save(&path).expect("save gradebook");
    let reloaded = Gradebook::load(path.to_str().expect("path")).expect("reload");

    assert_eq!(book, reloaded);
}

#[test]
fn export_serializes_camel_case_results() {
    let book = weighted_book();

    let exported = serde_json::to_value(report::export(&book)).expect("serialize");

    assert_eq!(exported[0]["enrollmentId"], "en-001");
    assert_eq!(exported[0]["score"], 59.0);
    assert_eq!(exported[0]["status"], "Pass");
}

#[test]
fn render_includes_title_and_statuses() {
    let book = weighted_book();

    let table = report::render(&book);

    assert!(table.contains("Applied Calculus 101"));
    assert!(table.contains("Pass"));
    assert!(table.contains("Fail"));
}

#[test]
fn cbet_mode_alias_parses() {
    let book = Gradebook::from_json(
        r#"{
            "title": "Plumbing Level 2",
            "config": {
                "mode": "cbet",
                "levels": [
                    { "key": "competent", "label": "Competent", "passing": true },
                    { "key": "nyc", "label": "Not Yet Competent", "passing": false }
                ],
                "components": ["area1", "area2"]
            },
            "students": []
        }"#,
    )
    .expect("parse cbet book");

    assert_eq!(book.config.mode(), GradingMode::Competency);
}

#[test]
fn remote_sources_are_detected() {
    assert!(Gradebook::is_remote("https://lms.example.edu/books/42.json"));
    assert!(Gradebook::is_remote("http://lms.example.edu/books/42.json"));
    assert!(!Gradebook::is_remote("grades/book.json"));
}
