use markbook::{
    GradeStatus, GradingConfig,
    config::WeightedComponent,
    grade::weighted,
    record::ComponentGrades,
};

fn cat_exam_components() -> Vec<WeightedComponent> {
    vec![
        WeightedComponent::builder()
            .key("cat")
            .label("CAT 1")
            .weight(0.3)
            .build(),
        WeightedComponent::builder()
            .key("exam")
            .label("Final Exam")
            .weight(0.7)
            .build(),
    ]
}

fn grades(pairs: &[(&str, f64)]) -> ComponentGrades {
    let mut grades = ComponentGrades::default();
    for (key, score) in pairs {
        grades.set(*key, *score);
    }
    grades
}

#[test]
fn passing_total_aggregates_by_weight() {
    let components = cat_exam_components();
    let grades = grades(&[("cat", 80.0), ("exam", 50.0)]);

    let total = weighted::total(&components, &grades);

    assert_eq!(total, 59.0);
    assert_eq!(weighted::status(total, 40.0), GradeStatus::Pass);
}

#[test]
fn failing_total_stays_below_pass_mark() {
    let components = cat_exam_components();
    let grades = grades(&[("cat", 20.0), ("exam", 30.0)]);

    let total = weighted::total(&components, &grades);

    assert_eq!(total, 27.0);
    assert_eq!(weighted::status(total, 40.0), GradeStatus::Fail);
}

#[test]
fn missing_component_scores_contribute_zero() {
    let components = cat_exam_components();
    let grades = grades(&[("exam", 50.0)]);

    assert_eq!(weighted::total(&components, &grades), 35.0);
}

#[test]
fn empty_record_totals_zero() {
    let components = cat_exam_components();

    assert_eq!(weighted::total(&components, &ComponentGrades::default()), 0.0);
}

#[test]
fn recorded_scores_clamp_to_the_percentage_scale() {
    let components = cat_exam_components();
    let grades = grades(&[("cat", 250.0), ("exam", -40.0)]);

    // 100 * 0.3 + 0 * 0.7
    assert_eq!(weighted::total(&components, &grades), 30.0);
}

#[test]
fn total_rounds_after_multiplying() {
    let components = vec![
        WeightedComponent::builder()
            .key("a")
            .label("A")
            .weight(0.333)
            .build(),
        WeightedComponent::builder()
            .key("b")
            .label("B")
            .weight(0.667)
            .build(),
    ];
    let grades = grades(&[("a", 66.67), ("b", 33.33)]);

    // 22.201111 + 22.231111 rounds once, at the end.
    assert_eq!(weighted::total(&components, &grades), 44.43);
}

#[test]
fn total_stays_on_the_percentage_scale_for_balanced_weights() {
    let components = cat_exam_components();
    let steps = [0.0, 25.0, 50.0, 75.0, 100.0];

    for cat in steps {
        for exam in steps {
            let total = weighted::total(&components, &grades(&[("cat", cat), ("exam", exam)]));
            assert!((0.0..=100.0).contains(&total), "total {total} out of range");
        }
    }
}

#[test]
fn raising_one_score_never_lowers_the_total() {
    let components = cat_exam_components();
    let mut previous = -1.0;

    for exam in [0.0, 10.0, 35.0, 60.0, 99.0, 100.0] {
        let total = weighted::total(&components, &grades(&[("cat", 42.0), ("exam", exam)]));
        assert!(total >= previous, "total {total} dropped below {previous}");
        previous = total;
    }
}

#[test]
fn compute_dispatches_weighted_config() {
    let config = GradingConfig::Weighted {
        components: cat_exam_components(),
        pass_mark:  40.0,
    };
    let student = markbook::StudentGradeRecord::builder()
        .enrollment_id("en-001")
        .name("Asha Mwangi")
        .email("asha@example.edu")
        .grades(grades(&[("cat", 80.0), ("exam", 50.0)]))
        .build();

    let result = config.compute(&student);

    assert_eq!(result.score, Some(59.0));
    assert_eq!(result.status, Some(GradeStatus::Pass));
}
