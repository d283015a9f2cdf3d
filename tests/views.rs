mod common;

use common::{roster, roster_without, write_csv};
use student_insight::charts::{Chart, RenderError, StaticChartRenderer};
use student_insight::data::{DataLoader, SchemaPolicy, EXPECTED_COLUMNS};
use student_insight::views::SELECTION_PLACEHOLDER;
use student_insight::{AnalysisError, AppConfig, Session, ViewController};

fn views() -> ViewController {
    ViewController::new(AppConfig::default())
}

fn loaded(policy: SchemaPolicy, csv: &str) -> Session {
    let mut session = Session::new(policy, DataLoader::default());
    session.load(Some(write_csv(csv).path())).unwrap();
    session
}

fn roster_loaded(n: usize) -> Session {
    loaded(SchemaPolicy::RequireColumns(&EXPECTED_COLUMNS), &roster(n))
}

fn assert_renders(chart: &Chart) {
    match StaticChartRenderer::render_rgb(chart, 400, 300) {
        Ok(buf) => assert_eq!(buf.len(), 400 * 300 * 3),
        // Hosts without system fonts cannot lay out labels.
        Err(RenderError::Draw(msg)) if msg.contains("Font loading error") => {}
        Err(e) => panic!("{}: {e}", chart.title()),
    }
}

#[test]
fn every_view_requires_a_dataset() {
    let session = Session::new(SchemaPolicy::AnyColumns, DataLoader::default());
    let views = views();

    assert!(matches!(
        views.grade_distribution(&session),
        Err(AnalysisError::NoDatasetLoaded)
    ));
    assert!(matches!(
        views.correlation_matrix(&session),
        Err(AnalysisError::NoDatasetLoaded)
    ));
    assert!(matches!(
        views.train_regression(&session),
        Err(AnalysisError::NoDatasetLoaded)
    ));
    assert!(matches!(
        views.column_bar_chart(&session, Some("Math")),
        Err(AnalysisError::NoDatasetLoaded)
    ));
}

#[test]
fn grade_distribution_counts_every_student() {
    let session = roster_loaded(20);
    let chart = views().grade_distribution(&session).unwrap();

    let Chart::GradeDistribution(dist) = chart else {
        panic!("expected a grade distribution");
    };
    assert_eq!(dist.bins.len(), 10);
    assert_eq!(dist.bins.iter().map(|b| b.count).sum::<usize>(), 20);
    assert_eq!(dist.sample_size, 20);
    assert!(!dist.density.is_empty());
}

#[test]
fn grade_distribution_without_final_grade_fails() {
    let session = loaded(SchemaPolicy::AnyColumns, &roster_without(5, "FinalGrade"));
    assert!(matches!(
        views().grade_distribution(&session),
        Err(AnalysisError::MissingColumns { .. })
    ));
}

#[test]
fn correlation_covers_numeric_columns_only() {
    let session = roster_loaded(15);
    let Chart::Correlation(matrix) = views().correlation_matrix(&session).unwrap() else {
        panic!("expected a correlation matrix");
    };

    assert!(!matrix.labels.iter().any(|l| l == "Name" || l == "Gender"));
    assert!(matrix.labels.iter().any(|l| l == "FinalGrade"));
    for i in 0..matrix.size() {
        assert!((matrix.get(i, i) - 1.0).abs() < 1e-9);
        for j in 0..matrix.size() {
            let v = matrix.get(i, j);
            assert!((-1.0..=1.0).contains(&v));
            assert_eq!(v, matrix.get(j, i));
        }
    }
}

#[test]
fn correlation_without_numeric_columns_fails() {
    let session = loaded(SchemaPolicy::AnyColumns, "Name,Gender\nAnn,F\nBen,M\n");
    assert!(matches!(
        views().correlation_matrix(&session),
        Err(AnalysisError::NoNumericColumns)
    ));
}

#[test]
fn regression_reports_exact_missing_features() {
    let session = loaded(SchemaPolicy::AnyColumns, &roster_without(10, "Attendance"));
    match views().train_regression(&session) {
        Err(AnalysisError::MissingFeatureColumns { missing }) => {
            assert_eq!(missing, vec!["Attendance"])
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn regression_predicts_held_out_rows() {
    let session = roster_loaded(30);
    let Chart::Regression(result) = views().train_regression(&session).unwrap() else {
        panic!("expected regression output");
    };

    assert_eq!(result.test_rows.len(), 6);
    assert_eq!(result.train_rows.len(), 24);
    assert_eq!(result.actual.len(), result.predicted.len());
    for (a, p) in result.actual.iter().zip(&result.predicted) {
        assert!((a - p).abs() < 1e-6, "actual {a} predicted {p}");
    }
}

#[test]
fn regression_split_is_repeatable() {
    let session = roster_loaded(25);
    let views = views();

    let Chart::Regression(first) = views.train_regression(&session).unwrap() else {
        panic!("expected regression output");
    };
    let Chart::Regression(second) = views.train_regression(&session).unwrap() else {
        panic!("expected regression output");
    };
    assert_eq!(first.test_rows, second.test_rows);
    assert_eq!(first.train_rows, second.train_rows);
}

#[test]
fn regression_needs_two_complete_rows() {
    let session = roster_loaded(1);
    assert!(matches!(
        views().train_regression(&session),
        Err(AnalysisError::InsufficientRows { found: 1, .. })
    ));
}

#[test]
fn bar_chart_rejects_placeholder_and_unknown_columns() {
    let session = roster_loaded(5);
    let views = views();

    for selection in [None, Some(SELECTION_PLACEHOLDER), Some("Name"), Some("Nope")] {
        assert!(matches!(
            views.column_bar_chart(&session, selection),
            Err(AnalysisError::InvalidColumnSelection { .. })
        ));
    }
}

#[test]
fn bar_chart_has_one_bar_per_student() {
    let session = roster_loaded(7);
    let Chart::StudentBars(bars) = views().column_bar_chart(&session, Some("Math")).unwrap()
    else {
        panic!("expected student bars");
    };

    assert_eq!(bars.column, "Math");
    assert_eq!(bars.names.len(), 7);
    assert_eq!(bars.names[0], "Student1");
    assert_eq!(bars.values[0], Some(50.0));
}

#[test]
fn plottable_set_follows_latest_load() {
    let mut session = roster_loaded(4);
    assert!(views().column_bar_chart(&session, Some("FinalGrade")).is_ok());

    let rejected = write_csv(&roster_without(4, "Math"));
    assert!(session.load(Some(rejected.path())).is_err());
    assert!(matches!(
        views().column_bar_chart(&session, Some("FinalGrade")),
        Err(AnalysisError::NoDatasetLoaded)
    ));
}

#[test]
fn infinite_cells_are_treated_as_missing() {
    let mut csv = roster(6);
    csv.push_str("99,Extra,15,F,10,inf,50,60,80,70,inf\n");
    csv.push_str("100,Minus,16,M,11,70,-inf,60,80,70,75\n");
    let session = loaded(SchemaPolicy::RequireColumns(&EXPECTED_COLUMNS), &csv);
    let views = views();

    let grades = views.grade_distribution(&session).unwrap();
    let Chart::GradeDistribution(dist) = &grades else {
        panic!("expected a grade distribution");
    };
    assert_eq!(dist.sample_size, 7);
    assert!(dist.bins.iter().all(|b| b.start.is_finite() && b.end.is_finite()));

    let bars = views.column_bar_chart(&session, Some("Math")).unwrap();
    let Chart::StudentBars(student_bars) = &bars else {
        panic!("expected student bars");
    };
    assert_eq!(student_bars.names.len(), 8);
    assert_eq!(student_bars.values[6], None);

    let regression = views.train_regression(&session).unwrap();
    let Chart::Regression(result) = &regression else {
        panic!("expected regression output");
    };
    assert_eq!(result.train_rows.len() + result.test_rows.len(), 6);
    assert!(!result.test_rows.contains(&6) && !result.test_rows.contains(&7));

    let correlation = views.correlation_matrix(&session).unwrap();

    for chart in [&grades, &bars, &regression, &correlation] {
        assert_renders(chart);
    }
}
