mod common;

use common::{roster, roster_without, write_csv};
use student_insight::data::{DataLoader, SchemaPolicy, EXPECTED_COLUMNS, PLOTTABLE_COLUMNS};
use student_insight::{AnalysisError, DatasetState, Session, StatusLevel};

fn roster_session() -> Session {
    Session::new(
        SchemaPolicy::RequireColumns(&EXPECTED_COLUMNS),
        DataLoader::default(),
    )
}

fn open_session() -> Session {
    Session::new(SchemaPolicy::AnyColumns, DataLoader::default())
}

#[test]
fn starts_without_dataset() {
    let session = roster_session();
    assert!(matches!(session.state(), DatasetState::NoDataset));
    assert!(matches!(
        session.dataset(),
        Err(AnalysisError::NoDatasetLoaded)
    ));
    assert!(session.plottable_columns().is_empty());
}

#[test]
fn well_formed_roster_becomes_ready() {
    let path = write_csv(&roster(17));
    let mut session = roster_session();

    let summary = session.load(Some(path.path())).unwrap();
    assert_eq!(summary.rows, 17);
    assert_eq!(summary.columns, EXPECTED_COLUMNS.len());
    assert!(session.is_ready());
    assert_eq!(session.dataset().unwrap().row_count(), 17);
    assert_eq!(session.plottable_columns(), &PLOTTABLE_COLUMNS[..]);
}

#[test]
fn extra_columns_and_order_are_tolerated() {
    let mut csv = String::from("Notes,FinalGrade,PreviousGrade,Attendance,Science,English,Math,Class,Gender,Age,Name,StudentID\n");
    csv.push_str("ok,80,75,90,70,65,60,10,F,16,Ann,1\n");
    let path = write_csv(&csv);

    let mut session = roster_session();
    let summary = session.load(Some(path.path())).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.columns, 12);
}

#[test]
fn each_missing_required_column_is_rejected() {
    for column in EXPECTED_COLUMNS {
        let path = write_csv(&roster_without(5, column));
        let mut session = roster_session();
        let err = session.load(Some(path.path())).unwrap_err();
        match err {
            AnalysisError::SchemaMismatch { missing } => assert_eq!(missing, vec![column]),
            other => panic!("{column}: unexpected {other:?}"),
        }
        assert!(matches!(session.state(), DatasetState::NoDataset));
    }
}

#[test]
fn schema_rejection_drops_previous_dataset() {
    let good = write_csv(&roster(6));
    let bad = write_csv(&roster_without(6, "Gender"));

    let mut session = roster_session();
    session.load(Some(good.path())).unwrap();
    assert!(session.is_ready());

    assert!(session.load(Some(bad.path())).is_err());
    assert!(!session.is_ready());
    assert!(session.plottable_columns().is_empty());
}

#[test]
fn parse_failure_keeps_previous_dataset() {
    let good = write_csv(&roster(8));
    let empty = write_csv("");

    let mut session = roster_session();
    session.load(Some(good.path())).unwrap();

    let err = session.load(Some(empty.path())).unwrap_err();
    assert!(matches!(err, AnalysisError::ParseFailure { .. }));
    assert!(session.is_ready());
    assert_eq!(session.dataset().unwrap().row_count(), 8);
}

#[test]
fn parse_failure_before_first_load_stays_empty() {
    let mut session = open_session();
    let missing = std::env::temp_dir().join("student_insight_missing_input.csv");
    assert!(session.load(Some(missing.as_path())).is_err());
    assert!(!session.is_ready());
}

#[test]
fn successful_load_replaces_dataset() {
    let first = write_csv(&roster(4));
    let second = write_csv("a,b\n1,2\n3,4\n5,6\n");

    let mut session = open_session();
    session.load(Some(first.path())).unwrap();
    session.load(Some(second.path())).unwrap();

    let ds = session.dataset().unwrap();
    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.schema().names(), vec!["a", "b"]);
}

#[test]
fn cancelled_dialog_leaves_state() {
    let path = write_csv(&roster(3));
    let mut session = roster_session();
    session.load(Some(path.path())).unwrap();

    let err = session.load(None).unwrap_err();
    assert!(matches!(err, AnalysisError::FileNotSelected));
    assert_eq!(err.level(), StatusLevel::Info);
    assert!(session.is_ready());
    assert_eq!(session.plottable_columns(), &PLOTTABLE_COLUMNS[..]);
}

#[test]
fn cancelled_dialog_before_any_load() {
    let mut session = open_session();
    assert!(matches!(
        session.load(None),
        Err(AnalysisError::FileNotSelected)
    ));
    assert!(matches!(session.state(), DatasetState::NoDataset));
}

#[test]
fn fixtures_are_removed_after_use() {
    let csv = write_csv(&roster(2));
    let path = csv.path().to_path_buf();
    assert!(path.exists());
    drop(csv);
    assert!(!path.exists());
}
