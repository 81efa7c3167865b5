use std::{fs, path::PathBuf};

use tally::{Course, GradingConfig, LoadOutcome, RecordStore, Session, ValidationError};
use uuid::Uuid;

fn temp_session() -> (PathBuf, Session) {
    let dir = std::env::temp_dir().join(format!("tally-session-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp root");
    let session = Session::new(GradingConfig::default(), RecordStore::new(dir.join("record.txt")));
    (dir, session)
}

fn course(name: &str, units: u32, grade: &str) -> Course {
    Course::new(name, units, grade).expect("valid course")
}

/// `count` three-unit courses, all graded B.
fn three_unit_courses(count: usize) -> Vec<Course> {
    (0..count).map(|i| course(&format!("CRS{i:03}"), 3, "B")).collect()
}

#[test]
fn can_calculate_accepts_both_band_edges() {
    let (dir, session) = temp_session();

    assert!(session.can_calculate(&three_unit_courses(6), "", "")); // 18 units
    assert!(session.can_calculate(&three_unit_courses(8), "", "")); // 24 units

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn can_calculate_rejects_totals_outside_the_band() {
    let (dir, session) = temp_session();

    let mut seventeen = three_unit_courses(5);
    seventeen.push(course("GE101", 2, "C")); // 17 units
    assert!(!session.can_calculate(&seventeen, "", ""));

    let mut twenty_five = three_unit_courses(7);
    twenty_five.push(course("GE102", 4, "C")); // 25 units
    assert!(!session.can_calculate(&twenty_five, "", ""));

    assert!(!session.can_calculate(&[], "", ""));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn inconsistent_prior_data_is_a_hard_error() {
    let (dir, session) = temp_session();
    let courses = three_unit_courses(6);

    assert!(!session.can_calculate(&courses, "3.2", ""));
    assert!(!session.can_calculate(&courses, "", "30"));

    let err = session.calculate(&courses, "3.2", "").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::InconsistentPrior { .. })
    ));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn prior_fields_must_be_numeric_and_in_range() {
    let (dir, session) = temp_session();
    let courses = three_unit_courses(6);

    assert!(!session.can_calculate(&courses, "lots", "30"));
    assert!(!session.can_calculate(&courses, "6.5", "30")); // above the 5.0 ceiling
    assert!(!session.can_calculate(&courses, "3.2", "thirty"));
    assert!(session.can_calculate(&courses, "3.2", "30"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn calculate_produces_the_classified_result() {
    let (dir, session) = temp_session();

    // 18 units of straight B on the default scale.
    let result = session.calculate(&three_unit_courses(6), "", "").unwrap();
    assert!((result.semester_gpa() - 4.0).abs() < 1e-9);
    assert!((result.cumulative_gpa() - 4.0).abs() < 1e-9);
    assert_eq!(result.total_units(), 18);
    assert_eq!(result.classification(), "Second Class Upper");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn calculate_with_prior_standing_updates_the_cumulative() {
    let (dir, session) = temp_session();

    // 18 units of B = 72 points; (2.0*30 + 72) / 48 = 2.75
    let result = session.calculate(&three_unit_courses(6), "2.0", "30").unwrap();
    assert!((result.cumulative_gpa() - 2.75).abs() < 1e-9);
    assert_eq!(result.total_units(), 48);
    assert_eq!(result.classification(), "Second Class Lower");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn calculate_on_no_courses_surfaces_the_guard() {
    let (dir, session) = temp_session();

    // The band minimum catches the empty set before the division guard can.
    let err = session.calculate(&[], "", "").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::UnitBand { total: 0, .. })
    ));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn classify_passes_through_the_configured_table() {
    let (dir, session) = temp_session();

    assert_eq!(session.classify(4.75), "First Class");
    assert_eq!(session.classify(0.2), "Fail");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_then_load_round_trips_through_the_facade() {
    let (dir, session) = temp_session();
    let courses = vec![course("CS101", 3, "A"), course("MA101", 4, "B")];

    session.save_record(&courses, "3.25", "40").expect("save succeeds");

    match session.load_record().expect("load succeeds") {
        LoadOutcome::Record(record) => {
            assert_eq!(record.prior_cgpa(), Some(3.25));
            assert_eq!(record.prior_units(), Some(40));
            assert_eq!(record.courses(), courses.as_slice());
        }
        LoadOutcome::NotFound => panic!("expected a saved record"),
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_preserves_blank_prior_fields_as_absent() {
    let (dir, session) = temp_session();

    session
        .save_record(&[course("CS101", 3, "A")], "", "")
        .expect("save succeeds");

    match session.load_record().expect("load succeeds") {
        LoadOutcome::Record(record) => {
            assert_eq!(record.prior_cgpa(), None);
            assert_eq!(record.prior_units(), None);
        }
        LoadOutcome::NotFound => panic!("expected a saved record"),
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_rejects_junk_prior_text() {
    let (dir, session) = temp_session();

    let err = session
        .save_record(&[course("CS101", 3, "A")], "junk", "40")
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::PriorField { .. })
    ));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn load_on_a_fresh_store_reports_not_found() {
    let (dir, session) = temp_session();

    assert!(matches!(session.load_record(), Ok(LoadOutcome::NotFound)));

    let _ = fs::remove_dir_all(dir);
}
