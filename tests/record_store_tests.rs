use std::{fs, path::PathBuf};

use tally::{Course, FormatError, LoadOutcome, Record, RecordStore, StoreError};
use uuid::Uuid;

fn temp_store() -> (PathBuf, RecordStore) {
    let dir = std::env::temp_dir().join(format!("tally-store-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp root");
    let store = RecordStore::new(dir.join("record.txt"));
    (dir, store)
}

fn course(name: &str, units: u32, grade: &str) -> Course {
    Course::new(name, units, grade).expect("valid course")
}

fn loaded(store: &RecordStore) -> Record {
    match store.load().expect("load succeeds") {
        LoadOutcome::Record(record) => record,
        LoadOutcome::NotFound => panic!("expected a saved record"),
    }
}

#[test]
fn round_trip_preserves_a_full_record() {
    let (dir, store) = temp_store();

    let record = Record::new(
        Some(3.25),
        Some(40),
        vec![course("CS101", 3, "A"), course("MA101", 4, "B")],
    );
    store.save(&record).expect("save succeeds");

    assert_eq!(loaded(&store), record);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn round_trip_preserves_an_empty_new_student_record() {
    let (dir, store) = temp_store();

    let record = Record::new(None, None, vec![]);
    store.save(&record).expect("save succeeds");

    assert_eq!(loaded(&store), record);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn round_trip_preserves_courses_without_prior_standing() {
    let (dir, store) = temp_store();

    let record = Record::builder()
        .courses(vec![
            course("CS101", 3, "A"),
            course("MA101", 4, "B"),
            course("PH101", 2, "C"),
        ])
        .build();
    store.save(&record).expect("save succeeds");

    let back = loaded(&store);
    assert_eq!(back, record);
    assert_eq!(back.prior_cgpa(), None);
    assert_eq!(back.prior_units(), None);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_overwrites_wholesale() {
    let (dir, store) = temp_store();

    store
        .save(&Record::new(Some(2.0), Some(20), vec![course("OLD", 3, "D")]))
        .expect("first save");
    let replacement = Record::new(None, None, vec![course("NEW", 4, "A")]);
    store.save(&replacement).expect("second save");

    assert_eq!(loaded(&store), replacement);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_file_is_not_found_not_an_error() {
    let (dir, store) = temp_store();

    assert_eq!(store.load().expect("load succeeds"), LoadOutcome::NotFound);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_entry_is_skipped_without_aborting_the_load() {
    let (dir, store) = temp_store();

    // COURSE_1 is missing its grade; only course 0 should survive.
    let text = "CURRENT_CGPA=\nCUMULATIVE_UNITS=\nCOURSE_COUNT=2\n\nCOURSE_0_NAME=CS101\nCOURSE_0_UNITS=3\nCOURSE_0_GRADE=A\nCOURSE_1_NAME=MA101\nCOURSE_1_UNITS=4\n";
    fs::write(store.path(), text).expect("write fixture");

    let record = loaded(&store);
    assert_eq!(record.courses(), &[course("CS101", 3, "A")]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unparseable_units_drop_only_that_entry() {
    let (dir, store) = temp_store();

    let text = "COURSE_COUNT=2\nCOURSE_0_NAME=CS101\nCOURSE_0_UNITS=three\nCOURSE_0_GRADE=A\nCOURSE_1_NAME=MA101\nCOURSE_1_UNITS=4\nCOURSE_1_GRADE=B\n";
    fs::write(store.path(), text).expect("write fixture");

    assert_eq!(loaded(&store).courses(), &[course("MA101", 4, "B")]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_course_count_is_a_parse_error() {
    let (dir, store) = temp_store();

    fs::write(store.path(), "CURRENT_CGPA=3.0\nCUMULATIVE_UNITS=30\n").expect("write fixture");

    match store.load() {
        Err(StoreError::Parse { source, .. }) => {
            assert_eq!(source, FormatError::MissingCourseCount);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn garbled_course_count_is_a_parse_error() {
    let (dir, store) = temp_store();

    fs::write(store.path(), "COURSE_COUNT=-1\n").expect("write fixture");

    match store.load() {
        Err(StoreError::Parse { source, .. }) => {
            assert_eq!(source, FormatError::BadCourseCount { value: "-1".into() });
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn comments_key_order_and_trailing_blanks_are_tolerated() {
    let (dir, store) = temp_store();

    let text = "# saved earlier\nCOURSE_0_GRADE=A\nCOURSE_0_NAME=CS101\nCOURSE_COUNT=1\nCOURSE_0_UNITS=3\nCUMULATIVE_UNITS=30\nCURRENT_CGPA=3.0\n\n\n";
    fs::write(store.path(), text).expect("write fixture");

    let record = loaded(&store);
    assert_eq!(record.prior_cgpa(), Some(3.0));
    assert_eq!(record.prior_units(), Some(30));
    assert_eq!(record.courses(), &[course("CS101", 3, "A")]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unreadable_prior_fields_degrade_to_absent() {
    let (dir, store) = temp_store();

    let text = "CURRENT_CGPA=three point two\nCUMULATIVE_UNITS=30\nCOURSE_COUNT=0\n";
    fs::write(store.path(), text).expect("write fixture");

    let record = loaded(&store);
    assert_eq!(record.prior_cgpa(), None);
    assert_eq!(record.prior_units(), Some(30));

    let _ = fs::remove_dir_all(dir);
}
