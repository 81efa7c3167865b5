#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default grade-point table, highest grade first.
/// * symbol: letter grade as entered by the caller
/// * points: grade-point value on a 5-point scale
pub const DEFAULT_GRADE_SCALE: [(&str, f64); 6] = [
    ("A", 5.0),
    ("B", 4.0),
    ("C", 3.0),
    ("D", 2.0),
    ("E", 1.0),
    ("F", 0.0),
];

/// Default classification bands, highest threshold first.
/// * label: honours tier name
/// * min: closed lower bound on the cumulative GPA
pub const DEFAULT_CLASS_BANDS: [(&str, f64); 4] = [
    ("First Class", 4.5),
    ("Second Class Upper", 3.5),
    ("Second Class Lower", 2.4),
    ("Third Class", 1.5),
];

/// Label reported when a cumulative GPA falls below every band.
pub const DEFAULT_FLOOR_LABEL: &str = "Fail";

/// Fewest total units a semester may register.
pub const DEFAULT_MIN_SEMESTER_UNITS: u32 = 18;

/// Most total units a semester may register.
pub const DEFAULT_MAX_SEMESTER_UNITS: u32 = 24;

/// Most units a single course may carry.
pub const DEFAULT_MAX_COURSE_UNITS: u32 = 6;

/// File name of the persisted record.
pub const RECORD_FILE_NAME: &str = "record.txt";

/// Directory under the user data dir holding the record file.
pub const APP_DIR_NAME: &str = "tally";

/// Environment variable overriding the record file path.
pub const ENV_RECORD_FILE: &str = "TALLY_RECORD_FILE";

/// Environment variable overriding the minimum semester units.
pub const ENV_MIN_SEMESTER_UNITS: &str = "TALLY_MIN_SEMESTER_UNITS";

/// Environment variable overriding the maximum semester units.
pub const ENV_MAX_SEMESTER_UNITS: &str = "TALLY_MAX_SEMESTER_UNITS";

/// Environment variable overriding the per-course unit cap.
pub const ENV_MAX_COURSE_UNITS: &str = "TALLY_MAX_COURSE_UNITS";

/// Environment variable overriding the grade-point table, e.g.
/// `A=5,B=4,C=3,D=2,E=1,F=0`.
pub const ENV_GRADE_SCALE: &str = "TALLY_GRADE_SCALE";

/// Environment variable overriding the classification bands, e.g.
/// `First Class=4.5,Second Class Upper=3.5`.
pub const ENV_CLASS_BANDS: &str = "TALLY_CLASS_BANDS";
