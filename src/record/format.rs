#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, str::FromStr};

use itertools::Itertools;

use crate::{record::store::Record, student::Course};

/// Key holding the prior cumulative GPA, blank when absent.
pub const KEY_CURRENT_CGPA: &str = "CURRENT_CGPA";

/// Key holding the prior cumulative units, blank when absent.
pub const KEY_CUMULATIVE_UNITS: &str = "CUMULATIVE_UNITS";

/// Key holding the number of persisted course entries.
pub const KEY_COURSE_COUNT: &str = "COURSE_COUNT";

/// Field suffix for a course name key.
const FIELD_NAME: &str = "NAME";

/// Field suffix for a course units key.
const FIELD_UNITS: &str = "UNITS";

/// Field suffix for a course grade key.
const FIELD_GRADE: &str = "GRADE";

/// Builds the positionally-indexed key for one course field.
fn course_key(index: usize, field: &str) -> String {
    format!("COURSE_{index}_{field}")
}

/// An enum to represent ways a record file can be unreadable as a whole.
///
/// Everything short of these degrades gracefully: malformed course entries
/// and unreadable prior fields are skipped with a warning, not fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The course-count entry is absent.
    #[error("`COURSE_COUNT` entry is missing")]
    MissingCourseCount,
    /// The course-count entry is not a non-negative integer.
    #[error("`COURSE_COUNT` value `{value}` is not a non-negative integer")]
    BadCourseCount {
        /// The value as found in the file.
        value: String,
    },
}

/// Renders a record to the flat key=value text format.
pub(crate) fn render(record: &Record) -> String {
    let mut lines: Vec<String> = vec![
        "# tally grade record (KEY=VALUE lines; `#` lines are ignored)".to_string(),
        format!("{KEY_CURRENT_CGPA}={}", record.prior_cgpa_text()),
        format!("{KEY_CUMULATIVE_UNITS}={}", record.prior_units_text()),
        format!("{KEY_COURSE_COUNT}={}", record.courses().len()),
        String::new(),
    ];

    for (index, course) in record.courses().iter().enumerate() {
        lines.push(format!("{}={}", course_key(index, FIELD_NAME), course.name()));
        lines.push(format!("{}={}", course_key(index, FIELD_UNITS), course.units()));
        lines.push(format!("{}={}", course_key(index, FIELD_GRADE), course.grade()));
    }

    lines.iter().join("\n") + "\n"
}

/// Parses the flat key=value text format back into a record.
///
/// Key order is immaterial: every pair is collected first, then interpreted.
/// A course index is kept only when all three of its fields are present and
/// usable; anything else skips that index and the load carries on.
pub(crate) fn parse(text: &str) -> Result<Record, FormatError> {
    let mut pairs: HashMap<&str, &str> = HashMap::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                pairs.insert(key.trim(), value);
            }
            None => tracing::warn!("Ignoring unrecognized record line `{line}`"),
        }
    }

    let count = match pairs.get(KEY_COURSE_COUNT) {
        None => return Err(FormatError::MissingCourseCount),
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| FormatError::BadCourseCount {
            value: raw.trim().to_string(),
        })?,
    };

    let prior_cgpa = lenient_number::<f64>(&pairs, KEY_CURRENT_CGPA);
    let prior_units = lenient_number::<u32>(&pairs, KEY_CUMULATIVE_UNITS);

    let mut courses = Vec::with_capacity(count);
    for index in 0..count {
        match course_at(&pairs, index) {
            Some(course) => courses.push(course),
            None => tracing::warn!("Skipping incomplete or malformed course entry {index}"),
        }
    }

    Ok(Record::new(prior_cgpa, prior_units, courses))
}

/// Reads an optional numeric value, degrading unreadable text to absent.
fn lenient_number<T: FromStr>(pairs: &HashMap<&str, &str>, key: &str) -> Option<T> {
    let raw = pairs.get(key)?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unreadable `{key}` value `{raw}`");
            None
        }
    }
}

/// Reassembles the course at `index`, if all three fields are usable.
fn course_at(pairs: &HashMap<&str, &str>, index: usize) -> Option<Course> {
    let name = pairs.get(course_key(index, FIELD_NAME).as_str())?;
    let units = pairs
        .get(course_key(index, FIELD_UNITS).as_str())?
        .trim()
        .parse::<u32>()
        .ok()?;
    let grade = pairs.get(course_key(index, FIELD_GRADE).as_str())?;
    Course::new(*name, units, *grade).ok()
}
