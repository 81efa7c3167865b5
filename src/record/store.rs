#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{APP_DIR_NAME, ENV_RECORD_FILE, RECORD_FILE_NAME},
    record::format::{self, FormatError},
    student::Course,
};

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The persisted shape of a working session.
///
/// Looser than [`crate::student::Semester`] on purpose: the two prior fields
/// are independent here, so a file carrying only one of them loads
/// faithfully and fails later at validation instead of at load.
pub struct Record {
    /// Prior cumulative GPA, absent for a new student.
    prior_cgpa:  Option<f64>,
    /// Prior cumulative units, absent for a new student.
    prior_units: Option<u32>,
    /// Courses in display order.
    courses:     Vec<Course>,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(prior_cgpa: Option<f64>, prior_units: Option<u32>, courses: Vec<Course>) -> Self {
        Self {
            prior_cgpa,
            prior_units,
            courses,
        }
    }

    /// Prior cumulative GPA, absent for a new student.
    pub fn prior_cgpa(&self) -> Option<f64> {
        self.prior_cgpa
    }

    /// Prior cumulative units, absent for a new student.
    pub fn prior_units(&self) -> Option<u32> {
        self.prior_units
    }

    /// Courses in display order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The prior CGPA as boundary text, blank when absent.
    pub fn prior_cgpa_text(&self) -> String {
        self.prior_cgpa.map(|v| v.to_string()).unwrap_or_default()
    }

    /// The prior units as boundary text, blank when absent.
    pub fn prior_units_text(&self) -> String {
        self.prior_units.map(|v| v.to_string()).unwrap_or_default()
    }
}

/// What a load found at the backing file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file existed and was readable as a record.
    Record(Record),
    /// No backing file yet; a valid first-launch state, not an error.
    NotFound,
}

/// An enum to represent ways the store itself can fail.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The filesystem refused a read or write.
    #[error("could not {action} record file `{}`", .path.display())]
    Io {
        /// What was being attempted.
        action: &'static str,
        /// The backing file concerned.
        path:   PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },
    /// The file exists but is unreadable as a record.
    #[error("record file `{}` is corrupt: {source}", .path.display())]
    Parse {
        /// The backing file concerned.
        path:   PathBuf,
        /// What made the file unreadable.
        source: FormatError,
    },
}

/// Serializes records to, and restores them from, one flat text file.
///
/// Saves overwrite the file wholesale and loads read it wholesale; there is
/// no partial update and no locking, matching the single-process deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    /// The backing file.
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store over an explicit backing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the usual per-user location.
    ///
    /// `TALLY_RECORD_FILE` overrides; otherwise the file lives in the
    /// platform data directory, falling back to the working directory when
    /// the platform reports none.
    pub fn at_default_location() -> Self {
        let path = env::var(ENV_RECORD_FILE)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(APP_DIR_NAME)
                    .join(RECORD_FILE_NAME)
            });
        Self::new(path)
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Writes the record, overwriting any existing file wholesale.
    ///
    /// The parent directory is created on first save. The file handle is
    /// closed on every path before this returns.
    pub fn save(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    action: "prepare the directory for",
                    path:   self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, format::render(record)).map_err(|source| StoreError::Io {
            action: "write",
            path:   self.path.clone(),
            source,
        })
    }

    /// Reads the record back, replacing nothing on failure.
    ///
    /// A missing file is [`LoadOutcome::NotFound`]. The only fatal parse
    /// problem is an unusable `COURSE_COUNT`; malformed course entries are
    /// skipped with a warning.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::NotFound),
            Err(source) => {
                return Err(StoreError::Io {
                    action: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };

        format::parse(&text)
            .map(LoadOutcome::Record)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}
