//! # tally
//!
//! A grade-point-average calculator: courses in, semester GPA, updated
//! cumulative GPA, and an honours classification out, with the working set
//! persisted to a flat text file between launches.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Institution-specific configuration: scale, unit band, classification
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Validation and calculation error taxonomy
pub mod error;
/// For all things related to computing and classifying GPAs
pub mod grade;
/// For persisting the working record to disk and restoring it
pub mod record;
/// The call contract exposed to the presentation layer
pub mod session;
/// The course and prior-standing data model
pub mod student;

pub use config::{ClassBand, ClassificationTable, GradingConfig, UnitBand};
pub use error::{BandBound, CalculationError, ValidationError};
pub use grade::{CalculationResult, GradingScale, engine};
pub use record::{FormatError, LoadOutcome, Record, RecordStore, StoreError};
pub use session::Session;
pub use student::{Course, PriorStanding, Semester};
