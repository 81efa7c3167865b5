#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};

use crate::{
    config::GradingConfig,
    grade::{CalculationResult, engine},
    record::{LoadOutcome, Record, RecordStore, StoreError},
    student::{self, Course, Semester},
};

/// The call contract the presentation layer drives.
///
/// Binds a grading configuration to a record store. Every method runs to
/// completion on the caller's thread; nothing is cached between calls, and a
/// failed save or load leaves in-memory state untouched.
pub struct Session {
    /// Institution numbers in force for this session.
    config: GradingConfig,
    /// Backing store for the working record.
    store:  RecordStore,
}

impl Session {
    /// Creates a session over a configuration and a store.
    pub fn new(config: GradingConfig, store: RecordStore) -> Self {
        Self { config, store }
    }

    /// The configuration in force.
    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Whether a calculation would be accepted as entered.
    ///
    /// True only when the prior fields are consistent, every course passes
    /// its checks, and the unit total sits inside the configured band.
    pub fn can_calculate(&self, courses: &[Course], prior_cgpa: &str, prior_units: &str) -> bool {
        Semester::assemble(courses, prior_cgpa, prior_units, self.config.scale())
            .map(|semester| engine::validate(&self.config, &semester).is_ok())
            .unwrap_or(false)
    }

    /// Validates and runs the full calculation.
    ///
    /// Validation failures surface with their structured detail; they are
    /// never swallowed, and calculation does not proceed past them.
    pub fn calculate(
        &self,
        courses: &[Course],
        prior_cgpa: &str,
        prior_units: &str,
    ) -> Result<CalculationResult> {
        let semester = Semester::assemble(courses, prior_cgpa, prior_units, self.config.scale())
            .context("the entered data is not ready to calculate")?;
        engine::calculate(&self.config, &semester)
    }

    /// Maps a cumulative GPA to its honours tier label.
    pub fn classify(&self, cgpa: f64) -> &str {
        self.config.classification().classify(cgpa)
    }

    /// Persists the working set, overwriting any previous record.
    ///
    /// The prior fields are parsed independently here (no pairing check):
    /// what was entered is what gets saved, junk excepted.
    pub fn save_record(&self, courses: &[Course], prior_cgpa: &str, prior_units: &str) -> Result<()> {
        let record = Record::new(
            student::parse_prior_field("cumulative GPA", prior_cgpa, "a decimal number")?,
            student::parse_prior_field("cumulative units", prior_units, "a whole number")?,
            courses.to_vec(),
        );
        self.store
            .save(&record)
            .context("could not save the record")?;
        tracing::info!(
            "Saved {} course(s) to {}",
            record.courses().len(),
            self.store.path().display()
        );
        Ok(())
    }

    /// Restores the previously saved record, if any.
    pub fn load_record(&self) -> Result<LoadOutcome, StoreError> {
        self.store.load()
    }
}
