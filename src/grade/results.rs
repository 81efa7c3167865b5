#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Tabled, Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// The outcome of one calculation, recomputed on every invocation.
///
/// GPAs are kept unrounded; [`Display`] renders them to two decimals.
pub struct CalculationResult {
    #[tabled(rename = "Semester GPA")]
    /// Unit-weighted GPA for this semester alone.
    semester_gpa:   f64,
    #[tabled(rename = "Cumulative GPA")]
    /// Updated CGPA including any prior standing.
    cumulative_gpa: f64,
    #[tabled(rename = "Classification")]
    /// Honours tier for the cumulative GPA.
    classification: String,
    #[tabled(rename = "Total units")]
    /// Cumulative unit total including any prior standing.
    total_units:    u32,
}

impl CalculationResult {
    /// Unit-weighted GPA for this semester alone.
    pub fn semester_gpa(&self) -> f64 {
        self.semester_gpa
    }

    /// Updated CGPA including any prior standing.
    pub fn cumulative_gpa(&self) -> f64 {
        self.cumulative_gpa
    }

    /// Honours tier for the cumulative GPA.
    pub fn classification(&self) -> &str {
        self.classification.as_ref()
    }

    /// Cumulative unit total including any prior standing.
    pub fn total_units(&self) -> u32 {
        self.total_units
    }
}

impl Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GPA {:.2}, CGPA {:.2} over {} units: {}",
            self.semester_gpa, self.cumulative_gpa, self.total_units, self.classification
        )
    }
}
