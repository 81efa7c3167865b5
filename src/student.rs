#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{error::ValidationError, grade::GradingScale};

#[derive(Tabled, Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single course as entered for the semester.
///
/// Immutable once constructed; two courses are equal when all three fields
/// are. The grade is kept as the entered symbol so the symbol set stays
/// institution-configurable; it is checked against the active scale when a
/// calculation is validated.
pub struct Course {
    #[tabled(rename = "Course")]
    /// Course name or code, non-blank and single-line.
    name:  String,
    #[tabled(rename = "Units")]
    /// Unit count, at least 1.
    units: u32,
    #[tabled(rename = "Grade")]
    /// Letter grade as entered.
    grade: String,
}

impl Course {
    /// Creates a course, trimming the name and grade.
    ///
    /// Rejects blank or multi-line names, zero units, and blank grades; the
    /// configured per-course cap and the grade symbol itself are validated
    /// later against the active [`crate::config::GradingConfig`].
    pub fn new(
        name: impl Into<String>,
        units: u32,
        grade: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::CourseField {
                field:  "name",
                value:  name,
                reason: "must not be blank".to_string(),
            });
        }
        if name.contains('\n') || name.contains('\r') {
            return Err(ValidationError::CourseField {
                field:  "name",
                value:  name,
                reason: "must be a single line".to_string(),
            });
        }
        if units == 0 {
            return Err(ValidationError::CourseField {
                field:  "units",
                value:  units.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let grade = grade.into().trim().to_string();
        if grade.is_empty() {
            return Err(ValidationError::CourseField {
                field:  "grade",
                value:  grade,
                reason: "must not be blank".to_string(),
            });
        }

        Ok(Self { name, units, grade })
    }

    /// Course name or code.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Unit count.
    pub fn units(&self) -> u32 {
        self.units
    }

    /// Letter grade as entered.
    pub fn grade(&self) -> &str {
        self.grade.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Cumulative standing carried in from previous semesters.
///
/// Both fields exist together by construction; a "returning student" either
/// has a full prior standing or none at all.
pub struct PriorStanding {
    /// Cumulative GPA across prior semesters.
    cgpa:  f64,
    /// Cumulative units across prior semesters.
    units: u32,
}

impl PriorStanding {
    /// Creates a prior standing from already-validated numbers.
    pub fn new(cgpa: f64, units: u32) -> Self {
        Self { cgpa, units }
    }

    /// Maps the two presentation-layer text fields to an optional standing.
    ///
    /// Both blank means a new student; exactly one blank is a hard
    /// [`ValidationError::InconsistentPrior`] rather than a silent default.
    /// A present CGPA must parse as a decimal within `[0, scale max]` and
    /// present units as a whole number.
    pub fn from_text(
        cgpa_text: &str,
        units_text: &str,
        scale: &GradingScale,
    ) -> Result<Option<Self>, ValidationError> {
        match (cgpa_text.trim().is_empty(), units_text.trim().is_empty()) {
            (true, true) => Ok(None),
            (true, false) => Err(ValidationError::InconsistentPrior {
                present: "cumulative units",
                missing: "cumulative GPA",
            }),
            (false, true) => Err(ValidationError::InconsistentPrior {
                present: "cumulative GPA",
                missing: "cumulative units",
            }),
            (false, false) => {
                let cgpa = cgpa_text.trim().parse::<f64>().map_err(|_| {
                    ValidationError::PriorField {
                        field:  "cumulative GPA",
                        value:  cgpa_text.trim().to_string(),
                        reason: "must be a decimal number".to_string(),
                    }
                })?;
                let ceiling = scale.max_points();
                if !(0.0..=ceiling).contains(&cgpa) {
                    return Err(ValidationError::PriorField {
                        field:  "cumulative GPA",
                        value:  cgpa_text.trim().to_string(),
                        reason: format!("must be between 0 and {ceiling}"),
                    });
                }
                let units = units_text.trim().parse::<u32>().map_err(|_| {
                    ValidationError::PriorField {
                        field:  "cumulative units",
                        value:  units_text.trim().to_string(),
                        reason: "must be a whole number".to_string(),
                    }
                })?;
                Ok(Some(Self { cgpa, units }))
            }
        }
    }

    /// Cumulative GPA across prior semesters.
    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    /// Cumulative units across prior semesters.
    pub fn units(&self) -> u32 {
        self.units
    }
}

/// Parses one prior-standing text field on its own, blank meaning absent.
pub(crate) fn parse_prior_field<T: FromStr>(
    field: &'static str,
    text: &str,
    expected: &'static str,
) -> Result<Option<T>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|_| ValidationError::PriorField {
            field,
            value: text.to_string(),
            reason: format!("must be {expected}"),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The full input set for one semester's calculation.
///
/// Course order is display-only; computation does not depend on it.
pub struct Semester {
    /// Courses registered this semester.
    courses: Vec<Course>,
    /// Prior standing, absent for a new student.
    prior:   Option<PriorStanding>,
}

impl Semester {
    /// Creates a semester from already-typed parts.
    pub fn new(courses: Vec<Course>, prior: Option<PriorStanding>) -> Self {
        Self { courses, prior }
    }

    /// Assembles a semester from the presentation layer's raw inputs.
    pub fn assemble(
        courses: &[Course],
        prior_cgpa_text: &str,
        prior_units_text: &str,
        scale: &GradingScale,
    ) -> Result<Self, ValidationError> {
        let prior = PriorStanding::from_text(prior_cgpa_text, prior_units_text, scale)?;
        Ok(Self::new(courses.to_vec(), prior))
    }

    /// Courses registered this semester.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Prior standing, absent for a new student.
    pub fn prior(&self) -> Option<&PriorStanding> {
        self.prior.as_ref()
    }

    /// Units registered across the semester.
    pub fn total_units(&self) -> u32 {
        self.courses.iter().map(Course::units).sum()
    }
}
