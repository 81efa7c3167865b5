#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

/// Which edge of the unit band a total fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandBound {
    /// The total came in under the configured minimum.
    BelowMinimum,
    /// The total came in over the configured maximum.
    AboveMaximum,
}

impl fmt::Display for BandBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandBound::BelowMinimum => write!(f, "below the minimum"),
            BandBound::AboveMaximum => write!(f, "above the maximum"),
        }
    }
}

/// An enum to represent possible validation failures on caller input.
///
/// Every variant carries enough structure for the caller to render a precise
/// message: the field concerned, the offending value, and the violated bound
/// where one applies.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The letter grade is not in the active grading scale.
    #[error("unrecognized letter grade `{symbol}`")]
    UnknownGrade {
        /// The symbol as entered.
        symbol: String,
    },
    /// A single course field failed its constraint.
    #[error("course {field} {reason} (got `{value}`)")]
    CourseField {
        /// Which field of the course is at fault.
        field:  &'static str,
        /// The value as entered.
        value:  String,
        /// What the field should have satisfied.
        reason: String,
    },
    /// The semester's total units fell outside the allowed band.
    #[error("total units {total} is {bound} of {limit}")]
    UnitBand {
        /// Units registered across the semester.
        total: u32,
        /// The violated limit.
        limit: u32,
        /// Whether the minimum or the maximum was violated.
        bound: BandBound,
    },
    /// A prior-standing field was present but not usable.
    #[error("prior {field} {reason} (got `{value}`)")]
    PriorField {
        /// Which prior field is at fault.
        field:  &'static str,
        /// The value as entered.
        value:  String,
        /// What the field should have satisfied.
        reason: String,
    },
    /// Exactly one of the two prior-standing fields was supplied.
    #[error("prior {present} was given but prior {missing} was left blank; supply both or neither")]
    InconsistentPrior {
        /// The field that was supplied.
        present: &'static str,
        /// The field that was left blank.
        missing: &'static str,
    },
}

/// An enum to represent arithmetic preconditions the engine refuses to break.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// A GPA over zero courses would divide by zero.
    #[error("cannot compute a GPA over an empty course list")]
    EmptyCourseList,
}
