#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;
use itertools::Itertools;

use crate::{
    config::GradingConfig,
    error::{CalculationError, ValidationError},
    grade::{CalculationResult, GradingScale},
    student::{Course, PriorStanding, Semester},
};

/// Grade points earned by one course: grade value times units.
pub fn course_grade_points(
    scale: &GradingScale,
    course: &Course,
) -> Result<f64, ValidationError> {
    Ok(scale.points_for(course.grade())? * f64::from(course.units()))
}

/// Grade points earned across the semester.
pub fn semester_grade_points(
    scale: &GradingScale,
    courses: &[Course],
) -> Result<f64, ValidationError> {
    courses
        .iter()
        .map(|course| course_grade_points(scale, course))
        .fold_ok(0.0, |total, points| total + points)
}

/// Units registered across the semester.
pub fn semester_units(courses: &[Course]) -> u32 {
    courses.iter().map(Course::units).sum()
}

/// The semester GPA: unit-weighted mean of grade points.
///
/// No rounding is applied; rounding is a display concern. An empty course
/// list fails with [`CalculationError::EmptyCourseList`] rather than
/// dividing by zero.
pub fn semester_gpa(scale: &GradingScale, courses: &[Course]) -> Result<f64> {
    if courses.is_empty() {
        return Err(CalculationError::EmptyCourseList.into());
    }
    let points = semester_grade_points(scale, courses)?;
    Ok(points / f64::from(semester_units(courses)))
}

/// Combines the semester with any prior standing into an updated CGPA.
///
/// Returns the updated CGPA and the new cumulative unit total. With no prior
/// standing the CGPA is the semester GPA and the total is the semester
/// units; `semester_units` must be positive. Inconsistent prior data cannot
/// reach this point: [`PriorStanding`] only exists with both fields present.
pub fn updated_cgpa(
    semester_points: f64,
    semester_units: u32,
    prior: Option<&PriorStanding>,
) -> (f64, u32) {
    match prior {
        None => (semester_points / f64::from(semester_units), semester_units),
        Some(prior) => {
            let total_units = prior.units() + semester_units;
            let total_points = prior.cgpa() * f64::from(prior.units()) + semester_points;
            (total_points / f64::from(total_units), total_units)
        }
    }
}

/// Validates a semester against the configured constraints.
///
/// Per-course checks run first (unit cap, grade symbol), then the unit band
/// over the total; the first violation wins and calculation must not
/// proceed.
pub fn validate(config: &GradingConfig, semester: &Semester) -> Result<(), ValidationError> {
    for course in semester.courses() {
        if course.units() > config.max_course_units() {
            return Err(ValidationError::CourseField {
                field:  "units",
                value:  course.units().to_string(),
                reason: format!("must not exceed {} per course", config.max_course_units()),
            });
        }
        config.scale().points_for(course.grade())?;
    }
    config.unit_band().check(semester.total_units())
}

/// Runs the full calculation: validate, compute, classify.
pub fn calculate(config: &GradingConfig, semester: &Semester) -> Result<CalculationResult> {
    validate(config, semester)?;
    if semester.courses().is_empty() {
        return Err(CalculationError::EmptyCourseList.into());
    }

    let units = semester.total_units();
    let points = semester_grade_points(config.scale(), semester.courses())?;
    let gpa = points / f64::from(units);
    let (cgpa, total_units) = updated_cgpa(points, units, semester.prior());

    tracing::info!(
        "Semester GPA {:.4} over {} units; cumulative {:.4} over {}",
        gpa,
        units,
        cgpa,
        total_units
    );

    Ok(CalculationResult::builder()
        .semester_gpa(gpa)
        .cumulative_gpa(cgpa)
        .classification(config.classification().classify(cgpa))
        .total_units(total_units)
        .build())
}
