#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{constants::DEFAULT_GRADE_SCALE, error::ValidationError};

/// One row of the grade-point table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// Letter grade as entered by the caller.
    symbol: String,
    /// Grade-point value the symbol maps to.
    points: f64,
}

impl ScaleEntry {
    /// The letter-grade symbol for this row.
    pub fn symbol(&self) -> &str {
        self.symbol.as_ref()
    }

    /// The grade-point value for this row.
    pub fn points(&self) -> f64 {
        self.points
    }
}

/// The letter-grade to grade-point table for one institution.
///
/// The symbol set and point values are deployment configuration, not code;
/// the default is a 5-point A through F scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingScale {
    /// Table rows, kept in the order they were configured.
    entries: Vec<ScaleEntry>,
}

impl GradingScale {
    /// Builds a scale from `(symbol, points)` rows.
    ///
    /// Rejects an empty table, blank or duplicate symbols (compared
    /// case-insensitively), and non-finite or negative point values.
    pub fn new(rows: Vec<(String, f64)>) -> Result<Self> {
        if rows.is_empty() {
            return Err(anyhow!("a grading scale needs at least one grade"));
        }

        let mut entries: Vec<ScaleEntry> = Vec::with_capacity(rows.len());
        for (symbol, points) in rows {
            let symbol = symbol.trim().to_string();
            if symbol.is_empty() {
                return Err(anyhow!("a grading scale symbol cannot be blank"));
            }
            if entries.iter().any(|e| e.symbol.eq_ignore_ascii_case(&symbol)) {
                return Err(anyhow!("grading scale lists `{symbol}` more than once"));
            }
            if !points.is_finite() || points < 0.0 {
                return Err(anyhow!("grade points for `{symbol}` must be a non-negative number"));
            }
            entries.push(ScaleEntry { symbol, points });
        }

        Ok(Self { entries })
    }

    /// Parses a scale from a `A=5,B=4,...` spec string.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (symbol, points) = part
                .split_once('=')
                .ok_or_else(|| anyhow!("grading scale entry `{part}` is missing an `=`"))?;
            let points = points
                .trim()
                .parse::<f64>()
                .with_context(|| format!("grade points for `{}` are not a number", symbol.trim()))?;
            rows.push((symbol.to_string(), points));
        }
        Self::new(rows)
    }

    /// Looks up the grade-point value for a letter grade.
    ///
    /// Symbols are matched case-insensitively after trimming; anything not in
    /// the table fails with [`ValidationError::UnknownGrade`].
    pub fn points_for(&self, symbol: &str) -> Result<f64, ValidationError> {
        let wanted = symbol.trim();
        self.entries
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(wanted))
            .map(|e| e.points)
            .ok_or_else(|| ValidationError::UnknownGrade {
                symbol: symbol.to_string(),
            })
    }

    /// Whether the scale recognizes a letter grade.
    pub fn recognizes(&self, symbol: &str) -> bool {
        self.points_for(symbol).is_ok()
    }

    /// The highest grade-point value in the table, the ceiling for any GPA.
    pub fn max_points(&self) -> f64 {
        self.entries.iter().map(|e| e.points).fold(0.0, f64::max)
    }

    /// The configured table rows.
    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }
}

impl Default for GradingScale {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRADE_SCALE
                .iter()
                .map(|(symbol, points)| (symbol.to_string(), *points))
                .collect(),
        )
        .expect("default grading scale is well-formed")
    }
}
