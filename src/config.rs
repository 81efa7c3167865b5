#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{env, str::FromStr};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_CLASS_BANDS, DEFAULT_FLOOR_LABEL, DEFAULT_MAX_COURSE_UNITS,
        DEFAULT_MAX_SEMESTER_UNITS, DEFAULT_MIN_SEMESTER_UNITS, ENV_CLASS_BANDS,
        ENV_GRADE_SCALE, ENV_MAX_COURSE_UNITS, ENV_MAX_SEMESTER_UNITS, ENV_MIN_SEMESTER_UNITS,
    },
    error::{BandBound, ValidationError},
    grade::GradingScale,
};

/// The allowed inclusive range of total course units per semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBand {
    /// Fewest units a semester may register.
    min: u32,
    /// Most units a semester may register.
    max: u32,
}

impl UnitBand {
    /// Creates a band; `min` must not exceed `max`.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(anyhow!("unit band minimum {min} exceeds maximum {max}"));
        }
        Ok(Self { min, max })
    }

    /// Fewest units a semester may register.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Most units a semester may register.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Checks a semester total against the band.
    ///
    /// The error carries the observed total, the violated limit, and which
    /// edge was violated, so the caller can render a precise message.
    pub fn check(&self, total: u32) -> Result<(), ValidationError> {
        if total < self.min {
            return Err(ValidationError::UnitBand {
                total,
                limit: self.min,
                bound: BandBound::BelowMinimum,
            });
        }
        if total > self.max {
            return Err(ValidationError::UnitBand {
                total,
                limit: self.max,
                bound: BandBound::AboveMaximum,
            });
        }
        Ok(())
    }
}

impl Default for UnitBand {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SEMESTER_UNITS,
            max: DEFAULT_MAX_SEMESTER_UNITS,
        }
    }
}

/// One classification band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBand {
    /// Closed lower bound on the cumulative GPA.
    min:   f64,
    /// Honours tier name reported for the band.
    label: String,
}

impl ClassBand {
    /// Closed lower bound on the cumulative GPA.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Honours tier name reported for the band.
    pub fn label(&self) -> &str {
        self.label.as_ref()
    }
}

/// Maps a cumulative GPA to an honours tier.
///
/// Bands are held highest threshold first; a GPA lands in the first band
/// whose threshold it meets (closed lower bound), and in the floor label
/// when it meets none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTable {
    /// Bands sorted by descending threshold.
    bands: Vec<ClassBand>,
    /// Label reported below every band.
    floor: String,
}

impl ClassificationTable {
    /// Builds a table from `(label, min)` rows and a floor label.
    ///
    /// Rows may arrive in any order; they are sorted by descending threshold.
    /// Rejects an empty table, blank labels, and non-finite thresholds.
    pub fn new(rows: Vec<(String, f64)>, floor: impl Into<String>) -> Result<Self> {
        if rows.is_empty() {
            return Err(anyhow!("a classification table needs at least one band"));
        }

        let mut bands: Vec<ClassBand> = Vec::with_capacity(rows.len());
        for (label, min) in rows {
            let label = label.trim().to_string();
            if label.is_empty() {
                return Err(anyhow!("a classification label cannot be blank"));
            }
            if !min.is_finite() {
                return Err(anyhow!("classification threshold for `{label}` must be a number"));
            }
            bands.push(ClassBand { min, label });
        }
        bands.sort_by(|a, b| b.min.total_cmp(&a.min));

        Ok(Self {
            bands,
            floor: floor.into(),
        })
    }

    /// Parses a table from a `First Class=4.5,...` spec string.
    pub fn from_spec(spec: &str, floor: impl Into<String>) -> Result<Self> {
        let mut rows = Vec::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (label, min) = part
                .split_once('=')
                .ok_or_else(|| anyhow!("classification entry `{part}` is missing an `=`"))?;
            let min = min.trim().parse::<f64>().with_context(|| {
                format!("classification threshold for `{}` is not a number", label.trim())
            })?;
            rows.push((label.to_string(), min));
        }
        Self::new(rows, floor)
    }

    /// Maps a cumulative GPA to its honours tier label.
    ///
    /// A GPA exactly on a threshold falls into the higher band.
    pub fn classify(&self, cgpa: f64) -> &str {
        self.bands
            .iter()
            .find(|band| cgpa >= band.min)
            .map(|band| band.label.as_str())
            .unwrap_or(self.floor.as_str())
    }

    /// The configured bands, highest threshold first.
    pub fn bands(&self) -> &[ClassBand] {
        &self.bands
    }

    /// The label reported below every band.
    pub fn floor(&self) -> &str {
        self.floor.as_ref()
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_CLASS_BANDS
                .iter()
                .map(|(label, min)| (label.to_string(), *min))
                .collect(),
            DEFAULT_FLOOR_LABEL,
        )
        .expect("default classification table is well-formed")
    }
}

/// Institution-specific grading configuration.
///
/// Everything here is one deployment's numbers; the defaults come from
/// `constants` and every piece can be overridden from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Letter-grade to grade-point table.
    scale:            GradingScale,
    /// Allowed range of total semester units.
    unit_band:        UnitBand,
    /// Honours tier thresholds.
    classification:   ClassificationTable,
    /// Most units a single course may carry.
    max_course_units: u32,
}

impl GradingConfig {
    /// Constructs a configuration bundle.
    pub fn new(
        scale: GradingScale,
        unit_band: UnitBand,
        classification: ClassificationTable,
        max_course_units: u32,
    ) -> Self {
        Self {
            scale,
            unit_band,
            classification,
            max_course_units,
        }
    }

    /// Builds the configuration from defaults plus `TALLY_*` env overrides.
    ///
    /// A malformed override is a hard error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let scale = match optional_var(ENV_GRADE_SCALE)? {
            Some(spec) => GradingScale::from_spec(&spec)
                .with_context(|| format!("`{ENV_GRADE_SCALE}` is not a valid grading scale"))?,
            None => GradingScale::default(),
        };

        let classification = match optional_var(ENV_CLASS_BANDS)? {
            Some(spec) => ClassificationTable::from_spec(&spec, DEFAULT_FLOOR_LABEL)
                .with_context(|| format!("`{ENV_CLASS_BANDS}` is not a valid band table"))?,
            None => ClassificationTable::default(),
        };

        let min = parsed_var(ENV_MIN_SEMESTER_UNITS)?.unwrap_or(DEFAULT_MIN_SEMESTER_UNITS);
        let max = parsed_var(ENV_MAX_SEMESTER_UNITS)?.unwrap_or(DEFAULT_MAX_SEMESTER_UNITS);
        let max_course_units =
            parsed_var(ENV_MAX_COURSE_UNITS)?.unwrap_or(DEFAULT_MAX_COURSE_UNITS);

        Ok(Self::new(scale, UnitBand::new(min, max)?, classification, max_course_units))
    }

    /// The letter-grade to grade-point table.
    pub fn scale(&self) -> &GradingScale {
        &self.scale
    }

    /// The allowed range of total semester units.
    pub fn unit_band(&self) -> &UnitBand {
        &self.unit_band
    }

    /// The honours tier thresholds.
    pub fn classification(&self) -> &ClassificationTable {
        &self.classification
    }

    /// The per-course unit cap.
    pub fn max_course_units(&self) -> u32 {
        self.max_course_units
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self::new(
            GradingScale::default(),
            UnitBand::default(),
            ClassificationTable::default(),
            DEFAULT_MAX_COURSE_UNITS,
        )
    }
}

/// Reads an env var, treating absence and blank values as `None`.
fn optional_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("could not read `{key}`")),
    }
}

/// Reads and parses an env var, treating absence and blank values as `None`.
fn parsed_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match optional_var(key)? {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow!("`{key}` value `{raw}` could not be parsed")),
        None => Ok(None),
    }
}
