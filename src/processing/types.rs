use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Caller-supplied body measurements: weight in kilograms, height in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub weight: f64,
    pub height: f64,
}

impl BodyProfile {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

/// Activity kinds that select a calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Running,
    Walking,
}

/// One parsed log line.
///
/// `activity` holds the raw token from a training log and is `None` for
/// step-only logs. Unknown tokens survive parsing and are rejected when the
/// calorie formula is chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: u32,
    pub activity: Option<String>,
    pub duration: Duration,
}

/// Derived metrics for a single record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Numeric constants used by validation and the metric formulas.
///
/// Defaults describe an average adult; alternate populations can supply
/// their own profile without touching the formulas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricsProfile {
    /// Step length in metres used for step-only logs.
    pub fixed_step_length: f64,
    /// Multiplier applied to height to estimate step length for training logs.
    pub step_length_coefficient: f64,
    pub meters_in_km: f64,
    pub minutes_in_hour: f64,
    /// Fraction of the running formula burned while walking.
    pub walking_calories_coefficient: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for MetricsProfile {
    fn default() -> Self {
        Self {
            fixed_step_length: 0.65,
            step_length_coefficient: 0.45,
            meters_in_km: 1000.0,
            minutes_in_hour: 60.0,
            walking_calories_coefficient: 0.5,
            min_weight: 2.0,
            max_weight: 635.0,
            min_height: 0.50,
            max_height: 2.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Weight,
    Height,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Weight => write!(f, "weight"),
            Measurement::Height => write!(f, "height"),
        }
    }
}

/// Calorie formula preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    PositiveSteps,
    ValidWeight,
    ValidHeight,
    PositiveDuration,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::PositiveSteps => write!(f, "steps must be positive"),
            Precondition::ValidWeight => write!(f, "weight must be within range"),
            Precondition::ValidHeight => write!(f, "height must be within range"),
            Precondition::PositiveDuration => write!(f, "duration must be positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("malformed input: expected {expected} fields, found {found}")]
    MalformedInput { expected: usize, found: usize },
    #[error("invalid steps: {0}")]
    InvalidSteps(String),
    #[error("malformed duration: {0}")]
    MalformedDuration(String),
    #[error("invalid duration: must be greater than zero")]
    InvalidDuration,
    #[error("invalid {measurement}: {value}")]
    InvalidBodyMeasurement { measurement: Measurement, value: f64 },
    #[error("unknown activity: {0}")]
    UnknownActivity(String),
    #[error("invalid input: {0}")]
    InvalidInput(Precondition),
}

impl TrackerError {
    /// Stable identifier for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::MalformedInput { .. } => "malformed_input",
            TrackerError::InvalidSteps(_) => "invalid_steps",
            TrackerError::MalformedDuration(_) => "malformed_duration",
            TrackerError::InvalidDuration => "invalid_duration",
            TrackerError::InvalidBodyMeasurement { .. } => "invalid_body_measurement",
            TrackerError::UnknownActivity(_) => "unknown_activity",
            TrackerError::InvalidInput(_) => "invalid_input",
        }
    }
}
