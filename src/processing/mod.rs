pub mod activity;
pub mod calculator;
pub mod parse;
pub mod types;
pub mod validate;

use activity::spent_calories;
use calculator::{CalorieInput, StepLength, distance_km, mean_speed_kmh, walking_calories};
use parse::{LogFormat, parse_record};
use validate::validate_body;

use crate::templates::{render_day_steps, render_training};

pub use types::{
    ActivityKind, ActivityRecord, BodyProfile, Measurement, Metrics, MetricsProfile, Precondition,
    TrackerError,
};
pub use validate::{validate_height, validate_weight};

/// Report for a step-only log such as `"6025,0h30m00s"`.
///
/// Failures are logged and collapse to an empty string; use
/// [`try_day_steps_report`] to receive the error instead.
pub fn day_steps_report(line: &str, weight: f64, height: f64) -> String {
    day_steps_report_with(line, weight, height, &MetricsProfile::default())
}

pub fn day_steps_report_with(
    line: &str,
    weight: f64,
    height: f64,
    profile: &MetricsProfile,
) -> String {
    match try_day_steps_report(line, BodyProfile::new(weight, height), profile) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(line, weight, height, error = %err, "step log rejected");
            String::new()
        }
    }
}

/// Typed variant of [`day_steps_report`].
///
/// The step-only pipeline never consults the activity dispatcher: every
/// record is walking with the fixed step length.
pub fn try_day_steps_report(
    line: &str,
    body: BodyProfile,
    profile: &MetricsProfile,
) -> Result<String, TrackerError> {
    validate_body(&body, profile)?;
    let record = parse_record(line, LogFormat::StepOnly)?;

    let (distance, speed) = measure(&record, &body, StepLength::Fixed, profile);
    let calories = walking_calories(&calorie_input(&record, &body, speed), profile)?;
    let metrics = Metrics {
        distance_km: distance,
        speed_kmh: speed,
        calories_kcal: calories,
    };

    tracing::debug!(steps = record.steps, ?metrics, "step log measured");
    Ok(render_day_steps(record.steps, &metrics))
}

/// Report for a training log such as `"3456,Walking,3h00m00s"`.
pub fn training_report(line: &str, weight: f64, height: f64) -> Result<String, TrackerError> {
    training_report_with(line, BodyProfile::new(weight, height), &MetricsProfile::default())
}

pub fn training_report_with(
    line: &str,
    body: BodyProfile,
    profile: &MetricsProfile,
) -> Result<String, TrackerError> {
    validate_body(&body, profile)?;
    let record = parse_record(line, LogFormat::Training)?;
    let activity = record.activity.as_deref().unwrap_or_default();

    let (distance, speed) = measure(&record, &body, StepLength::HeightDerived, profile);
    let calories = spent_calories(activity, &calorie_input(&record, &body, speed), profile)?;
    let metrics = Metrics {
        distance_km: distance,
        speed_kmh: speed,
        calories_kcal: calories,
    };

    tracing::debug!(steps = record.steps, activity, ?metrics, "training log measured");
    Ok(render_training(activity, record.duration, &metrics))
}

fn measure(
    record: &ActivityRecord,
    body: &BodyProfile,
    step_length: StepLength,
    profile: &MetricsProfile,
) -> (f64, f64) {
    let distance = distance_km(record.steps, step_length.meters(body.height, profile), profile);
    (distance, mean_speed_kmh(distance, record.duration))
}

fn calorie_input(record: &ActivityRecord, body: &BodyProfile, speed_kmh: f64) -> CalorieInput {
    CalorieInput {
        steps: record.steps,
        body: *body,
        duration: record.duration,
        speed_kmh,
    }
}
