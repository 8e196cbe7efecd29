use crate::processing::types::{BodyProfile, MetricsProfile, Precondition, TrackerError};
use crate::processing::validate::{height_in_range, weight_in_range};
use std::time::Duration;

/// How the length of a single step is estimated.
///
/// Step-only logs use a fixed length while training logs scale with height;
/// the two pipelines intentionally disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLength {
    Fixed,
    HeightDerived,
}

impl StepLength {
    /// Step length in metres.
    pub fn meters(self, height: f64, profile: &MetricsProfile) -> f64 {
        match self {
            StepLength::Fixed => profile.fixed_step_length,
            StepLength::HeightDerived => height * profile.step_length_coefficient,
        }
    }
}

/// Everything the calorie formulas look at.
#[derive(Debug, Clone, Copy)]
pub struct CalorieInput {
    pub steps: u32,
    pub body: BodyProfile,
    pub duration: Duration,
    pub speed_kmh: f64,
}

pub fn distance_km(steps: u32, step_length: f64, profile: &MetricsProfile) -> f64 {
    f64::from(steps) * step_length / profile.meters_in_km
}

/// Average speed in km/h. A zero duration yields `0.0` rather than an error.
pub fn mean_speed_kmh(distance_km: f64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    distance_km / hours(duration)
}

pub fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3_600.0
}

pub fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Base calorie formula: `weight * speed * minutes / 60`.
pub fn running_calories(input: &CalorieInput, profile: &MetricsProfile) -> Result<f64, TrackerError> {
    check_preconditions(input, profile)?;
    Ok(input.body.weight * input.speed_kmh * minutes(input.duration) / profile.minutes_in_hour)
}

/// Walking burns a fixed fraction of the running formula.
pub fn walking_calories(input: &CalorieInput, profile: &MetricsProfile) -> Result<f64, TrackerError> {
    let running = running_calories(input, profile)?;
    Ok(running * profile.walking_calories_coefficient)
}

fn check_preconditions(input: &CalorieInput, profile: &MetricsProfile) -> Result<(), TrackerError> {
    let failed = if input.steps == 0 {
        Some(Precondition::PositiveSteps)
    } else if !weight_in_range(input.body.weight, profile) {
        Some(Precondition::ValidWeight)
    } else if !height_in_range(input.body.height, profile) {
        Some(Precondition::ValidHeight)
    } else if input.duration.is_zero() {
        Some(Precondition::PositiveDuration)
    } else {
        None
    };

    match failed {
        Some(precondition) => Err(TrackerError::InvalidInput(precondition)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(steps: u32, weight: f64, height: f64, secs: u64, speed_kmh: f64) -> CalorieInput {
        CalorieInput {
            steps,
            body: BodyProfile::new(weight, height),
            duration: Duration::from_secs(secs),
            speed_kmh,
        }
    }

    #[test]
    fn step_length_policies_differ() {
        let profile = MetricsProfile::default();
        assert_eq!(StepLength::Fixed.meters(1.75, &profile), 0.65);
        assert!((StepLength::HeightDerived.meters(1.75, &profile) - 0.7875).abs() < 1e-12);
    }

    #[test]
    fn distance_is_steps_times_length_over_a_kilometre() {
        let profile = MetricsProfile::default();
        for (steps, length) in [(1, 0.65), (6000, 0.65), (3000, 0.7875), (12_345, 0.9)] {
            let expected = f64::from(steps) * length / 1000.0;
            assert!((distance_km(steps, length, &profile) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_duration_speed_is_zero() {
        assert_eq!(mean_speed_kmh(3.9, Duration::ZERO), 0.0);
        assert!((mean_speed_kmh(3.9, Duration::from_secs(1_800)) - 7.8).abs() < 1e-12);
    }

    #[test]
    fn running_formula_matches_hand_calculation() {
        let profile = MetricsProfile::default();
        let calories = running_calories(&input(6000, 70.0, 1.75, 3_600, 3.9), &profile).unwrap();
        assert!((calories - 273.0).abs() < 1e-9);
    }

    #[test]
    fn walking_is_half_of_running() {
        let profile = MetricsProfile::default();
        for case in [
            input(6000, 70.0, 1.75, 3_600, 3.9),
            input(1, 2.0, 0.5, 1, 0.1),
            input(40_000, 635.0, 2.75, 7_200, 12.5),
        ] {
            let running = running_calories(&case, &profile).unwrap();
            let walking = walking_calories(&case, &profile).unwrap();
            assert!((walking - 0.5 * running).abs() < 1e-9);
        }
    }

    #[test]
    fn failed_precondition_is_named() {
        let profile = MetricsProfile::default();
        let cases = [
            (input(0, 70.0, 1.75, 60, 1.0), Precondition::PositiveSteps),
            (input(10, 1.0, 1.75, 60, 1.0), Precondition::ValidWeight),
            (input(10, 70.0, 3.0, 60, 1.0), Precondition::ValidHeight),
            (input(10, 70.0, 1.75, 0, 1.0), Precondition::PositiveDuration),
        ];
        for (case, expected) in cases {
            assert_eq!(
                walking_calories(&case, &profile),
                Err(TrackerError::InvalidInput(expected))
            );
        }
    }
}
