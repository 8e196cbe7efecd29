use crate::processing::calculator::{CalorieInput, running_calories, walking_calories};
use crate::processing::types::{ActivityKind, MetricsProfile, TrackerError};

impl ActivityKind {
    /// Resolve a log token. The localized tokens used by older trackers are
    /// accepted alongside the English ones.
    pub fn from_token(token: &str) -> Result<Self, TrackerError> {
        match token {
            "Running" | "Бег" => Ok(ActivityKind::Running),
            "Walking" | "Ходьба" => Ok(ActivityKind::Walking),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }

    pub fn calories(self, input: &CalorieInput, profile: &MetricsProfile) -> Result<f64, TrackerError> {
        match self {
            ActivityKind::Running => running_calories(input, profile),
            ActivityKind::Walking => walking_calories(input, profile),
        }
    }
}

/// Pick the calorie formula for a raw activity token and apply it.
pub fn spent_calories(
    token: &str,
    input: &CalorieInput,
    profile: &MetricsProfile,
) -> Result<f64, TrackerError> {
    ActivityKind::from_token(token)?.calories(input, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::BodyProfile;
    use std::time::Duration;

    fn sample() -> CalorieInput {
        CalorieInput {
            steps: 3000,
            body: BodyProfile::new(70.0, 1.75),
            duration: Duration::from_secs(3_600),
            speed_kmh: 2.3625,
        }
    }

    #[test]
    fn tokens_map_to_kinds() {
        assert_eq!(ActivityKind::from_token("Running"), Ok(ActivityKind::Running));
        assert_eq!(ActivityKind::from_token("Walking"), Ok(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_token("Бег"), Ok(ActivityKind::Running));
        assert_eq!(ActivityKind::from_token("Ходьба"), Ok(ActivityKind::Walking));
    }

    #[test]
    fn unrecognized_tokens_are_rejected() {
        for token in ["Sport", "running", "", " Walking"] {
            assert_eq!(
                spent_calories(token, &sample(), &MetricsProfile::default()),
                Err(TrackerError::UnknownActivity(token.to_string()))
            );
        }
    }

    #[test]
    fn dispatch_selects_matching_formula() {
        let profile = MetricsProfile::default();
        let running = spent_calories("Running", &sample(), &profile).unwrap();
        let walking = spent_calories("Walking", &sample(), &profile).unwrap();
        assert_eq!(running, running_calories(&sample(), &profile).unwrap());
        assert!((walking - running / 2.0).abs() < 1e-9);
    }
}
