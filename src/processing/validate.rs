use crate::processing::types::{BodyProfile, Measurement, MetricsProfile, TrackerError};

/// True when `weight` lies within the default profile's bounds (inclusive).
pub fn validate_weight(weight: f64) -> bool {
    weight_in_range(weight, &MetricsProfile::default())
}

/// True when `height` lies within the default profile's bounds (inclusive).
pub fn validate_height(height: f64) -> bool {
    height_in_range(height, &MetricsProfile::default())
}

pub fn weight_in_range(weight: f64, profile: &MetricsProfile) -> bool {
    (profile.min_weight..=profile.max_weight).contains(&weight)
}

pub fn height_in_range(height: f64, profile: &MetricsProfile) -> bool {
    (profile.min_height..=profile.max_height).contains(&height)
}

/// Gate a body profile, reporting the first measurement that is out of range.
pub fn validate_body(body: &BodyProfile, profile: &MetricsProfile) -> Result<(), TrackerError> {
    if !weight_in_range(body.weight, profile) {
        return Err(TrackerError::InvalidBodyMeasurement {
            measurement: Measurement::Weight,
            value: body.weight,
        });
    }
    if !height_in_range(body.height, profile) {
        return Err(TrackerError::InvalidBodyMeasurement {
            measurement: Measurement::Height,
            value: body.height,
        });
    }
    Ok(())
}
