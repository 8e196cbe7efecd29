use crate::processing::Metrics;
use crate::processing::calculator::hours;
use std::time::Duration;

/// Plain-text report for a step-only log.
pub fn render_day_steps(steps: u32, metrics: &Metrics) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        steps, metrics.distance_km, metrics.calories_kcal
    )
}

/// Plain-text report for a training log. The activity token is echoed as given.
pub fn render_training(activity: &str, duration: Duration, metrics: &Metrics) -> String {
    format!(
        "Activity: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        activity,
        hours(duration),
        metrics.distance_km,
        metrics.speed_kmh,
        metrics.calories_kcal
    )
}

pub fn render_landing_page() -> String {
    include_str!("../templates/landing.html").to_string()
}
