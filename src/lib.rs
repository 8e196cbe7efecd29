pub mod config;
pub mod processing;
pub mod templates;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use processing::{
    BodyProfile, MetricsProfile, TrackerError, training_report_with, try_day_steps_report,
};
use serde::Deserialize;
use std::sync::Arc;
use templates::render_landing_page;

/// Form fields shared by both report endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportForm {
    pub data: String,
    pub weight: f64,
    pub height: f64,
}

impl ReportForm {
    fn body(&self) -> BodyProfile {
        BodyProfile::new(self.weight, self.height)
    }
}

pub fn build_app() -> Router {
    build_app_with(MetricsProfile::default())
}

pub fn build_app_with(profile: MetricsProfile) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/day-steps", post(day_steps))
        .route("/training", post(training))
        .with_state(Arc::new(profile))
}

async fn landing_page() -> Html<String> {
    Html(render_landing_page())
}

async fn day_steps(
    State(profile): State<Arc<MetricsProfile>>,
    Form(form): Form<ReportForm>,
) -> axum::response::Response {
    respond(try_day_steps_report(&form.data, form.body(), &profile))
}

async fn training(
    State(profile): State<Arc<MetricsProfile>>,
    Form(form): Form<ReportForm>,
) -> axum::response::Response {
    respond(training_report_with(&form.data, form.body(), &profile))
}

fn respond(result: Result<String, TrackerError>) -> axum::response::Response {
    match result {
        Ok(report) => (StatusCode::OK, report).into_response(),
        Err(err) => render_report_error(err),
    }
}

fn render_report_error(error: TrackerError) -> axum::response::Response {
    tracing::info!(kind = error.kind(), error = %error, "report request rejected");
    (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
}
