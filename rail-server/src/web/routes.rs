//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Duration, Utc};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::audit::{AuditEvent, AuditSink};
use crate::domain::{Scenario, Section};
use crate::engine::{self, SequenceError};

use super::dto::*;
use super::state::AppState;

const OPTIMIZE_EXPLANATION: &str = "Generated a conflict-minimized timetable using \
    priority-first sequencing, safety headways, and controller overrides where provided.";

const WHATIF_EXPLANATION: &str = "Scenario re-optimized with applied delay.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api/sections", get(list_sections))
        .route("/api/optimize", post(optimize))
        .route("/api/whatif", post(what_if))
        .route("/api/kpis", get(kpi_report))
        .route("/api/audit", get(audit_log))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service identification.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Rail Decision Support API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the known sections.
async fn list_sections(State(state): State<AppState>) -> Json<Vec<Section>> {
    Json(state.directory.list().await)
}

/// Generate a timetable for the submitted scenario.
async fn optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let schedule = run_engine(&state, &req.scenario).await?;

    let scenario_id = req.scenario.id.as_deref().unwrap_or("ad-hoc");
    record_best_effort(
        state.audit.as_ref(),
        AuditEvent::new(
            "optimize",
            BTreeMap::from([("scenario_id".to_string(), json!(scenario_id))]),
        ),
    );

    Ok(Json(OptimizeResponse {
        schedule,
        explanation: OPTIMIZE_EXPLANATION.to_string(),
    }))
}

/// Re-optimize a scenario with one train's departure delayed.
///
/// Only the named train's declared input changes; other trains' leg
/// times may still shift through headway interaction.
async fn what_if(
    State(state): State<AppState>,
    Json(req): Json<WhatIfRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let scenario = match &req.delay_train_id {
        Some(train_id) => req.scenario.with_delay(train_id, req.delay_minutes),
        None => req.scenario,
    };

    let schedule = run_engine(&state, &scenario).await?;

    record_best_effort(
        state.audit.as_ref(),
        AuditEvent::new(
            "what_if",
            BTreeMap::from([
                (
                    "train".to_string(),
                    json!(req.delay_train_id.as_ref().map(|id| id.as_str())),
                ),
                ("delay".to_string(), json!(req.delay_minutes)),
            ]),
        ),
    );

    Ok(Json(OptimizeResponse {
        schedule,
        explanation: WHATIF_EXPLANATION.to_string(),
    }))
}

/// Snapshot the directory and run the scheduling engine.
async fn run_engine(state: &AppState, scenario: &Scenario) -> Result<crate::domain::Schedule, AppError> {
    let sections = state.directory.snapshot().await;
    let schedule = engine::build_schedule(scenario, &sections, &state.config, Utc::now())?;
    Ok(schedule)
}

/// Aggregated KPI report.
///
/// A static illustrative report; deriving KPIs from stored schedules is
/// out of scope for this version.
async fn kpi_report(State(state): State<AppState>) -> Json<KpiReport> {
    let now = Utc::now();

    record_best_effort(
        state.audit.as_ref(),
        AuditEvent::new("kpi_view", BTreeMap::new()),
    );

    Json(KpiReport {
        time_range: BTreeMap::from([
            ("from".to_string(), (now - Duration::hours(1)).to_rfc3339()),
            ("to".to_string(), now.to_rfc3339()),
        ]),
        punctuality: 0.95,
        avg_delay_min: 3.2,
        throughput_trains: 24,
        section_utilization: BTreeMap::from([
            ("S1".to_string(), 0.7),
            ("S2".to_string(), 0.8),
            ("S3".to_string(), 0.65),
        ]),
        generated_at: now,
    })
}

/// Recent audit events, newest first.
async fn audit_log(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Json<AuditResponse> {
    let limit = query.limit.unwrap_or(50);

    match state.audit.recent(limit) {
        Ok(items) => Json(AuditResponse { items, error: None }),
        Err(e) => {
            tracing::warn!(error = %e, "audit read failed");
            Json(AuditResponse {
                items: vec![],
                error: Some(e.to_string()),
            })
        }
    }
}

/// Record an audit event, observing but never propagating a failure.
fn record_best_effort(audit: &dyn AuditSink, event: AuditEvent) {
    if let Err(e) = audit.record(event) {
        tracing::warn!(error = %e, "audit record failed");
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SequenceError> for AppError {
    fn from(e: SequenceError) -> Self {
        match e {
            // Client-supplied route referencing a missing section
            SequenceError::UnknownSection(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
