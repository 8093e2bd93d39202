//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::Result;
use crate::events::{EventRecord, SubjectKind};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Request / response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Restrict to one `event_type`, e.g. `credits_sold`.
    pub kind: Option<String>,
}

#[derive(Serialize)]
pub struct SubjectEventsResponse {
    pub subject_type: &'static str,
    pub subject_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AccountEventsResponse {
    pub address: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events?kind=<event_type>`
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let result = db::get_all_events(&state.pool, query.kind.as_deref())
        .await
        .map(|events| AllEventsResponse {
            count: events.len(),
            events,
        });
    respond(result)
}

/// `GET /projects/:id/events`
pub async fn get_project_events(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    subject_events(&state.pool, SubjectKind::Project, project_id).await
}

/// `GET /certificates/:id/events`
pub async fn get_certificate_events(
    State(state): State<Arc<ApiState>>,
    Path(cert_id): Path<String>,
) -> Response {
    subject_events(&state.pool, SubjectKind::Certificate, cert_id).await
}

/// `GET /accounts/:address/events`
///
/// Every event where the address is the actor or the counterparty.
pub async fn get_account_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Response {
    let result = db::get_events_for_account(&state.pool, &address)
        .await
        .map(|events| AccountEventsResponse {
            address,
            count: events.len(),
            events,
        });
    respond(result)
}

async fn subject_events(pool: &SqlitePool, subject: SubjectKind, subject_id: String) -> Response {
    let result = db::get_events_for_subject(pool, subject, &subject_id)
        .await
        .map(|events| SubjectEventsResponse {
            subject_type: subject.as_str(),
            subject_id,
            count: events.len(),
            events,
        });
    respond(result)
}
