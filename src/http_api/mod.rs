use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::json;

use crate::render::render_edit_page;
use crate::schedule::{Schedule, ScheduleError, Week};
use crate::status::PickupStatus;

#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<Schedule>>,
}

impl AppState {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }

    pub fn with_shared(schedule: Arc<RwLock<Schedule>>) -> Self {
        Self { schedule }
    }

    fn schedule(&self) -> Arc<RwLock<Schedule>> {
        self.schedule.clone()
    }
}

#[derive(Debug, Deserialize)]
struct SetStatusForm {
    week: usize,
    day: usize,
    status: String,
}

fn error_status(err: &ScheduleError) -> StatusCode {
    match err {
        ScheduleError::WeekOutOfRange { .. } | ScheduleError::DayOutOfRange { .. } => {
            StatusCode::NOT_FOUND
        }
        ScheduleError::UnknownStatus { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Re-render the current grid; a rejected edit is reported in a banner
/// above the unchanged table.
fn schedule_page(schedule: &Schedule, error: Option<&ScheduleError>) -> Response {
    let status = error.map(error_status).unwrap_or(StatusCode::OK);
    let message = error.map(|err| err.to_string());
    (status, Html(render_edit_page(schedule, message.as_deref()))).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/set_status", post(set_status))
        .route("/add_week", post(add_week))
        .route("/remove_week/:index", post(remove_week))
        .route("/schedule.json", get(schedule_json))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, schedule: Schedule) -> std::io::Result<()> {
    let state = AppState::new(schedule);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn index(State(state): State<AppState>) -> Response {
    let schedule = state.schedule();
    let guard = schedule.read();
    schedule_page(&guard, None)
}

async fn schedule_json(State(state): State<AppState>) -> Json<Vec<Week>> {
    let schedule = state.schedule();
    let weeks = {
        let guard = schedule.read();
        guard.weeks().to_vec()
    };
    Json(weeks)
}

async fn set_status(
    State(state): State<AppState>,
    Form(form): Form<SetStatusForm>,
) -> Response {
    let schedule = state.schedule();
    let mut guard = schedule.write();
    let result = PickupStatus::from_str(form.status.trim())
        .map_err(ScheduleError::from)
        .and_then(|status| guard.set_status(form.week, form.day, status));
    match result {
        Ok(()) => schedule_page(&guard, None),
        Err(err) => schedule_page(&guard, Some(&err)),
    }
}

async fn add_week(State(state): State<AppState>) -> Response {
    let schedule = state.schedule();
    let mut guard = schedule.write();
    guard.add_week();
    schedule_page(&guard, None)
}

async fn remove_week(State(state): State<AppState>, Path(index): Path<usize>) -> Response {
    let schedule = state.schedule();
    let mut guard = schedule.write();
    match guard.remove_week(index) {
        Ok(()) => schedule_page(&guard, None),
        Err(err) => schedule_page(&guard, Some(&err)),
    }
}
