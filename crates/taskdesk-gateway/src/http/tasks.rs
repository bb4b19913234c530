use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskdesk_core::config::TASK_LIST_LIMIT;
use taskdesk_recur::{next_date, parse_date, RecurrenceError, RepeatRule, DATE_FORMAT};
use taskdesk_store::{StoreError, Task};

use crate::app::AppState;

/// JSON error envelope: `{"error": "…"}` with a matching status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::TaskNotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<RecurrenceError> for ApiError {
    fn from(err: RecurrenceError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Wire shape of a task. IDs travel as strings; existing clients expect that.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl From<Task> for TaskPayload {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id.to_string()),
            date: task.date,
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    search: Option<String>,
}

/// POST /api/task — create a task. Responds `{"id": "<n>"}`.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError> {
    let today = Local::now().date_naive();
    let date = resolve_date(today, &payload)?;
    let id = state
        .tasks
        .add(&date, &payload.title, &payload.comment, &payload.repeat)?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// GET /api/task?id=N — fetch one task.
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TaskPayload>, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    let task = state.tasks.get(id)?;
    Ok(Json(task.into()))
}

/// GET /api/tasks?search=… — upcoming tasks, optionally filtered.
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let tasks = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(text) => state.tasks.search(text, TASK_LIST_LIMIT)?,
        None => state.tasks.list(TASK_LIST_LIMIT)?,
    };
    let payloads: Vec<TaskPayload> = tasks.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "tasks": payloads })))
}

/// PUT /api/task — full update with the same validation as create.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(payload.id.as_deref())?;
    let today = Local::now().date_naive();
    let date = resolve_date(today, &payload)?;
    state.tasks.update(&Task {
        id,
        date,
        title: payload.title,
        comment: payload.comment,
        repeat: payload.repeat,
    })?;
    Ok(Json(json!({})))
}

/// DELETE /api/task?id=N — delete a task.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    state.tasks.delete(id)?;
    Ok(Json(json!({})))
}

/// POST /api/task/done?id=N — complete a task.
///
/// One-shot tasks are deleted; recurring tasks get their date rolled forward
/// through the engine. The engine's empty-string sentinel means the rule
/// never fires again, so the task is deleted as well.
pub async fn done_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    let task = state.tasks.get(id)?;

    if task.repeat.is_empty() {
        state.tasks.delete(id)?;
        return Ok(Json(json!({})));
    }

    let today = Local::now().date_naive();
    let next = next_date(today, &task.date, &task.repeat)?;
    if next.is_empty() {
        state.tasks.delete(id)?;
    } else {
        state.tasks.update_date(id, &next)?;
    }
    Ok(Json(json!({})))
}

fn parse_id(raw: Option<&str>) -> Result<i64, ApiError> {
    raw.and_then(|s| s.parse().ok())
        .ok_or_else(|| ApiError::bad_request("invalid task id"))
}

/// Validate a payload and decide the date the task is stored under.
///
/// Empty dates default to today; past dates snap to today for one-shot
/// tasks and roll forward through the engine for recurring ones.
fn resolve_date(today: NaiveDate, payload: &TaskPayload) -> Result<String, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }
    if !payload.repeat.is_empty() {
        RepeatRule::parse(&payload.repeat)?;
    }

    let raw = if payload.date.is_empty() {
        today.format(DATE_FORMAT).to_string()
    } else {
        payload.date.clone()
    };
    let date = parse_date(&raw)?;
    if date >= today {
        return Ok(raw);
    }

    if payload.repeat.is_empty() {
        return Ok(today.format(DATE_FORMAT).to_string());
    }
    let next = next_date(today, &raw, &payload.repeat)?;
    if next.is_empty() {
        // the rule never fires again; schedule a final occurrence today
        return Ok(today.format(DATE_FORMAT).to_string());
    }
    Ok(next)
}
