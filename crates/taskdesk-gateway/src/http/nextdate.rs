use axum::{extract::Query, http::StatusCode};
use chrono::Local;
use serde::Deserialize;
use taskdesk_recur::{next_date, parse_date};

#[derive(Debug, Deserialize)]
pub struct NextDateQuery {
    now: Option<String>,
    #[serde(default)]
    date: String,
    #[serde(default)]
    repeat: String,
}

/// GET /api/nextdate?now=YYYYMMDD&date=YYYYMMDD&repeat=… — plain-text next
/// occurrence. `now` defaults to today; engine errors map to HTTP 400.
pub async fn nextdate_handler(
    Query(query): Query<NextDateQuery>,
) -> Result<String, (StatusCode, String)> {
    let now = match query.now.as_deref() {
        Some(raw) => parse_date(raw).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => Local::now().date_naive(),
    };
    next_date(now, &query.date, &query.repeat)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
