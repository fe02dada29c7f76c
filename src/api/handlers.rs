//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, MonthRecord, SeriesQuery};
use crate::report::SimulationReport;

/// Returns the full committed simulation report.
///
/// `GET /report` → 200 + `SimulationReport` JSON
pub async fn get_report(State(state): State<Arc<AppState>>) -> Json<SimulationReport> {
    Json(state.report.clone())
}

/// Returns the monthly series, optionally filtered by month-index range.
///
/// `GET /series` → 200 + `Vec<MonthRecord>` JSON
/// `GET /series?from=N&to=M` → filtered range (inclusive)
/// `GET /series?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(11);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<MonthRecord> = (from..=to.min(11))
        .map(|month_index| MonthRecord::from_report(&state.report, month_index))
        .collect();

    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::ScenarioConfig;
    use crate::session::Session;

    fn make_test_state() -> Arc<AppState> {
        let mut session = Session::new(ScenarioConfig::baseline());
        let report = session.simulate().clone();
        Arc::new(AppState { report })
    }

    #[tokio::test]
    async fn report_returns_200() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/report")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("sizing").is_some());
        assert!(json.get("billing").is_some());
        assert!(json.get("payback").is_some());
        assert_eq!(json["sizing"]["panel_count"], 5);
    }

    #[tokio::test]
    async fn series_returns_all_months() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/series")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 12);
        assert_eq!(json[0]["month"], "Jan");
    }

    #[tokio::test]
    async fn series_range_query() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/series?from=5&to=8")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 4); // months 5,6,7,8
        assert_eq!(json[0]["month_index"], 5);
        assert_eq!(json[3]["month_index"], 8);
    }

    #[tokio::test]
    async fn series_invalid_range_returns_400() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/series?from=10&to=5")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
    }
}
