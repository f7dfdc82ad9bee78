use axum::{routing::get, routing::post, Json, Router};
use tracing::debug;

use crate::{
    extract::ApiJson,
    models::planning::{
        AnalyzeUrlRequest, AnalyzeUrlResponse, HealthStatus, OptimizeRouteRequest,
        OptimizeRouteResponse,
    },
    services::{
        itinerary::build_itinerary,
        route::{reorder_places, PLACEHOLDER_NOTE},
    },
    state::AppState,
};

pub const ANALYZE_SUMMARY: &str = "입력된 URL 내용을 기반으로 일정 뼈대를 생성. (더미 응답)";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/analyze-url", post(analyze_url))
        .route("/optimize-route", post(optimize_route))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

async fn analyze_url(ApiJson(req): ApiJson<AnalyzeUrlRequest>) -> Json<AnalyzeUrlResponse> {
    debug!(url = %req.url, days = req.days, start_date = ?req.start_date, "analyzing url");
    let itinerary = build_itinerary(req.days, req.start_date);
    Json(AnalyzeUrlResponse {
        source_url: req.url,
        summary: ANALYZE_SUMMARY.to_string(),
        itinerary,
    })
}

async fn optimize_route(
    ApiJson(req): ApiJson<OptimizeRouteRequest>,
) -> Json<OptimizeRouteResponse> {
    debug!(places = req.places.len(), "reordering route");
    Json(OptimizeRouteResponse {
        ordered_places: reorder_places(req.places),
        note: PLACEHOLDER_NOTE.to_string(),
    })
}
