use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::AppError,
    extract::ApiJson,
    models::{DeletedResponse, Trip, TripPayload},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route(
            "/trips/:id",
            get(get_trip).put(update_trip).delete(delete_trip),
        )
}

async fn create_trip(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TripPayload>,
) -> Json<Trip> {
    Json(state.trips.create(payload.itinerary).await)
}

async fn list_trips(State(state): State<AppState>) -> Json<Vec<Trip>> {
    Json(state.trips.list().await)
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.get(&id).await?))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<TripPayload>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.update(&id, payload.itinerary).await?))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.trips.delete(&id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
