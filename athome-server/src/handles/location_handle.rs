use std::sync::Arc;

use athome_api::models::Location;
use athome_api::restful::SunDataResponse;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use time::format_description::well_known::Rfc3339;

use crate::errors::ApiError;
use crate::services::SunService;

#[derive(Clone)]
pub struct LocationState {
    pub sun: Arc<SunService>,
}

pub fn location_router(state: LocationState) -> Router {
    Router::new()
        .route("/location", get(get_location))
        .route("/sundata", get(get_sun_data))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/location",
    tag = "location",
    responses(
        (status = 200, description = "Configured coordinates", body = Location)
    )
)]
pub async fn get_location(State(state): State<LocationState>) -> Json<Location> {
    Json(state.sun.location())
}

#[utoipa::path(
    get,
    path = "/sundata",
    tag = "location",
    responses(
        (status = 200, description = "Today's sunrise and sunset", body = SunDataResponse),
        (status = 500, description = "No sun event at the configured latitude")
    )
)]
pub async fn get_sun_data(
    State(state): State<LocationState>,
) -> Result<Json<SunDataResponse>, ApiError> {
    let sun = state.sun.today()?;

    let sunrise = sun
        .sunrise
        .format(&Rfc3339)
        .map_err(|e| anyhow::anyhow!("Failed to format sunrise: {e}"))?;
    let sunset = sun
        .sunset
        .format(&Rfc3339)
        .map_err(|e| anyhow::anyhow!("Failed to format sunset: {e}"))?;

    Ok(Json(SunDataResponse { sunrise, sunset }))
}
