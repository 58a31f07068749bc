use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::{HubClient, SunService};

pub fn create_app(settings: &Arc<Settings>) -> Router {
    let hub = Arc::new(HubClient::new(settings.hub.clone()));
    let sun = Arc::new(SunService::new(settings.location));

    Router::new()
        .merge(device_router(DeviceState { hub: hub.clone() }))
        .merge(program_router(ProgramState {
            hub: hub.clone(),
            sun: sun.clone(),
        }))
        .merge(group_router(GroupState { hub }))
        .merge(location_router(LocationState { sun }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
