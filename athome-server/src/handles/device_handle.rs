use std::sync::Arc;

use athome_api::models::{Device, Id, Manufacturer};
use athome_api::restful::{
    AvailableDevice, CommandResponse, CreateDeviceRequest, DataResponse, PowerState, StateRequest,
    UpdateDeviceRequest,
};
use athome_api::validation::{DeviceDraft, validate_device};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::errors::ApiError;
use crate::services::HubClient;

#[derive(Clone)]
pub struct DeviceState {
    pub hub: Arc<HubClient>,
}

pub fn device_router(state: DeviceState) -> Router {
    Router::new()
        .route("/devices", get(get_devices).post(create_device))
        .route("/devices/selected/state", put(set_selected_devices_state))
        .route(
            "/devices/:device_id",
            get(get_device).put(update_device).delete(delete_device),
        )
        .route("/devices/:device_id/state", put(set_device_state))
        .route("/availabledevices/:mfg", get(get_available_devices))
        .route("/discoverdevices", put(discover_devices))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/devices",
    tag = "device",
    responses(
        (status = 200, description = "All defined devices", body = DataResponse<Vec<Device>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_devices(
    State(state): State<DeviceState>,
) -> Result<Json<DataResponse<Vec<Device>>>, ApiError> {
    let devices = state.hub.get_all_devices().await?;

    Ok(Json(DataResponse::new(devices)))
}

#[utoipa::path(
    get,
    path = "/devices/{device_id}",
    tag = "device",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device definition", body = DataResponse<Device>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_device(
    State(state): State<DeviceState>,
    Path(device_id): Path<Id>,
) -> Result<Json<DataResponse<Device>>, ApiError> {
    let device = state.hub.get_device(device_id).await?;

    Ok(Json(DataResponse::new(device)))
}

#[utoipa::path(
    post,
    path = "/devices",
    tag = "device",
    request_body = CreateDeviceRequest,
    responses(
        (status = 200, description = "Device created", body = DataResponse<Device>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn create_device(
    State(state): State<DeviceState>,
    Json(body): Json<CreateDeviceRequest>,
) -> Result<Json<DataResponse<Device>>, ApiError> {
    validate_device(&DeviceDraft {
        name: &body.name,
        location: &body.location,
        mfg: body.mfg,
        address: &body.address,
        channel: body.channel,
        channels: body.channels,
    })?;

    let device = state.hub.define_device(&body).await?;

    Ok(Json(DataResponse::new(device)))
}

#[utoipa::path(
    put,
    path = "/devices/{device_id}",
    tag = "device",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    request_body = UpdateDeviceRequest,
    responses(
        (status = 200, description = "Device updated", body = DataResponse<Device>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn update_device(
    State(state): State<DeviceState>,
    Path(device_id): Path<Id>,
    Json(body): Json<UpdateDeviceRequest>,
) -> Result<Json<DataResponse<Device>>, ApiError> {
    validate_device(&DeviceDraft {
        name: &body.name,
        location: &body.location,
        mfg: body.mfg,
        address: &body.address,
        channel: body.channel,
        channels: body.channels,
    })?;

    let device = state.hub.update_device(device_id, &body).await?;

    Ok(Json(DataResponse::new(device)))
}

#[utoipa::path(
    delete,
    path = "/devices/{device_id}",
    tag = "device",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device deleted", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn delete_device(
    State(state): State<DeviceState>,
    Path(device_id): Path<Id>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.delete_device(device_id).await?;

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/devices/{device_id}/state",
    tag = "device",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    request_body = StateRequest,
    responses(
        (status = 200, description = "Command relayed", body = CommandResponse),
        (status = 502, description = "Hub unreachable or command rejected")
    )
)]
pub async fn set_device_state(
    State(state): State<DeviceState>,
    Path(device_id): Path<Id>,
    Json(body): Json<StateRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = match body.state {
        PowerState::On => state.hub.device_on(device_id).await?,
        PowerState::Off => state.hub.device_off(device_id).await?,
    };

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/devices/selected/state",
    tag = "device",
    request_body = StateRequest,
    responses(
        (status = 200, description = "Command relayed to all selected devices", body = CommandResponse),
        (status = 502, description = "Hub unreachable or command rejected")
    )
)]
pub async fn set_selected_devices_state(
    State(state): State<DeviceState>,
    Json(body): Json<StateRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = match body.state {
        PowerState::On => state.hub.selected_devices_on().await?,
        PowerState::Off => state.hub.selected_devices_off().await?,
    };

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/availabledevices/{mfg}",
    tag = "device",
    params(
        ("mfg" = String, Path, description = "Manufacturer tag")
    ),
    responses(
        (status = 200, description = "Discovered devices not yet defined", body = DataResponse<Vec<AvailableDevice>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_available_devices(
    State(state): State<DeviceState>,
    Path(mfg): Path<Manufacturer>,
) -> Result<Json<DataResponse<Vec<AvailableDevice>>>, ApiError> {
    let devices = state.hub.get_available_devices(mfg).await?;

    Ok(Json(DataResponse::new(devices)))
}

#[utoipa::path(
    put,
    path = "/discoverdevices",
    tag = "device",
    responses(
        (status = 200, description = "Discovery started", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn discover_devices(
    State(state): State<DeviceState>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.discover_devices().await?;

    Ok(Json(response))
}
