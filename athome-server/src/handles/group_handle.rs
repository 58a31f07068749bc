use std::sync::Arc;

use athome_api::models::{ActionGroup, Device, Id};
use athome_api::restful::{
    CommandResponse, CreateActionGroupRequest, DataResponse, PowerState, StateRequest,
    UpdateActionGroupRequest,
};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::errors::ApiError;
use crate::services::HubClient;

#[derive(Clone)]
pub struct GroupState {
    pub hub: Arc<HubClient>,
}

pub fn group_router(state: GroupState) -> Router {
    Router::new()
        .route("/actiongroups", get(get_action_groups).post(create_action_group))
        .route(
            "/actiongroups/:group_id",
            get(get_action_group)
                .put(update_action_group)
                .delete(delete_action_group),
        )
        .route("/actiongroups/:group_id/state", put(set_group_state))
        .route("/actiongroups/:group_id/devices", get(get_group_devices))
        .route(
            "/actiongroups/:group_id/devices/:device_id",
            put(assign_group_device).delete(remove_group_device),
        )
        .route(
            "/actiongroups/:group_id/availabledevices",
            get(get_available_group_devices),
        )
        .route(
            "/actiongroups/:group_id/programs/:program_id",
            put(assign_group_program),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/actiongroups",
    tag = "group",
    responses(
        (status = 200, description = "All action groups", body = DataResponse<Vec<ActionGroup>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_action_groups(
    State(state): State<GroupState>,
) -> Result<Json<DataResponse<Vec<ActionGroup>>>, ApiError> {
    let groups = state.hub.get_all_action_groups().await?;

    Ok(Json(DataResponse::new(groups)))
}

#[utoipa::path(
    get,
    path = "/actiongroups/{group_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Action group", body = DataResponse<ActionGroup>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_action_group(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
) -> Result<Json<DataResponse<ActionGroup>>, ApiError> {
    let group = state.hub.get_action_group(group_id).await?;

    Ok(Json(DataResponse::new(group)))
}

#[utoipa::path(
    post,
    path = "/actiongroups",
    tag = "group",
    request_body = CreateActionGroupRequest,
    responses(
        (status = 200, description = "Action group created", body = DataResponse<ActionGroup>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn create_action_group(
    State(state): State<GroupState>,
    Json(body): Json<CreateActionGroupRequest>,
) -> Result<Json<DataResponse<ActionGroup>>, ApiError> {
    if body.name.is_empty() {
        return Err(athome_api::validation::ValidationError::MissingField { field: "Name" }.into());
    }

    let group = state.hub.define_action_group(&body.name).await?;

    Ok(Json(DataResponse::new(group)))
}

#[utoipa::path(
    put,
    path = "/actiongroups/{group_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateActionGroupRequest,
    responses(
        (status = 200, description = "Action group updated", body = DataResponse<ActionGroup>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn update_action_group(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
    Json(body): Json<UpdateActionGroupRequest>,
) -> Result<Json<DataResponse<ActionGroup>>, ApiError> {
    if body.name.is_empty() {
        return Err(athome_api::validation::ValidationError::MissingField { field: "Name" }.into());
    }

    let group = state.hub.update_action_group(group_id, &body.name).await?;

    Ok(Json(DataResponse::new(group)))
}

#[utoipa::path(
    delete,
    path = "/actiongroups/{group_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Action group deleted", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn delete_action_group(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.delete_action_group(group_id).await?;

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/actiongroups/{group_id}/state",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = StateRequest,
    responses(
        (status = 200, description = "Command relayed to every device in the group", body = CommandResponse),
        (status = 502, description = "Hub unreachable or command rejected")
    )
)]
pub async fn set_group_state(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
    Json(body): Json<StateRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = match body.state {
        PowerState::On => state.hub.group_on(group_id).await?,
        PowerState::Off => state.hub.group_off(group_id).await?,
    };

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/actiongroups/{group_id}/devices",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Devices in the group", body = DataResponse<Vec<Device>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_group_devices(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
) -> Result<Json<DataResponse<Vec<Device>>>, ApiError> {
    let devices = state.hub.get_action_group_devices(group_id).await?;

    Ok(Json(DataResponse::new(devices)))
}

#[utoipa::path(
    get,
    path = "/actiongroups/{group_id}/availabledevices",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Devices not yet in the group", body = DataResponse<Vec<Device>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_available_group_devices(
    State(state): State<GroupState>,
    Path(group_id): Path<Id>,
) -> Result<Json<DataResponse<Vec<Device>>>, ApiError> {
    let devices = state.hub.get_available_group_devices(group_id).await?;

    Ok(Json(DataResponse::new(devices)))
}

#[utoipa::path(
    put,
    path = "/actiongroups/{group_id}/devices/{device_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device added to group", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn assign_group_device(
    State(state): State<GroupState>,
    Path((group_id, device_id)): Path<(Id, Id)>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.assign_device_to_group(group_id, device_id).await?;

    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/actiongroups/{group_id}/devices/{device_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device removed from group", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn remove_group_device(
    State(state): State<GroupState>,
    Path((group_id, device_id)): Path<(Id, Id)>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state
        .hub
        .delete_action_group_device(group_id, device_id)
        .await?;

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/actiongroups/{group_id}/programs/{program_id}",
    tag = "group",
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program assigned to every device in the group", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn assign_group_program(
    State(state): State<GroupState>,
    Path((group_id, program_id)): Path<(Id, Id)>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state
        .hub
        .assign_program_to_group(group_id, program_id)
        .await?;

    Ok(Json(response))
}
