use std::sync::Arc;

use athome_api::models::{Id, Program};
use athome_api::restful::{CommandResponse, DataResponse, ProgramRequest, ProgramResponse};
use athome_api::schedule::{SunTimes, effective_time, validate_trigger};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::errors::ApiError;
use crate::services::{HubClient, SunService};

#[derive(Clone)]
pub struct ProgramState {
    pub hub: Arc<HubClient>,
    pub sun: Arc<SunService>,
}

pub fn program_router(state: ProgramState) -> Router {
    Router::new()
        .route("/programs", get(get_programs))
        .route(
            "/programs/:program_id",
            get(get_program).put(update_program).delete(delete_program),
        )
        .route(
            "/devices/:device_id/programs",
            get(get_device_programs).post(create_device_program),
        )
        .route(
            "/devices/:device_id/availableprograms",
            get(get_available_programs),
        )
        .route(
            "/devices/:device_id/programs/:program_id",
            put(assign_program).delete(remove_device_program),
        )
        .with_state(state)
}

/// Builds the human-readable summary line shown in program tables, e.g.
/// `MTWTF.. Method=clock-time Offset=10  EffectiveTime=10:10AM Action=on`.
fn program_summary(program: &Program, sun: Option<&SunTimes>, now: OffsetDateTime) -> String {
    let effective = match effective_time(program, sun, now) {
        Ok(Some(instant)) => {
            let format = format_description!("[hour repr:12]:[minute][period]");
            instant
                .format(&format)
                .unwrap_or_else(|_| "No Time".to_string())
        }
        // No meaningful time, or a malformed entry; the edit form is where
        // that gets reported
        Ok(None) | Err(_) => "No Time".to_string(),
    };

    let randomize = if program.randomize && program.trigger_method == "clock-time" {
        format!("Randomize={}", program.randomize_amount)
    } else {
        String::new()
    };

    format!(
        "{} Method={} Offset={} {} EffectiveTime={} Action={}",
        program.day_mask, program.trigger_method, program.offset, randomize, effective,
        program.command
    )
}

impl ProgramState {
    fn with_summary(&self, program: Program) -> ProgramResponse {
        let sun = self.sun.today().ok();
        let summary = program_summary(&program, sun.as_ref(), self.sun.now());

        ProgramResponse { program, summary }
    }

    fn with_summaries(&self, programs: Vec<Program>) -> Vec<ProgramResponse> {
        let sun = self.sun.today().ok();
        let now = self.sun.now();

        programs
            .into_iter()
            .map(|program| {
                let summary = program_summary(&program, sun.as_ref(), now);
                ProgramResponse { program, summary }
            })
            .collect()
    }
}

#[utoipa::path(
    get,
    path = "/programs",
    tag = "program",
    responses(
        (status = 200, description = "All programs with summaries", body = DataResponse<Vec<ProgramResponse>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_programs(
    State(state): State<ProgramState>,
) -> Result<Json<DataResponse<Vec<ProgramResponse>>>, ApiError> {
    let programs = state.hub.get_all_programs().await?;

    Ok(Json(DataResponse::new(state.with_summaries(programs))))
}

#[utoipa::path(
    get,
    path = "/programs/{program_id}",
    tag = "program",
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program with summary", body = DataResponse<ProgramResponse>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_program(
    State(state): State<ProgramState>,
    Path(program_id): Path<Id>,
) -> Result<Json<DataResponse<ProgramResponse>>, ApiError> {
    let program = state.hub.get_program(program_id).await?;

    Ok(Json(DataResponse::new(state.with_summary(program))))
}

#[utoipa::path(
    get,
    path = "/devices/{device_id}/programs",
    tag = "program",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Programs assigned to the device", body = DataResponse<Vec<ProgramResponse>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_device_programs(
    State(state): State<ProgramState>,
    Path(device_id): Path<Id>,
) -> Result<Json<DataResponse<Vec<ProgramResponse>>>, ApiError> {
    let programs = state.hub.get_device_programs(device_id).await?;

    Ok(Json(DataResponse::new(state.with_summaries(programs))))
}

#[utoipa::path(
    get,
    path = "/devices/{device_id}/availableprograms",
    tag = "program",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Programs available for assignment", body = DataResponse<Vec<ProgramResponse>>),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn get_available_programs(
    State(state): State<ProgramState>,
    Path(device_id): Path<Id>,
) -> Result<Json<DataResponse<Vec<ProgramResponse>>>, ApiError> {
    let programs = state.hub.get_available_programs(device_id).await?;

    Ok(Json(DataResponse::new(state.with_summaries(programs))))
}

#[utoipa::path(
    post,
    path = "/devices/{device_id}/programs",
    tag = "program",
    params(
        ("device_id" = i32, Path, description = "Device ID")
    ),
    request_body = ProgramRequest,
    responses(
        (status = 200, description = "Program created", body = DataResponse<ProgramResponse>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn create_device_program(
    State(state): State<ProgramState>,
    Path(device_id): Path<Id>,
    Json(body): Json<ProgramRequest>,
) -> Result<Json<DataResponse<ProgramResponse>>, ApiError> {
    validate_trigger(&body.trigger_method, &body.time)?;

    let program = state.hub.define_program(device_id, &body).await?;

    Ok(Json(DataResponse::new(state.with_summary(program))))
}

#[utoipa::path(
    put,
    path = "/programs/{program_id}",
    tag = "program",
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    request_body = ProgramRequest,
    responses(
        (status = 200, description = "Program updated", body = DataResponse<ProgramResponse>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn update_program(
    State(state): State<ProgramState>,
    Path(program_id): Path<Id>,
    Json(body): Json<ProgramRequest>,
) -> Result<Json<DataResponse<ProgramResponse>>, ApiError> {
    validate_trigger(&body.trigger_method, &body.time)?;

    let program = state.hub.update_program(program_id, &body).await?;

    Ok(Json(DataResponse::new(state.with_summary(program))))
}

#[utoipa::path(
    delete,
    path = "/programs/{program_id}",
    tag = "program",
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program deleted", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn delete_program(
    State(state): State<ProgramState>,
    Path(program_id): Path<Id>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.delete_program(program_id).await?;

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/devices/{device_id}/programs/{program_id}",
    tag = "program",
    params(
        ("device_id" = i32, Path, description = "Device ID"),
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program assigned to device", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn assign_program(
    State(state): State<ProgramState>,
    Path((device_id, program_id)): Path<(Id, Id)>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.assign_program(device_id, program_id).await?;

    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/devices/{device_id}/programs/{program_id}",
    tag = "program",
    params(
        ("device_id" = i32, Path, description = "Device ID"),
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program removed from device", body = CommandResponse),
        (status = 502, description = "Hub unreachable")
    )
)]
pub async fn remove_device_program(
    State(state): State<ProgramState>,
    Path((device_id, program_id)): Path<(Id, Id)>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.hub.delete_device_program(device_id, program_id).await?;

    Ok(Json(response))
}
