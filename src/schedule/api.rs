//! JSON API handlers for the makeup session schedule.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    api::{ApiError, ApiJson, DeleteResponse, ListQuery},
    app_state::{DatabaseState, lock_connection},
    schedule::{
        Schedule, ScheduleForm, ScheduleId, create_schedule, delete_schedule, get_schedule,
        get_schedules, update_schedule,
    },
};

const SCHEDULE_NOT_FOUND: &str = "Schedule entry not found";

pub async fn create_schedule_api(
    State(state): State<DatabaseState>,
    ApiJson(form): ApiJson<ScheduleForm>,
) -> Result<Json<Schedule>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    create_schedule(&form, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound("Debt not found or not active"))
}

pub async fn list_schedules_api(
    State(state): State<DatabaseState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Schedule>>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(get_schedules(query.skip, query.limit, &connection)?))
}

pub async fn get_schedule_api(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
) -> Result<Json<Schedule>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    get_schedule(schedule_id, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound(SCHEDULE_NOT_FOUND))
}

pub async fn update_schedule_api(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
    ApiJson(form): ApiJson<ScheduleForm>,
) -> Result<Json<Schedule>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    update_schedule(schedule_id, &form, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound("Schedule entry or debt not found"))
}

pub async fn delete_schedule_api(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_schedule(schedule_id, &connection)? {
        Ok(DeleteResponse::ok())
    } else {
        Err(ApiError::NotFound(SCHEDULE_NOT_FOUND))
    }
}
