//! Form handlers for the makeup session schedule.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    alert::{ErrorFlag, redirect_with_error},
    app_state::{DatabaseState, lock_connection},
    endpoints::{self, format_endpoint},
    schedule::{ScheduleForm, ScheduleId, create_schedule, delete_schedule, update_schedule},
};

/// Handle the new schedule entry form on the index page.
pub async fn create_schedule_endpoint(
    State(state): State<DatabaseState>,
    Form(form): Form<ScheduleForm>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match create_schedule(&form, &connection) {
        Ok(Some(_)) => Ok(Redirect::to(endpoints::ROOT).into_response()),
        Ok(None) => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::DebtNotFoundOrInactive,
        )),
        Err(Error::DuplicateSchedule) => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::ScheduleAlreadyExists,
        )),
        Err(error) => Err(error),
    }
}

/// Handle the edit form on the schedule entry detail page.
pub async fn update_schedule_endpoint(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
    Form(form): Form<ScheduleForm>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match update_schedule(schedule_id, &form, &connection) {
        Ok(Some(_)) => Ok(Redirect::to(endpoints::ROOT).into_response()),
        Ok(None) => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::ScheduleNotFound,
        )),
        Err(Error::DuplicateSchedule) => Ok(redirect_with_error(
            &format_endpoint(endpoints::SCHEDULE_VIEW, schedule_id),
            ErrorFlag::ScheduleAlreadyExists,
        )),
        Err(error) => Err(error),
    }
}

pub async fn delete_schedule_endpoint(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_schedule(schedule_id, &connection)? {
        Ok(Redirect::to(endpoints::ROOT).into_response())
    } else {
        Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::ScheduleNotFound,
        ))
    }
}
