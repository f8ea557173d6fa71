//! JSON API handlers for debts.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    api::{ApiError, ApiJson, DeleteResponse, ListQuery},
    app_state::{DatabaseState, lock_connection},
    debt::{
        Debt, DebtForm, DebtId, create_debt, delete_debt, get_debt, get_debts,
        get_student_debts, pay_debt, update_debt,
    },
    student::StudentId,
};

const DEBT_NOT_FOUND: &str = "Debt not found";

pub async fn create_debt_api(
    State(state): State<DatabaseState>,
    ApiJson(form): ApiJson<DebtForm>,
) -> Result<Json<Debt>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    create_debt(&form, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound("Student not found"))
}

pub async fn list_debts_api(
    State(state): State<DatabaseState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Debt>>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(get_debts(query.skip, query.limit, &connection)?))
}

pub async fn get_debt_api(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Json<Debt>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    get_debt(debt_id, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound(DEBT_NOT_FOUND))
}

/// List every debt of a student. An unknown student has no debts.
pub async fn list_student_debts_api(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Vec<Debt>>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(get_student_debts(student_id, &connection)?))
}

pub async fn update_debt_api(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
    ApiJson(form): ApiJson<DebtForm>,
) -> Result<Json<Debt>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    update_debt(debt_id, &form, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound("Debt or student not found"))
}

pub async fn delete_debt_api(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_debt(debt_id, &connection)? {
        Ok(DeleteResponse::ok())
    } else {
        Err(ApiError::NotFound(DEBT_NOT_FOUND))
    }
}

pub async fn pay_debt_api(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Json<Debt>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    pay_debt(debt_id, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound(DEBT_NOT_FOUND))
}
