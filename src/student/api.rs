//! JSON API handlers for students.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiError, ApiJson, DeleteResponse, ListQuery},
    app_state::{DatabaseState, lock_connection},
    debt::{Debt, get_student_debts},
    student::{
        Student, StudentForm, StudentId, create_student, delete_student,
        find_student_by_external_id, get_student, get_students, update_student,
    },
};

const STUDENT_NOT_FOUND: &str = "Student not found";

/// A student together with all of their debts.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentWithDebts {
    #[serde(flatten)]
    pub student: Student,
    pub debts: Vec<Debt>,
    pub debts_count: usize,
}

pub async fn create_student_api(
    State(state): State<DatabaseState>,
    ApiJson(form): ApiJson<StudentForm>,
) -> Result<Json<Student>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(create_student(&form, &connection)?))
}

pub async fn list_students_api(
    State(state): State<DatabaseState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(get_students(query.skip, query.limit, &connection)?))
}

pub async fn get_student_api(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Student>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    get_student(student_id, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound(STUDENT_NOT_FOUND))
}

/// Look a student up by the identifier on their student card, ignoring
/// surrounding whitespace like the search page does.
pub async fn search_student_api(
    State(state): State<DatabaseState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentWithDebts>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    let student = find_student_by_external_id(student_id.trim(), &connection)?
        .ok_or(ApiError::NotFound(STUDENT_NOT_FOUND))?;
    let debts = get_student_debts(student.id, &connection)?;

    Ok(Json(StudentWithDebts {
        student,
        debts_count: debts.len(),
        debts,
    }))
}

pub async fn update_student_api(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
    ApiJson(form): ApiJson<StudentForm>,
) -> Result<Json<Student>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    update_student(student_id, &form, &connection)?
        .map(Json)
        .ok_or(ApiError::NotFound(STUDENT_NOT_FOUND))
}

pub async fn delete_student_api(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_student(student_id, &connection)? {
        Ok(DeleteResponse::ok())
    } else {
        Err(ApiError::NotFound(STUDENT_NOT_FOUND))
    }
}
