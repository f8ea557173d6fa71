//! Debt Tracker is a web app for recording students' academic debts and
//! scheduling the makeup sessions that clear them.
//!
//! This library provides a server-rendered HTML interface and a JSON API over
//! the same SQLite-backed data-access functions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod database_id;
mod date_time;
mod db;
mod debt;
mod endpoints;
mod html;
mod index_page;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod schedule;
mod student;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::DatabaseId;
pub use db::initialize as initialize_db;
pub use debt::{
    Debt, DebtForm, DebtId, DebtStatus, create_debt, delete_debt, get_debt, get_debts,
    get_student_debts, pay_debt, update_debt,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use schedule::{
    Schedule, ScheduleForm, ScheduleId, create_schedule, delete_schedule, get_schedule,
    get_schedules, update_schedule,
};
pub use student::{
    Student, StudentForm, StudentId, create_student, delete_student,
    find_student_by_external_id, get_student, get_students, update_student,
};

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Records that cannot be found are not errors for the data-access
/// functions, they return `None` or `false` instead. The variants here are
/// either constraint violations the caller should report to the user, or
/// failures the user cannot fix.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Another student already has the same student ID (the identifier
    /// printed on the student card).
    #[error("a student with this student ID already exists")]
    DuplicateStudentId,

    /// The debt already has a makeup session scheduled.
    #[error("the debt already has a scheduled makeup session")]
    DuplicateSchedule,

    /// A debt status other than "active" or "paid" was read or submitted.
    #[error("\"{0}\" is not a valid debt status")]
    InvalidDebtStatus(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("student.student_id") =>
            {
                Error::DuplicateStudentId
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("schedule.debt_id") =>
            {
                Error::DuplicateSchedule
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
