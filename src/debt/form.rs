//! Form handlers for debts.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    alert::{ErrorFlag, redirect_with_error},
    app_state::{DatabaseState, lock_connection},
    debt::{DebtForm, DebtId, create_debt, delete_debt, pay_debt, update_debt},
    endpoints::{self, format_endpoint},
};

/// Handle the new debt form on the index page.
///
/// New debts are always active; the form does not send a status.
pub async fn create_debt_endpoint(
    State(state): State<DatabaseState>,
    Form(form): Form<DebtForm>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match create_debt(&form, &connection)? {
        Some(_) => Ok(Redirect::to(endpoints::ROOT).into_response()),
        None => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::StudentNotFound,
        )),
    }
}

/// Handle the edit form on the debt detail page.
pub async fn update_debt_endpoint(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
    Form(form): Form<DebtForm>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match update_debt(debt_id, &form, &connection)? {
        Some(_) => {
            Ok(Redirect::to(&format_endpoint(endpoints::DEBT_VIEW, debt_id)).into_response())
        }
        None => Ok(redirect_with_error(endpoints::ROOT, ErrorFlag::DebtNotFound)),
    }
}

pub async fn pay_debt_endpoint(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match pay_debt(debt_id, &connection)? {
        Some(_) => Ok(Redirect::to(endpoints::ROOT).into_response()),
        None => Ok(redirect_with_error(endpoints::ROOT, ErrorFlag::DebtNotFound)),
    }
}

pub async fn delete_debt_endpoint(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_debt(debt_id, &connection)? {
        Ok(Redirect::to(endpoints::ROOT).into_response())
    } else {
        Ok(redirect_with_error(endpoints::ROOT, ErrorFlag::DebtNotFound))
    }
}
