//! Error flags carried in the query string after a form redirect, and the
//! alert that displays them.

use axum::response::{IntoResponse, Redirect, Response};
use maud::{Markup, html};
use serde::Deserialize;

/// Why a form submission could not be completed.
///
/// Form handlers redirect back to a page with `?error=<flag>` and the page
/// renders the matching alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFlag {
    StudentNotFound,
    DebtNotFound,
    DebtNotFoundOrInactive,
    ScheduleNotFound,
    DuplicateStudentId,
    ScheduleAlreadyExists,
}

impl ErrorFlag {
    const ALL: [ErrorFlag; 6] = [
        ErrorFlag::StudentNotFound,
        ErrorFlag::DebtNotFound,
        ErrorFlag::DebtNotFoundOrInactive,
        ErrorFlag::ScheduleNotFound,
        ErrorFlag::DuplicateStudentId,
        ErrorFlag::ScheduleAlreadyExists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFlag::StudentNotFound => "student_not_found",
            ErrorFlag::DebtNotFound => "debt_not_found",
            ErrorFlag::DebtNotFoundOrInactive => "debt_not_found_or_inactive",
            ErrorFlag::ScheduleNotFound => "schedule_not_found",
            ErrorFlag::DuplicateStudentId => "duplicate_student_id",
            ErrorFlag::ScheduleAlreadyExists => "schedule_already_exists",
        }
    }

    /// Get the flag for a query string value, ignoring unknown values.
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == value)
    }

    fn message(&self) -> &'static str {
        match self {
            ErrorFlag::StudentNotFound => "Student not found",
            ErrorFlag::DebtNotFound => "Debt not found",
            ErrorFlag::DebtNotFoundOrInactive => "Debt not found or already paid",
            ErrorFlag::ScheduleNotFound => "Schedule entry not found",
            ErrorFlag::DuplicateStudentId => "Duplicate student ID",
            ErrorFlag::ScheduleAlreadyExists => "Session already scheduled",
        }
    }

    fn details(&self) -> &'static str {
        match self {
            ErrorFlag::StudentNotFound => {
                "The student could not be found. They may have been deleted."
            }
            ErrorFlag::DebtNotFound => {
                "The debt or the student it belongs to could not be found."
            }
            ErrorFlag::DebtNotFoundOrInactive => {
                "Makeup sessions can only be scheduled for existing, unpaid debts."
            }
            ErrorFlag::ScheduleNotFound => {
                "The schedule entry or the debt it refers to could not be found."
            }
            ErrorFlag::DuplicateStudentId => {
                "Another student already has this student ID. \
                Check the student card number and try again."
            }
            ErrorFlag::ScheduleAlreadyExists => {
                "This debt already has a makeup session. \
                Edit or delete the existing entry instead."
            }
        }
    }
}

/// The query string accepted by pages that display error flags.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorQuery {
    pub error: Option<String>,
}

impl ErrorQuery {
    pub fn flag(&self) -> Option<ErrorFlag> {
        self.error.as_deref().and_then(ErrorFlag::from_query_value)
    }
}

/// Redirect to `path` with `flag` in the query string.
pub fn redirect_with_error(path: &str, flag: ErrorFlag) -> Response {
    let query = serde_urlencoded::to_string([("error", flag.as_str())])
        .unwrap_or_else(|_| format!("error={}", flag.as_str()));

    Redirect::to(&format!("{path}?{query}")).into_response()
}

/// Renders an error alert for `flag`.
pub fn error_alert(flag: ErrorFlag) -> Markup {
    html! {
        div role="alert" class="alert alert-error"
        {
            p class="alert-message" { (flag.message()) }
            p class="alert-details" { (flag.details()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_utils::get_header;

    use super::{ErrorFlag, ErrorQuery, redirect_with_error};

    #[test]
    fn query_values_round_trip() {
        for flag in ErrorFlag::ALL {
            assert_eq!(ErrorFlag::from_query_value(flag.as_str()), Some(flag));
        }
    }

    #[test]
    fn unknown_query_value_is_ignored() {
        let query = ErrorQuery {
            error: Some("<script>".to_owned()),
        };

        assert_eq!(query.flag(), None);
    }

    #[test]
    fn redirect_carries_flag() {
        let response = redirect_with_error("/", ErrorFlag::StudentNotFound);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), "/?error=student_not_found");
    }
}
