//! The endpoint URIs for the HTML pages, form handlers and JSON API.
//!
//! For endpoints that take a parameter, e.g., '/student/{student_id}', use [format_endpoint].

use std::fmt::Display;

/// The index page listing students, debts and schedules.
pub const ROOT: &str = "/";
/// The index page with the result of searching by student card number.
pub const SEARCH_STUDENT_VIEW: &str = "/search-student";
/// The page showing a single student.
pub const STUDENT_VIEW: &str = "/student/{student_id}";
/// The page showing a single debt.
pub const DEBT_VIEW: &str = "/debt/{debt_id}";
/// The page showing a single schedule entry.
pub const SCHEDULE_VIEW: &str = "/schedule/{schedule_id}";

/// The form handler for creating a student.
pub const POST_STUDENT: &str = "/students/";
/// The form handler for updating a student.
pub const UPDATE_STUDENT: &str = "/student/{student_id}/update";
/// The form handler for deleting a student.
pub const DELETE_STUDENT: &str = "/student/{student_id}/delete";
/// The form handler for creating a debt.
pub const POST_DEBT: &str = "/debts/";
/// The form handler for updating a debt.
pub const UPDATE_DEBT: &str = "/debt/{debt_id}/update";
/// The form handler for deleting a debt.
pub const DELETE_DEBT: &str = "/debt/{debt_id}/delete";
/// The form handler for marking a debt as paid.
pub const PAY_DEBT: &str = "/debt/{debt_id}/pay";
/// The form handler for marking a debt as paid from the schedule table.
pub const PAY_SCHEDULED_DEBT: &str = "/debts/pay/{debt_id}";
/// The form handler for creating a schedule entry.
pub const POST_SCHEDULE: &str = "/schedule/";
/// The form handler for updating a schedule entry.
pub const UPDATE_SCHEDULE: &str = "/schedule/{schedule_id}/update";
/// The form handler for deleting a schedule entry.
pub const DELETE_SCHEDULE: &str = "/schedule/{schedule_id}/delete";

/// Older form handler path for updating a student.
pub const LEGACY_UPDATE_STUDENT: &str = "/students/update/{student_id}";
/// Older form handler path for deleting a student.
pub const LEGACY_DELETE_STUDENT: &str = "/students/delete/{student_id}";
/// Older form handler path for updating a debt.
pub const LEGACY_UPDATE_DEBT: &str = "/debts/update/{debt_id}";
/// Older form handler path for deleting a debt.
pub const LEGACY_DELETE_DEBT: &str = "/debts/delete/{debt_id}";
/// Older form handler path for updating a schedule entry.
pub const LEGACY_UPDATE_SCHEDULE: &str = "/schedule/update/{schedule_id}";
/// Older form handler path for deleting a schedule entry.
pub const LEGACY_DELETE_SCHEDULE: &str = "/schedule/delete/{schedule_id}";

/// The route to list and create students.
pub const STUDENTS_API: &str = "/api/students/";
/// The route to access a single student.
pub const STUDENT_API: &str = "/api/students/{student_id}";
/// The route to look up a student by student card number.
pub const SEARCH_STUDENT_API: &str = "/api/students/search/{student_id}";
/// The route to list and create debts.
pub const DEBTS_API: &str = "/api/debts/";
/// The route to access a single debt.
pub const DEBT_API: &str = "/api/debts/{debt_id}";
/// The route to list a student's debts.
pub const STUDENT_DEBTS_API: &str = "/api/debts/student/{student_id}";
/// The route to mark a debt as paid.
pub const PAY_DEBT_API: &str = "/api/debts/pay/{debt_id}";
/// The route to list and create schedule entries.
pub const SCHEDULES_API: &str = "/api/schedule/";
/// The route to access a single schedule entry.
pub const SCHEDULE_API: &str = "/api/schedule/{schedule_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/student/{student_id}', '{student_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
