//! Form handlers for creating, updating and deleting students from the browser.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    alert::{ErrorFlag, redirect_with_error},
    app_state::{DatabaseState, lock_connection},
    endpoints::{self, format_endpoint},
    student::{StudentForm, StudentId, create_student, delete_student, update_student},
};

/// The fields of the student edit form.
///
/// The external identifier is submitted as `student_id_value` so it cannot be
/// confused with the `student_id` in the URL.
#[derive(Debug, Deserialize)]
pub struct UpdateStudentFormData {
    pub name: String,
    pub faculty: String,
    pub group: String,
    pub student_id_value: String,
}

impl From<UpdateStudentFormData> for StudentForm {
    fn from(form: UpdateStudentFormData) -> Self {
        StudentForm {
            name: form.name,
            faculty: form.faculty,
            group: form.group,
            student_id: form.student_id_value,
        }
    }
}

/// Handle the new student form on the index page.
pub async fn create_student_endpoint(
    State(state): State<DatabaseState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    match create_student(&form, &connection) {
        Ok(_) => Ok(Redirect::to(endpoints::ROOT).into_response()),
        Err(Error::DuplicateStudentId) => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::DuplicateStudentId,
        )),
        Err(error) => Err(error),
    }
}

/// Handle the edit form on the student detail page.
pub async fn update_student_endpoint(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
    Form(form): Form<UpdateStudentFormData>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let student_view = format_endpoint(endpoints::STUDENT_VIEW, student_id);

    match update_student(student_id, &form.into(), &connection) {
        Ok(Some(_)) => Ok(Redirect::to(&student_view).into_response()),
        Ok(None) => Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::StudentNotFound,
        )),
        Err(Error::DuplicateStudentId) => Ok(redirect_with_error(
            &student_view,
            ErrorFlag::DuplicateStudentId,
        )),
        Err(error) => Err(error),
    }
}

/// Delete a student along with their debts and schedule entries.
pub async fn delete_student_endpoint(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_student(student_id, &connection)? {
        Ok(Redirect::to(endpoints::ROOT).into_response())
    } else {
        Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::StudentNotFound,
        ))
    }
}

#[cfg(test)]
mod student_form_tests {
    use axum::{
        Form,
        extract::{Path, State},
    };

    use crate::{
        endpoints::{self, format_endpoint},
        student::{StudentForm, find_student_by_external_id, get_student},
        test_utils::{assert_redirect, get_test_state, must_create_student},
    };

    use super::{
        UpdateStudentFormData, create_student_endpoint, delete_student_endpoint,
        update_student_endpoint,
    };

    fn student_form(student_id: &str) -> StudentForm {
        StudentForm {
            name: "Ivanov".to_owned(),
            faculty: "CS".to_owned(),
            group: "101".to_owned(),
            student_id: student_id.to_owned(),
        }
    }

    #[tokio::test]
    async fn create_student_redirects_to_index() {
        let state = get_test_state();

        let response = create_student_endpoint(State(state.clone()), Form(student_form("S100")))
            .await
            .unwrap();

        assert_redirect(&response, endpoints::ROOT);
        let student = find_student_by_external_id("S100", &state.connection())
            .unwrap()
            .expect("student should have been created");
        assert_eq!(student.name, "Ivanov");
    }

    #[tokio::test]
    async fn create_duplicate_student_redirects_with_error() {
        let state = get_test_state();
        must_create_student("S100", &state.connection());

        let response = create_student_endpoint(State(state), Form(student_form("S100")))
            .await
            .unwrap();

        assert_redirect(&response, "/?error=duplicate_student_id");
    }

    #[test]
    fn parses_update_form_fields() {
        let form: UpdateStudentFormData = serde_urlencoded::from_str(
            "name=Sidorov&faculty=Math&group=202&student_id_value=S200",
        )
        .unwrap();

        let form: StudentForm = form.into();

        assert_eq!(form.student_id, "S200");
        assert_eq!(form.group, "202");
    }

    #[tokio::test]
    async fn update_student_redirects_to_detail_page() {
        let state = get_test_state();
        let student = must_create_student("S100", &state.connection());
        let form = UpdateStudentFormData {
            name: "Sidorov".to_owned(),
            faculty: "Math".to_owned(),
            group: "202".to_owned(),
            student_id_value: "S200".to_owned(),
        };

        let response = update_student_endpoint(State(state.clone()), Path(student.id), Form(form))
            .await
            .unwrap();

        assert_redirect(&response, &format_endpoint(endpoints::STUDENT_VIEW, student.id));
        let updated = get_student(student.id, &state.connection()).unwrap().unwrap();
        assert_eq!(updated.name, "Sidorov");
        assert_eq!(updated.student_id, "S200");
    }

    #[tokio::test]
    async fn update_to_taken_student_id_redirects_with_error() {
        let state = get_test_state();
        let student = must_create_student("S100", &state.connection());
        must_create_student("S200", &state.connection());
        let form = UpdateStudentFormData {
            name: "Ivanov".to_owned(),
            faculty: "CS".to_owned(),
            group: "101".to_owned(),
            student_id_value: "S200".to_owned(),
        };

        let response = update_student_endpoint(State(state), Path(student.id), Form(form))
            .await
            .unwrap();

        assert_redirect(
            &response,
            &format!(
                "{}?error=duplicate_student_id",
                format_endpoint(endpoints::STUDENT_VIEW, student.id)
            ),
        );
    }

    #[tokio::test]
    async fn update_missing_student_redirects_with_error() {
        let state = get_test_state();
        let form = UpdateStudentFormData {
            name: "Ivanov".to_owned(),
            faculty: "CS".to_owned(),
            group: "101".to_owned(),
            student_id_value: "S100".to_owned(),
        };

        let response = update_student_endpoint(State(state), Path(42), Form(form))
            .await
            .unwrap();

        assert_redirect(&response, "/?error=student_not_found");
    }

    #[tokio::test]
    async fn delete_student_redirects_to_index() {
        let state = get_test_state();
        let student = must_create_student("S100", &state.connection());

        let response = delete_student_endpoint(State(state.clone()), Path(student.id))
            .await
            .unwrap();

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(get_student(student.id, &state.connection()), Ok(None));
    }
}
