//! The student detail page and the student sections of the index page.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    alert::{ErrorFlag, ErrorQuery, error_alert, redirect_with_error},
    app_state::{DatabaseState, lock_connection},
    date_time::format_timestamp,
    debt::{Debt, debts_table, get_student_debts},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, link, post_button,
        text_input,
    },
    student::{Student, StudentId, get_student},
};

/// Render the page for viewing and editing a student.
pub async fn get_student_page(
    State(state): State<DatabaseState>,
    Path(student_id): Path<StudentId>,
    Query(query): Query<ErrorQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let Some(student) = get_student(student_id, &connection)? else {
        return Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::StudentNotFound,
        ));
    };
    let debts = get_student_debts(student_id, &connection)?;

    Ok(student_view(&student, &debts, query.flag()).into_response())
}

fn student_view(student: &Student, debts: &[Debt], error: Option<ErrorFlag>) -> Markup {
    let update_endpoint = format_endpoint(endpoints::UPDATE_STUDENT, student.id);
    let delete_endpoint = format_endpoint(endpoints::DELETE_STUDENT, student.id);
    let student_view = format_endpoint(endpoints::STUDENT_VIEW, student.id);

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (student.name) }

            @if let Some(flag) = error {
                (error_alert(flag))
            }

            section
            {
                h2 { "Edit Student" }

                form method="post" action=(update_endpoint) class=(FORM_CONTAINER_STYLE)
                {
                    (text_input("name", "Full name", &student.name))
                    (text_input("faculty", "Faculty", &student.faculty))
                    (text_input("group", "Group", &student.group))
                    (text_input("student_id_value", "Student ID", &student.student_id))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                }
            }

            section
            {
                h2 { "Debts" }
                (debts_table(debts))
            }

            section
            {
                p { "Deleting a student also deletes their debts and makeup sessions." }
                (post_button(&delete_endpoint, "Delete student", BUTTON_DELETE_STYLE))
            }

            p { (link(endpoints::ROOT, "Back to all records")) }
        }
    };

    base("Student", &student_view, &content)
}

/// The table of students on the index page.
pub fn students_table(students: &[Student]) -> Markup {
    html! {
        table
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Faculty" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Group" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Student ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Created" }
                }
            }

            tbody
            {
                @for student in students {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            (link(&format_endpoint(endpoints::STUDENT_VIEW, student.id), &student.id.to_string()))
                        }
                        td class=(TABLE_CELL_STYLE) { (student.name) }
                        td class=(TABLE_CELL_STYLE) { (student.faculty) }
                        td class=(TABLE_CELL_STYLE) { (student.group) }
                        td class=(TABLE_CELL_STYLE) { (student.student_id) }
                        td class=(TABLE_CELL_STYLE) { (format_timestamp(student.created_at)) }
                    }
                }

                @if students.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="6" class=(TABLE_CELL_STYLE) { "No students yet." }
                    }
                }
            }
        }
    }
}

/// The form for adding a student on the index page.
pub fn new_student_form() -> Markup {
    html! {
        form method="post" action=(endpoints::POST_STUDENT) class=(FORM_CONTAINER_STYLE)
        {
            (text_input("name", "Full name", ""))
            (text_input("faculty", "Faculty", ""))
            (text_input("group", "Group", ""))
            (text_input("student_id", "Student ID", ""))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add student" }
        }
    }
}
