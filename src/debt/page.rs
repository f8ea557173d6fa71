//! The debt detail page and the debt sections of the index page.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    alert::{ErrorFlag, ErrorQuery, error_alert, redirect_with_error},
    api::DEFAULT_LIST_LIMIT,
    app_state::{DatabaseState, lock_connection},
    date_time::format_timestamp,
    debt::{Debt, DebtId, DebtStatus, get_debt},
    endpoints::{self, format_endpoint},
    html::{
        ACTIVE_BADGE_STYLE, BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, PAID_BADGE_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, link, post_button,
        text_input,
    },
    student::{Student, StudentId, get_student, get_students},
};

/// Render the page for viewing and editing a debt.
pub async fn get_debt_page(
    State(state): State<DatabaseState>,
    Path(debt_id): Path<DebtId>,
    Query(query): Query<ErrorQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let Some(debt) = get_debt(debt_id, &connection)? else {
        return Ok(redirect_with_error(endpoints::ROOT, ErrorFlag::DebtNotFound));
    };
    let mut students = get_students(0, DEFAULT_LIST_LIMIT, &connection)?;
    // The current student is always offered, even past the first page.
    if !students.iter().any(|student| student.id == debt.student_id) {
        students.extend(get_student(debt.student_id, &connection)?);
    }

    Ok(debt_view(&debt, &students, query.flag()).into_response())
}

fn debt_view(debt: &Debt, students: &[Student], error: Option<ErrorFlag>) -> Markup {
    let update_endpoint = format_endpoint(endpoints::UPDATE_DEBT, debt.id);
    let pay_endpoint = format_endpoint(endpoints::PAY_DEBT, debt.id);
    let delete_endpoint = format_endpoint(endpoints::DELETE_DEBT, debt.id);
    let debt_view = format_endpoint(endpoints::DEBT_VIEW, debt.id);

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Debt: " (debt.subject) " " (status_badge(debt.status)) }

            @if let Some(flag) = error {
                (error_alert(flag))
            }

            section
            {
                h2 { "Edit Debt" }

                form method="post" action=(update_endpoint) class=(FORM_CONTAINER_STYLE)
                {
                    (student_select(students, Some(debt.student_id)))
                    (text_input("subject", "Subject", &debt.subject))

                    div
                    {
                        label for="status" class=(FORM_LABEL_STYLE) { "Status" }

                        select id="status" name="status" required class=(FORM_TEXT_INPUT_STYLE)
                        {
                            @for status in [DebtStatus::Active, DebtStatus::Paid] {
                                option value=(status.as_str()) selected[status == debt.status]
                                {
                                    (status_label(status))
                                }
                            }
                        }
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                }
            }

            section
            {
                @if debt.status == DebtStatus::Active {
                    (post_button(&pay_endpoint, "Mark as paid", BUTTON_PRIMARY_STYLE))
                }

                (post_button(&delete_endpoint, "Delete debt", BUTTON_DELETE_STYLE))
            }

            p
            {
                (link(&format_endpoint(endpoints::STUDENT_VIEW, debt.student_id), "View student"))
                " | "
                (link(endpoints::ROOT, "Back to all records"))
            }
        }
    };

    base("Debt", &debt_view, &content)
}

fn status_label(status: DebtStatus) -> &'static str {
    match status {
        DebtStatus::Active => "Active",
        DebtStatus::Paid => "Paid",
    }
}

fn status_badge(status: DebtStatus) -> Markup {
    let style = match status {
        DebtStatus::Active => ACTIVE_BADGE_STYLE,
        DebtStatus::Paid => PAID_BADGE_STYLE,
    };

    html! {
        span class=(style) { (status_label(status)) }
    }
}

/// A dropdown for choosing the student a debt belongs to.
fn student_select(students: &[Student], selected: Option<StudentId>) -> Markup {
    html! {
        div
        {
            label for="student_id" class=(FORM_LABEL_STYLE) { "Student" }

            select id="student_id" name="student_id" required class=(FORM_TEXT_INPUT_STYLE)
            {
                @for student in students {
                    option value=(student.id) selected[Some(student.id) == selected]
                    {
                        (student.name) " (" (student.student_id) ")"
                    }
                }
            }
        }
    }
}

/// A table of debts, used on the index and student pages.
pub fn debts_table(debts: &[Debt]) -> Markup {
    html! {
        table
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Subject" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Student" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Created" }
                }
            }

            tbody
            {
                @for debt in debts {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            (link(&format_endpoint(endpoints::DEBT_VIEW, debt.id), &debt.id.to_string()))
                        }
                        td class=(TABLE_CELL_STYLE) { (debt.subject) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            (link(&format_endpoint(endpoints::STUDENT_VIEW, debt.student_id), &debt.student_id.to_string()))
                        }
                        td class=(TABLE_CELL_STYLE) { (status_badge(debt.status)) }
                        td class=(TABLE_CELL_STYLE) { (format_timestamp(debt.created_at)) }
                    }
                }

                @if debts.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="5" class=(TABLE_CELL_STYLE) { "No debts." }
                    }
                }
            }
        }
    }
}

/// The form for recording a debt on the index page.
pub fn new_debt_form(students: &[Student]) -> Markup {
    html! {
        form method="post" action=(endpoints::POST_DEBT) class=(FORM_CONTAINER_STYLE)
        {
            (student_select(students, None))
            (text_input("subject", "Subject", ""))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add debt" }
        }
    }
}

#[cfg(test)]
mod debt_page_tests {
    use axum::extract::{Path, Query, State};

    use crate::{
        alert::ErrorQuery,
        api::DEFAULT_LIST_LIMIT,
        debt::pay_debt,
        endpoints::{self, format_endpoint},
        test_utils::{
            assert_form_action, assert_form_input_with_value, assert_form_select,
            assert_form_submit_button, assert_redirect, assert_status_ok, assert_valid_html,
            get_test_state, must_create_debt, must_create_student, must_get_form_with_action,
            parse_html_document,
        },
    };

    use super::get_debt_page;

    #[tokio::test]
    async fn renders_edit_form_with_debt_values() {
        let state = get_test_state();
        let (student, debt) = {
            let connection = state.connection();
            must_create_student("S001", &connection);
            let student = must_create_student("S100", &connection);
            let debt = must_create_debt("Algorithms", &student, &connection);
            (student, debt)
        };
        let update_endpoint = format_endpoint(endpoints::UPDATE_DEBT, debt.id);

        let response = get_debt_page(State(state), Path(debt.id), Query(ErrorQuery::default()))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form_with_action(&html, &update_endpoint);
        assert_form_action(&form, &update_endpoint);
        assert_form_select(&form, "student_id", &student.id.to_string());
        assert_form_input_with_value(&form, "subject", "text", "Algorithms");
        assert_form_select(&form, "status", "active");
        assert_form_submit_button(&form);

        let pay_form =
            must_get_form_with_action(&html, &format_endpoint(endpoints::PAY_DEBT, debt.id));
        assert_form_submit_button(&pay_form);
        let delete_form =
            must_get_form_with_action(&html, &format_endpoint(endpoints::DELETE_DEBT, debt.id));
        assert_form_submit_button(&delete_form);
    }

    #[tokio::test]
    async fn student_dropdown_includes_current_student_past_first_page() {
        let state = get_test_state();
        let (student, debt) = {
            let connection = state.connection();
            for i in 0..DEFAULT_LIST_LIMIT {
                must_create_student(&format!("S{i:03}"), &connection);
            }
            let student = must_create_student("S999", &connection);
            let debt = must_create_debt("Algorithms", &student, &connection);
            (student, debt)
        };

        let response = get_debt_page(State(state), Path(debt.id), Query(ErrorQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let form =
            must_get_form_with_action(&html, &format_endpoint(endpoints::UPDATE_DEBT, debt.id));
        assert_form_select(&form, "student_id", &student.id.to_string());
    }

    #[tokio::test]
    async fn paid_debt_has_no_pay_button() {
        let state = get_test_state();
        let debt = {
            let connection = state.connection();
            let student = must_create_student("S100", &connection);
            let debt = must_create_debt("Algorithms", &student, &connection);
            pay_debt(debt.id, &connection).unwrap().unwrap()
        };

        let response = get_debt_page(State(state), Path(debt.id), Query(ErrorQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let pay_endpoint = format_endpoint(endpoints::PAY_DEBT, debt.id);
        let pay_forms = html
            .select(&scraper::Selector::parse("form").unwrap())
            .filter(|form| form.value().attr("action") == Some(pay_endpoint.as_str()))
            .count();
        assert_eq!(pay_forms, 0);
        let update_form =
            must_get_form_with_action(&html, &format_endpoint(endpoints::UPDATE_DEBT, debt.id));
        assert_form_select(&update_form, "status", "paid");
    }

    #[tokio::test]
    async fn missing_debt_redirects_with_error() {
        let state = get_test_state();

        let response = get_debt_page(State(state), Path(42), Query(ErrorQuery::default()))
            .await
            .unwrap();

        assert_redirect(&response, "/?error=debt_not_found");
    }
}
