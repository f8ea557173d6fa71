//! The index page listing every record, and the student search that extends it.

use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    Error,
    alert::{ErrorFlag, ErrorQuery, error_alert},
    api::DEFAULT_LIST_LIMIT,
    app_state::{DatabaseState, lock_connection},
    debt::{
        Debt, DebtId, DebtStatus, debts_table, get_active_student_debts, get_debts, new_debt_form,
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, link,
    },
    schedule::{
        Schedule, get_scheduled_active_debt_ids, get_schedules, new_schedule_form,
        schedules_table,
    },
    student::{
        Student, find_student_by_external_id, get_students, new_student_form, students_table,
    },
};

/// The query string for the student search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// The identifier on the student's card.
    pub student_id: String,
}

/// What a student search found.
enum SearchResult {
    Found {
        student: Student,
        active_debts: Vec<Debt>,
    },
    NotFound {
        student_id: String,
    },
}

struct IndexData {
    students: Vec<Student>,
    debts: Vec<Debt>,
    schedules: Vec<Schedule>,
    scheduled_active_debt_ids: HashSet<DebtId>,
}

impl IndexData {
    fn load(connection: &Connection) -> Result<Self, Error> {
        Ok(Self {
            students: get_students(0, DEFAULT_LIST_LIMIT, connection)?,
            debts: get_debts(0, DEFAULT_LIST_LIMIT, connection)?,
            schedules: get_schedules(0, DEFAULT_LIST_LIMIT, connection)?,
            scheduled_active_debt_ids: get_scheduled_active_debt_ids(connection)?,
        })
    }
}

/// Render the index page.
pub async fn get_index_page(
    State(state): State<DatabaseState>,
    Query(query): Query<ErrorQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let data = IndexData::load(&connection)?;

    Ok(index_view(&data, query.flag(), None).into_response())
}

/// Render the index page with the result of looking up a student by the
/// identifier on their student card. Only active debts are listed.
pub async fn get_search_student_page(
    State(state): State<DatabaseState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let student_id = query.student_id.trim();
    let search_result = match find_student_by_external_id(student_id, &connection)? {
        Some(student) => {
            let active_debts = get_active_student_debts(student.id, &connection)?;
            SearchResult::Found {
                student,
                active_debts,
            }
        }
        None => SearchResult::NotFound {
            student_id: student_id.to_owned(),
        },
    };
    let data = IndexData::load(&connection)?;

    Ok(index_view(&data, None, Some(&search_result)).into_response())
}

fn index_view(
    data: &IndexData,
    error: Option<ErrorFlag>,
    search_result: Option<&SearchResult>,
) -> Markup {
    let active_debts: Vec<Debt> = data
        .debts
        .iter()
        .filter(|debt| debt.status == DebtStatus::Active)
        .cloned()
        .collect();

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Student Debts" }

            @if let Some(flag) = error {
                (error_alert(flag))
            }

            section id="search"
            {
                h2 { "Find a Student" }
                (search_form())

                @if let Some(search_result) = search_result {
                    (search_result_view(search_result))
                }
            }

            section id="students"
            {
                h2 { "Students" }
                (students_table(&data.students))
                h3 { "Add Student" }
                (new_student_form())
            }

            section id="debts"
            {
                h2 { "Debts" }
                (debts_table(&data.debts))
                h3 { "Add Debt" }
                (new_debt_form(&data.students))
            }

            section id="schedule"
            {
                h2 { "Makeup Sessions" }
                (schedules_table(&data.schedules, &data.scheduled_active_debt_ids))
                h3 { "Schedule Session" }
                (new_schedule_form(&active_debts))
            }
        }
    };

    base("Home", endpoints::ROOT, &content)
}

fn search_form() -> Markup {
    html! {
        form method="get" action=(endpoints::SEARCH_STUDENT_VIEW) class=(FORM_CONTAINER_STYLE)
        {
            div
            {
                label for="search_student_id" class=(FORM_LABEL_STYLE) { "Student ID" }

                input
                    id="search_student_id"
                    type="text"
                    name="student_id"
                    placeholder="e.g. S100"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }
        }
    }
}

fn search_result_view(search_result: &SearchResult) -> Markup {
    match search_result {
        SearchResult::Found {
            student,
            active_debts,
        } => html! {
            article id="search-result"
            {
                h3
                {
                    (link(&endpoints::format_endpoint(endpoints::STUDENT_VIEW, student.id), &student.name))
                }
                p { "Active debts: " span id="debts-count" { (active_debts.len()) } }

                @if !active_debts.is_empty() {
                    ul
                    {
                        @for debt in active_debts {
                            li { (debt.subject) }
                        }
                    }
                }
            }
        },
        SearchResult::NotFound { student_id } => html! {
            article id="search-result"
            {
                p { "No student found with student ID \"" (student_id) "\"." }
            }
        },
    }
}
