//! The schedule entry detail page and the schedule sections of the index page.

use std::collections::HashSet;

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
    date_time::{format_display_date_time, format_form_date_time},
    debt::{Debt, DebtId, get_debt, get_debts},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, link, post_button, text_input,
    },
    schedule::{Schedule, ScheduleId, get_schedule},
};

/// Render the page for viewing and editing a schedule entry.
pub async fn get_schedule_page(
    State(state): State<DatabaseState>,
    Path(schedule_id): Path<ScheduleId>,
    Query(query): Query<ErrorQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let Some(schedule) = get_schedule(schedule_id, &connection)? else {
        return Ok(redirect_with_error(
            endpoints::ROOT,
            ErrorFlag::ScheduleNotFound,
        ));
    };
    let mut debts = get_debts(0, DEFAULT_LIST_LIMIT, &connection)?;
    if !debts.iter().any(|debt| debt.id == schedule.debt_id) {
        debts.extend(get_debt(schedule.debt_id, &connection)?);
    }

    Ok(schedule_view(&schedule, &debts, query.flag()).into_response())
}

fn schedule_view(schedule: &Schedule, debts: &[Debt], error: Option<ErrorFlag>) -> Markup {
    let update_endpoint = format_endpoint(endpoints::UPDATE_SCHEDULE, schedule.id);
    let delete_endpoint = format_endpoint(endpoints::DELETE_SCHEDULE, schedule.id);
    let schedule_view = format_endpoint(endpoints::SCHEDULE_VIEW, schedule.id);

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Makeup Session " (schedule.id) }

            @if let Some(flag) = error {
                (error_alert(flag))
            }

            section
            {
                h2 { "Edit Session" }

                form method="post" action=(update_endpoint) class=(FORM_CONTAINER_STYLE)
                {
                    (debt_select(debts, Some(schedule.debt_id)))
                    (text_input("group", "Group", &schedule.group))
                    (text_input("teacher", "Teacher", &schedule.teacher))
                    (date_input("date", &format_form_date_time(schedule.date)))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                }
            }

            section
            {
                (post_button(&delete_endpoint, "Delete session", BUTTON_DELETE_STYLE))
            }

            p
            {
                (link(&format_endpoint(endpoints::DEBT_VIEW, schedule.debt_id), "View debt"))
                " | "
                (link(endpoints::ROOT, "Back to all records"))
            }
        }
    };

    base("Makeup Session", &schedule_view, &content)
}

fn date_input(name: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { "Date and time" }

            input
                id=(name)
                type="datetime-local"
                name=(name)
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A dropdown for choosing the debt a session is for.
fn debt_select(debts: &[Debt], selected: Option<DebtId>) -> Markup {
    html! {
        div
        {
            label for="debt_id" class=(FORM_LABEL_STYLE) { "Debt" }

            select id="debt_id" name="debt_id" required class=(FORM_TEXT_INPUT_STYLE)
            {
                @for debt in debts {
                    option value=(debt.id) selected[Some(debt.id) == selected]
                    {
                        "#" (debt.id) " " (debt.subject) " (" (debt.status) ")"
                    }
                }
            }
        }
    }
}

/// The table of makeup sessions on the index page.
///
/// Rows whose debt is in `active_debt_ids` get a button for marking the debt
/// as paid.
pub fn schedules_table(schedules: &[Schedule], active_debt_ids: &HashSet<DebtId>) -> Markup {
    html! {
        table
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Debt" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Group" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Teacher" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for schedule in schedules {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            (link(&format_endpoint(endpoints::SCHEDULE_VIEW, schedule.id), &schedule.id.to_string()))
                        }
                        td class=(TABLE_CELL_STYLE)
                        {
                            (link(&format_endpoint(endpoints::DEBT_VIEW, schedule.debt_id), &schedule.debt_id.to_string()))
                        }
                        td class=(TABLE_CELL_STYLE) { (schedule.group) }
                        td class=(TABLE_CELL_STYLE) { (schedule.teacher) }
                        td class=(TABLE_CELL_STYLE) { (format_display_date_time(schedule.date)) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            @if active_debt_ids.contains(&schedule.debt_id) {
                                (post_button(
                                    &format_endpoint(endpoints::PAY_SCHEDULED_DEBT, schedule.debt_id),
                                    "Mark as paid",
                                    BUTTON_PRIMARY_STYLE,
                                ))
                            }
                        }
                    }
                }

                @if schedules.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="6" class=(TABLE_CELL_STYLE) { "No sessions scheduled." }
                    }
                }
            }
        }
    }
}

/// The form for scheduling a makeup session on the index page.
///
/// Only `debts` are offered, so callers should pass the active debts.
pub fn new_schedule_form(debts: &[Debt]) -> Markup {
    html! {
        form method="post" action=(endpoints::POST_SCHEDULE) class=(FORM_CONTAINER_STYLE)
        {
            (debt_select(debts, None))
            (text_input("group", "Group", ""))
            (text_input("teacher", "Teacher", ""))
            (date_input("due_date", ""))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Schedule session" }
        }
    }
}
