//! Database operations for schedule entries.

use std::collections::HashSet;

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    Error,
    date_time::now_utc,
    debt::{DebtId, DebtStatus, get_debt},
    schedule::core::{
        SCHEDULE_COLUMNS, Schedule, ScheduleForm, ScheduleId, map_row_to_schedule,
    },
};

/// Schedule a makeup session for the debt `form.debt_id`.
///
/// Returns `None` if there is no debt with the ID `form.debt_id` or if that
/// debt is not active.
///
/// # Errors
/// Returns [Error::DuplicateSchedule] if the debt already has a session
/// scheduled, or an SQL error.
pub fn create_schedule(
    form: &ScheduleForm,
    connection: &Connection,
) -> Result<Option<Schedule>, Error> {
    let transaction = connection.unchecked_transaction()?;

    match get_debt(form.debt_id, &transaction)? {
        Some(debt) if debt.status == DebtStatus::Active => {}
        _ => return Ok(None),
    }

    let created_at = now_utc();
    transaction.execute(
        "INSERT INTO schedule (debt_id, \"group\", teacher, date, created_at) \
        VALUES (?1, ?2, ?3, ?4, ?5);",
        params![form.debt_id, form.group, form.teacher, form.date, created_at],
    )?;
    let id = transaction.last_insert_rowid();

    transaction.commit()?;

    Ok(Some(Schedule {
        id,
        debt_id: form.debt_id,
        group: form.group.clone(),
        teacher: form.teacher.clone(),
        date: form.date,
        created_at,
    }))
}

/// Retrieve a single schedule entry by its database ID.
pub fn get_schedule(id: ScheduleId, connection: &Connection) -> Result<Option<Schedule>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedule WHERE id = :id;"
        ))?
        .query_row(&[(":id", &id)], map_row_to_schedule)
        .optional()
        .map_err(Error::from)
}

/// Retrieve a page of schedule entries in the order they were created.
pub fn get_schedules(
    offset: u32,
    limit: u32,
    connection: &Connection,
) -> Result<Vec<Schedule>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedule ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?
        .query_map(params![limit, offset], map_row_to_schedule)?
        .map(|maybe_schedule| maybe_schedule.map_err(Error::from))
        .collect()
}

/// Retrieve the IDs of the debts that have a session scheduled and are still
/// active.
pub fn get_scheduled_active_debt_ids(connection: &Connection) -> Result<HashSet<DebtId>, Error> {
    connection
        .prepare(
            "SELECT schedule.debt_id FROM schedule \
            INNER JOIN debt ON debt.id = schedule.debt_id \
            WHERE debt.status = ?1;",
        )?
        .query_map([DebtStatus::Active], |row| row.get::<_, DebtId>(0))?
        .map(|maybe_id| maybe_id.map_err(Error::from))
        .collect()
}

/// Replace all fields of the schedule entry `id` with the fields in `form`.
///
/// Unlike [create_schedule], the debt does not have to be active, so that a
/// session for a paid debt can still be corrected.
/// Returns `None` if there is no entry with the ID `id`, or no debt with the
/// ID `form.debt_id`.
///
/// # Errors
/// Returns [Error::DuplicateSchedule] if `form.debt_id` refers to a different
/// debt that already has a session scheduled, or an SQL error.
pub fn update_schedule(
    id: ScheduleId,
    form: &ScheduleForm,
    connection: &Connection,
) -> Result<Option<Schedule>, Error> {
    let transaction = connection.unchecked_transaction()?;

    if get_debt(form.debt_id, &transaction)?.is_none() {
        return Ok(None);
    }

    let rows_affected = transaction.execute(
        "UPDATE schedule SET debt_id = ?1, \"group\" = ?2, teacher = ?3, date = ?4 \
        WHERE id = ?5;",
        params![form.debt_id, form.group, form.teacher, form.date, id],
    )?;

    if rows_affected == 0 {
        return Ok(None);
    }

    let schedule = get_schedule(id, &transaction)?;
    transaction.commit()?;

    Ok(schedule)
}

/// Delete a schedule entry.
///
/// Returns `false` if there is no entry with the ID `id`.
pub fn delete_schedule(id: ScheduleId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute("DELETE FROM schedule WHERE id = ?1;", [id])?;

    Ok(rows_affected != 0)
}
