//! Core schedule types and the schedule table schema.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{database_id::DatabaseId, date_time::session_date, debt::DebtId};

/// Database identifier for a schedule entry.
pub type ScheduleId = DatabaseId;

/// A makeup session scheduled for a debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The surrogate key generated by the database.
    pub id: ScheduleId,
    /// The database ID of the debt the session is for.
    pub debt_id: DebtId,
    /// The study group attending the session.
    pub group: String,
    /// The teacher running the session.
    pub teacher: String,
    /// When the session takes place.
    #[serde(with = "session_date")]
    pub date: PrimitiveDateTime,
    /// When the session was scheduled.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The fields needed to create a schedule entry or replace an existing
/// entry's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleForm {
    /// The database ID of the debt the session is for.
    pub debt_id: DebtId,
    /// The study group attending the session.
    pub group: String,
    /// The teacher running the session.
    pub teacher: String,
    /// When the session takes place.
    ///
    /// The creation form on the index page submits this field as `due_date`.
    #[serde(with = "session_date", alias = "due_date")]
    pub date: PrimitiveDateTime,
}

pub fn create_schedule_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS schedule (
            id INTEGER PRIMARY KEY,
            debt_id INTEGER NOT NULL UNIQUE,
            \"group\" TEXT NOT NULL,
            teacher TEXT NOT NULL,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY(debt_id) REFERENCES debt(id) ON UPDATE CASCADE ON DELETE CASCADE
        )",
        (),
    )?;

    Ok(())
}

/// The columns selected by [map_row_to_schedule], in order.
pub const SCHEDULE_COLUMNS: &str = "id, debt_id, \"group\", teacher, date, created_at";

pub fn map_row_to_schedule(row: &Row) -> Result<Schedule, rusqlite::Error> {
    Ok(Schedule {
        id: row.get(0)?,
        debt_id: row.get(1)?,
        group: row.get(2)?,
        teacher: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}
