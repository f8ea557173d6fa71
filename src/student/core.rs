//! Core student types and the student table schema.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::DatabaseId;

/// Database identifier for a student.
pub type StudentId = DatabaseId;

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The surrogate key generated by the database.
    pub id: StudentId,
    /// The student's full name.
    pub name: String,
    /// The faculty the student is enrolled in.
    pub faculty: String,
    /// The student's study group, e.g. "101".
    pub group: String,
    /// The identifier printed on the student card, unique across all students.
    pub student_id: String,
    /// When the student was registered.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The fields needed to create a student or replace an existing student's
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    /// The student's full name.
    pub name: String,
    /// The faculty the student is enrolled in.
    pub faculty: String,
    /// The student's study group.
    pub group: String,
    /// The identifier printed on the student card.
    pub student_id: String,
}

pub fn create_student_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS student (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            faculty TEXT NOT NULL,
            \"group\" TEXT NOT NULL,
            student_id TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_student_student_id ON student(student_id);",
    )?;

    Ok(())
}

/// The columns selected by [map_row_to_student], in order.
pub const STUDENT_COLUMNS: &str = "id, name, faculty, \"group\", student_id, created_at";

pub fn map_row_to_student(row: &Row) -> Result<Student, rusqlite::Error> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        faculty: row.get(2)?,
        group: row.get(3)?,
        student_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}
