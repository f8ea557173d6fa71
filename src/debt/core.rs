//! Core debt types and the debt table schema.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, database_id::DatabaseId, student::StudentId};

/// Database identifier for a debt.
pub type DebtId = DatabaseId;

/// Where a debt is in its lifecycle.
///
/// A debt starts out active and becomes paid once the student completes the
/// coursework or passes the makeup exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// The debt is outstanding and a makeup session may be scheduled for it.
    #[default]
    Active,
    /// The debt has been cleared.
    Paid,
}

impl DebtStatus {
    /// The string stored in the database and used in forms and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Active => "active",
            DebtStatus::Paid => "paid",
        }
    }
}

impl Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DebtStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DebtStatus::Active),
            "paid" => Ok(DebtStatus::Paid),
            other => Err(Error::InvalidDebtStatus(other.to_owned())),
        }
    }
}

impl ToSql for DebtStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for DebtStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A subject a student owes coursework or an exam for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// The surrogate key generated by the database.
    pub id: DebtId,
    /// The name of the course or exam owed.
    pub subject: String,
    /// The database ID of the student that owes the debt.
    pub student_id: StudentId,
    /// Whether the debt is still outstanding.
    pub status: DebtStatus,
    /// When the debt was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The fields needed to create a debt or replace an existing debt's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtForm {
    /// The name of the course or exam owed.
    pub subject: String,
    /// The database ID of the student that owes the debt.
    pub student_id: StudentId,
    /// Defaults to [DebtStatus::Active] when omitted.
    #[serde(default)]
    pub status: DebtStatus,
}

pub fn create_debt_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS debt (
            id INTEGER PRIMARY KEY,
            subject TEXT NOT NULL,
            student_id INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'paid')),
            created_at TEXT NOT NULL,
            FOREIGN KEY(student_id) REFERENCES student(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_debt_student_id ON debt(student_id);",
    )?;

    Ok(())
}

/// The columns selected by [map_row_to_debt], in order.
pub const DEBT_COLUMNS: &str = "id, subject, student_id, status, created_at";

pub fn map_row_to_debt(row: &Row) -> Result<Debt, rusqlite::Error> {
    Ok(Debt {
        id: row.get(0)?,
        subject: row.get(1)?,
        student_id: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}
