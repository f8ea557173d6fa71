//! Creates the application's database schema.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error, debt::create_debt_table, schedule::create_schedule_table,
    student::create_student_table,
};

/// Create the tables for students, debts and schedules if they do not exist.
///
/// Foreign key enforcement is switched on for `connection` first so that
/// deleting a student or debt cascades to the rows that reference it.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Pragmas are ignored inside transactions, so this must run first.
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_student_table(&transaction)?;
    create_debt_table(&transaction)?;
    create_schedule_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
