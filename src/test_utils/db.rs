use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use time::macros::datetime;

use crate::{
    app_state::DatabaseState,
    db::initialize,
    debt::{Debt, DebtForm, DebtStatus, create_debt},
    schedule::{Schedule, ScheduleForm, create_schedule},
    student::{Student, StudentForm, create_student},
};

pub(crate) fn get_test_state() -> DatabaseState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    DatabaseState {
        db_connection: Arc::new(Mutex::new(connection)),
    }
}

impl DatabaseState {
    pub(crate) fn connection(&self) -> MutexGuard<'_, Connection> {
        self.db_connection.lock().expect("Could not lock database")
    }
}

#[track_caller]
pub(crate) fn must_create_student(student_id: &str, connection: &Connection) -> Student {
    create_student(
        &StudentForm {
            name: "Ivanov".to_owned(),
            faculty: "CS".to_owned(),
            group: "101".to_owned(),
            student_id: student_id.to_owned(),
        },
        connection,
    )
    .expect("Could not create test student")
}

#[track_caller]
pub(crate) fn must_create_debt(subject: &str, student: &Student, connection: &Connection) -> Debt {
    create_debt(
        &DebtForm {
            subject: subject.to_owned(),
            student_id: student.id,
            status: DebtStatus::Active,
        },
        connection,
    )
    .expect("Could not create test debt")
    .expect("Test student does not exist")
}

#[track_caller]
pub(crate) fn must_create_schedule(debt: &Debt, connection: &Connection) -> Schedule {
    create_schedule(
        &ScheduleForm {
            debt_id: debt.id,
            group: "101".to_owned(),
            teacher: "Petrov".to_owned(),
            date: datetime!(2025-06-01 10:00),
        },
        connection,
    )
    .expect("Could not create test schedule")
    .expect("Test debt is not active")
}
