//! Database operations for debts.

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    Error,
    date_time::now_utc,
    debt::core::{DEBT_COLUMNS, Debt, DebtForm, DebtId, DebtStatus, map_row_to_debt},
    student::{StudentId, student_exists},
};

/// Create a debt for the student `form.student_id`.
///
/// Returns `None` if there is no student with the ID `form.student_id`.
pub fn create_debt(form: &DebtForm, connection: &Connection) -> Result<Option<Debt>, Error> {
    let transaction = connection.unchecked_transaction()?;

    if !student_exists(form.student_id, &transaction)? {
        return Ok(None);
    }

    let created_at = now_utc();
    transaction.execute(
        "INSERT INTO debt (subject, student_id, status, created_at) VALUES (?1, ?2, ?3, ?4);",
        params![form.subject, form.student_id, form.status, created_at],
    )?;
    let id = transaction.last_insert_rowid();

    transaction.commit()?;

    Ok(Some(Debt {
        id,
        subject: form.subject.clone(),
        student_id: form.student_id,
        status: form.status,
        created_at,
    }))
}

/// Retrieve a single debt by its database ID.
pub fn get_debt(id: DebtId, connection: &Connection) -> Result<Option<Debt>, Error> {
    connection
        .prepare(&format!("SELECT {DEBT_COLUMNS} FROM debt WHERE id = :id;"))?
        .query_row(&[(":id", &id)], map_row_to_debt)
        .optional()
        .map_err(Error::from)
}

/// Retrieve a page of debts in the order they were created.
pub fn get_debts(offset: u32, limit: u32, connection: &Connection) -> Result<Vec<Debt>, Error> {
    connection
        .prepare(&format!(
            "SELECT {DEBT_COLUMNS} FROM debt ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?
        .query_map(params![limit, offset], map_row_to_debt)?
        .map(|maybe_debt| maybe_debt.map_err(Error::from))
        .collect()
}

/// Retrieve every debt owed by the student `student_id`, paid or not.
pub fn get_student_debts(student_id: StudentId, connection: &Connection) -> Result<Vec<Debt>, Error> {
    connection
        .prepare(&format!(
            "SELECT {DEBT_COLUMNS} FROM debt WHERE student_id = :student_id ORDER BY id ASC;"
        ))?
        .query_map(&[(":student_id", &student_id)], map_row_to_debt)?
        .map(|maybe_debt| maybe_debt.map_err(Error::from))
        .collect()
}

/// Retrieve the debts still outstanding for the student `student_id`.
pub fn get_active_student_debts(
    student_id: StudentId,
    connection: &Connection,
) -> Result<Vec<Debt>, Error> {
    connection
        .prepare(&format!(
            "SELECT {DEBT_COLUMNS} FROM debt \
            WHERE student_id = ?1 AND status = ?2 ORDER BY id ASC;"
        ))?
        .query_map(params![student_id, DebtStatus::Active], map_row_to_debt)?
        .map(|maybe_debt| maybe_debt.map_err(Error::from))
        .collect()
}

/// Replace all fields of the debt `id` with the fields in `form`.
///
/// Returns `None` if there is no debt with the ID `id`, or if there is no
/// student with the ID `form.student_id`.
pub fn update_debt(
    id: DebtId,
    form: &DebtForm,
    connection: &Connection,
) -> Result<Option<Debt>, Error> {
    let transaction = connection.unchecked_transaction()?;

    if !student_exists(form.student_id, &transaction)? {
        return Ok(None);
    }

    let rows_affected = transaction.execute(
        "UPDATE debt SET subject = ?1, student_id = ?2, status = ?3 WHERE id = ?4;",
        params![form.subject, form.student_id, form.status, id],
    )?;

    if rows_affected == 0 {
        return Ok(None);
    }

    let debt = get_debt(id, &transaction)?;
    transaction.commit()?;

    Ok(debt)
}

/// Mark the debt `id` as paid.
///
/// Paying a debt that is already paid is allowed and leaves it paid.
/// Returns `None` if there is no debt with the ID `id`.
pub fn pay_debt(id: DebtId, connection: &Connection) -> Result<Option<Debt>, Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction.execute(
        "UPDATE debt SET status = ?1 WHERE id = ?2;",
        params![DebtStatus::Paid, id],
    )?;

    if rows_affected == 0 {
        return Ok(None);
    }

    let debt = get_debt(id, &transaction)?;
    transaction.commit()?;

    Ok(debt)
}

/// Delete a debt along with its scheduled session, if any.
///
/// Returns `false` if there is no debt with the ID `id`.
pub fn delete_debt(id: DebtId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute("DELETE FROM debt WHERE id = ?1;", [id])?;

    Ok(rows_affected != 0)
}

#[cfg(test)]
mod debt_query_tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        debt::{
            DebtForm, DebtStatus, create_debt, delete_debt, get_debt, get_debts,
            get_student_debts, pay_debt, update_debt,
        },
        student::{Student, StudentForm, create_student, delete_student},
    };

    use super::get_active_student_debts;

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn must_create_student(student_id: &str, connection: &Connection) -> Student {
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

    fn debt_form(student: &Student, subject: &str) -> DebtForm {
        DebtForm {
            subject: subject.to_owned(),
            student_id: student.id,
            status: DebtStatus::default(),
        }
    }

    #[test]
    fn create_debt_succeeds() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);

        let debt = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .expect("student should exist");

        assert!(debt.id > 0);
        assert_eq!(debt.subject, "Algorithms");
        assert_eq!(debt.student_id, student.id);
        assert_eq!(debt.status, DebtStatus::Active);
        assert_eq!(get_debt(debt.id, &connection), Ok(Some(debt)));
    }

    #[test]
    fn create_debt_with_missing_student_returns_none() {
        let connection = get_test_db_connection();

        let result = create_debt(
            &DebtForm {
                subject: "Algorithms".to_owned(),
                student_id: 42,
                status: DebtStatus::Active,
            },
            &connection,
        );

        assert_eq!(result, Ok(None));
        assert_eq!(get_debts(0, 100, &connection), Ok(vec![]));
    }

    #[test]
    fn get_debt_with_invalid_id_returns_none() {
        let connection = get_test_db_connection();

        assert_eq!(get_debt(999999, &connection), Ok(None));
    }

    #[test]
    fn get_debts_returns_insertion_order_with_paging() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let debts: Vec<_> = ["Algorithms", "Databases", "Compilers"]
            .iter()
            .map(|subject| {
                create_debt(&debt_form(&student, subject), &connection)
                    .unwrap()
                    .unwrap()
            })
            .collect();

        assert_eq!(get_debts(0, 100, &connection).unwrap(), debts);
        assert_eq!(get_debts(1, 1, &connection).unwrap(), debts[1..2]);
    }

    #[test]
    fn get_student_debts_only_returns_that_students_debts() {
        let connection = get_test_db_connection();
        let ivanov = must_create_student("S100", &connection);
        let petrova = must_create_student("S200", &connection);
        let want = create_debt(&debt_form(&ivanov, "Algorithms"), &connection)
            .unwrap()
            .unwrap();
        create_debt(&debt_form(&petrova, "Databases"), &connection).unwrap();

        let got = get_student_debts(ivanov.id, &connection);

        assert_eq!(got, Ok(vec![want]));
    }

    #[test]
    fn get_active_student_debts_excludes_paid_debts() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let paid = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .unwrap();
        let active = create_debt(&debt_form(&student, "Databases"), &connection)
            .unwrap()
            .unwrap();
        pay_debt(paid.id, &connection).unwrap();

        let got = get_active_student_debts(student.id, &connection);

        assert_eq!(got, Ok(vec![active]));
    }

    #[test]
    fn update_debt_replaces_all_fields() {
        let connection = get_test_db_connection();
        let ivanov = must_create_student("S100", &connection);
        let petrova = must_create_student("S200", &connection);
        let debt = create_debt(&debt_form(&ivanov, "Algorithms"), &connection)
            .unwrap()
            .unwrap();
        let form = DebtForm {
            subject: "Databases".to_owned(),
            student_id: petrova.id,
            status: DebtStatus::Paid,
        };

        let updated = update_debt(debt.id, &form, &connection)
            .unwrap()
            .expect("debt should exist");

        assert_eq!(updated.id, debt.id);
        assert_eq!(updated.subject, form.subject);
        assert_eq!(updated.student_id, petrova.id);
        assert_eq!(updated.status, DebtStatus::Paid);
        assert_eq!(updated.created_at, debt.created_at);
    }

    #[test]
    fn update_debt_with_invalid_id_returns_none() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);

        let result = update_debt(999999, &debt_form(&student, "Algorithms"), &connection);

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn update_debt_with_missing_student_returns_none() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let debt = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .unwrap();
        let form = DebtForm {
            student_id: student.id + 1,
            ..debt_form(&student, "Databases")
        };

        let result = update_debt(debt.id, &form, &connection);

        assert_eq!(result, Ok(None));
        assert_eq!(get_debt(debt.id, &connection), Ok(Some(debt)));
    }

    #[test]
    fn pay_debt_is_idempotent() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let debt = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .unwrap();

        let first = pay_debt(debt.id, &connection).unwrap().unwrap();
        let second = pay_debt(debt.id, &connection).unwrap().unwrap();

        assert_eq!(first.status, DebtStatus::Paid);
        assert_eq!(second.status, DebtStatus::Paid);
        assert_eq!(first, second);
    }

    #[test]
    fn pay_debt_with_invalid_id_returns_none() {
        let connection = get_test_db_connection();

        assert_eq!(pay_debt(999999, &connection), Ok(None));
    }

    #[test]
    fn delete_debt_succeeds() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let debt = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .unwrap();

        assert_eq!(delete_debt(debt.id, &connection), Ok(true));
        assert_eq!(get_debt(debt.id, &connection), Ok(None));
    }

    #[test]
    fn delete_debt_with_invalid_id_returns_false() {
        let connection = get_test_db_connection();

        assert_eq!(delete_debt(999999, &connection), Ok(false));
    }

    #[test]
    fn deleting_student_deletes_their_debts() {
        let connection = get_test_db_connection();
        let student = must_create_student("S100", &connection);
        let debt = create_debt(&debt_form(&student, "Algorithms"), &connection)
            .unwrap()
            .unwrap();

        delete_student(student.id, &connection).unwrap();

        assert_eq!(get_debt(debt.id, &connection), Ok(None));
        assert_eq!(get_student_debts(student.id, &connection), Ok(vec![]));
    }
}
