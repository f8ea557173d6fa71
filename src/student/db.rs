//! Database operations for students.

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    Error,
    date_time::now_utc,
    student::core::{STUDENT_COLUMNS, Student, StudentForm, StudentId, map_row_to_student},
};

/// Create a student and return it with its generated ID and timestamp.
///
/// # Errors
/// Returns [Error::DuplicateStudentId] if another student already has
/// `form.student_id`, or an SQL error.
pub fn create_student(form: &StudentForm, connection: &Connection) -> Result<Student, Error> {
    let created_at = now_utc();

    connection.execute(
        "INSERT INTO student (name, faculty, \"group\", student_id, created_at) \
        VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            form.name,
            form.faculty,
            form.group,
            form.student_id,
            created_at
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Student {
        id,
        name: form.name.clone(),
        faculty: form.faculty.clone(),
        group: form.group.clone(),
        student_id: form.student_id.clone(),
        created_at,
    })
}

/// Retrieve a single student by its database ID.
pub fn get_student(id: StudentId, connection: &Connection) -> Result<Option<Student>, Error> {
    connection
        .prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM student WHERE id = :id;"
        ))?
        .query_row(&[(":id", &id)], map_row_to_student)
        .optional()
        .map_err(Error::from)
}

/// Retrieve a single student by the identifier on their student card.
pub fn find_student_by_external_id(
    student_id: &str,
    connection: &Connection,
) -> Result<Option<Student>, Error> {
    connection
        .prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM student WHERE student_id = :student_id;"
        ))?
        .query_row(&[(":student_id", student_id)], map_row_to_student)
        .optional()
        .map_err(Error::from)
}

/// Retrieve a page of students in the order they were created.
pub fn get_students(offset: u32, limit: u32, connection: &Connection) -> Result<Vec<Student>, Error> {
    connection
        .prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM student ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?
        .query_map(params![limit, offset], map_row_to_student)?
        .map(|maybe_student| maybe_student.map_err(Error::from))
        .collect()
}

/// Whether a student with the database ID `id` exists.
pub fn student_exists(id: StudentId, connection: &Connection) -> Result<bool, Error> {
    connection
        .query_row(
            "SELECT EXISTS (SELECT 1 FROM student WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Replace all fields of the student `id` with the fields in `form`.
///
/// Returns `None` if there is no student with the ID `id`.
///
/// # Errors
/// Returns [Error::DuplicateStudentId] if another student already has
/// `form.student_id`, or an SQL error.
pub fn update_student(
    id: StudentId,
    form: &StudentForm,
    connection: &Connection,
) -> Result<Option<Student>, Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction.execute(
        "UPDATE student \
        SET name = ?1, faculty = ?2, \"group\" = ?3, student_id = ?4 \
        WHERE id = ?5;",
        params![form.name, form.faculty, form.group, form.student_id, id],
    )?;

    if rows_affected == 0 {
        return Ok(None);
    }

    let student = get_student(id, &transaction)?;
    transaction.commit()?;

    Ok(student)
}

/// Delete a student along with all of their debts and scheduled sessions.
///
/// Returns `false` if there is no student with the ID `id`.
pub fn delete_student(id: StudentId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute("DELETE FROM student WHERE id = ?1;", [id])?;

    Ok(rows_affected != 0)
}
