//! Students and the pages, forms and API endpoints for managing them.

mod api;
mod core;
mod db;
mod form;
mod page;

pub use api::{
    create_student_api, delete_student_api, get_student_api, list_students_api,
    search_student_api, update_student_api,
};
pub use core::{Student, StudentForm, StudentId, create_student_table};
pub use db::{
    create_student, delete_student, find_student_by_external_id, get_student, get_students,
    student_exists, update_student,
};
pub use form::{create_student_endpoint, delete_student_endpoint, update_student_endpoint};
pub use page::{get_student_page, new_student_form, students_table};
