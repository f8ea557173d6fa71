//! Academic debts: subjects a student still has to pass.

mod api;
mod core;
mod db;
mod form;
mod page;

pub use api::{
    create_debt_api, delete_debt_api, get_debt_api, list_debts_api, list_student_debts_api,
    pay_debt_api, update_debt_api,
};
pub use core::{Debt, DebtForm, DebtId, DebtStatus, create_debt_table};
pub use db::{
    create_debt, delete_debt, get_active_student_debts, get_debt, get_debts, get_student_debts,
    pay_debt, update_debt,
};
pub use form::{
    create_debt_endpoint, delete_debt_endpoint, pay_debt_endpoint, update_debt_endpoint,
};
pub use page::{debts_table, get_debt_page, new_debt_form};
