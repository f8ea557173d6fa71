//! Makeup sessions scheduled for active debts.

mod api;
mod core;
mod db;
mod form;
mod page;

pub use api::{
    create_schedule_api, delete_schedule_api, get_schedule_api, list_schedules_api,
    update_schedule_api,
};
pub use core::{Schedule, ScheduleForm, ScheduleId, create_schedule_table};
pub use db::{
    create_schedule, delete_schedule, get_schedule, get_scheduled_active_debt_ids, get_schedules,
    update_schedule,
};
pub use form::{create_schedule_endpoint, delete_schedule_endpoint, update_schedule_endpoint};
pub use page::{get_schedule_page, new_schedule_form, schedules_table};
