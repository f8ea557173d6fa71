//! Application router configuration for the browser pages and the JSON API.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    debt::{
        create_debt_api, create_debt_endpoint, delete_debt_api, delete_debt_endpoint,
        get_debt_api, get_debt_page, list_debts_api, list_student_debts_api, pay_debt_api,
        pay_debt_endpoint, update_debt_api, update_debt_endpoint,
    },
    endpoints,
    index_page::{get_index_page, get_search_student_page},
    not_found::get_404_not_found,
    schedule::{
        create_schedule_api, create_schedule_endpoint, delete_schedule_api,
        delete_schedule_endpoint, get_schedule_api, get_schedule_page, list_schedules_api,
        update_schedule_api, update_schedule_endpoint,
    },
    student::{
        create_student_api, create_student_endpoint, delete_student_api,
        delete_student_endpoint, get_student_api, get_student_page, list_students_api,
        search_student_api, update_student_api, update_student_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::SEARCH_STUDENT_VIEW, get(get_search_student_page))
        .route(endpoints::STUDENT_VIEW, get(get_student_page))
        .route(endpoints::DEBT_VIEW, get(get_debt_page))
        .route(endpoints::SCHEDULE_VIEW, get(get_schedule_page));

    // Browser forms can only GET and POST, so updates and deletes get their own paths.
    let form_routes = Router::new()
        .route(endpoints::POST_STUDENT, post(create_student_endpoint))
        .route(endpoints::UPDATE_STUDENT, post(update_student_endpoint))
        .route(endpoints::DELETE_STUDENT, post(delete_student_endpoint))
        .route(endpoints::POST_DEBT, post(create_debt_endpoint))
        .route(endpoints::UPDATE_DEBT, post(update_debt_endpoint))
        .route(endpoints::DELETE_DEBT, post(delete_debt_endpoint))
        .route(endpoints::PAY_DEBT, post(pay_debt_endpoint))
        .route(endpoints::PAY_SCHEDULED_DEBT, post(pay_debt_endpoint))
        .route(endpoints::POST_SCHEDULE, post(create_schedule_endpoint))
        .route(endpoints::UPDATE_SCHEDULE, post(update_schedule_endpoint))
        .route(endpoints::DELETE_SCHEDULE, post(delete_schedule_endpoint))
        .route(endpoints::LEGACY_UPDATE_STUDENT, post(update_student_endpoint))
        .route(endpoints::LEGACY_DELETE_STUDENT, post(delete_student_endpoint))
        .route(endpoints::LEGACY_UPDATE_DEBT, post(update_debt_endpoint))
        .route(endpoints::LEGACY_DELETE_DEBT, post(delete_debt_endpoint))
        .route(endpoints::LEGACY_UPDATE_SCHEDULE, post(update_schedule_endpoint))
        .route(endpoints::LEGACY_DELETE_SCHEDULE, post(delete_schedule_endpoint));

    let api_routes = Router::new()
        .route(
            endpoints::STUDENTS_API,
            post(create_student_api).get(list_students_api),
        )
        .route(endpoints::SEARCH_STUDENT_API, get(search_student_api))
        .route(
            endpoints::STUDENT_API,
            get(get_student_api)
                .put(update_student_api)
                .delete(delete_student_api),
        )
        .route(endpoints::DEBTS_API, post(create_debt_api).get(list_debts_api))
        .route(endpoints::STUDENT_DEBTS_API, get(list_student_debts_api))
        .route(endpoints::PAY_DEBT_API, post(pay_debt_api))
        .route(
            endpoints::DEBT_API,
            get(get_debt_api).put(update_debt_api).delete(delete_debt_api),
        )
        .route(
            endpoints::SCHEDULES_API,
            post(create_schedule_api).get(list_schedules_api),
        )
        .route(
            endpoints::SCHEDULE_API,
            get(get_schedule_api)
                .put(update_schedule_api)
                .delete(delete_schedule_api),
        );

    page_routes
        .merge(form_routes)
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
