#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use db::{get_test_state, must_create_debt, must_create_schedule, must_create_student};
pub(crate) use form::{
    assert_form_action, assert_form_input, assert_form_input_with_value, assert_form_select,
    assert_form_submit_button, assert_form_submit_button_with_text, must_get_form,
    must_get_form_with_action,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{assert_content_type, assert_redirect, assert_status_ok, get_header};
