use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::navigation::NavBar;

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "button button-delete";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "table-header";

pub const TABLE_ROW_STYLE: &str = "table-row";

pub const TABLE_CELL_STYLE: &str = "table-cell";

// Status badges
pub const ACTIVE_BADGE_STYLE: &str = "badge badge-active";
pub const PAID_BADGE_STYLE: &str = "badge badge-paid";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page-container";

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
nav { display: flex; gap: 1.5rem; padding: 1rem 1.5rem; background: #fff; border-bottom: 1px solid #e5e7eb; }
nav a { color: #111827; text-decoration: none; }
nav a.current { color: #1d4ed8; font-weight: 600; }
.page-container { max-width: 64rem; margin: 0 auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 2rem; }
.form-container { max-width: 28rem; display: flex; flex-direction: column; gap: 1rem; }
.form-label { display: block; margin-bottom: 0.25rem; font-size: 0.875rem; font-weight: 500; }
.form-input { display: block; width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.25rem; box-sizing: border-box; }
.button { padding: 0.5rem 1rem; border: none; border-radius: 0.25rem; cursor: pointer; }
.button-primary { background: #3b82f6; color: #fff; }
.button-delete { background: transparent; color: #dc2626; text-decoration: underline; }
.link { color: #2563eb; text-decoration: underline; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.table-header { background: #f3f4f6; text-transform: uppercase; font-size: 0.75rem; }
.table-row { background: #fff; border-bottom: 1px solid #e5e7eb; }
.table-cell { padding: 0.75rem 1rem; text-align: left; }
.badge { padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; }
.badge-active { background: #fee2e2; color: #991b1b; }
.badge-paid { background: #dcfce7; color: #166534; }
.alert { padding: 1rem; border-radius: 0.25rem; }
.alert-error { background: #fef2f2; border: 1px solid #fca5a5; color: #991b1b; }
.alert p { margin: 0.25rem 0; }
"#;

pub fn base(title: &str, active_endpoint: &str, content: &Markup) -> Markup {
    let nav_bar = NavBar::new(active_endpoint).into_html();

    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Debt Tracker" }
                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (nav_bar)
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section
            {
                h1 { (header) }
                p { (description) }
                p { (fix) }
                a href="/" class=(LINK_STYLE) { "Back to Homepage" }
            }
        }
    );

    base(title, "", &content)
}

/// A labelled, required text input.
pub fn text_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type="text"
                name=(name)
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A form containing a single button that POSTs to `action`.
pub fn post_button(action: &str, text: &str, style: &str) -> Markup {
    html! {
        form method="post" action=(action)
        {
            button type="submit" class=(style) { (text) }
        }
    }
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
