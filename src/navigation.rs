//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        html! {
            @if self.is_current {
                a href=(self.url) class="current" aria-current="page" { (self.title) }
            } @else {
                a href=(self.url) { (self.title) }
            }
        }
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::ROOT,
                title: "Debt Tracker",
                is_current: active_endpoint == endpoints::ROOT,
            },
            Link {
                url: "/#students",
                title: "Students",
                is_current: false,
            },
            Link {
                url: "/#debts",
                title: "Debts",
                is_current: false,
            },
            Link {
                url: "/#schedule",
                title: "Schedule",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            nav
            {
                @for link in self.links {
                    (link.into_html())
                }
            }
        }
    }
}
