use crate::domain::status_style::classify;
use maud::{html, Markup};

pub mod complaint_map;
pub mod error;
pub mod lawyer_selector;

pub use complaint_map::complaint_map;
pub use error::html_error_response;
pub use lawyer_selector::lawyer_selector;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="rounded-lg border bg-white shadow-sm" {
            div class="p-6 pb-2" {
                h2 class="text-lg font-semibold" { (title) }
            }
            div class="p-6 pt-2" {
                (body)
            }
        }
    }
}

pub fn badge(label: &str, class: &str) -> Markup {
    html! {
        span class={ "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold " (class) } {
            (label)
        }
    }
}

/// Status pill coloured through the shared classifier.
pub fn status_badge(status: &str) -> Markup {
    badge(status, classify(status).badge_class())
}

pub fn progress_bar(value: u8) -> Markup {
    html! {
        div class="h-2 w-full rounded-full bg-gray-200"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(value)
        {
            div class="h-2 rounded-full bg-blue-700" style={ "width: " (value) "%" } {}
        }
    }
}

/// Toast-style message rendered at the top of a page after a form post.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice mb-6 rounded-md border border-green-200 bg-green-50 p-4 text-green-800" role="status" {
            (message)
        }
    }
}

/// A submit button that posts `action=<value>` with its form.
pub fn action_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        button type="submit" name="action" value=(action) class=(class) { (label) }
    }
}
