use crate::domain::lawyer::{Lawyer, LawyerSelector};
use crate::templates::components::{lawyer_selector, notice};
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn lawyers_page(lawyers: &[Lawyer], selector: &LawyerSelector, message: Option<&str>) -> Markup {
    site_layout(
        "Lawyers",
        "/lawyers",
        html! {
            div class="container mx-auto px-4 py-12 max-w-3xl" {
                div class="text-center mb-8" {
                    h1 class="text-3xl md:text-4xl font-bold mb-4" { "Find Legal Help" }
                    p class="text-lg text-gray-500" {
                        "Book a consultation with a lawyer experienced in corruption and public-interest cases."
                    }
                }
                @if let Some(message) = message {
                    (notice(message))
                }
                div class="rounded-lg border bg-white p-6 shadow-sm" {
                    (lawyer_selector(lawyers, selector, "/lawyers"))
                }
            }
        },
    )
}
