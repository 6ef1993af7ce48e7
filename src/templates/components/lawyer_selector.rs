use crate::domain::lawyer::{
    booking_dates, booking_times, fee_with_platform, format_booking_date, format_booking_time,
    Lawyer, LawyerSelector, PLATFORM_FEE_PERCENT, SPECIALIZATION_FILTERS,
};
use crate::templates::components::{action_button, badge};
use maud::{html, Markup};

const OUTLINE_BTN: &str = "rounded-md border px-3 py-1 text-sm hover:bg-gray-50 disabled:opacity-40";
const PRIMARY_BTN: &str = "w-full rounded-md bg-blue-700 px-4 py-2 text-white hover:bg-blue-800";

/// "₹2,000"
pub fn rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₹{out}")
}

/// Carousel of lawyers with a booking form for the selected one. Every control
/// posts back to `post_to`.
pub fn lawyer_selector(lawyers: &[Lawyer], selector: &LawyerSelector, post_to: &str) -> Markup {
    let filtered = selector.filtered(lawyers);
    let index = selector.index();
    let current = filtered.get(index).copied();
    let chosen = selector
        .selected()
        .and_then(|id| lawyers.iter().find(|l| l.id == id));

    html! {
        div class="lawyer-selector space-y-4" {
            form method="post" action=(post_to) class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2" {
                div {
                    h3 class="text-lg font-medium" { "Select a Lawyer" }
                    p class="text-sm text-gray-500" { "Choose a legal expert to help with your case" }
                }
                div class="flex gap-2" {
                    select name="specialization" class="rounded-md border px-2 py-1" {
                        @for (value, label) in SPECIALIZATION_FILTERS {
                            option value=(value) selected[selector.specialization() == value] { (label) }
                        }
                    }
                    (action_button("lawyer-filter", "Apply", OUTLINE_BTN))
                }
            }

            @match current {
                Some(lawyer) => {
                    (lawyer_card(lawyer, selector.selected() == Some(lawyer.id), post_to))
                }
                None => {
                    p class="text-sm text-gray-500" { "No lawyers match this specialization." }
                }
            }

            @if filtered.len() > 1 {
                form method="post" action=(post_to) class="flex items-center justify-between" {
                    button type="submit" name="action" value="lawyer-prev" class=(OUTLINE_BTN) disabled[index == 0] { "‹" }
                    span class="text-xs text-gray-500" { (index + 1) " of " (filtered.len()) }
                    button type="submit" name="action" value="lawyer-next" class=(OUTLINE_BTN) disabled[index + 1 >= filtered.len()] { "›" }
                }
            }

            @if let Some(lawyer) = chosen {
                (schedule_form(lawyer, selector, post_to))
            }
        }
    }
}

fn lawyer_card(lawyer: &Lawyer, is_selected: bool, post_to: &str) -> Markup {
    let class = if is_selected {
        "rounded-lg border bg-white p-4 ring-2 ring-blue-700"
    } else {
        "rounded-lg border bg-white p-4"
    };

    html! {
        div class=(class) {
            div class="flex items-start gap-4" {
                div class="flex h-16 w-16 items-center justify-center rounded-full border bg-gray-100 font-semibold" {
                    (lawyer.initials())
                }
                div class="flex-1" {
                    div class="flex justify-between items-start" {
                        div {
                            h4 class="font-medium" { (lawyer.name) }
                            p class="text-sm text-gray-500" { (lawyer.specialization) }
                        }
                        (badge(&format!("{}/hr", rupees(lawyer.hourly_fee)), "bg-blue-50 text-blue-800"))
                    }
                    div class="mt-2 flex items-center text-sm gap-2" {
                        span class="text-yellow-500" { "★ " (lawyer.rating) }
                        span class="text-gray-500" { "(" (lawyer.reviews) " reviews)" }
                        span { "•" }
                        span class="text-gray-500" { (lawyer.experience_years) " years" }
                    }
                    div class="mt-2 flex flex-wrap gap-1" {
                        @for day in &lawyer.availability {
                            (badge(day, "border text-gray-700"))
                        }
                    }
                    @if !is_selected {
                        form method="post" action=(post_to) class="mt-3" {
                            input type="hidden" name="lawyer_id" value=(lawyer.id);
                            (action_button("lawyer-select", "Select", OUTLINE_BTN))
                        }
                    }
                }
            }
        }
    }
}

fn schedule_form(lawyer: &Lawyer, selector: &LawyerSelector, post_to: &str) -> Markup {
    html! {
        form method="post" action=(post_to) class="schedule mt-4 rounded-md border p-4" {
            h4 class="font-medium mb-2" { "Schedule a Consultation with " (lawyer.name) }
            div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-4" {
                label class="text-sm font-medium" {
                    "Select Date"
                    select name="date" class="mt-1 block w-full rounded-md border px-2 py-1" {
                        option value="" { "Choose date" }
                        @for date in booking_dates() {
                            option value=(date.format("%Y-%m-%d")) selected[selector.date() == Some(date)] {
                                (format_booking_date(date))
                            }
                        }
                    }
                }
                label class="text-sm font-medium" {
                    "Select Time"
                    select name="time" class="mt-1 block w-full rounded-md border px-2 py-1" {
                        option value="" { "Choose time" }
                        @for time in booking_times() {
                            option value=(time.format("%H:%M")) selected[selector.time() == Some(time)] {
                                (format_booking_time(time))
                            }
                        }
                    }
                }
            }
            (action_button("book", "Book Consultation", PRIMARY_BTN))
            p class="text-xs text-gray-500 mt-2 text-center" {
                "A " (PLATFORM_FEE_PERCENT) "% platform fee will be added to the lawyer's hourly rate ("
                (rupees(fee_with_platform(lawyer.hourly_fee))) "/hr total)"
            }
        }
    }
}
