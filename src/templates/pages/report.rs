// templates/pages/report.rs
//
// The report wizard. Every control is a plain form that posts back to
// /report with an `action` field; the session keeps the wizard between posts.

use crate::domain::lawyer::{Lawyer, LawyerSelector};
use crate::domain::wizard::{IncidentType, ReportWizard, Step, DATETIME_LOCAL_FORMAT};
use crate::templates::components::{action_button, lawyer_selector, notice, progress_bar};
use crate::templates::site_layout;
use maud::{html, Markup};

const POST_TO: &str = "/report";
const OUTLINE_BTN: &str = "rounded-md border px-4 py-2 hover:bg-gray-50";
const PRIMARY_BTN: &str = "ml-auto rounded-md bg-blue-700 px-4 py-2 text-white hover:bg-blue-800";
const INPUT: &str = "mt-1 block w-full rounded-md border px-3 py-2";

fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

pub struct ReportVm<'a> {
    pub wizard: &'a ReportWizard,
    pub lawyers: &'a [Lawyer],
    pub selector: &'a LawyerSelector,
    pub notice: Option<&'a str>,
}

pub fn report_page(vm: &ReportVm<'_>) -> Markup {
    let wizard = vm.wizard;
    let anonymous = wizard.draft().anonymous;

    site_layout(
        "Report an Incident",
        POST_TO,
        html! {
            div class="container mx-auto px-4 py-12 max-w-4xl" {
                div class="text-center mb-8" {
                    h1 class="text-3xl md:text-4xl font-bold mb-4" { "Report an Incident" }
                    p class="text-lg text-gray-500" {
                        "Your report can make a difference. All information is encrypted and your identity can remain anonymous."
                    }
                }

                @if let Some(message) = vm.notice {
                    (notice(message))
                }

                div class="rounded-lg border border-t-4 border-t-blue-700 bg-white shadow-lg" {
                    div class="flex justify-between items-center p-6 pb-4" {
                        div {
                            h2 class="text-lg font-semibold" { "Incident Report Form" }
                            p class="text-sm text-gray-500" { "Please provide as much detail as possible" }
                        }
                        form method="post" action=(POST_TO) class="flex items-center gap-2" {
                            input type="hidden" name="enabled" value=(flag(!anonymous));
                            span class="text-sm font-medium" { "Anonymous Mode" }
                            (action_button(
                                "toggle-anonymous",
                                if anonymous { "On" } else { "Off" },
                                "rounded-full border px-3 py-1 text-xs",
                            ))
                        }
                    }

                    div class="px-6 mb-6" {
                        (progress_bar(wizard.progress()))
                        div class="flex justify-between mt-2 text-sm text-gray-500" {
                            @for step in Step::ALL {
                                span class=(if step == wizard.step() { "font-medium text-blue-700" } else { "" }) {
                                    (step.label())
                                }
                            }
                        }
                    }

                    div class="p-6 pt-0" {
                        @match wizard.step() {
                            Step::BasicDetails => { (basic_details(wizard)) }
                            Step::Evidence => {
                                (evidence(vm))
                                (navigation(wizard.step()))
                            }
                            Step::Review => {
                                (review(wizard))
                                (navigation(wizard.step()))
                            }
                            Step::Submit => { (ready_to_submit(anonymous)) }
                        }
                    }
                }
            }
        },
    )
}

/// Previous/Next buttons. Step 1 renders its own form because its fields
/// travel with the navigation post.
fn navigation(step: Step) -> Markup {
    html! {
        form method="post" action=(POST_TO) class="flex justify-between border-t pt-6 mt-6" {
            (nav_buttons(step))
        }
    }
}

fn nav_buttons(step: Step) -> Markup {
    html! {
        @if step != Step::BasicDetails {
            (action_button("previous", "Previous", OUTLINE_BTN))
        }
        @if step != Step::Submit {
            (action_button("next", "Next", PRIMARY_BTN))
        }
    }
}

fn basic_details(wizard: &ReportWizard) -> Markup {
    let draft = wizard.draft();
    let occurred_at = draft
        .occurred_at
        .map(|dt| dt.format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_default();

    html! {
        form method="post" action=(POST_TO) class="space-y-6" {
            label class="block text-base font-medium" {
                "Type of Incident"
                select name="incident_type" class=(INPUT) {
                    option value="" { "Select incident type" }
                    @for kind in IncidentType::ALL {
                        option value=(kind.slug()) selected[draft.incident_type == Some(kind)] { (kind.label()) }
                    }
                }
            }
            div class="grid md:grid-cols-2 gap-4" {
                label class="block text-base font-medium" {
                    "Location"
                    input type="text" name="location" class=(INPUT)
                        placeholder="Enter location of incident" value=(draft.location);
                }
                label class="block text-base font-medium" {
                    "Date and Time"
                    input type="datetime-local" name="occurred_at" class=(INPUT) value=(occurred_at);
                }
            }
            label class="block text-base font-medium" {
                "Description"
                textarea name="description" rows="5" class=(INPUT)
                    placeholder="Provide a detailed description of what happened..."
                { (draft.description) }
            }
            label class="block text-base font-medium" {
                "People Involved"
                textarea name="people_involved" rows="3" class=(INPUT)
                    placeholder="List names, designations, or descriptions of people involved..."
                { (draft.people_involved) }
            }
            div class="flex justify-between border-t pt-6" {
                (action_button("save", "Save Draft", OUTLINE_BTN))
                (nav_buttons(Step::BasicDetails))
            }
        }
    }
}

fn evidence(vm: &ReportVm<'_>) -> Markup {
    let draft = vm.wizard.draft();

    html! {
        h3 class="text-lg font-medium mb-4" { "Upload Evidence" }
        form method="post" action=(POST_TO) class="border-2 border-dashed border-gray-300 rounded-lg p-6 text-center" {
            p class="text-gray-500 mb-2" { "Choose a file to attach to your report" }
            p class="text-xs text-gray-500 mb-4" {
                "Supports images, videos, audio, and documents (up to 50MB per file)"
            }
            input type="file" name="evidence" class="mb-4";
            (action_button("attach", "Attach File", OUTLINE_BTN))
        }

        @if !draft.evidence_files.is_empty() {
            div class="mt-6" {
                h4 class="font-medium mb-2" { "Uploaded Files (" (draft.evidence_files.len()) ")" }
                ul class="space-y-2" {
                    @for (index, file) in draft.evidence_files.iter().enumerate() {
                        li class="flex items-center justify-between bg-gray-100 p-2 rounded-md" {
                            span class="text-sm truncate max-w-[200px]" { (file.name) }
                            form method="post" action=(POST_TO) {
                                input type="hidden" name="index" value=(index);
                                (action_button("remove", "×", "h-8 w-8 rounded-md hover:bg-gray-200"))
                            }
                        }
                    }
                }
            }
        }

        div class="mt-6" {
            form method="post" action=(POST_TO) class="flex items-center gap-2" {
                input type="hidden" name="enabled" value=(flag(!draft.legal_assistance));
                (action_button(
                    "toggle-legal",
                    if draft.legal_assistance { "On" } else { "Off" },
                    "rounded-full border px-3 py-1 text-xs",
                ))
                span class="font-medium" { "I need legal assistance with this case" }
            }

            @if draft.legal_assistance {
                div class="mt-4 p-4 border rounded-md bg-gray-50" {
                    h4 class="font-medium mb-2" { "Connect with a Lawyer" }
                    p class="text-sm text-gray-500 mb-4" {
                        "We can connect you with qualified lawyers who specialize in cases like yours."
                    }
                    (lawyer_selector(vm.lawyers, vm.selector, POST_TO))
                }
            }
        }
    }
}

fn review(wizard: &ReportWizard) -> Markup {
    html! {
        h3 class="text-lg font-medium mb-4" { "Review Your Report" }
        dl class="review space-y-4 bg-gray-50 p-4 rounded-md" {
            @for (label, value) in wizard.draft().review() {
                div {
                    dt class="font-medium text-sm text-gray-500" { (label) }
                    dd { (value) }
                }
            }
        }
        div class="mt-6 bg-yellow-50 border border-yellow-200 rounded-md p-4" {
            h4 class="font-medium text-yellow-800" { "Important Notice" }
            p class="text-sm text-yellow-700" {
                "By submitting this report, you confirm that all information provided is true to the best of your knowledge. False reporting may have legal consequences."
            }
        }
    }
}

fn ready_to_submit(anonymous: bool) -> Markup {
    html! {
        div class="text-center" {
            h3 class="text-xl font-medium mb-2" { "Ready to Submit Your Report" }
            p class="text-gray-500 mb-6" {
                "Your report will be securely submitted and reviewed by our team."
                @if anonymous {
                    " Your identity will remain anonymous."
                } @else {
                    " You will receive updates on your registered email or phone."
                }
            }
            form method="post" action=(POST_TO) class="flex justify-between border-t pt-6" {
                (nav_buttons(Step::Submit))
                (action_button("submit", "Submit Report", PRIMARY_BTN))
            }
        }
    }
}
