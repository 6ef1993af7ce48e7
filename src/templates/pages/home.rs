// templates/pages/home.rs

use crate::templates::{components::status_badge, site_layout};
use maud::{html, Markup};

const STATS: [(&str, u32, &str); 4] = [
    ("Total Complaints", 1247, "text-blue-700"),
    ("Cases Resolved", 892, "text-green-600"),
    ("Active Users", 5280, "text-blue-700"),
    ("Lawyers Available", 124, "text-purple-700"),
];

const FEATURES: [(&str, &str); 5] = [
    ("Secure Reporting", "Submit complaints with end-to-end encryption and optional anonymity"),
    ("Evidence Collection", "Upload photos, videos, and documents to strengthen your case"),
    ("Community Support", "Connect with others facing similar issues and build solidarity"),
    ("Legal Assistance", "Get connected with qualified lawyers who can help with your case"),
    ("Location Tracking", "Geo-tag incidents to route complaints to the correct authorities"),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Document the Incident",
        "Capture photos, videos, or audio of the incident with our secure app that automatically adds timestamps and location data.",
    ),
    (
        "Submit Your Report",
        "Fill out our guided form with details about the incident. Choose to remain anonymous or verify your identity for stronger claims.",
    ),
    (
        "Track & Get Support",
        "Follow the progress of your report, connect with lawyers, and get support from the community.",
    ),
];

// (status, title, blurb)
const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "Resolved",
        "Traffic Police Bribery Exposed",
        "Video evidence submitted through our platform led to the suspension of officers demanding bribes at a checkpoint.",
    ),
    (
        "Resolved",
        "Government Office Corruption Halted",
        "Multiple reports on our platform exposed systematic corruption in a local government office, leading to an official investigation.",
    ),
    (
        "Under Investigation",
        "Community Rallies Against Land Grabbing",
        "A village community used our platform to document and fight against illegal land acquisition, gaining legal support through our network.",
    ),
];

/// "5280" -> "5,280"
fn grouped(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn feature_card(title: &str, description: &str) -> Markup {
    html! {
        div class="rounded-lg border bg-white p-6 shadow-sm hover:shadow-md transition-shadow" {
            h3 class="text-xl font-semibold mb-2" { (title) }
            p class="text-gray-500" { (description) }
        }
    }
}

pub fn home_page() -> Markup {
    site_layout(
        "Home",
        "/",
        html! {
            section class="py-20 bg-gradient-to-br from-blue-900 via-blue-800 to-blue-900 text-white" {
                div class="container mx-auto px-4 text-center max-w-4xl" {
                    h1 class="text-4xl md:text-6xl font-bold mb-6" { "Raising Voices, Ensuring Justice" }
                    p class="text-xl md:text-2xl mb-8 text-blue-100" {
                        "Report corruption, police misconduct, and abuse securely. Together we can build a more transparent society."
                    }
                    div class="flex flex-col sm:flex-row gap-4 justify-center" {
                        a href="/report" class="rounded-md bg-white text-blue-900 px-6 py-3 text-lg font-medium" { "Report an Incident →" }
                        a href="/public-board" class="rounded-md border border-white/20 bg-white/10 px-6 py-3 text-lg" { "View Public Board" }
                    }
                }
            }

            section class="py-16 bg-white" {
                div class="container mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-6 text-center" {
                    @for (label, value, colour) in STATS {
                        div class="stat rounded-lg border p-6" {
                            h3 class="text-lg font-medium text-gray-500 mb-2" { (label) }
                            p class={ "text-3xl md:text-4xl font-bold " (colour) } { (grouped(value)) }
                        }
                    }
                }
            }

            section class="py-16 bg-gray-50" {
                div class="container mx-auto px-4" {
                    div class="text-center mb-12" {
                        h2 class="text-3xl md:text-4xl font-bold mb-4" { "How Nyay Doot Works" }
                        p class="text-lg text-gray-500 max-w-2xl mx-auto" {
                            "Our platform provides the tools you need to report, document, and fight corruption."
                        }
                    }
                    div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                        @for (title, description) in FEATURES {
                            (feature_card(title, description))
                        }
                    }
                }
            }

            section class="py-16 bg-white" {
                div class="container mx-auto px-4" {
                    div class="text-center mb-12" {
                        h2 class="text-3xl md:text-4xl font-bold mb-4" { "Report in Three Easy Steps" }
                        p class="text-lg text-gray-500 max-w-2xl mx-auto" {
                            "Our streamlined process makes it easy to document and report incidents while protecting your privacy."
                        }
                    }
                    div class="grid md:grid-cols-3 gap-8" {
                        @for (i, (title, text)) in STEPS.iter().enumerate() {
                            div class="flex flex-col items-center text-center" {
                                div class="w-16 h-16 rounded-full bg-blue-700 text-white flex items-center justify-center text-2xl font-bold mb-4" {
                                    (i + 1)
                                }
                                h3 class="text-xl font-semibold mb-2" { (title) }
                                p class="text-gray-500" { (text) }
                            }
                        }
                    }
                }
            }

            section class="py-16 bg-gradient-to-br from-blue-900 via-blue-800 to-blue-900 text-white text-center" {
                h2 class="text-3xl md:text-4xl font-bold mb-6" { "Ready to Stand Against Corruption?" }
                p class="text-xl mb-8" { "Join thousands of citizens who are making a difference." }
                a href="/report" class="rounded-md border border-white/20 bg-white/10 px-6 py-3 text-lg" { "Report Anonymously" }
            }

            section class="py-16 bg-white" {
                div class="container mx-auto px-4" {
                    div class="text-center mb-12" {
                        h2 class="text-3xl md:text-4xl font-bold mb-4" { "Real Impact, Real Change" }
                    }
                    div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                        @for (status, title, blurb) in HIGHLIGHTS {
                            div class="rounded-lg border p-6" {
                                (status_badge(status))
                                h3 class="text-xl font-semibold my-2" { (title) }
                                p class="text-gray-500 mb-4" { (blurb) }
                            }
                        }
                    }
                    div class="text-center mt-10" {
                        a href="/success-stories" class="rounded-md border px-4 py-2" { "View All Success Stories →" }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_grouped() {
        assert_eq!(grouped(124), "124");
        assert_eq!(grouped(1247), "1,247");
        assert_eq!(grouped(5280), "5,280");
    }

    #[test]
    fn home_lists_every_feature() {
        let html = home_page().into_string();
        for (title, _) in FEATURES {
            assert!(html.contains(title), "missing feature {title}");
        }
        assert!(html.contains("Raising Voices, Ensuring Justice"));
    }
}
