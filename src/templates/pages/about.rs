use crate::templates::site_layout;
use maud::{html, Markup};

const VALUES: [(&str, &str); 3] = [
    ("Protect Citizens", "Ensuring safety and anonymity for whistleblowers"),
    ("Promote Justice", "Supporting legal action against corruption"),
    ("Drive Change", "Creating systemic impact through collective action"),
];

const MILESTONES: [(&str, &str, &str); 3] = [
    ("2023", "Platform Launch", "Nyay Doot platform launched to empower citizens against corruption"),
    ("2024", "Community Growth", "Reached 10,000 active users and handled 1,000+ cases"),
    ("2025", "National Recognition", "Received national award for contribution to transparency"),
];

pub fn about_page() -> Markup {
    site_layout(
        "About",
        "/about",
        html! {
            section class="py-20 bg-blue-50" {
                div class="container mx-auto px-4 text-center max-w-3xl" {
                    span class="inline-block rounded-full bg-blue-700 text-white px-3 py-1 text-xs mb-4" { "About Us" }
                    h1 class="text-4xl md:text-5xl font-bold mb-6" { "Empowering Citizens for a Corruption-Free India" }
                    p class="text-xl text-gray-500 mb-8" {
                        "Nyay Doot is a platform dedicated to empowering citizens with tools and resources to fight corruption and promote transparency in public institutions."
                    }
                    a href="/report" class="rounded-md bg-blue-700 text-white px-6 py-3" { "Report an Incident" }
                }
            }

            section class="py-16" {
                div class="container mx-auto px-4 max-w-3xl" {
                    h2 class="text-3xl font-bold mb-6" { "Our Mission" }
                    p class="text-lg text-gray-500 mb-6" {
                        "We believe in the power of collective action and transparency to create lasting change in society. Our mission is to provide citizens with the tools, knowledge, and support they need to stand up against corruption."
                    }
                    div class="grid gap-4" {
                        @for (title, text) in VALUES {
                            div class="rounded-lg border p-4" {
                                h3 class="font-medium mb-1" { (title) }
                                p class="text-sm text-gray-500" { (text) }
                            }
                        }
                    }
                }
            }

            section class="py-16 bg-gray-50" {
                div class="container mx-auto px-4 text-center" {
                    h2 class="text-3xl font-bold mb-4" { "Our Team" }
                    div class="inline-block rounded-lg border bg-white p-6" {
                        h3 class="text-xl font-semibold mb-1" { "Vivek Ingale" }
                        p class="text-blue-700 mb-2" { "Founder & CEO" }
                        p class="text-gray-500" { "Dedicated to bringing transparency and accountability to public institutions." }
                    }
                }
            }

            section class="py-16" {
                div class="container mx-auto px-4 max-w-3xl" {
                    h2 class="text-3xl font-bold mb-8 text-center" { "Our Journey" }
                    ol class="space-y-6" {
                        @for (year, title, text) in MILESTONES {
                            li class="milestone border-l-4 border-blue-700 pl-4" {
                                span class="text-sm font-bold text-blue-700" { (year) }
                                h3 class="text-xl font-semibold mb-2" { (title) }
                                p class="text-gray-500" { (text) }
                            }
                        }
                    }
                }
            }

            section class="py-16 bg-blue-700 text-white text-center" {
                h2 class="text-3xl font-bold mb-6" { "Join Us in Fighting Corruption" }
                a href="/knowledge-base" class="rounded-md bg-white text-blue-700 px-6 py-3" { "Learn Your Rights" }
            }
        },
    )
}
