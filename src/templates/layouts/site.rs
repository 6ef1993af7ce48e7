use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: [(&str, &str); 6] = [
    ("/report", "Report Incident"),
    ("/public-board", "Public Board"),
    ("/lawyers", "Lawyers"),
    ("/knowledge-base", "Knowledge Base"),
    ("/success-stories", "Success Stories"),
    ("/about", "About"),
];

/// Page chrome shared by every screen. `active` is the path of the current page.
pub fn site_layout(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Nyay Doot" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen flex flex-col" {
                header class="sticky top-0 z-40 bg-white border-b shadow-sm" {
                    div class="container mx-auto px-4 flex items-center justify-between h-16" {
                        a href="/" class="flex items-center gap-2 text-xl font-bold" {
                            // shield
                            svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="24"
                                height="24"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="#1e40af"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            {
                                path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" {}
                            }
                            "Nyay Doot"
                        }
                        nav {
                            ul class="flex gap-6 text-sm font-medium" {
                                @for (href, label) in NAV_LINKS {
                                    li {
                                        a href=(href)
                                          class=(if href == active { "text-blue-700" } else { "hover:text-blue-700" })
                                        { (label) }
                                    }
                                }
                            }
                        }
                    }
                }
                main class="flex-1" {
                    (content)
                }
                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-gray-900 text-white py-12" {
            div class="container mx-auto px-4 grid grid-cols-1 md:grid-cols-4 gap-8" {
                div {
                    h3 class="text-xl font-bold mb-4" { "Nyay Doot" }
                    p class="text-gray-400" { "Empowering citizens against corruption through technology and community." }
                }
                div {
                    h4 class="font-semibold mb-4" { "Quick Links" }
                    ul class="space-y-2 text-gray-400" {
                        @for (href, label) in NAV_LINKS {
                            li { a href=(href) class="hover:text-white" { (label) } }
                        }
                    }
                }
                div {
                    h4 class="font-semibold mb-4" { "Legal" }
                    ul class="space-y-2 text-gray-400" {
                        li { "Privacy Policy" }
                        li { "Terms of Service" }
                    }
                }
                div {
                    h4 class="font-semibold mb-4" { "Connect With Us" }
                    p class="text-gray-400 mb-2" { "Have questions or feedback? Reach out to us." }
                }
            }
            p class="text-center text-gray-500 mt-8" { "© Nyay Doot. All rights reserved." }
        }
    }
}
