use crate::domain::knowledge::{Article, KnowledgeCategory};
use crate::templates::components::card;
use crate::templates::site_layout;
use maud::{html, Markup};

pub struct KnowledgeVm<'a> {
    pub categories: &'a [KnowledgeCategory],
    pub selected: Option<&'a KnowledgeCategory>,
    pub search: &'a str,
    pub results: &'a [(&'a KnowledgeCategory, &'a Article)],
}

pub fn knowledge_base_page(vm: &KnowledgeVm<'_>) -> Markup {
    let selected_slug = vm.selected.map(|c| c.slug.as_str()).unwrap_or_default();

    site_layout(
        "Knowledge Base",
        "/knowledge-base",
        html! {
            div class="container mx-auto px-4 py-12" {
                div class="text-center mb-12" {
                    h1 class="text-4xl font-bold mb-4" { "Knowledge Base" }
                    p class="text-lg text-gray-500 max-w-2xl mx-auto" {
                        "Learn about your rights, how to report corruption, and the legal resources available to you."
                    }
                }

                form method="get" action="/knowledge-base" class="max-w-xl mx-auto mb-8 flex gap-2" {
                    input type="hidden" name="category" value=(selected_slug);
                    input type="search" name="q" value=(vm.search) placeholder="Search articles..."
                        class="flex-1 rounded-md border px-3 py-2";
                    button type="submit" class="rounded-md border px-4 py-2" { "Search" }
                }

                @if !vm.search.trim().is_empty() {
                    section class="search-results max-w-3xl mx-auto mb-12" {
                        h2 class="text-xl font-semibold mb-4" {
                            (vm.results.len()) " results for \"" (vm.search.trim()) "\""
                        }
                        ul class="space-y-3" {
                            @for (category, article) in vm.results {
                                li class="rounded-md border p-4" {
                                    span class="text-xs text-blue-700" { (category.title) }
                                    h3 class="font-medium" { (article.title) }
                                    p class="text-sm text-gray-500" { (article.description) }
                                }
                            }
                        }
                    }
                }

                div class="grid md:grid-cols-12 gap-8" {
                    nav class="md:col-span-4 lg:col-span-3 space-y-2" {
                        @for category in vm.categories {
                            a href={ "/knowledge-base?category=" (category.slug) }
                              class=(if category.slug == selected_slug { "block rounded-md bg-blue-700 px-4 py-2 text-white" } else { "block rounded-md px-4 py-2 hover:bg-gray-100" })
                            { (category.title) }
                        }
                    }

                    div class="md:col-span-8 lg:col-span-9 space-y-6" {
                        @if let Some(category) = vm.selected {
                            (card(&category.title, html! {
                                p class="text-sm text-gray-500 mb-4" { (category.description) }
                                @for article in &category.articles {
                                    details class="article border-b py-3" {
                                        summary class="cursor-pointer font-medium" { (article.title) }
                                        p class="text-gray-500 mt-2" { (article.description) }
                                    }
                                }
                            }))
                        }

                        (card("Popular Resources", html! {
                            div class="grid sm:grid-cols-2 gap-4" {
                                div class="rounded-md border p-4" {
                                    h3 class="font-medium mb-1" { "Beginner's Guide" }
                                    p class="text-sm text-gray-500" { "Start here if you're new to anti-corruption efforts" }
                                }
                                div class="rounded-md border p-4" {
                                    h3 class="font-medium mb-1" { "Community Guidelines" }
                                    p class="text-sm text-gray-500" { "Learn how to engage with our community" }
                                }
                            }
                        }))
                    }
                }
            }
        },
    )
}
