use crate::domain::record::{Category, Record};
use crate::templates::components::badge;
use crate::templates::site_layout;
use maud::{html, Markup};
use url::form_urlencoded;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryLayout {
    #[default]
    Grid,
    List,
}

impl StoryLayout {
    pub fn parse(raw: &str) -> StoryLayout {
        match raw {
            "list" => StoryLayout::List,
            _ => StoryLayout::Grid,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            StoryLayout::Grid => "grid",
            StoryLayout::List => "list",
        }
    }
}

pub struct StoriesVm<'a> {
    pub search: &'a str,
    /// `"All"` or a category label.
    pub category: &'a str,
    pub layout: StoryLayout,
    pub stories: &'a [&'a Record],
}

fn stories_href(search: &str, category: &str, layout: StoryLayout) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        qs.append_pair("q", search);
    }
    qs.append_pair("category", category);
    qs.append_pair("layout", layout.as_str());
    format!("/success-stories?{}", qs.finish())
}

pub fn success_stories_page(vm: &StoriesVm<'_>) -> Markup {
    let categories = std::iter::once(ALL_CATEGORIES).chain(Category::STORY_FILTERS.into_iter().map(Category::label));
    let grid_class = match vm.layout {
        StoryLayout::Grid => "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
        StoryLayout::List => "space-y-6",
    };

    site_layout(
        "Success Stories",
        "/success-stories",
        html! {
            div class="container mx-auto px-4 py-12" {
                div class="text-center mb-12" {
                    h1 class="text-4xl font-bold mb-4" { "Success Stories" }
                    p class="text-lg text-gray-500 max-w-2xl mx-auto" {
                        "Real stories of citizens making a difference. These cases demonstrate the power of collective action and transparency in fighting corruption."
                    }
                }

                div class="flex flex-col md:flex-row gap-4 mb-8" {
                    form method="get" action="/success-stories" class="flex-1 flex gap-2" {
                        input type="hidden" name="category" value=(vm.category);
                        input type="hidden" name="layout" value=(vm.layout.as_str());
                        input type="search" name="q" value=(vm.search) placeholder="Search success stories..."
                            class="flex-1 rounded-md border px-3 py-2";
                        button type="submit" class="rounded-md border px-4 py-2" { "Search" }
                    }
                    nav class="flex gap-2" {
                        @for layout in [StoryLayout::Grid, StoryLayout::List] {
                            a href=(stories_href(vm.search, vm.category, layout))
                              class=(if layout == vm.layout { "rounded-md bg-gray-200 px-3 py-2 font-medium" } else { "rounded-md px-3 py-2" })
                            {
                                @match layout {
                                    StoryLayout::Grid => { "Grid" }
                                    StoryLayout::List => { "List" }
                                }
                            }
                        }
                    }
                }

                div class="flex flex-wrap gap-2 mb-8" {
                    @for category in categories {
                        @let active = category.eq_ignore_ascii_case(vm.category);
                        a href=(stories_href(vm.search, category, vm.layout)) {
                            (badge(category, if active { "bg-blue-700 text-white" } else { "border text-gray-700" }))
                        }
                    }
                }

                @if vm.stories.is_empty() {
                    p class="text-center text-gray-500" { "No stories match your search." }
                } @else {
                    div class=(grid_class) {
                        @for story in vm.stories {
                            (story_card(story))
                        }
                    }
                }
            }
        },
    )
}

fn story_card(story: &Record) -> Markup {
    html! {
        article class="story rounded-lg border bg-white p-6 hover:shadow-lg transition-shadow" {
            div class="flex justify-between items-start mb-2" {
                (badge(story.category.label(), "bg-blue-100 text-blue-800"))
                span class="text-sm text-gray-500" { (story.date.format("%d/%m/%Y")) }
            }
            h3 class="text-xl font-semibold mb-2" { (story.title) }
            p class="text-gray-500 mb-4" { (story.description) }
            div class="flex items-center gap-2 text-sm text-gray-500 mb-4" {
                span { (story.location) }
            }
            @if let Some(impact) = &story.impact {
                div class="bg-blue-50 p-3 rounded-md" {
                    p class="text-sm font-medium" { "Impact" }
                    p class="text-blue-700" { (impact) }
                }
            }
            div class="flex gap-4 text-sm text-gray-500 mt-4" {
                span { "▲ " (story.upvotes) }
                span { "💬 " (story.comments) }
            }
        }
    }
}
