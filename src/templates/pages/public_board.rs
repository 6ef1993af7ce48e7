use crate::domain::map::Marker;
use crate::domain::record::{Record, Status};
use crate::domain::view::{Page, SortKey, ViewQuery, FILTER_ALL};
use crate::templates::components::{badge, complaint_map, status_badge};
use crate::templates::site_layout;
use maud::{html, Markup};
use url::form_urlencoded;

// Sidebar figures shown next to the live total.
const CONTRIBUTORS: u32 = 42;
const RESOLVED: u32 = 18;
const PENDING: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardView {
    #[default]
    List,
    Map,
}

impl BoardView {
    pub fn parse(raw: &str) -> BoardView {
        match raw {
            "map" => BoardView::Map,
            _ => BoardView::List,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            BoardView::List => "list",
            BoardView::Map => "map",
        }
    }
}

pub struct BoardVm<'a> {
    pub query: &'a ViewQuery,
    pub view: BoardView,
    pub page: &'a Page<'a>,
    /// Markers for the map tab; empty in list view.
    pub markers: &'a [Marker<'a>],
    /// Size of the unfiltered dataset.
    pub total_records: usize,
}

/// `/public-board?...` carrying the current query plus the given overrides.
fn board_href(query: &ViewQuery, view: BoardView, page: Option<usize>) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    if !query.search.is_empty() {
        qs.append_pair("q", &query.search);
    }
    if !query.filter_is_all() {
        qs.append_pair("filter", &query.filter);
    }
    if let Some(sort) = query.sort {
        qs.append_pair("sort", sort.as_str());
    }
    qs.append_pair("view", view.as_str());
    if let Some(page) = page {
        qs.append_pair("page", &page.to_string());
    }
    format!("/public-board?{}", qs.finish())
}

pub fn public_board_page(vm: &BoardVm<'_>) -> Markup {
    let query = vm.query;
    let current_filter = query.filter.to_lowercase();

    site_layout(
        "Public Board",
        "/public-board",
        html! {
            div class="container mx-auto px-4 py-12" {
                div class="text-center mb-8" {
                    h1 class="text-3xl md:text-4xl font-bold mb-4" { "Public Complaints Board" }
                    p class="text-lg text-gray-500 max-w-3xl mx-auto" {
                        "View anonymized reports of corruption and misconduct submitted by citizens across India. Your support can help bring these issues to light."
                    }
                }

                div class="grid grid-cols-1 lg:grid-cols-4 gap-8" {
                    aside class="lg:col-span-1" {
                        form method="get" action="/public-board" class="rounded-lg border bg-white p-6 space-y-4 sticky top-20" {
                            h2 class="text-lg font-semibold" { "Filters" }
                            input type="hidden" name="view" value=(vm.view.as_str());
                            label class="block text-sm font-medium" {
                                "Search"
                                input type="search" name="q" value=(query.search)
                                    placeholder="Search complaints..."
                                    class="mt-1 block w-full rounded-md border px-3 py-2";
                            }
                            label class="block text-sm font-medium" {
                                "Status"
                                select name="filter" class="mt-1 block w-full rounded-md border px-3 py-2" {
                                    option value=(FILTER_ALL) selected[query.filter_is_all()] { "All Statuses" }
                                    @for status in Status::ALL {
                                        @let value = status.label().to_lowercase();
                                        option value=(value) selected[current_filter == value] { (status.label()) }
                                    }
                                }
                            }
                            label class="block text-sm font-medium" {
                                "Sort By"
                                select name="sort" class="mt-1 block w-full rounded-md border px-3 py-2" {
                                    @for key in SortKey::ALL {
                                        option value=(key.as_str()) selected[query.sort == Some(key)] { (key.label()) }
                                    }
                                }
                            }
                            button type="submit" class="w-full rounded-md bg-blue-700 px-4 py-2 text-white" { "Apply" }

                            div class="border-t pt-4 space-y-2" {
                                h3 class="font-medium" { "Quick Stats" }
                                div class="grid grid-cols-2 gap-2" {
                                    (quick_stat("Total Reports", vm.total_records as u32))
                                    (quick_stat("Contributors", CONTRIBUTORS))
                                    (quick_stat("Resolved", RESOLVED))
                                    (quick_stat("Pending", PENDING))
                                }
                            }
                            a href="/report" class="block text-center w-full rounded-md border px-4 py-2" { "Submit New Report" }
                        }
                    }

                    section class="lg:col-span-3" {
                        div class="flex justify-between items-center mb-4" {
                            nav class="flex gap-2" {
                                @for view in [BoardView::List, BoardView::Map] {
                                    a href=(board_href(query, view, None))
                                      class=(if view == vm.view { "rounded-md bg-gray-200 px-3 py-1 font-medium" } else { "rounded-md px-3 py-1" })
                                    {
                                        @match view {
                                            BoardView::List => { "List View" }
                                            BoardView::Map => { "Map View" }
                                        }
                                    }
                                }
                            }
                            div class="text-sm text-gray-500" {
                                "Showing " (vm.page.items.len()) " of " (vm.total_records) " reports"
                            }
                        }

                        @match vm.view {
                            BoardView::List => {
                                div class="space-y-4" {
                                    @for record in &vm.page.items {
                                        (complaint_card(record))
                                    }
                                }
                                @if let Some(next) = vm.page.next_page {
                                    div class="mt-8 text-center" {
                                        a href=(board_href(query, vm.view, Some(next))) class="rounded-md border px-4 py-2" { "Load More" }
                                    }
                                }
                            }
                            BoardView::Map => {
                                div class="rounded-lg border overflow-hidden" {
                                    (complaint_map(vm.markers))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn quick_stat(label: &str, value: u32) -> Markup {
    html! {
        div class="bg-gray-100 p-2 rounded-md text-center" {
            p class="text-xs text-gray-500" { (label) }
            p class="font-bold" { (value) }
        }
    }
}

fn complaint_card(record: &Record) -> Markup {
    html! {
        article class="complaint rounded-lg border bg-white p-6 hover:shadow-md transition-shadow" {
            div class="flex justify-between" {
                div {
                    (badge(record.category.label(), "border text-gray-700 mb-2"))
                    h3 class="text-xl font-semibold" { (record.title) }
                }
                @if let Some(status) = record.status_label() {
                    (status_badge(status))
                }
            }
            p class="text-gray-500 my-4" { (record.description) }
            div class="flex flex-wrap gap-4 text-sm text-gray-500" {
                span { (record.location) }
                span { (record.date.format("%d/%m/%Y")) }
                @if record.evidence {
                    span class="text-green-600" { "Evidence Attached" }
                }
            }
            div class="flex justify-between items-center border-t pt-4 mt-4" {
                div class="flex items-center gap-2" {
                    span class="flex h-6 w-6 items-center justify-center rounded-full bg-gray-200 text-xs" {
                        (record.reporter_initial())
                    }
                    span class="text-sm" { (record.reporter_name()) }
                }
                div class="flex gap-4 text-sm" {
                    span { "▲ " (record.upvotes) }
                    span { "💬 " (record.comments) }
                }
            }
        }
    }
}
