// src/domain/view.rs

use crate::domain::record::Record;
use std::cmp::Reverse;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Recent,
    Popular,
    Comments,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recent, SortKey::Popular, SortKey::Comments];

    /// Unknown keys yield `None`, which keeps the filtered order.
    pub fn parse(raw: &str) -> Option<SortKey> {
        match raw.trim().to_lowercase().as_str() {
            "recent" => Some(SortKey::Recent),
            "popular" => Some(SortKey::Popular),
            "comments" => Some(SortKey::Comments),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::Comments => "comments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recent => "Most Recent",
            SortKey::Popular => "Most Upvoted",
            SortKey::Comments => "Most Commented",
        }
    }
}

pub const FILTER_ALL: &str = "all";

/// Transient search/filter/sort input for a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    /// `"all"`, a status label or a category label.
    pub filter: String,
    pub sort: Option<SortKey>,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: FILTER_ALL.to_string(),
            sort: None,
        }
    }
}

impl ViewQuery {
    pub fn new(search: &str, filter: &str, sort: &str) -> Self {
        let filter = filter.trim();
        Self {
            search: search.to_string(),
            filter: if filter.is_empty() {
                FILTER_ALL.to_string()
            } else {
                filter.to_string()
            },
            sort: SortKey::parse(sort),
        }
    }

    pub fn filter_is_all(&self) -> bool {
        self.filter.eq_ignore_ascii_case(FILTER_ALL)
    }

    /// Filter predicate: status/category match AND search match.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_filter(record) && self.matches_search(record)
    }

    fn matches_filter(&self, record: &Record) -> bool {
        if self.filter_is_all() {
            return true;
        }
        let wanted = self.filter.to_lowercase();
        record.category.label().to_lowercase() == wanted
            || record
                .status_label()
                .is_some_and(|status| status.to_lowercase() == wanted)
    }

    /// Blank search text matches everything; otherwise the text is used as
    /// typed, surrounding spaces included.
    fn matches_search(&self, record: &Record) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            record.title.as_str(),
            record.description.as_str(),
            record.location.as_str(),
            record.category.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filters then sorts `records`. Sorting is stable, so ties keep input order.
pub fn derive<'a, I>(records: I, query: &ViewQuery) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out: Vec<&'a Record> = records.into_iter().filter(|r| query.matches(r)).collect();

    match query.sort {
        Some(SortKey::Recent) => out.sort_by_key(|r| Reverse(r.date)),
        Some(SortKey::Popular) => out.sort_by_key(|r| Reverse(r.upvotes)),
        Some(SortKey::Comments) => out.sort_by_key(|r| Reverse(r.comments)),
        None => {}
    }

    out
}

/// A window over a derived sequence for "Load More" style paging.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a Record>,
    pub total: usize,
    /// Page number to request for more rows, if any remain.
    pub next_page: Option<usize>,
}

/// Shows the first `page * page_size` rows. Without a page size, everything
/// is shown. `page` is 1-based; 0 is treated as 1.
pub fn paginate(items: Vec<&Record>, page_size: Option<usize>, page: usize) -> Page<'_> {
    let total = items.len();
    let Some(size) = page_size.filter(|s| *s > 0) else {
        return Page {
            items,
            total,
            next_page: None,
        };
    };

    let page = page.max(1);
    let shown = size.saturating_mul(page).min(total);
    let next_page = (shown < total).then_some(page + 1);

    Page {
        items: items.into_iter().take(shown).collect(),
        total,
        next_page,
    }
}
