// src/handlers/pages.rs
use crate::app_state::AppState;
use crate::domain::knowledge::{search_articles, select_category, DEFAULT_CATEGORY};
use crate::domain::map::place_markers;
use crate::domain::view::{derive, paginate, ViewQuery};
use crate::errors::ResultResp;
use crate::forms::Params;
use crate::responses::html_response;
use crate::templates::pages::{
    knowledge_base_page, public_board_page, success_stories_page, BoardView, BoardVm,
    KnowledgeVm, StoriesVm, StoryLayout,
};
use crate::templates::pages::success_stories::ALL_CATEGORIES;

const DEFAULT_SORT: &str = "recent";

pub fn public_board(state: &AppState, params: &Params) -> ResultResp {
    let query = ViewQuery::new(
        params.get_or("q", ""),
        params.get_or("filter", ""),
        params.get_or("sort", DEFAULT_SORT),
    );
    let view = BoardView::parse(params.get_or("view", ""));
    // A malformed page number just shows the first page.
    let page_no = params
        .get("page")
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(1);

    let derived = derive(&state.seed.complaints, &query);
    let page = paginate(derived, state.settings.board_page_size, page_no);
    let markers = match view {
        BoardView::Map => place_markers(&mut rand::thread_rng(), &page.items),
        BoardView::List => Vec::new(),
    };

    tracing::debug!(
        search = %query.search,
        filter = %query.filter,
        shown = page.items.len(),
        matched = page.total,
        "public board derived"
    );

    html_response(
        public_board_page(&BoardVm {
            query: &query,
            view,
            page: &page,
            markers: &markers,
            total_records: state.seed.complaints.len(),
        }),
        None,
    )
}

pub fn success_stories(state: &AppState, params: &Params) -> ResultResp {
    let search = params.get_or("q", "");
    let category = params.get_or("category", ALL_CATEGORIES);
    let query = ViewQuery::new(search, category, "");
    let stories = derive(&state.seed.success_stories, &query);

    html_response(
        success_stories_page(&StoriesVm {
            search,
            category: &query.filter,
            layout: StoryLayout::parse(params.get_or("layout", "")),
            stories: &stories,
        }),
        None,
    )
}

pub fn knowledge_base(state: &AppState, params: &Params) -> ResultResp {
    let categories = &state.seed.knowledge_base;
    let search = params.get_or("q", "");
    let selected = select_category(categories, params.get_or("category", DEFAULT_CATEGORY));
    let results = search_articles(categories, search);

    html_response(
        knowledge_base_page(&KnowledgeVm {
            categories,
            selected,
            search,
            results: &results,
        }),
        None,
    )
}
