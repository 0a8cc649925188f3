use crate::reddit::Post;

use super::{PageLimit, SearchState};

/// Which body the results panel renders. The error banner is drawn separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Empty,
    Populated,
}

/// `ceil(count / page_size)`, never less than one
pub fn total_pages_for(count: usize, page_size: PageLimit) -> usize {
    count.div_ceil(page_size.as_usize()).max(1)
}

/// Posts on the current page; empty when the cursor is out of range
pub fn visible_page(state: &SearchState) -> &[Post] {
    if state.current_page == 0 {
        return &[];
    }

    let page_size = state.page_size.as_usize();
    let len = state.results.len();
    let start = (state.current_page - 1).saturating_mul(page_size).min(len);
    let end = state.current_page.saturating_mul(page_size).min(len);

    &state.results[start..end]
}

pub fn can_go_prev(state: &SearchState) -> bool {
    state.current_page > 1
}

pub fn can_go_next(state: &SearchState) -> bool {
    state.current_page < state.total_pages
}

pub fn results_view(state: &SearchState) -> ResultsView {
    if state.loading {
        ResultsView::Loading
    } else if state.results.is_empty() {
        ResultsView::Empty
    } else {
        ResultsView::Populated
    }
}

pub fn submit_label(state: &SearchState) -> &'static str {
    if state.loading {
        "Loading..."
    } else {
        "Search"
    }
}
