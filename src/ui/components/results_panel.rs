use crate::search::{can_go_next, can_go_prev, results_view, visible_page, ResultsView, SearchAction};
use crate::ui::use_search;
use dioxus::prelude::*;

use super::post_card::PostCard;

/// Loading spinner, empty message, or the current page of posts with Prev/Next controls
#[component]
pub fn ResultsPanel() -> Element {
    let search_ctx = use_search();

    let (view, posts, current_page, prev_enabled, next_enabled) = {
        let state = search_ctx.state.read();
        (
            results_view(&state),
            visible_page(&state).to_vec(),
            state.current_page,
            can_go_prev(&state),
            can_go_next(&state),
        )
    };

    rsx! {
        div { class: "panel results-panel",
            h2 { class: "panel-title", "Results" }
            if view == ResultsView::Loading {
                div { class: "spinner-wrap",
                    div { class: "spinner" }
                }
            } else if view == ResultsView::Empty {
                p { class: "empty-state", "No results found." }
            } else {
                div {
                    ul { class: "post-list",
                        for (idx, post) in posts.into_iter().enumerate() {
                            PostCard { key: "{idx}-{post.url}", post }
                        }
                    }
                    div { class: "pagination",
                        button {
                            class: "page-button",
                            disabled: !prev_enabled,
                            onclick: {
                                let search_ctx = search_ctx.clone();
                                move |_| {
                                    search_ctx.dispatch(SearchAction::GoToPage(current_page.saturating_sub(1)));
                                }
                            },
                            "Prev"
                        }
                        span { class: "page-indicator", "Page {current_page}" }
                        button {
                            class: "page-button",
                            disabled: !next_enabled,
                            onclick: {
                                let search_ctx = search_ctx.clone();
                                move |_| {
                                    search_ctx.dispatch(SearchAction::GoToPage(current_page + 1));
                                }
                            },
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
