use crate::search::{submit_label, PageLimit, SearchAction};
use crate::ui::use_search;
use dioxus::prelude::*;
use tracing::warn;

/// Subreddit, keywords and post-limit inputs with the submit button and error banner
#[component]
pub fn SearchForm() -> Element {
    let search_ctx = use_search();

    let (subreddit, keywords, limit, label, error) = {
        let state = search_ctx.state.read();
        (
            state.subreddit.clone(),
            state.keywords.clone(),
            state.limit,
            submit_label(&state),
            state.error.clone(),
        )
    };

    rsx! {
        div { class: "panel search-panel",
            h2 { class: "panel-title", "Reddit Search" }
            form {
                onsubmit: {
                    let search_ctx = search_ctx.clone();
                    move |event: FormEvent| {
                        event.prevent_default();
                        search_ctx.dispatch(SearchAction::Submit);
                    }
                },
                div { class: "field",
                    label { class: "field-label", r#for: "subreddit", "Subreddit Name" }
                    input {
                        id: "subreddit",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "e.g., learnpython",
                        value: "{subreddit}",
                        oninput: {
                            let search_ctx = search_ctx.clone();
                            move |event: FormEvent| {
                                search_ctx.dispatch(SearchAction::SetSubreddit(event.value()));
                            }
                        },
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "keywords", "Keywords (comma separated)" }
                    input {
                        id: "keywords",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "e.g., AI, Python, machine learning",
                        value: "{keywords}",
                        oninput: {
                            let search_ctx = search_ctx.clone();
                            move |event: FormEvent| {
                                search_ctx.dispatch(SearchAction::SetKeywords(event.value()));
                            }
                        },
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "limit", "Number of Posts" }
                    select {
                        id: "limit",
                        class: "field-input",
                        value: "{limit}",
                        onchange: {
                            let search_ctx = search_ctx.clone();
                            move |event: FormEvent| match event.value().parse::<PageLimit>() {
                                Ok(limit) => search_ctx.dispatch(SearchAction::SetLimit(limit)),
                                Err(e) => warn!("Ignoring limit selection: {}", e),
                            }
                        },
                        for choice in PageLimit::ALL {
                            option {
                                value: "{choice}",
                                selected: choice == limit,
                                "{choice}"
                            }
                        }
                    }
                }
                button { class: "submit-button", r#type: "submit", "{label}" }
            }
            if let Some(error) = error {
                p { class: "error-banner", "{error}" }
            }
        }
    }
}
