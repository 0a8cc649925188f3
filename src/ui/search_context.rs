use crate::config::use_config;
use crate::reddit::{Post, RedditSearchClient, SearchApiError, SearchBackend};
use crate::search::{SearchAction, SearchController, SearchQuery, SearchState};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::error;

/// Shared search state plus the backend that answers submissions
#[derive(Clone)]
pub struct SearchContext {
    pub state: Signal<SearchState>,
    backend: Arc<dyn SearchBackend>,
}

impl SearchContext {
    /// Run an action through the reducer and spawn the fetch it asks for, if any.
    /// Outcomes are dispatched when they resolve; stale ones are dropped by the reducer.
    pub fn dispatch(&self, action: SearchAction) {
        let mut state = self.state;
        let transition = state.peek().clone().apply(action);
        state.set(transition.state);

        if let Some(request) = transition.effect {
            let backend = self.backend.clone();
            let ctx = self.clone();
            spawn(async move {
                let outcome = SearchController::run_fetch(backend, request).await;
                ctx.dispatch(outcome);
            });
        }
    }
}

/// Stands in for the HTTP client when the configured URL cannot be used
struct MisconfiguredBackend {
    reason: String,
}

#[async_trait::async_trait]
impl SearchBackend for MisconfiguredBackend {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<Post>, SearchApiError> {
        Err(SearchApiError::InvalidUrl(self.reason.clone()))
    }
}

fn make_backend(api_url: &str, user_agent: &str) -> Arc<dyn SearchBackend> {
    match RedditSearchClient::new(api_url) {
        Ok(client) => Arc::new(client.with_user_agent(user_agent)),
        Err(e) => {
            error!("Search client unavailable: {}", e);
            Arc::new(MisconfiguredBackend {
                reason: e.to_string(),
            })
        }
    }
}

/// Provider component to make search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();
    let state = use_signal(|| SearchState::with_limit(config.default_limit));
    let backend = use_hook(|| make_backend(&config.api_url, &config.user_agent));

    use_context_provider(move || SearchContext { state, backend });

    rsx! {
        {children}
    }
}

/// Hook to access the search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
