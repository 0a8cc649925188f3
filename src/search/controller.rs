use crate::reddit::SearchBackend;
use std::sync::Arc;
use tracing::warn;

use super::{FetchRequest, SearchAction, SearchError, SearchState};

/// Owns the search state and mediates between the form, the backend and the result view
pub struct SearchController {
    state: SearchState,
    backend: Arc<dyn SearchBackend>,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self::with_state(SearchState::default(), backend)
    }

    pub fn with_state(state: SearchState, backend: Arc<dyn SearchBackend>) -> Self {
        Self { state, backend }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn backend(&self) -> Arc<dyn SearchBackend> {
        self.backend.clone()
    }

    /// Run the reducer, returning a request the caller must fetch if one was issued
    pub fn dispatch(&mut self, action: SearchAction) -> Option<FetchRequest> {
        let state = std::mem::take(&mut self.state);
        let transition = state.apply(action);
        self.state = transition.state;
        transition.effect
    }

    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        self.dispatch(SearchAction::Submit)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.dispatch(SearchAction::GoToPage(page));
    }

    /// Apply the outcome of a fetch started by [`run_fetch`](Self::run_fetch)
    pub fn complete(&mut self, outcome: SearchAction) {
        self.dispatch(outcome);
    }

    /// Perform one backend call and turn the result into the action that records it
    pub async fn run_fetch(backend: Arc<dyn SearchBackend>, request: FetchRequest) -> SearchAction {
        let FetchRequest { id, query } = request;

        match backend.search(&query).await {
            Ok(posts) => SearchAction::FetchSucceeded {
                id,
                posts,
                page_size: query.limit,
            },
            Err(e) => {
                warn!("Search #{} for r/{} failed: {}", id, query.subreddit, SearchError::from(e));
                SearchAction::FetchFailed { id }
            }
        }
    }

    /// Submit and wait for the response
    pub async fn search(&mut self) {
        if let Some(request) = self.submit_search() {
            let outcome = Self::run_fetch(self.backend(), request).await;
            self.complete(outcome);
        }
    }
}
