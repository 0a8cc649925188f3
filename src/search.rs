//! Search form state, the reducer that drives it, and the derived result views.
//!
//! The flow is: form input, validation, a single API request per submission,
//! response capture, then client-side pagination over the captured posts.
//! [`SearchState::apply`] is the only place state changes; the controller and
//! the UI both funnel their events through it.

pub mod controller;
pub mod pagination;
pub mod query;
pub mod state;

use crate::reddit::SearchApiError;
use thiserror::Error;

pub use controller::SearchController;
pub use pagination::{
    can_go_next, can_go_prev, results_view, submit_label, total_pages_for, visible_page,
    ResultsView,
};
pub use query::{InvalidPageLimit, PageLimit, SearchQuery};
pub use state::{FetchRequest, SearchAction, SearchState, Transition};

pub const VALIDATION_MESSAGE: &str = "Subreddit and keywords are required.";
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data.";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("Search request failed: {0}")]
    Fetch(#[from] SearchApiError),
}

impl SearchError {
    /// Message shown to the user; fetch failure detail stays in the logs
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Validation => VALIDATION_MESSAGE,
            SearchError::Fetch(_) => FETCH_ERROR_MESSAGE,
        }
    }
}
