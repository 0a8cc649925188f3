use crate::reddit::Post;
use tracing::{debug, info, warn};

use super::pagination::total_pages_for;
use super::{PageLimit, SearchQuery, FETCH_ERROR_MESSAGE};

/// Everything the search screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub subreddit: String,
    pub keywords: String,
    /// Selector value; only affects pagination once a search using it succeeds
    pub limit: PageLimit,
    pub loading: bool,
    pub results: Vec<Post>,
    pub error: Option<String>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Limit of the request whose response produced `results`
    pub page_size: PageLimit,
    /// Sequence number of the newest submitted request, 0 before any
    pub latest_request: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_limit(PageLimit::default())
    }
}

impl SearchState {
    pub fn with_limit(limit: PageLimit) -> Self {
        Self {
            subreddit: String::new(),
            keywords: String::new(),
            limit,
            loading: false,
            results: Vec::new(),
            error: None,
            current_page: 1,
            total_pages: 1,
            page_size: limit,
            latest_request: 0,
        }
    }

    /// Query built from the current form fields
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            subreddit: self.subreddit.clone(),
            keywords: self.keywords.clone(),
            limit: self.limit,
        }
    }

    /// Apply one action, returning the next state and any request to issue
    pub fn apply(self, action: SearchAction) -> Transition {
        match action {
            SearchAction::SetSubreddit(subreddit) => Transition::state(Self { subreddit, ..self }),
            SearchAction::SetKeywords(keywords) => Transition::state(Self { keywords, ..self }),
            SearchAction::SetLimit(limit) => Transition::state(Self { limit, ..self }),
            SearchAction::Submit => self.submit(),
            SearchAction::FetchSucceeded {
                id,
                posts,
                page_size,
            } => self.fetch_succeeded(id, posts, page_size),
            SearchAction::FetchFailed { id } => self.fetch_failed(id),
            SearchAction::GoToPage(page) => Transition::state(Self {
                current_page: page,
                ..self
            }),
        }
    }

    fn submit(self) -> Transition {
        let query = self.query();
        if let Err(e) = query.validate() {
            info!("Search rejected: {}", e);
            return Transition::state(Self {
                error: Some(e.user_message().to_string()),
                ..self
            });
        }

        let id = self.latest_request + 1;
        info!(
            "Submitting search #{}: r/{} keywords={:?} limit={}",
            id,
            query.subreddit,
            query.keyword_terms(),
            query.limit
        );

        Transition {
            state: Self {
                loading: true,
                error: None,
                latest_request: id,
                ..self
            },
            effect: Some(FetchRequest { id, query }),
        }
    }

    fn fetch_succeeded(self, id: u64, posts: Vec<Post>, page_size: PageLimit) -> Transition {
        if id != self.latest_request {
            debug!(
                "Dropping stale response #{} (latest is #{})",
                id, self.latest_request
            );
            return Transition::state(self);
        }

        let total_pages = total_pages_for(posts.len(), page_size);
        info!(
            "Search #{} returned {} post(s), {} page(s)",
            id,
            posts.len(),
            total_pages
        );

        Transition::state(Self {
            loading: false,
            results: posts,
            current_page: 1,
            total_pages,
            page_size,
            ..self
        })
    }

    fn fetch_failed(self, id: u64) -> Transition {
        if id != self.latest_request {
            debug!(
                "Dropping stale failure #{} (latest is #{})",
                id, self.latest_request
            );
            return Transition::state(self);
        }

        warn!("Search #{} failed", id);
        Transition::state(Self {
            loading: false,
            error: Some(FETCH_ERROR_MESSAGE.to_string()),
            ..self
        })
    }
}

/// Discrete events that move the search screen between states
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetSubreddit(String),
    SetKeywords(String),
    SetLimit(PageLimit),
    Submit,
    FetchSucceeded {
        id: u64,
        posts: Vec<Post>,
        page_size: PageLimit,
    },
    FetchFailed {
        id: u64,
    },
    /// Move the pagination cursor; not clamped
    GoToPage(usize),
}

/// A request the caller must run against the search backend
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub id: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SearchState,
    pub effect: Option<FetchRequest>,
}

impl Transition {
    fn state(state: SearchState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}
