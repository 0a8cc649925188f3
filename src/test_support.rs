// Test support utilities for both unit and integration tests

use crate::reddit::{Post, SearchApiError, SearchBackend};
use crate::search::SearchQuery;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock search backend for testing
///
/// Answers calls from a queue of canned responses, in call order, and records
/// every query it receives. An empty queue answers with no posts.
#[derive(Default)]
pub struct MockSearchBackend {
    responses: Mutex<VecDeque<Result<Vec<Post>, SearchApiError>>>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl MockSearchBackend {
    /// Create a new mock search backend
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, posts: Vec<Post>) {
        self.responses.lock().unwrap().push_back(Ok(posts));
    }

    pub fn push_err(&self, error: SearchApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Queries received so far, oldest first
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchBackend for MockSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, SearchApiError> {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Build `count` distinct posts titled "Post 0", "Post 1", ...
pub fn sample_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|n| Post {
            title: format!("Post {}", n),
            author: format!("author{}", n),
            score: n as i64,
            comments: (n * 2) as i64,
            created_utc: 1_700_000_000 + n as i64,
            url: format!("https://www.reddit.com/r/learnpython/comments/{}", n),
        })
        .collect()
}
