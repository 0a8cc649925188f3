#![cfg(feature = "test-utils")]

mod support;

use crate::support::tracing_init;
use std::sync::Arc;
use subreddit_search::reddit::SearchApiError;
use subreddit_search::search::{
    can_go_next, can_go_prev, results_view, visible_page, PageLimit, ResultsView, SearchAction,
    SearchController, FETCH_ERROR_MESSAGE, VALIDATION_MESSAGE,
};
use subreddit_search::test_support::{sample_posts, MockSearchBackend};

fn setup(subreddit: &str, keywords: &str, limit: PageLimit) -> (SearchController, Arc<MockSearchBackend>) {
    tracing_init();

    let backend = Arc::new(MockSearchBackend::new());
    let mut controller = SearchController::new(backend.clone());
    controller.dispatch(SearchAction::SetSubreddit(subreddit.to_string()));
    controller.dispatch(SearchAction::SetKeywords(keywords.to_string()));
    controller.dispatch(SearchAction::SetLimit(limit));

    (controller, backend)
}

fn titles(controller: &SearchController) -> Vec<String> {
    visible_page(controller.state())
        .iter()
        .map(|p| p.title.clone())
        .collect()
}

#[tokio::test]
async fn test_learnpython_scenario() {
    let (mut controller, backend) = setup("learnpython", "AI,Python", PageLimit::Ten);
    backend.push_ok(sample_posts(25));

    controller.search().await;

    let state = controller.state();
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.current_page, 1);
    assert_eq!(results_view(state), ResultsView::Populated);
    assert_eq!(titles(&controller).len(), 10);
    assert_eq!(titles(&controller)[0], "Post 0");
    assert!(!can_go_prev(controller.state()));
    assert!(can_go_next(controller.state()));

    controller.go_to_page(2);
    controller.go_to_page(3);

    let expected: Vec<String> = (20..25).map(|n| format!("Post {}", n)).collect();
    assert_eq!(titles(&controller), expected);
    assert!(can_go_prev(controller.state()));
    assert!(!can_go_next(controller.state()));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].subreddit, "learnpython");
    assert_eq!(calls[0].keywords, "AI,Python");
    assert_eq!(calls[0].limit, PageLimit::Ten);
}

#[tokio::test]
async fn test_missing_fields_never_reach_backend() {
    for (subreddit, keywords) in [("", "AI"), ("learnpython", ""), ("", "")] {
        let (mut controller, backend) = setup(subreddit, keywords, PageLimit::Twenty);

        controller.search().await;

        assert!(backend.calls().is_empty());
        assert_eq!(controller.state().error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!controller.state().loading);
    }
}

#[tokio::test]
async fn test_empty_results_render_empty_state() {
    let (mut controller, backend) = setup("rust", "nothing-matches", PageLimit::Fifty);
    backend.push_ok(Vec::new());

    controller.search().await;

    let state = controller.state();
    assert_eq!(state.total_pages, 1);
    assert_eq!(results_view(state), ResultsView::Empty);
    assert!(!can_go_prev(state));
    assert!(!can_go_next(state));
}

#[tokio::test]
async fn test_loading_state_while_request_in_flight() {
    let (mut controller, backend) = setup("rust", "tokio", PageLimit::Ten);
    backend.push_ok(sample_posts(4));

    let request = controller.submit_search().expect("valid query issues a request");
    assert!(controller.state().loading);
    assert_eq!(results_view(controller.state()), ResultsView::Loading);

    let outcome = SearchController::run_fetch(controller.backend(), request).await;
    controller.complete(outcome);

    assert!(!controller.state().loading);
    assert_eq!(controller.state().results.len(), 4);
}

#[tokio::test]
async fn test_failures_keep_previous_results() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);
    backend.push_ok(sample_posts(15));
    controller.search().await;
    controller.go_to_page(2);

    let schema_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    backend.push_err(SearchApiError::Schema(schema_error));
    controller.search().await;

    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(state.results, sample_posts(15));
    assert_eq!(state.current_page, 2);

    backend.push_err(SearchApiError::Status {
        status: 500,
        detail: None,
    });
    controller.search().await;
    assert_eq!(controller.state().error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(controller.state().results.len(), 15);
}

#[tokio::test]
async fn test_new_submission_clears_error() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);
    backend.push_err(SearchApiError::Status {
        status: 502,
        detail: None,
    });
    controller.search().await;
    assert!(controller.state().error.is_some());

    controller.submit_search();
    assert_eq!(controller.state().error, None);
    assert!(controller.state().loading);
}

#[tokio::test]
async fn test_new_search_resets_cursor_and_replaces_results() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);
    backend.push_ok(sample_posts(30));
    controller.search().await;
    controller.go_to_page(3);

    backend.push_ok(sample_posts(5));
    controller.search().await;

    let state = controller.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.results, sample_posts(5));
    assert_eq!(titles(&controller).len(), 5);
}

#[tokio::test]
async fn test_limit_change_waits_for_next_search() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);
    backend.push_ok(sample_posts(25));
    controller.search().await;

    controller.dispatch(SearchAction::SetLimit(PageLimit::Fifty));
    assert_eq!(controller.state().total_pages, 3);
    assert_eq!(titles(&controller).len(), 10);

    backend.push_ok(sample_posts(25));
    controller.search().await;
    assert_eq!(controller.state().total_pages, 1);
    assert_eq!(titles(&controller).len(), 25);
    assert_eq!(backend.calls()[1].limit, PageLimit::Fifty);
}

#[tokio::test]
async fn test_overlapping_searches_apply_only_the_latest() {
    let (mut controller, backend) = setup("rust", "first", PageLimit::Ten);

    let first = controller.submit_search().unwrap();
    controller.dispatch(SearchAction::SetKeywords("second".to_string()));
    let second = controller.submit_search().unwrap();
    assert!(second.id > first.id);

    // The second request resolves before the first
    backend.push_ok(sample_posts(3));
    let second_outcome = SearchController::run_fetch(controller.backend(), second).await;
    backend.push_ok(sample_posts(12));
    let first_outcome = SearchController::run_fetch(controller.backend(), first).await;

    controller.complete(second_outcome);
    assert_eq!(controller.state().results.len(), 3);
    assert!(!controller.state().loading);

    controller.complete(first_outcome);
    assert_eq!(controller.state().results.len(), 3);
    assert_eq!(controller.state().total_pages, 1);

    let keywords: Vec<String> = backend.calls().into_iter().map(|q| q.keywords).collect();
    assert_eq!(keywords, vec!["second".to_string(), "first".to_string()]);
}

#[tokio::test]
async fn test_superseded_failure_is_ignored() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);

    let first = controller.submit_search().unwrap();
    let second = controller.submit_search().unwrap();

    backend.push_err(SearchApiError::Status {
        status: 500,
        detail: None,
    });
    let first_outcome = SearchController::run_fetch(controller.backend(), first).await;
    controller.complete(first_outcome);

    assert_eq!(controller.state().error, None);
    assert!(controller.state().loading);

    backend.push_ok(sample_posts(2));
    let second_outcome = SearchController::run_fetch(controller.backend(), second).await;
    controller.complete(second_outcome);

    assert!(!controller.state().loading);
    assert_eq!(controller.state().results.len(), 2);
}

#[tokio::test]
async fn test_go_to_current_page_changes_nothing() {
    let (mut controller, backend) = setup("rust", "async", PageLimit::Ten);
    backend.push_ok(sample_posts(25));
    controller.search().await;
    controller.go_to_page(2);

    let before = controller.state().clone();
    controller.go_to_page(2);
    assert_eq!(controller.state(), &before);
}
