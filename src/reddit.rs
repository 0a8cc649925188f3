pub mod client;
pub mod models;

pub use client::{RedditSearchClient, SearchApiError, SearchBackend, DEFAULT_API_URL};
pub use models::{Post, SearchResponse};
