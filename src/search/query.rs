use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::SearchError;

/// Number of posts requested from the API, also used as the client-side page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageLimit {
    Ten,
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unsupported post limit '{0}', expected one of 10, 20, 50, 100")]
pub struct InvalidPageLimit(pub String);

impl PageLimit {
    /// Selector options in display order
    pub const ALL: [PageLimit; 4] = [
        PageLimit::Ten,
        PageLimit::Twenty,
        PageLimit::Fifty,
        PageLimit::Hundred,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            PageLimit::Ten => 10,
            PageLimit::Twenty => 20,
            PageLimit::Fifty => 50,
            PageLimit::Hundred => 100,
        }
    }

    pub fn as_usize(self) -> usize {
        self.as_u32() as usize
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = InvalidPageLimit;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageLimit::ALL
            .into_iter()
            .find(|limit| limit.as_u32() == value)
            .ok_or_else(|| InvalidPageLimit(value.to_string()))
    }
}

impl From<PageLimit> for u32 {
    fn from(limit: PageLimit) -> Self {
        limit.as_u32()
    }
}

impl FromStr for PageLimit {
    type Err = InvalidPageLimit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| InvalidPageLimit(s.to_string()))
            .and_then(PageLimit::try_from)
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// The parameters of one search submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub subreddit: String,
    /// Comma-separated terms, sent to the API as typed
    pub keywords: String,
    pub limit: PageLimit,
}

impl SearchQuery {
    /// Both text fields must be non-empty. Whitespace is not trimmed here.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.subreddit.is_empty() || self.keywords.is_empty() {
            return Err(SearchError::Validation);
        }
        Ok(())
    }

    /// Individual keywords, trimmed, with empty entries dropped
    pub fn keyword_terms(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect()
    }
}
