use crate::reddit::client::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::search::{InvalidPageLimit, PageLimit};
use dioxus::prelude::use_context;
use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

pub const API_URL_VAR: &str = "SUBREDDIT_SEARCH_API_URL";
pub const DEFAULT_LIMIT_VAR: &str = "SUBREDDIT_SEARCH_DEFAULT_LIMIT";
pub const USER_AGENT_VAR: &str = "SUBREDDIT_SEARCH_USER_AGENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var}: {source}")]
    InvalidLimit {
        var: &'static str,
        #[source]
        source: InvalidPageLimit,
    },
}

/// Application configuration
/// In debug builds: a .env file is loaded into the environment first
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the search API; `/api/search` is resolved against it
    pub api_url: String,
    /// Initial value of the "Number of Posts" selector
    pub default_limit: PageLimit,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_limit: PageLimit::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using process environment");
            }
        }

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from a variable lookup. Invalid values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup(API_URL_VAR) {
            Some(value) => parse_api_url(&value).unwrap_or_else(|e| {
                warn!("Config: {}, falling back to {}", e, defaults.api_url);
                defaults.api_url.clone()
            }),
            None => defaults.api_url.clone(),
        };

        let default_limit = match lookup(DEFAULT_LIMIT_VAR) {
            Some(value) => parse_limit(&value).unwrap_or_else(|e| {
                warn!("Config: {}, falling back to {}", e, defaults.default_limit);
                defaults.default_limit
            }),
            None => defaults.default_limit,
        };

        let user_agent = lookup(USER_AGENT_VAR)
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        info!(
            "Config: API at {}, default limit {}",
            api_url, default_limit
        );

        Self {
            api_url,
            default_limit,
            user_agent,
        }
    }
}

fn parse_api_url(value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var: API_URL_VAR,
        value: value.to_string(),
    };

    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        _ => Err(invalid()),
    }
}

fn parse_limit(value: &str) -> Result<PageLimit, ConfigError> {
    value
        .parse::<PageLimit>()
        .map_err(|source| ConfigError::InvalidLimit {
            var: DEFAULT_LIMIT_VAR,
            source,
        })
}

/// Hook to access the app configuration provided by the root component
pub fn use_config() -> Config {
    use_context::<Config>()
}
