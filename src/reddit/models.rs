use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// A single post as returned by the search API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub score: i64,
    pub comments: i64,
    /// Seconds since the Unix epoch
    #[serde(deserialize_with = "deserialize_epoch_seconds")]
    pub created_utc: i64,
    pub url: String,
}

impl Post {
    /// Creation time converted to the local timezone
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp(self.created_utc, 0).map(|utc| utc.with_timezone(&Local))
    }

    /// Creation time formatted for display, falling back to the raw timestamp
    pub fn created_display(&self) -> String {
        match self.created_local() {
            Some(local) => local.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.created_utc.to_string(),
        }
    }
}

/// Search API response wrapper
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Post>,
}

/// Reddit reports `created_utc` as a float; accept either JSON number kind.
fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum EpochSeconds {
        Int(i64),
        Float(f64),
    }

    match EpochSeconds::deserialize(deserializer)? {
        EpochSeconds::Int(secs) => Ok(secs),
        EpochSeconds::Float(secs) if secs.is_finite() => Ok(secs.trunc() as i64),
        EpochSeconds::Float(secs) => Err(serde::de::Error::custom(format!(
            "created_utc is not a finite number: {}",
            secs
        ))),
    }
}
