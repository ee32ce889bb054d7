//! JSON envelopes returned by the Reddit API.
//!
//! These mirror the wire format and are converted into `herald_core`
//! types in `conversions`. Required fields are left without defaults so a
//! changed envelope fails to decode instead of producing an empty page.

use serde::Deserialize;
use serde_json::Value;

/// `POST /api/login/<user>` with `api_type=json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginEnvelope {
    pub json: LoginBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginBody {
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginData {
    #[serde(default)]
    pub cookie: String,
    #[serde(default)]
    pub modhash: String,
}

/// `GET /<section>.json` and `GET /user/<name>/submitted.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListingEnvelope {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListingChild {
    pub data: RedditPostJson,
}

/// A link post as it appears inside a listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RedditPostJson {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub created_utc: f64,
}

/// `POST /api/comment` with `api_type=json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentEnvelope {
    pub json: CommentBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentBody {
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub data: Option<CommentData>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentData {
    #[serde(default)]
    pub things: Vec<Value>,
}

/// Render Reddit's `[[code, message, field], ...]` error list for logs.
pub(crate) fn format_errors(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|e| match e {
            Value::Array(parts) => parts
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(": "),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
