//! Reddit integration.
//!
//! This module follows the same layout for every platform:
//! - `config` - deserializable settings
//! - `transport` - paced HTTP with the fixed headers
//! - `json_models` - response envelopes as the API sends them
//! - `conversions` - envelope to core type conversions
//! - `confirmation` - deciding whether a comment was accepted
//! - `client` - the `ContentPlatform` implementation

mod client;
mod config;
mod confirmation;
mod conversions;
mod json_models;
mod transport;

pub use client::RedditClient;
pub use config::RedditConfig;
pub use confirmation::{PublishConfirmation, confirm_publish};
pub use transport::{RedditTransport, TransportResponse};
