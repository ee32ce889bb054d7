//! Wordnik integration.

mod client;
mod config;

pub use client::WordnikClient;
pub use config::WordnikConfig;
