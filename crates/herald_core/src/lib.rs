//! Core data types for the Herald polling bot.
//!
//! This crate provides the values that flow between the platform clients,
//! the composers and the control loop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod lexicon;
mod listing;
mod post;
mod session;

pub use credentials::Credentials;
pub use lexicon::LexicalExample;
pub use listing::{ListingRequest, ListingSort};
pub use post::{ListingPage, PostRecord, PostRecordBuilder};
pub use session::Session;
