//! Herald command-line front end.
//!
//! - `herald run` - log in and poll until stopped or an error occurs
//! - `herald check-config` - load, validate and print the configuration
//! - `herald compose` - build a comment for one title without posting it

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
mod observability;

pub use observability::init_tracing;
