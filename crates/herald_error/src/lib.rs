//! Error types for the Herald bot.
//!
//! This crate provides the foundation error types used throughout the Herald workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - each category is a struct carrying a message and the source location
//! - `HeraldErrorKind` enumerates the categories
//! - `HeraldError` boxes the kind so results stay small
//!
//! Every error is fatal to the control loop. The kind is kept around so the
//! failure handler can report which layer gave up.
//!
//! # Examples
//!
//! ```
//! use herald_error::{HeraldResult, TransportError};
//!
//! fn fetch_listing() -> HeraldResult<String> {
//!     Err(TransportError::new("Connection refused"))?
//! }
//!
//! match fetch_listing() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alert;
mod auth;
mod config;
mod decode;
mod error;
mod publish;
mod transport;

pub use alert::AlertError;
pub use auth::AuthError;
pub use config::ConfigError;
pub use decode::DecodeError;
pub use error::{HeraldError, HeraldErrorKind, HeraldResult};
pub use publish::{PublishError, PublishErrorKind};
pub use transport::TransportError;
