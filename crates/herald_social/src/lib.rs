//! Platform integrations for Herald.
//!
//! - `reddit` - the content platform: login, listings, comments, all behind
//!   one paced transport
//! - `wordnik` - the lexical lookup service used by the lexical composer
//!
//! Both implement the traits from `herald_interface`, so the control loop
//! never sees HTTP directly.

#![warn(missing_docs)]

mod reddit;
mod wordnik;

pub use reddit::{
    PublishConfirmation, RedditClient, RedditConfig, RedditTransport, TransportResponse,
    confirm_publish,
};
pub use wordnik::{WordnikClient, WordnikConfig};
