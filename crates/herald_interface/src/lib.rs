//! Trait definitions for the Herald polling bot.
//!
//! The control loop only talks to its collaborators through these traits,
//! so the platform, the lexicon and the alert channel can be swapped for
//! in-memory doubles in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Alerter, Composer, CompositionContext, ContentPlatform, LexiconSource};
