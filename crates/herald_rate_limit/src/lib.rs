//! Request pacing and cycle cadence.
//!
//! The platform enforces a single request budget per client, so every
//! outbound call goes through one [`RequestPacer`] regardless of endpoint.
//! [`Cadence`] paces whole poll cycles to a fixed wall-clock period.
//!
//! Both use `tokio::time`, so tests can drive them with a paused clock.

mod cadence;
mod pacer;

pub use cadence::Cadence;
pub use pacer::{PacerPermit, RequestPacer};
