//! Global minimum spacing between outbound requests.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;
use tracing::{debug, trace};

/// Enforces a minimum interval between consecutive requests.
///
/// The pacer remembers when the previous request finished. [`acquire`]
/// waits out the remainder of the interval and returns a permit; dropping
/// the permit stamps the completion time. Because the stamp happens on
/// drop, a request that fails (including early returns through `?`) still
/// counts against the budget.
///
/// Clones share the same timestamp, and the permit holds the lock for the
/// duration of the request, so concurrent callers queue behind each other
/// and the spacing stays global.
///
/// # Example
///
/// ```rust,ignore
/// use herald_rate_limit::RequestPacer;
/// use std::time::Duration;
///
/// let pacer = RequestPacer::new(Duration::from_secs(2));
/// let permit = pacer.acquire().await;
/// let result = client.get(url).send().await;
/// drop(permit); // stamps completion, success or not
/// ```
///
/// [`acquire`]: RequestPacer::acquire
#[derive(Debug, Clone)]
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RequestPacer {
    /// Create a pacer with the given minimum interval.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// The configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until the next request may be dispatched.
    ///
    /// The returned permit must be held while the request is in flight.
    pub async fn acquire(&self) -> PacerPermit<'_> {
        let guard = self.last_request.lock().await;

        if let Some(last) = *guard {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "Pacing request");
                tokio::time::sleep(wait).await;
            }
        }

        let dispatched_at = Instant::now();
        trace!("Request dispatched");
        PacerPermit {
            guard,
            dispatched_at,
        }
    }

    /// When the most recent request finished, if any has been made.
    pub async fn last_request(&self) -> Option<Instant> {
        *self.last_request.lock().await
    }
}

/// Permission to dispatch one request.
///
/// Dropping the permit records the completion time.
#[derive(Debug)]
pub struct PacerPermit<'a> {
    guard: MutexGuard<'a, Option<Instant>>,
    dispatched_at: Instant,
}

impl PacerPermit<'_> {
    /// When the permit was granted.
    pub fn dispatched_at(&self) -> Instant {
        self.dispatched_at
    }
}

impl Drop for PacerPermit<'_> {
    fn drop(&mut self) {
        *self.guard = Some(Instant::now());
    }
}
