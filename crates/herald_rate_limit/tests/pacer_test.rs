//! Tests for request pacing and cycle cadence using a paused clock.

use herald_rate_limit::{Cadence, RequestPacer};
use std::time::Duration;
use tokio::time::Instant;

const INTERVAL: Duration = Duration::from_secs(2);

#[tokio::test(start_paused = true)]
async fn test_first_request_is_not_delayed() {
    let pacer = RequestPacer::new(INTERVAL);
    let start = Instant::now();
    let permit = pacer.acquire().await;
    assert_eq!(permit.dispatched_at(), start);
}

#[tokio::test(start_paused = true)]
async fn test_consecutive_requests_are_spaced() {
    let pacer = RequestPacer::new(INTERVAL);
    let mut dispatches = Vec::new();

    for _ in 0..5 {
        let permit = pacer.acquire().await;
        dispatches.push(permit.dispatched_at());
    }

    for pair in dispatches.windows(2) {
        assert!(pair[1] - pair[0] >= INTERVAL);
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_requests_count_against_budget() {
    let pacer = RequestPacer::new(INTERVAL);
    let mut dispatches = Vec::new();

    for attempt in 0..6 {
        let result: Result<(), &str> = async {
            let permit = pacer.acquire().await;
            dispatches.push(permit.dispatched_at());
            // Simulated network time.
            tokio::time::advance(Duration::from_millis(300)).await;
            if attempt % 2 == 1 {
                return Err("connection refused");
            }
            Ok(())
        }
        .await;
        assert_eq!(result.is_err(), attempt % 2 == 1);
    }

    for pair in dispatches.windows(2) {
        assert!(pair[1] - pair[0] >= INTERVAL);
    }
}

#[tokio::test(start_paused = true)]
async fn test_interval_counts_from_completion() {
    let pacer = RequestPacer::new(INTERVAL);

    let first = pacer.acquire().await;
    let first_dispatch = first.dispatched_at();
    tokio::time::advance(Duration::from_secs(5)).await;
    drop(first);
    let completed = pacer.last_request().await.expect("Stamped on drop");
    assert_eq!(completed - first_dispatch, Duration::from_secs(5));

    let second = pacer.acquire().await;
    assert!(second.dispatched_at() - completed >= INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_no_wait_when_interval_already_elapsed() {
    let pacer = RequestPacer::new(INTERVAL);
    drop(pacer.acquire().await);

    tokio::time::advance(Duration::from_secs(10)).await;
    let before = Instant::now();
    let permit = pacer.acquire().await;
    assert_eq!(permit.dispatched_at(), before);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_budget() {
    let pacer = RequestPacer::new(INTERVAL);
    let shared = pacer.clone();

    let a = pacer.acquire().await.dispatched_at();
    let b = shared.acquire().await.dispatched_at();
    assert!(b - a >= INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_cadence_sleeps_remaining_period() {
    let cadence = Cadence::new(Duration::from_secs(30));
    let start = Instant::now();
    tokio::time::advance(Duration::from_secs(12)).await;

    assert_eq!(cadence.remaining(start), Duration::from_secs(18));
    cadence.wait_for_next(start).await;
    assert!(start.elapsed() >= Duration::from_secs(30));
    assert!(start.elapsed() < Duration::from_secs(31));
}

#[tokio::test(start_paused = true)]
async fn test_cadence_clamps_overrun_to_zero() {
    let cadence = Cadence::new(Duration::from_secs(30));
    let start = Instant::now();
    tokio::time::advance(Duration::from_secs(45)).await;

    assert_eq!(cadence.remaining(start), Duration::ZERO);
    cadence.wait_for_next(start).await;
    assert_eq!(start.elapsed(), Duration::from_secs(45));
}
