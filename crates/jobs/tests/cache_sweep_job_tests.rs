use sieve_dns_application::use_cases::SweepExpiredCacheUseCase;
use sieve_dns_jobs::{CacheSweepJob, MAX_INTERVAL_SECS};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCache;

fn make_job(cache: Arc<MockCache>, interval_secs: u64, token: CancellationToken) -> Arc<CacheSweepJob> {
    let sweep = Arc::new(SweepExpiredCacheUseCase::new(cache));
    Arc::new(
        CacheSweepJob::new(sweep)
            .with_interval(interval_secs)
            .with_cancellation(token),
    )
}

#[tokio::test(start_paused = true)]
async fn test_sweep_job_waits_for_first_interval() {
    // Arrange
    let cache = Arc::new(MockCache::new());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), 60, token.clone()).start().await;

    // Act
    sleep(Duration::from_secs(30)).await;

    // Assert
    assert_eq!(cache.sweeps(), 0);

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_sweep_job_runs_once_per_interval() {
    // Arrange
    let cache = Arc::new(MockCache::new());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), 60, token.clone()).start().await;

    // Act
    sleep(Duration::from_secs(61)).await;
    let after_one = cache.sweeps();
    sleep(Duration::from_secs(120)).await;
    let after_three = cache.sweeps();

    // Assert
    assert_eq!(after_one, 1);
    assert_eq!(after_three, 3);

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_sweep_job_stops_on_cancellation() {
    // Arrange
    let cache = Arc::new(MockCache::new());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), 10, token.clone()).start().await;
    sleep(Duration::from_secs(11)).await;

    // Act
    token.cancel();
    handle.await.unwrap();
    sleep(Duration::from_secs(100)).await;

    // Assert - no sweeps after shutdown
    assert_eq!(cache.sweeps(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_job_survives_cache_errors() {
    // Arrange
    let cache = Arc::new(MockCache::failing());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), 5, token.clone()).start().await;

    // Act
    sleep(Duration::from_secs(16)).await;

    // Assert - every tick still attempted a sweep
    assert_eq!(cache.sweeps(), 3);
    assert!(!handle.is_finished());

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_is_clamped() {
    let cache = Arc::new(MockCache::new());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), 0, token.clone()).start().await;

    sleep(Duration::from_millis(1500)).await;

    assert_eq!(cache.sweeps(), 1);

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_huge_interval_is_clamped() {
    // Arrange
    let cache = Arc::new(MockCache::new());
    let token = CancellationToken::new();
    let handle = make_job(cache.clone(), u64::MAX, token.clone()).start().await;

    // Act
    sleep(Duration::from_secs(MAX_INTERVAL_SECS + 1)).await;

    // Assert - the task is alive and ticked at the cap
    assert!(!handle.is_finished());
    assert_eq!(cache.sweeps(), 1);

    token.cancel();
    handle.await.unwrap();
}
