use dnsrelay_jobs::CacheSnapshotJob;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCacheSnapshotPort;

#[tokio::test]
async fn test_cache_snapshot_job_does_not_save_immediately() {
    let mock = Arc::new(MockCacheSnapshotPort::new());
    let job = Arc::new(
        CacheSnapshotJob::new(mock.clone()).with_interval(Duration::from_secs(3600)),
    );

    tokio::spawn(job.start());
    sleep(Duration::from_millis(50)).await;

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_cache_snapshot_job_fires_on_interval() {
    let mock = Arc::new(MockCacheSnapshotPort::new());
    let job = Arc::new(
        CacheSnapshotJob::new(mock.clone()).with_interval(Duration::from_millis(100)),
    );

    tokio::spawn(job.start());
    sleep(Duration::from_millis(350)).await;

    assert!(
        mock.call_count() >= 2,
        "Snapshot should have fired at least twice, got {}",
        mock.call_count()
    );
}

#[tokio::test]
async fn test_cache_snapshot_job_error_is_non_fatal() {
    let mock = Arc::new(MockCacheSnapshotPort::new());
    mock.set_should_fail(true);
    let job = Arc::new(
        CacheSnapshotJob::new(mock.clone()).with_interval(Duration::from_millis(100)),
    );

    tokio::spawn(job.start());
    sleep(Duration::from_millis(350)).await;

    assert!(
        mock.call_count() >= 2,
        "Job should keep running after a failed snapshot"
    );
}

#[tokio::test]
async fn test_cache_snapshot_job_stops_on_cancellation() {
    let mock = Arc::new(MockCacheSnapshotPort::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        CacheSnapshotJob::new(mock.clone())
            .with_interval(Duration::from_millis(50))
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    sleep(Duration::from_millis(120)).await;
    token.cancel();
    handle.await.unwrap();

    let calls_at_cancel = mock.call_count();
    sleep(Duration::from_millis(150)).await;
    assert_eq!(mock.call_count(), calls_at_cancel);
}
