use host_monitor_application::use_cases::SyncArpTableUseCase;
use host_monitor_application::HostTracker;
use host_monitor_domain::config::monitor::MAX_POLL_INTERVAL_SECS;
use host_monitor_domain::ChangeKind;
use host_monitor_jobs::HostSyncJob;
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockArpReader;

fn make_job(arp: Arc<MockArpReader>, tracker: Arc<HostTracker>) -> HostSyncJob {
    HostSyncJob::new(Arc::new(SyncArpTableUseCase::new(arp, tracker)))
}

#[tokio::test]
async fn test_host_sync_job_polls_after_interval() {
    let arp = Arc::new(MockArpReader::with_entries(vec![
        ("aa:bb:cc:dd:ee:01", "192.168.1.10"),
        ("aa:bb:cc:dd:ee:02", "192.168.1.11"),
    ]));
    let tracker = Arc::new(HostTracker::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        make_job(arp.clone(), tracker.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    let handle = tokio::spawn(job.start());

    sleep(Duration::from_millis(100)).await;
    assert_eq!(arp.call_count(), 0);

    sleep(Duration::from_millis(1100)).await;
    assert!(arp.call_count() >= 1);
    assert_eq!(tracker.len(), 2);

    let changes = tracker.notifications().drain();
    assert_eq!(changes.len(), 2);
    assert!(changes.iter().all(|c| c.kind() == ChangeKind::Online));

    token.cancel();
    assert!(timeout(Duration::from_secs(1), handle).await.unwrap().is_ok());
}

#[tokio::test]
async fn test_host_sync_job_survives_read_failures() {
    let arp = Arc::new(MockArpReader::with_entries(vec![(
        "aa:bb:cc:dd:ee:01",
        "192.168.1.10",
    )]));
    arp.set_should_fail(true).await;
    let tracker = Arc::new(HostTracker::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        make_job(arp.clone(), tracker.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    let handle = tokio::spawn(job.start());

    sleep(Duration::from_millis(1100)).await;
    assert!(arp.call_count() >= 1);
    assert!(tracker.is_empty());

    arp.set_should_fail(false).await;
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(tracker.len(), 1);

    token.cancel();
    assert!(timeout(Duration::from_secs(1), handle).await.unwrap().is_ok());
}

#[tokio::test]
async fn test_host_sync_job_stops_on_cancellation() {
    let arp = Arc::new(MockArpReader::new());
    let tracker = Arc::new(HostTracker::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        make_job(arp.clone(), tracker)
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    let handle = tokio::spawn(job.start());

    token.cancel();
    assert!(timeout(Duration::from_millis(500), handle).await.unwrap().is_ok());

    sleep(Duration::from_millis(1100)).await;
    assert_eq!(arp.call_count(), 0);
}

#[test]
fn test_host_sync_job_interval_is_clamped() {
    let arp = Arc::new(MockArpReader::new());
    let tracker = Arc::new(HostTracker::new());

    let job = make_job(arp.clone(), tracker.clone()).with_interval(0);
    assert_eq!(job.interval_secs(), 1);

    let job = make_job(arp, tracker).with_interval(u64::MAX);
    assert_eq!(job.interval_secs(), MAX_POLL_INTERVAL_SECS);
}

#[tokio::test]
async fn test_host_sync_job_huge_interval_keeps_running() {
    let arp = Arc::new(MockArpReader::new());
    let tracker = Arc::new(HostTracker::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        make_job(arp.clone(), tracker)
            .with_interval(u64::MAX)
            .with_cancellation(token.clone()),
    );
    let handle = tokio::spawn(job.start());

    sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished());

    token.cancel();
    let joined = timeout(Duration::from_secs(1), handle).await.unwrap();
    assert!(joined.is_ok());
    assert_eq!(arp.call_count(), 0);
}
