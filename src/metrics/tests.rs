use super::RequestMetrics;
use chrono::{TimeDelta, Utc};
use std::sync::Arc;

#[tokio::test]
async fn success_rate_is_zero_without_any_calls() {
    let metrics = RequestMetrics::new();
    assert_eq!(metrics.success_rate().await, 0.0);
    assert_eq!(metrics.total_count().await, 0);
    assert_eq!(metrics.requests_per_minute().await, 0.0);
}

#[tokio::test]
async fn success_rate_reflects_recorded_outcomes() {
    let metrics = RequestMetrics::new();
    for _ in 0..4 {
        metrics.record_started().await;
    }
    metrics.record_outcome(true).await;
    metrics.record_outcome(true).await;
    metrics.record_outcome(true).await;
    metrics.record_outcome(false).await;
    assert_eq!(metrics.success_rate().await, 75.0);
    assert_eq!(metrics.successful_count().await, 3);
    assert_eq!(metrics.failed_count().await, 1);
    assert_eq!(metrics.total_count().await, 4);
}

#[tokio::test]
async fn rate_counts_starts_inside_the_window() {
    let metrics = RequestMetrics::new();
    for _ in 0..5 {
        metrics.record_started().await;
    }
    assert_eq!(metrics.requests_per_minute().await, 5.0);
}

#[tokio::test]
async fn rate_drops_starts_older_than_the_window() {
    let metrics = RequestMetrics::new();
    let stale = Utc::now() - TimeDelta::seconds(120);
    metrics.record_started_at(stale).await;
    metrics.record_started_at(stale).await;
    metrics.record_started().await;
    assert_eq!(metrics.requests_per_minute().await, 1.0);
    // Pruning never touches the totals.
    assert_eq!(metrics.total_count().await, 3);
}

#[tokio::test]
async fn concurrent_recording_keeps_counters_consistent() {
    const TASKS: u64 = 64;
    let metrics = Arc::new(RequestMetrics::new());
    let mut handles = Vec::new();
    for i in 0..TASKS {
        let m = Arc::clone(&metrics);
        handles.push(tokio::spawn(async move {
            m.record_started().await;
            m.record_outcome(i % 2 == 0).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    let total = metrics.total_count().await;
    let successful = metrics.successful_count().await;
    let failed = metrics.failed_count().await;
    assert_eq!(total, TASKS);
    assert_eq!(successful + failed, TASKS);
    assert_eq!(successful, TASKS / 2);
}
