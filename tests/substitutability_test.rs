use data_facade::{
    Backend, BackendAdapter, DataConsumer, Deferred, LocalBackend, Payload, RawResult,
    RemoteBackend, RetrievalError,
};
use futures::FutureExt;
use std::time::Duration;

/// Backend that reports a fixed failure without ever producing data.
struct FailingBackend;

impl Backend for FailingBackend {
    fn fetch_raw(&self) -> RawResult {
        RawResult::Ready(Err(RetrievalError::unavailable(
            "failing",
            "simulated network failure",
        )))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn consumers_for(payload: &str) -> Vec<DataConsumer<BackendAdapter>> {
    vec![
        DataConsumer::new(BackendAdapter::new(LocalBackend::with_entry("key", payload))),
        DataConsumer::new(BackendAdapter::new(
            RemoteBackend::new("https://vk.com")
                .with_payload(payload)
                .with_latency(Duration::from_millis(5)),
        )),
    ]
}

#[tokio::test]
async fn test_local_backend_resolves_local_payload() {
    let consumer = DataConsumer::new(BackendAdapter::new(LocalBackend::default()));
    let payload = consumer.retrieve().await.unwrap();
    assert_eq!(payload.as_str(), "data from local storage");
}

#[tokio::test]
async fn test_remote_backend_resolves_fetch_payload() {
    let consumer = DataConsumer::new(BackendAdapter::new(
        RemoteBackend::default().with_latency(Duration::from_millis(20)),
    ));
    let payload = consumer.retrieve().await.unwrap();
    assert_eq!(payload.as_str(), "data from fetch");
}

#[tokio::test]
async fn test_equivalent_backends_yield_equal_results() {
    let mut results = Vec::new();
    for consumer in consumers_for("same payload") {
        results.push(consumer.retrieve().await.unwrap());
    }

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|p| *p == Payload::from("same payload")));
}

#[tokio::test]
async fn test_local_retrieval_is_still_deferred() {
    let consumer = DataConsumer::new(BackendAdapter::new(LocalBackend::default()));

    let deferred: Deferred<'_> = consumer.retrieve();
    let resolved = deferred
        .now_or_never()
        .expect("local data resolves on first poll");
    assert_eq!(resolved.unwrap().as_str(), "data from local storage");
}

#[tokio::test]
async fn test_remote_retrieval_is_pending_until_latency_elapses() {
    let consumer = DataConsumer::new(BackendAdapter::new(
        RemoteBackend::default().with_latency(Duration::from_millis(200)),
    ));

    assert!(consumer.retrieve().now_or_never().is_none());
    assert_eq!(
        consumer.retrieve().await.unwrap().as_str(),
        "data from fetch"
    );
}

#[test]
fn test_adapter_without_backend_fails_before_get() {
    let result = BackendAdapter::try_new(None);
    match result {
        Err(RetrievalError::AdapterMisconfiguration { message }) => {
            assert!(message.contains("without a backend"))
        }
        other => panic!("expected AdapterMisconfiguration, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_failure_rejects_unaltered() {
    let consumer = DataConsumer::new(BackendAdapter::new(FailingBackend));

    match consumer.retrieve().await {
        Err(RetrievalError::BackendUnavailable { backend, reason }) => {
            assert_eq!(backend, "failing");
            assert_eq!(reason, "simulated network failure");
        }
        other => panic!("expected BackendUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_remote_rejects_with_backend_unavailable() {
    let consumer = DataConsumer::new(BackendAdapter::new(
        RemoteBackend::unreachable("https://offline.example").with_latency(Duration::ZERO),
    ));

    let err = consumer.retrieve().await.unwrap_err();
    assert!(matches!(err, RetrievalError::BackendUnavailable { .. }));
}

#[tokio::test]
async fn test_missing_local_entry_rejects() {
    let consumer = DataConsumer::new(BackendAdapter::new(LocalBackend::new("absent")));

    let err = consumer.retrieve().await.unwrap_err();
    assert!(matches!(err, RetrievalError::MissingEntry { key } if key == "absent"));
}

#[tokio::test]
async fn test_consumer_moves_across_tasks() {
    let consumer = DataConsumer::new(BackendAdapter::new(LocalBackend::default()));

    let handle = tokio::spawn(async move { consumer.retrieve().await });
    let payload = handle.await.unwrap().unwrap();
    assert_eq!(payload.as_str(), "data from local storage");
}
