use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::RecommendationService;
use crate::domain::{BatchQuery, BatchResult, DomainError, Query, RecommendationResult};

/// Whether a request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientState {
    #[default]
    Idle,
    Loading,
}

/// Validates user input and issues one request per submission.
///
/// The client owns the busy flag. A submission moves it to
/// [`ClientState::Loading`] and a guard moves it back to
/// [`ClientState::Idle`] however the request ends, including when the
/// submitting future is dropped. Submissions made while loading are rejected
/// with [`DomainError::Busy`] and never reach the service.
pub struct RecommendationClient {
    service: Arc<dyn RecommendationService>,
    state: Mutex<ClientState>,
}

impl RecommendationClient {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            service,
            state: Mutex::new(ClientState::Idle),
        }
    }

    pub fn state(&self) -> ClientState {
        *lock(&self.state)
    }

    pub fn is_busy(&self) -> bool {
        self.state() == ClientState::Loading
    }

    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }

    pub async fn submit(
        &self,
        text: &str,
        top_k: u32,
    ) -> Result<RecommendationResult, DomainError> {
        let query = Query::new(text, top_k)?;
        let _loading = self.begin()?;

        debug!(
            "Requesting {} recommendations for \"{}\"",
            query.top_k(),
            query.preview()
        );
        let start_time = Instant::now();

        let result = self
            .service
            .recommend(&query)
            .await
            .inspect_err(log_failure)?;

        info!(
            "Received {} recommendations in {:.2}s",
            result.count(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }

    pub async fn batch(&self, queries: &[String], top_k: u32) -> Result<BatchResult, DomainError> {
        let batch = BatchQuery::new(queries, top_k)?;
        let _loading = self.begin()?;

        debug!("Requesting batch of {} queries", batch.queries().len());
        let start_time = Instant::now();

        let result = self
            .service
            .batch_recommend(&batch)
            .await
            .inspect_err(log_failure)?;

        info!(
            "Processed batch of {} queries ({} failed) in {:.2}s",
            result.count(),
            result.failed_count(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }

    fn begin(&self) -> Result<LoadingGuard<'_>, DomainError> {
        let mut state = lock(&self.state);
        if *state == ClientState::Loading {
            debug!("Submission ignored: a request is already in flight");
            return Err(DomainError::Busy);
        }
        *state = ClientState::Loading;
        Ok(LoadingGuard { state: &self.state })
    }
}

struct LoadingGuard<'a> {
    state: &'a Mutex<ClientState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *lock(self.state) = ClientState::Idle;
    }
}

fn lock(state: &Mutex<ClientState>) -> MutexGuard<'_, ClientState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn log_failure(err: &DomainError) {
    match err {
        DomainError::Transport(msg) => error!("Error: {msg}"),
        other => debug!("Request failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::{HealthStatus, Recommendation, ValidationError};

    const QUERY: &str = "Java developer who can collaborate with business teams";

    enum Reply {
        Ok(RecommendationResult),
        Status(u16),
        Transport,
    }

    struct FakeService {
        reply: Reply,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
        last_top_k: AtomicU32,
    }

    impl FakeService {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                gate: None,
                calls: AtomicUsize::new(0),
                last_top_k: AtomicU32::new(0),
            }
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecommendationService for FakeService {
        async fn recommend(&self, query: &Query) -> Result<RecommendationResult, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_top_k.store(query.top_k(), Ordering::SeqCst);

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            match &self.reply {
                Reply::Ok(result) => Ok(result.clone()),
                Reply::Status(status) => Err(DomainError::http(*status, None)),
                Reply::Transport => Err(DomainError::transport("connection refused")),
            }
        }

        async fn batch_recommend(&self, batch: &BatchQuery) -> Result<BatchResult, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_top_k.store(batch.top_k(), Ordering::SeqCst);
            Ok(BatchResult::default())
        }

        async fn health(&self) -> Result<HealthStatus, DomainError> {
            Ok(HealthStatus::new("healthy"))
        }

        fn base_url(&self) -> &str {
            "http://localhost:5000"
        }
    }

    fn sample_result() -> RecommendationResult {
        RecommendationResult::new(vec![Recommendation::new(
            "Core Java (Entry Level)",
            "K",
            30,
            "https://example.com/core-java",
            0.85,
        )])
    }

    #[tokio::test]
    async fn test_short_query_never_reaches_service() {
        let service = Arc::new(FakeService::new(Reply::Ok(sample_result())));
        let client = RecommendationClient::new(service.clone());

        for text in ["", "   ", "too short", "  123456789  "] {
            let err = client.submit(text, 10).await.unwrap_err();
            assert!(err.is_validation(), "{text:?} should fail validation");
        }

        assert_eq!(service.calls(), 0);
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[tokio::test]
    async fn test_empty_and_short_are_distinct() {
        let client = RecommendationClient::new(Arc::new(FakeService::new(Reply::Transport)));

        assert!(matches!(
            client.submit("  ", 10).await,
            Err(DomainError::Validation(ValidationError::EmptyQuery))
        ));
        assert!(matches!(
            client.submit("short", 10).await,
            Err(DomainError::Validation(ValidationError::TooShort { .. }))
        ));
    }

    #[tokio::test]
    async fn test_valid_query_issues_one_call_with_top_k() {
        let service = Arc::new(FakeService::new(Reply::Ok(sample_result())));
        let client = RecommendationClient::new(service.clone());

        let result = client.submit(QUERY, 7).await.unwrap();

        assert_eq!(result.count(), 1);
        assert_eq!(service.calls(), 1);
        assert_eq!(service.last_top_k.load(Ordering::SeqCst), 7);
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[tokio::test]
    async fn test_http_error_returns_to_idle() {
        let client = RecommendationClient::new(Arc::new(FakeService::new(Reply::Status(500))));

        let err = client.submit(QUERY, 10).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[tokio::test]
    async fn test_transport_error_returns_to_idle() {
        let client = RecommendationClient::new(Arc::new(FakeService::new(Reply::Transport)));

        let err = client.submit(QUERY, 10).await.unwrap_err();

        assert!(matches!(err, DomainError::Transport(_)));
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(FakeService::new(Reply::Ok(sample_result())).gated(gate.clone()));
        let client = Arc::new(RecommendationClient::new(service.clone()));

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.submit(QUERY, 5).await }
        });

        while service.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(client.is_busy());

        let second = client.submit(QUERY, 5).await;
        assert!(matches!(second, Err(DomainError::Busy)));
        assert_eq!(service.calls(), 1);

        gate.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(client.state(), ClientState::Idle);

        gate.notify_one();
        client.submit(QUERY, 5).await.unwrap();
        assert_eq!(service.calls(), 2);
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(FakeService::new(Reply::Ok(sample_result())).gated(gate));
        let client = RecommendationClient::new(service.clone());

        let outcome = tokio::time::timeout(Duration::from_millis(20), client.submit(QUERY, 5)).await;

        assert!(outcome.is_err());
        assert_eq!(service.calls(), 1);
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[tokio::test]
    async fn test_batch_validates_before_calling() {
        let service = Arc::new(FakeService::new(Reply::Transport));
        let client = RecommendationClient::new(service.clone());

        let err = client.batch(&[], 5).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.calls(), 0);

        client
            .batch(&["first query".to_string(), "second query".to_string()], 6)
            .await
            .unwrap();
        assert_eq!(service.calls(), 1);
        assert_eq!(service.last_top_k.load(Ordering::SeqCst), 6);
    }
}
