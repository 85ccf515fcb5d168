//! Dashboard fetch worker.
//!
//! Spawns exactly one request per fetch generation and reports the outcome
//! back to the UI loop. There is no retry, no backoff, and no caching; a
//! failure is logged once to the operator event channel and forwarded as-is.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::payload::DashboardPayload;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Result of one fetch attempt, tagged with the generation that issued it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<DashboardPayload, ApiError>,
}

/// Owns the API handle and the channels back to the UI loop.
pub struct DashboardFetcher {
    api: Arc<dyn DashboardApi>,
    user_id: String,
    event_sender: mpsc::Sender<Event>,
    outcome_sender: mpsc::Sender<FetchOutcome>,
    cancellation: CancellationToken,
}

impl DashboardFetcher {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        user_id: String,
        event_sender: mpsc::Sender<Event>,
        outcome_sender: mpsc::Sender<FetchOutcome>,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            api,
            user_id,
            event_sender,
            outcome_sender,
            cancellation,
        }
    }

    /// Issue one fetch for the given generation.
    ///
    /// The outcome lands on the outcome channel unless cancellation wins the
    /// race, in which case nothing is delivered and the task ends.
    pub fn spawn(&self, generation: u64) {
        let api = self.api.clone();
        let user_id = self.user_id.clone();
        let event_sender = self.event_sender.clone();
        let outcome_sender = self.outcome_sender.clone();
        let cancellation = self.cancellation.clone();

        tokio::spawn(async move {
            let _ = event_sender
                .send(Event::fetcher_with_level(
                    format!("Fetching dashboard for {}...", user_id),
                    EventType::Refresh,
                    LogLevel::Info,
                ))
                .await;

            let result = tokio::select! {
                biased;
                _ = cancellation.cancelled() => return,
                result = api.fetch_dashboard(&user_id) => result,
            };

            match &result {
                Ok(_) => {
                    let _ = event_sender
                        .send(Event::fetcher_with_level(
                            "Dashboard data loaded".to_string(),
                            EventType::Success,
                            LogLevel::Info,
                        ))
                        .await;
                }
                Err(e) => {
                    let _ = event_sender
                        .send(Event::fetcher_with_level(
                            format!("Error fetching dashboard data: {}", e),
                            EventType::Error,
                            classify_fetch_error(e),
                        ))
                        .await;
                }
            }

            let _ = outcome_sender
                .send(FetchOutcome { generation, result })
                .await;
        });
    }
}

/// Map an API error to the level it is logged at.
pub fn classify_fetch_error(error: &ApiError) -> LogLevel {
    match error {
        // Temporary server issues
        ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

        // Client-side request problems
        ApiError::Http { .. } => LogLevel::Error,
        ApiError::Decode(_) => LogLevel::Error,

        // Network issues - usually temporary
        ApiError::Reqwest(_) => LogLevel::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;

    fn harness(
        api: MockDashboardApi,
    ) -> (
        DashboardFetcher,
        mpsc::Receiver<Event>,
        mpsc::Receiver<FetchOutcome>,
    ) {
        let (event_sender, event_receiver) = mpsc::channel(16);
        let (outcome_sender, outcome_receiver) = mpsc::channel(16);
        let fetcher = DashboardFetcher::new(
            Arc::new(api),
            "user123".to_string(),
            event_sender,
            outcome_sender,
            CancellationToken::new(),
        );
        (fetcher, event_receiver, outcome_receiver)
    }

    #[tokio::test]
    async fn spawn_invokes_api_exactly_once_with_identifier() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_dashboard()
            .times(1)
            .withf(|user_id| user_id == "user123")
            .returning(|_| Ok(DashboardPayload::default()));

        let (fetcher, _events, mut outcomes) = harness(api);
        fetcher.spawn(1);

        let outcome = outcomes.recv().await.expect("outcome delivered");
        assert_eq!(outcome.generation, 1);
        assert!(outcome.result.is_ok());
    }

    #[tokio::test]
    async fn failed_fetch_emits_one_error_event_and_forwards_failure() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_dashboard().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let (fetcher, mut events, mut outcomes) = harness(api);
        fetcher.spawn(1);

        let outcome = outcomes.recv().await.expect("outcome delivered");
        assert!(outcome.result.is_err());

        // Both events were sent before the outcome, so the channel is settled.
        let mut error_events = 0;
        while let Ok(event) = events.try_recv() {
            if event.event_type == EventType::Error {
                error_events += 1;
            }
        }
        assert_eq!(error_events, 1);
    }

    #[tokio::test]
    async fn cancelled_fetch_delivers_no_outcome() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_dashboard()
            .returning(|_| Ok(DashboardPayload::default()));

        let (event_sender, _event_receiver) = mpsc::channel(16);
        let (outcome_sender, mut outcomes) = mpsc::channel(16);
        let cancellation = CancellationToken::new();
        let fetcher = DashboardFetcher::new(
            Arc::new(api),
            "user123".to_string(),
            event_sender,
            outcome_sender,
            cancellation.clone(),
        );

        // Cancel before the worker runs; the biased select exits first.
        cancellation.cancel();
        fetcher.spawn(1);
        drop(fetcher);

        // The worker exits without sending; the channel closes with nothing on it.
        assert!(outcomes.recv().await.is_none());
    }

    #[test]
    fn server_errors_log_at_warn_client_errors_at_error() {
        let server = ApiError::Http {
            status: 503,
            message: String::new(),
        };
        let client = ApiError::Http {
            status: 404,
            message: String::new(),
        };
        assert_eq!(classify_fetch_error(&server), LogLevel::Warn);
        assert_eq!(classify_fetch_error(&client), LogLevel::Error);
    }
}
