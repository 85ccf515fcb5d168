use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::payload::DashboardPayload;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the dashboard payload for the given user identifier.
    ///
    /// Exactly one request per invocation; the caller decides what to do
    /// with a failure.
    async fn fetch_dashboard(&self, user_id: &str) -> Result<DashboardPayload, ApiError>;
}
