//! Predulive Dashboard API Client
//!
//! A client for the dashboard data endpoint, fetching a user's payload as
//! JSON.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::payload::DashboardPayload;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with the client version
const USER_AGENT: &str = concat!("predulive-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_dashboard(&self, user_id: &str) -> Result<DashboardPayload, ApiError> {
        self.get_json(&format!("dashboard/{}", user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_contains_identifier() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "http://localhost:9000/api/".to_string(),
        });
        assert_eq!(
            client.build_url("dashboard/user123"),
            "http://localhost:9000/api/dashboard/user123"
        );
    }

    #[test]
    fn build_url_uses_environment_base() {
        let client = ApiClient::new(Environment::Production);
        let url = client.build_url("dashboard/abc");
        assert!(url.starts_with(&Environment::Production.api_base_url()));
        assert!(url.ends_with("/dashboard/abc"));
    }
}
