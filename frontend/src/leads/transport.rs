use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use super::submission::LeadSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadResponse {
    pub status: u16,
    pub body: String,
}

impl LeadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Only ever logged. Visitors see a single failure message whatever the cause.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not encode lead: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
}

#[async_trait(?Send)]
pub trait LeadTransport {
    async fn post_lead(&self, endpoint: &str, lead: &LeadSubmission) -> Result<LeadResponse, TransportError>;
}

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl LeadTransport for FetchTransport {
    async fn post_lead(&self, endpoint: &str, lead: &LeadSubmission) -> Result<LeadResponse, TransportError> {
        let request = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(lead)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(LeadResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> LeadResponse {
        LeadResponse { status, body: String::new() }
    }

    #[test]
    fn test_success_is_any_2xx() {
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(422).is_success());
        assert!(!response(500).is_success());
    }
}
