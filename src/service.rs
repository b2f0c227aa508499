use crate::dto::SendEmailRequest;

use std::future::Future;

/// Raw result of one call to the email endpoint. The body is kept for
/// logging only and never parsed.
#[derive(Debug, Clone)]
pub struct EmailServiceResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailServiceError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl From<reqwest::Error> for EmailServiceError {
    fn from(e: reqwest::Error) -> Self {
        EmailServiceError::Delivery(e.to_string())
    }
}

/// Transport used to reach the IDM email endpoint.
///
/// Implemented by [`IdmEmailService`]; substitute a stub to exercise the
/// node without a live tenant. One attempt per call, no retries.
pub trait EmailTransport: Send + Sync {
    fn send(
        &self,
        endpoint: &str,
        access_token: &str,
        request: &SendEmailRequest,
    ) -> impl Future<Output = Result<EmailServiceResponse, EmailServiceError>> + Send;
}

pub struct IdmEmailService {
    client: reqwest::Client,
}

impl IdmEmailService {
    pub fn new() -> Self {
        IdmEmailService {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for IdmEmailService {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailTransport for IdmEmailService {
    async fn send(
        &self,
        endpoint: &str,
        access_token: &str,
        request: &SendEmailRequest,
    ) -> Result<EmailServiceResponse, EmailServiceError> {
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(EmailServiceResponse { status, body })
    }
}
