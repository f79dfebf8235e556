//! HTTP form submission

use super::{SubmissionPayload, SubmissionSink, SubmitError};
use async_trait::async_trait;
use reqwest::Client;

/// Posts the payload as `application/x-www-form-urlencoded`.
///
/// No request timeout is configured: the call resolves whenever the
/// transport does.
pub struct HttpSubmissionSink {
    client: Client,
    endpoint: Option<String>,
}

impl HttpSubmissionSink {
    /// Blank addresses count as unconfigured
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(endpoint: Option<String>) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SubmitError::configuration(format!("Failed to create HTTP client: {e}")))?;
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let Some(url) = self.endpoint.as_deref() else {
            return Err(SubmitError::configuration(
                "Submission endpoint is not configured",
            ));
        };

        let response = self
            .client
            .post(url)
            .form(payload)
            .send()
            .await
            .map_err(|e| SubmitError::transport(e.to_string()))?;

        tracing::debug!(status = %response.status(), "Submission endpoint responded");
        Ok(())
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}
