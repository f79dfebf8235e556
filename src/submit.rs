//! Submission sink abstraction
//!
//! The picks leave the process through exactly one outbound request. The
//! sink hides how that request is made so the runtime can be tested with
//! mock implementations.

mod error;
mod http;

pub use crate::state_machine::SubmissionPayload;
pub use error::{SubmitError, SubmitErrorKind};
pub use http::HttpSubmissionSink;

use async_trait::async_trait;
use std::sync::Arc;

/// Destination for a finished plan
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver the payload. Success means the transport completed; the
    /// response itself is not inspected.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;

    /// Configured endpoint address, if any
    fn endpoint(&self) -> Option<&str>;
}

#[async_trait]
impl<T: SubmissionSink + ?Sized> SubmissionSink for Arc<T> {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        (**self).submit(payload).await
    }

    fn endpoint(&self) -> Option<&str> {
        (**self).endpoint()
    }
}

/// Logging wrapper for submission sinks
pub struct LoggingSink<S> {
    inner: S,
}

impl<S: SubmissionSink> LoggingSink<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SubmissionSink> SubmissionSink for LoggingSink<S> {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let start = std::time::Instant::now();
        let result = self.inner.submit(payload).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => {
                tracing::info!(
                    endpoint = self.inner.endpoint().unwrap_or("<unset>"),
                    duration_ms = %duration.as_millis(),
                    submitted_at = %payload.submitted_at,
                    "Submission delivered"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = self.inner.endpoint().unwrap_or("<unset>"),
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Submission failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> Option<&str> {
        self.inner.endpoint()
    }
}
