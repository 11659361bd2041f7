//! Notification sender trait and HTTP webhook implementation.

use std::time::Duration;

use http::header::{HeaderValue, USER_AGENT};

use crate::config::defaults;
use crate::message::MessageDocument;

use super::{DeliveryError, HttpClient, HttpError, HttpRequest};

const USER_AGENT_VALUE: &str = concat!("release-notifier/", env!("CARGO_PKG_VERSION"));

/// A message accepted by the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    /// Success status returned by the endpoint
    pub status: http::StatusCode,
    /// Raw response body
    pub body: String,
}

/// Trait for delivering message documents.
///
/// One call is one delivery attempt. Implementations must not retry;
/// callers decide what to do with a failure.
pub trait NotificationSender: Send + Sync {
    /// Delivers a message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Rejected`] for a non-2xx answer and
    /// [`DeliveryError::Transport`] when no answer arrived.
    fn send(
        &self,
        document: &MessageDocument,
    ) -> impl std::future::Future<Output = Result<Delivered, DeliveryError>> + Send;
}

/// Posts messages as JSON to an incoming-webhook URL.
///
/// Each [`send`](NotificationSender::send) encodes the document, issues a
/// single POST and waits at most `timeout` for the response. On timeout the
/// pending request is dropped and [`HttpError::Timeout`] is reported.
///
/// # Example
///
/// ```
/// use release_notifier::webhook::{HttpWebhook, ReqwestClient};
/// use std::time::Duration;
/// use url::Url;
///
/// let webhook = HttpWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://hooks.example.com/services/T000/B000/XXXX").unwrap(),
/// )
/// .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
    timeout: Duration,
}

impl<H> HttpWebhook<H> {
    /// Creates a webhook sender with the default timeout.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            url,
            timeout: defaults::timeout(),
        }
    }

    /// Sets the response timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    /// Encodes the document into a ready-to-send request.
    ///
    /// Encoding happens before any I/O, so a failure here sends nothing.
    fn build_request(&self, document: &MessageDocument) -> Result<HttpRequest, DeliveryError> {
        let body = document.to_json().map_err(DeliveryError::Encode)?;

        Ok(HttpRequest::post(self.url.clone())
            .with_json_body(body)
            .with_header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE)))
    }
}

impl<H: HttpClient> NotificationSender for HttpWebhook<H> {
    async fn send(&self, document: &MessageDocument) -> Result<Delivered, DeliveryError> {
        let request = self.build_request(document)?;
        tracing::debug!(
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Posting message to webhook"
        );

        let response = tokio::time::timeout(self.timeout, self.client.request(request))
            .await
            .map_err(|_| HttpError::Timeout)??;

        let body = response.body_text();
        if response.is_success() {
            tracing::debug!(status = %response.status, "Webhook accepted message");
            return Ok(Delivered {
                status: response.status,
                body,
            });
        }

        Err(DeliveryError::Rejected {
            status: response.status,
            body,
        })
    }
}
