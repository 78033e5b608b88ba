use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::{api_url, backend_base_url};

/// Every variant is shown to the visitor as the same generic failure message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("backend URL is not configured")]
    Unconfigured,
    #[error("failed to encode enquiry: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("collector answered with status {0}")]
    Status(u16),
}

/// One HTTP POST with a JSON body, answering the response status
#[async_trait(?Send)]
pub trait EnquiryTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError>;
}

/// Browser fetch via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl EnquiryTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Sends enquiry records to the collector. No retries.
#[derive(Debug, Clone)]
pub struct EnquiryClient<T = GlooTransport> {
    base_url: Option<String>,
    transport: T,
}

impl EnquiryClient<GlooTransport> {
    /// Client for the collector configured at build time
    pub fn from_build_env() -> Self {
        Self::new(backend_base_url(), GlooTransport)
    }
}

impl<T: EnquiryTransport> EnquiryClient<T> {
    pub fn new(base_url: Option<String>, transport: T) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Posts `record` as JSON to `{base_url}{endpoint}` exactly once.
    /// Any 2xx status is success.
    pub async fn submit<R: Serialize>(&self, endpoint: &str, record: &R) -> Result<(), SubmitError> {
        let base = self.base_url.as_deref().ok_or(SubmitError::Unconfigured)?;
        let body = serde_json::to_string(record).map_err(|e| SubmitError::Encode(e.to_string()))?;
        let url = api_url(base, endpoint);

        let status = self.transport.post_json(&url, body).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every POST and answers with a fixed result
    #[derive(Clone)]
    pub struct FakeTransport {
        pub calls: Rc<RefCell<Vec<(String, String)>>>,
        pub answer: Result<u16, SubmitError>,
    }

    impl FakeTransport {
        pub fn answering(answer: Result<u16, SubmitError>) -> Self {
            Self {
                calls: Rc::new(RefCell::new(Vec::new())),
                answer,
            }
        }
    }

    #[async_trait(?Send)]
    impl EnquiryTransport for FakeTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
            self.calls.borrow_mut().push((url.to_string(), body));
            // Stay pending for one poll so concurrent submissions interleave
            tokio::task::yield_now().await;
            self.answer.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;
    use serde_json::json;

    fn client(answer: Result<u16, SubmitError>) -> (EnquiryClient<FakeTransport>, FakeTransport) {
        let transport = FakeTransport::answering(answer);
        let client = EnquiryClient::new(Some("https://api.example.com".into()), transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn test_submit_posts_json_to_endpoint() {
        let (client, transport) = client(Ok(201));
        let result = client.submit("/api/enquiries/contact", &json!({ "name": "Asha" })).await;

        assert_eq!(result, Ok(()));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.example.com/api/enquiries/contact");
        assert_eq!(calls[0].1, r#"{"name":"Asha"}"#);
    }

    #[tokio::test]
    async fn test_non_2xx_is_failure() {
        let (client, transport) = client(Ok(422));
        let result = client.submit("/api/enquiries/event", &json!({})).await;
        assert_eq!(result, Err(SubmitError::Status(422)));
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_network_error_is_not_retried() {
        let (client, transport) = client(Err(SubmitError::Network("refused".into())));
        let result = client.submit("/api/enquiries/event", &json!({})).await;
        assert_eq!(result, Err(SubmitError::Network("refused".into())));
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_without_io() {
        let transport = FakeTransport::answering(Ok(200));
        let client = EnquiryClient::new(None, transport.clone());
        let result = client.submit("/api/enquiries/contact", &json!({})).await;
        assert_eq!(result, Err(SubmitError::Unconfigured));
        assert!(transport.calls.borrow().is_empty());
    }
}
