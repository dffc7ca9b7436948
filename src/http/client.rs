use super::error::FetchError;
use super::request::FetchRequest;
use super::response;
use crate::metrics::RequestMetrics;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A thin wrapper around `reqwest::Client` that issues single-shot requests
/// and tallies them in a shared [`RequestMetrics`].
///
/// Construct one instance at the composition root and hand references (or
/// clones of the metrics handle) to consumers. The underlying transport is
/// stateless from this crate's perspective and shared across all calls.
#[derive(Debug)]
pub struct FetchClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Dispatch/outcome counters shared by every call through this client.
    metrics: Arc<RequestMetrics>,
}

impl FetchClient {
    /// Constructs a client with a default transport.
    ///
    /// Redirects are not followed, so 3xx statuses reach the classifier
    /// instead of being resolved silently.
    pub fn new() -> Self {
        Self::with_client(
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap(),
        )
    }

    /// Constructs a client around a preconfigured transport.
    ///
    /// The caller owns the transport's policy decisions; note that a client
    /// which follows redirects will never surface `Redirection` errors.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client, metrics: Arc::new(RequestMetrics::new()) }
    }

    /// Provides a cloned reference to the metrics aggregator.
    pub fn metrics(&self) -> Arc<RequestMetrics> { Arc::clone(&self.metrics) }

    /// Issues one request and decodes the 2xx JSON body into `T`.
    ///
    /// Exactly one outcome is produced per call: the decoded value, or one
    /// [`FetchError`] kind. Every dispatch bumps the started counter, every
    /// completion records success or failure, whichever way it went.
    pub async fn fetch<T: DeserializeOwned>(&self, request: FetchRequest) -> Result<T, FetchError> {
        self.metrics.record_started().await;
        let result = self.dispatch(request).await;
        self.metrics.record_outcome(result.is_ok()).await;
        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        mut request: FetchRequest,
    ) -> Result<T, FetchError> {
        let url = request.build_url()?;
        let method = request.parsed_method()?;
        let is_get = request.is_get();

        let mut builder = self.client.request(method, url).timeout(request.request_timeout());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !is_get {
            if let Some(body) = request.take_body() {
                builder = builder.body(body);
            } else if let Some(params) = request.parameters_ref() {
                // Sets the body and the application/json content type.
                builder = builder.json(params);
            }
        }
        // Attached after the caller's headers; a conflicting Authorization
        // header is not suppressed, both go out.
        if let Some(token) = request.token_ref() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        response::classify_status(status)?;
        let bytes = response.bytes().await?;
        response::decode_body(&bytes, request.wants_print())
    }
}

impl Default for FetchClient {
    fn default() -> Self { Self::new() }
}
