use super::error::FetchError;
use serde_json::{Map, Value};
use std::time::Duration;

/// Default per-request timeout applied when the caller sets none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The full description of one outbound HTTP call.
///
/// Built fluently, consumed by [`FetchClient::fetch`](super::client::FetchClient::fetch).
/// A value describes exactly one dispatch and is discarded afterwards.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Absolute URL the request is sent to, before query assembly.
    base_url: String,
    /// HTTP method token, compared case-insensitively. Defaults to `GET`.
    method: String,
    /// Scalar parameters; query items for GET, JSON body otherwise.
    parameters: Option<Map<String, Value>>,
    /// Caller headers in insertion order. Duplicates are sent as-is.
    headers: Vec<(String, String)>,
    /// Explicit raw body, sent verbatim and overriding `parameters` for
    /// non-GET methods.
    body: Option<Vec<u8>>,
    /// Timeout for the whole request/response exchange.
    timeout: Duration,
    /// Static bearer token, attached as an `Authorization` header.
    token: Option<String>,
    /// When set, the decoded 2xx payload is pretty-printed to the log sink.
    print_response: bool,
}

impl FetchRequest {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            method: String::from("GET"),
            parameters: None,
            headers: Vec::new(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
            token: None,
            print_response: false,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds one parameter. Values are anything with a scalar JSON form.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.get_or_insert_with(Map::new).insert(key.into(), value.into());
        self
    }

    /// Replaces the whole parameter map at once.
    pub fn parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn print_response(mut self, print_response: bool) -> Self {
        self.print_response = print_response;
        self
    }

    pub(crate) fn is_get(&self) -> bool { self.method.eq_ignore_ascii_case("GET") }

    pub(crate) fn headers(&self) -> &[(String, String)] { &self.headers }

    pub(crate) fn parameters_ref(&self) -> Option<&Map<String, Value>> { self.parameters.as_ref() }

    pub(crate) fn take_body(&mut self) -> Option<Vec<u8>> { self.body.take() }

    pub(crate) fn request_timeout(&self) -> Duration { self.timeout }

    pub(crate) fn token_ref(&self) -> Option<&str> { self.token.as_deref() }

    pub(crate) fn wants_print(&self) -> bool { self.print_response }

    /// Parses the method token into a [`reqwest::Method`].
    ///
    /// An unconstructible token (whitespace, control characters) makes the
    /// whole request unbuildable, same bucket as a bad URL.
    pub(crate) fn parsed_method(&self) -> Result<reqwest::Method, FetchError> {
        reqwest::Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| FetchError::InvalidUrl(self.method.clone()))
    }

    /// Parses the base URL and, for GET, appends the parameters as query
    /// items. Query items already present on the base URL are kept.
    pub(crate) fn build_url(&self) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?;
        if self.is_get() {
            if let Some(params) = &self.parameters {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in params {
                    pairs.append_pair(key, &query_value(value));
                }
            }
        }
        Ok(url)
    }
}

/// Natural string form of a scalar parameter: JSON strings lose their
/// quotes, everything else keeps its canonical JSON text.
pub(crate) fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
