//! Slim outbound HTTP client.
//!
//! The catalog core only ever issues single-shot GET requests for JSON, so
//! this wrapper covers exactly that: build a URL, attach headers, send, and
//! decode. On `wasm32` requests go through Spin's outbound HTTP host call;
//! native builds get a stub response so the crate stays testable anywhere.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// HTTP client for fetching JSON from external collaborators.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header included in every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> GetRequest {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        GetRequest {
            url: full_url,
            headers: self.default_headers.clone(),
        }
    }
}

/// A GET request under construction.
pub struct GetRequest {
    url: String,
    headers: HashMap<String, String>,
}

impl GetRequest {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// The full URL this request will hit.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        let mut request = Request::builder();
        request.method(Method::Get);
        request.uri(&self.url);
        for (key, value) in &self.headers {
            request.header(key.as_str(), value.as_str());
        }

        let response = spin_sdk::http::send(request.build())
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status();
        Ok(Response {
            status,
            body: response.into_body(),
        })
    }

    /// Send the request (native stub: empty 200 response).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, FetchError> {
        Ok(Response {
            status: 200,
            body: Vec::new(),
        })
    }
}

/// A received HTTP response.
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    /// Create a response from parts.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as JSON, failing on non-2xx statuses.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        if !self.is_success() {
            return Err(FetchError::HttpError {
                status: self.status,
                message: String::from_utf8_lossy(&self.body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}
