//! Shared REST client for the Funil backend.
//!
//! Wraps a blocking `reqwest` client with the base URL, the optional bearer
//! token, and uniform status/error mapping. Resource adapters compose their
//! endpoints on top of this.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use funil_core::application::ApplicationError;
use funil_core::error::FunilResult;

/// Total time budget for one request, including the response body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Budget for establishing the TCP/TLS connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Error payload the backend attaches to non-success responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking HTTP client for the Funil REST API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Build a client for the given API base URL.
    ///
    /// `token`, when present, is sent as a bearer token on every request.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> FunilResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApplicationError::Transport {
                reason: e.to_string(),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// GET a resource, decoding the JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> FunilResult<T> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send(request)?;
        self.expect_success(response, path)
    }

    /// GET a resource that may legitimately not exist.
    ///
    /// A 404 or a JSON `null` body both map to `Ok(None)`.
    pub fn get_optional<T: DeserializeOwned>(&self, path: &str) -> FunilResult<Option<T>> {
        let request = self.http.get(self.url(path));
        let response = self.send(request)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.expect_success(response, path)
    }

    /// GET a single record by id; 404 becomes `ApplicationError::NotFound`.
    pub fn get_record<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
        id: i64,
    ) -> FunilResult<T> {
        let request = self.http.get(self.url(path));
        let response = self.send(request)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApplicationError::NotFound { resource, id }.into());
        }
        self.expect_success(response, path)
    }

    /// POST a JSON body, decoding the JSON response.
    pub fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> FunilResult<T> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send(request)?;
        self.expect_success(response, path)
    }

    /// PUT a JSON body against a record; 404 becomes `NotFound`.
    pub fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        resource: &'static str,
        id: i64,
    ) -> FunilResult<T> {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.send(request)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApplicationError::NotFound { resource, id }.into());
        }
        self.expect_success(response, path)
    }

    /// PATCH a JSON body against a record; 404 becomes `NotFound`.
    pub fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        resource: &'static str,
        id: i64,
    ) -> FunilResult<T> {
        let request = self.http.patch(self.url(path)).json(body);
        let response = self.send(request)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApplicationError::NotFound { resource, id }.into());
        }
        self.expect_success(response, path)
    }

    /// DELETE a record; 404 becomes `NotFound`, the body is discarded.
    pub fn delete(&self, path: &str, resource: &'static str, id: i64) -> FunilResult<()> {
        let request = self.http.delete(self.url(path));
        let response = self.send(request)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApplicationError::NotFound { resource, id }.into());
        }
        if !response.status().is_success() {
            return Err(self.api_failure(response));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> FunilResult<reqwest::blocking::Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        request.send().map_err(|e| {
            ApplicationError::Transport {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn expect_success<T: DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
        path: &str,
    ) -> FunilResult<T> {
        let status = response.status();
        trace!(%status, path, "response received");

        if !status.is_success() {
            return Err(self.api_failure(response));
        }

        response.json().map_err(|e| {
            ApplicationError::MalformedResponse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn api_failure(&self, response: reqwest::blocking::Response) -> funil_core::error::FunilError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .map(|body| body.message)
            .unwrap_or_else(|_| "no error details provided".to_string());

        debug!(status, %message, "backend reported failure");
        ApplicationError::ApiFailure { status, message }.into()
    }
}
