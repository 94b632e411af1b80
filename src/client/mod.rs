//! HTTP client wrapper shared by list loaders and services.
//!
//! Requests go through a [`Transport`] so the networking backend can be
//! swapped out. [`ApiClient`] owns the cross-cutting rule that a `401` from any
//! endpoint sends the navigator to the login page.

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::DEFAULT_LOGIN_PATH;
use crate::surface::Navigator;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{ClientError, ClientResult, TransportError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Already url-encoded `application/x-www-form-urlencoded` body.
    Form(String),
}

/// Request addressed relative to the API origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path including the query string.
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turns a non-2xx response into [`ClientError::Status`].
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

fn encode_json<B: Serialize + ?Sized>(body: &B) -> ClientResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|err| ClientError::Encode(err.to_string()))
}

/// Sends requests to the backend.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

pub struct ApiClient<T> {
    transport: T,
    navigator: Rc<dyn Navigator>,
    login_path: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            transport,
            navigator,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn login_location(&self) -> &str {
        &self.login_path
    }

    /// Sends the navigator to the login page.
    pub fn redirect_to_login(&self) {
        self.navigator.navigate(&self.login_path);
    }

    /// Sends a request, redirecting to login on `401`.
    ///
    /// Any other status is returned to the caller untouched.
    pub async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|err| {
            log::error!("{method} {path} failed: {err}");
            ClientError::from(err)
        })?;

        if response.status == 401 {
            log::warn!("{method} {path} is not authorized, redirecting to login");
            self.redirect_to_login();
            return Err(ClientError::Unauthorized);
        }

        log::debug!("{method} {path} -> {}", response.status);
        Ok(response)
    }

    pub async fn get(&self, path: impl Into<String>) -> ClientResult<ApiResponse> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post(&self, path: impl Into<String>) -> ClientResult<ApiResponse> {
        self.send(ApiRequest::new(Method::Post, path)).await
    }

    pub async fn post_json<B>(&self, path: impl Into<String>, body: &B) -> ClientResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = RequestBody::Json(encode_json(body)?);
        self.send(ApiRequest::new(Method::Post, path).body(body)).await
    }

    pub async fn post_form<B>(&self, path: impl Into<String>, body: &B) -> ClientResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = RequestBody::Form(serde_html_form::to_string(body)?);
        self.send(ApiRequest::new(Method::Post, path).body(body)).await
    }

    pub async fn patch_json<B>(&self, path: impl Into<String>, body: &B) -> ClientResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = RequestBody::Json(encode_json(body)?);
        self.send(ApiRequest::new(Method::Patch, path).body(body)).await
    }

    pub async fn patch(&self, path: impl Into<String>) -> ClientResult<ApiResponse> {
        self.send(ApiRequest::new(Method::Patch, path)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> ClientResult<ApiResponse> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }
}
