//! Eventbrite API client
//!
//! Every call runs the same linear pipeline:
//! - wait for a rate-limit permit (GET and DELETE before validation, POST after)
//! - validate the descriptor's required fields
//! - flatten it to a query (GET) or serialize it to a JSON body (POST)
//! - add the `token` and `expand` query parameters
//! - send, then decode the body
//!
//! Nothing is retried. The caller's [`Context`] can abort the wait for a
//! permit and the HTTP exchange.

use super::rate_limit::RateLimiter;
use super::request::{ApiRequest, Query};
use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::{ApiError, Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

/// Related resources the API is asked to embed in every response
pub const EXPAND: &str = "venue,category,subcategories";

/// Client for the Eventbrite v3 API
///
/// Cheap to clone; clones share the transport and the rate limiter.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
    rate_limiter: Option<RateLimiter>,
}

impl Client {
    /// Create a client with default configuration (no token)
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from a configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(&config.user_agent)
                .build()?,
        };

        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
            rate_limiter: RateLimiter::new(config.requests_per_second),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Configured API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// GET `path` without parameters and decode the 200 body
    pub async fn get_json<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T> {
        self.get(ctx, path, None::<&Query>).await
    }

    /// GET `path` with `req` flattened into the query string
    pub async fn get_json_with<T, R>(&self, ctx: &Context, path: &str, req: &R) -> Result<T>
    where
        T: DeserializeOwned,
        R: ApiRequest + ?Sized,
    {
        self.get(ctx, path, Some(req)).await
    }

    /// POST `path` with an empty body (`null`)
    pub async fn post_json<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T> {
        self.post(ctx, path, None::<&Query>).await
    }

    /// POST `path` with `req` as the JSON body
    pub async fn post_json_with<T, R>(&self, ctx: &Context, path: &str, req: &R) -> Result<T>
    where
        T: DeserializeOwned,
        R: ApiRequest + ?Sized,
    {
        self.post(ctx, path, Some(req)).await
    }

    /// DELETE `path` and decode the body
    pub async fn delete_json<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T> {
        self.await_rate_limiter(ctx).await?;

        let url = self.request_url(path, Query::new())?;
        let (status, body) = self.send(ctx, self.http.delete(url), Method::DELETE, path).await?;
        trace!("DELETE {} -> {}", path, status);

        decode(&body)
    }

    async fn get<T, R>(&self, ctx: &Context, path: &str, req: Option<&R>) -> Result<T>
    where
        T: DeserializeOwned,
        R: ApiRequest + ?Sized,
    {
        self.await_rate_limiter(ctx).await?;

        let query = match req {
            Some(req) => {
                req.validate()?;
                req.to_query()?
            }
            None => Query::new(),
        };

        let url = self.request_url(path, query)?;
        let (status, body) = self.send(ctx, self.http.get(url), Method::GET, path).await?;

        if status == StatusCode::OK {
            return decode(&body);
        }

        debug!("GET {} returned {}", path, status);
        // An undecodable error body still yields an (empty) API error.
        let api_error: ApiError = serde_json::from_slice(&body).unwrap_or_default();
        Err(Error::Api(api_error))
    }

    async fn post<T, R>(&self, ctx: &Context, path: &str, req: Option<&R>) -> Result<T>
    where
        T: DeserializeOwned,
        R: ApiRequest + ?Sized,
    {
        if let Some(req) = req {
            req.validate()?;
        }

        self.await_rate_limiter(ctx).await?;

        let body = serde_json::to_vec(&req).map_err(Error::Encode)?;
        let url = self.request_url(path, Query::new())?;
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);

        let (status, body) = self.send(ctx, request, Method::POST, path).await?;
        trace!("POST {} -> {}", path, status);

        decode(&body)
    }

    async fn await_rate_limiter(&self, ctx: &Context) -> Result<()> {
        match &self.rate_limiter {
            Some(limiter) => limiter.acquire(ctx).await,
            None => Ok(()),
        }
    }

    /// `base_url + path` with `query` plus the auth parameters as its query string
    fn request_url(&self, path: &str, mut query: Query) -> Result<Url> {
        if self.token.is_empty() {
            return Err(Error::MissingToken);
        }
        query.insert("token".to_string(), self.token.clone());
        query.insert("expand".to_string(), EXPAND.to_string());

        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        url.query_pairs_mut().clear().extend_pairs(query.iter());
        Ok(url)
    }

    /// Send the request and read the whole body, racing the caller's context
    async fn send(
        &self,
        ctx: &Context,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<(StatusCode, Bytes)> {
        if ctx.is_done() {
            return Err(ctx.err());
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, Error>((status, body))
        };

        debug!("{} {}", method, path);
        tokio::select! {
            biased;
            () = ctx.done() => Err(ctx.err()),
            result = exchange => result,
        }
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token.is_empty())
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}
