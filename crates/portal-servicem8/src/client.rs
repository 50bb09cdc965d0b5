//! Shared request-dispatch core.
//!
//! Every endpoint method funnels into [`ServiceM8Client::dispatch`] with an
//! [`Operation`]: a path template, a verb, path parameters, an optional JSON
//! body, and an optional [`Filter`]. Request construction is split out into
//! [`ServiceM8Client::build_request`] so requests can be inspected without
//! sending them.

use std::time::Duration;

use portal_config::ServiceM8Config;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ServiceM8Error;
use crate::filter::Filter;
use crate::http::check_response;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.servicem8.com/api_1.0";

/// Response header carrying the UUID of a newly created record.
pub const RECORD_UUID_HEADER: &str = "x-record-uuid";

/// How requests authenticate.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Private application key, sent as `X-API-Key`.
    ApiKey(String),
    /// OAuth access token, sent as `Authorization: Bearer`.
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(****)"),
            Self::Bearer(_) => f.write_str("Bearer(****)"),
        }
    }
}

/// One call against the API.
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    pub method: Method,
    /// Path relative to the base URL, with `{name}` placeholders.
    pub template: &'static str,
    pub params: &'a [(&'a str, &'a str)],
    pub body: Option<serde_json::Value>,
    pub filter: Option<&'a Filter>,
}

impl<'a> Operation<'a> {
    #[must_use]
    pub fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            params: &[],
            body: None,
            filter: None,
        }
    }

    #[must_use]
    pub fn params(mut self, params: &'a [(&'a str, &'a str)]) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Option<&'a Filter>) -> Self {
        self.filter = filter;
        self
    }
}

/// HTTP client for the ServiceM8 REST API.
#[derive(Debug, Clone)]
pub struct ServiceM8Client {
    pub(crate) http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl ServiceM8Client {
    /// Create a client against `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("servicem8-portal/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Build from configuration. An API key wins over an OAuth access token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceM8Error::NotConfigured`] when neither is set.
    pub fn from_config(config: &ServiceM8Config) -> Result<Self, ServiceM8Error> {
        let credentials = if !config.api_key.trim().is_empty() {
            Credentials::ApiKey(config.api_key.trim().to_string())
        } else if !config.access_token.trim().is_empty() {
            Credentials::Bearer(config.access_token.trim().to_string())
        } else {
            return Err(ServiceM8Error::NotConfigured(
                "set servicem8.api_key or servicem8.access_token",
            ));
        };
        Ok(Self::new(
            &config.base_url,
            credentials,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the HTTP request for `op` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceM8Error::MissingPathParam`] if a placeholder has no
    /// value, or [`ServiceM8Error::Http`] if the request cannot be built.
    pub fn build_request(&self, op: &Operation<'_>) -> Result<reqwest::Request, ServiceM8Error> {
        let path = render_path(op.template, op.params)?;
        let mut url = format!("{}{path}", self.base_url);
        if let Some(filter) = op.filter {
            url.push('?');
            url.push_str(&filter.to_query());
        }

        let mut builder = self
            .http
            .request(op.method.clone(), &url)
            .header(reqwest::header::ACCEPT, "application/json");
        builder = match &self.credentials {
            Credentials::ApiKey(key) => builder.header("X-API-Key", key),
            Credentials::Bearer(token) => builder.bearer_auth(token),
        };
        if let Some(body) = &op.body {
            builder = builder.json(body);
        }
        Ok(builder.build()?)
    }

    /// Send `op` and map non-success statuses to typed errors.
    ///
    /// # Errors
    ///
    /// See [`ServiceM8Error`].
    pub async fn dispatch(&self, op: Operation<'_>) -> Result<reqwest::Response, ServiceM8Error> {
        let request = self.build_request(&op)?;
        let path = request.url().path().to_string();
        tracing::debug!(method = %op.method, %path, "servicem8 request");
        let resp = self.http.execute(request).await?;
        check_response(resp, &path).await
    }

    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        template: &'static str,
        filter: Option<&Filter>,
    ) -> Result<Vec<T>, ServiceM8Error> {
        let resp = self
            .dispatch(Operation::new(Method::GET, template).filter(filter))
            .await?;
        decode(resp).await
    }

    pub(crate) async fn fetch_one<T: DeserializeOwned>(
        &self,
        template: &'static str,
        uuid: &str,
    ) -> Result<T, ServiceM8Error> {
        let params = [("uuid", uuid)];
        let resp = self
            .dispatch(Operation::new(Method::GET, template).params(&params))
            .await?;
        decode(resp).await
    }

    /// POST a new record. Returns the UUID ServiceM8 assigned.
    pub(crate) async fn create_record<B: Serialize + Sync>(
        &self,
        template: &'static str,
        body: &B,
    ) -> Result<String, ServiceM8Error> {
        let body = to_value(body)?;
        let resp = self
            .dispatch(Operation::new(Method::POST, template).body(body))
            .await?;
        record_uuid(&resp)
    }

    pub(crate) async fn update_record<B: Serialize + Sync>(
        &self,
        template: &'static str,
        uuid: &str,
        body: &B,
    ) -> Result<(), ServiceM8Error> {
        let params = [("uuid", uuid)];
        let body = to_value(body)?;
        self.dispatch(Operation::new(Method::POST, template).params(&params).body(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_record(
        &self,
        template: &'static str,
        uuid: &str,
    ) -> Result<(), ServiceM8Error> {
        let params = [("uuid", uuid)];
        self.dispatch(Operation::new(Method::DELETE, template).params(&params))
            .await?;
        Ok(())
    }
}

/// Substitute `{name}` placeholders with URL-encoded values.
pub(crate) fn render_path(
    template: &'static str,
    params: &[(&str, &str)],
) -> Result<String, ServiceM8Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ServiceM8Error::MissingPathParam {
                name: name.to_string(),
                template,
            })?;
        out.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ServiceM8Error> {
    serde_json::to_value(body).map_err(|e| ServiceM8Error::Parse(e.to_string()))
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ServiceM8Error> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ServiceM8Error::Parse(e.to_string()))
}

pub(crate) fn record_uuid(resp: &reqwest::Response) -> Result<String, ServiceM8Error> {
    resp.headers()
        .get(RECORD_UUID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ServiceM8Error::Parse(format!("response had no {RECORD_UUID_HEADER} header")))
}
