//! OAuth 2.0 token exchange for public ServiceM8 applications.
//!
//! Both grants POST a form-encoded body to the token endpoint
//! (`https://go.servicem8.com/oauth/access_token` by default) with the
//! application's client id and secret.

use portal_config::ServiceM8Config;
use serde::{Deserialize, Serialize};

use crate::error::ServiceM8Error;
use crate::http::check_response;
use crate::ServiceM8Client;

/// Registered application credentials.
#[derive(Clone)]
pub struct OAuthApp {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl std::fmt::Debug for OAuthApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthApp")
            .field("client_id", &self.client_id)
            .field("client_secret", &"****")
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl OAuthApp {
    /// # Errors
    ///
    /// Returns [`ServiceM8Error::NotConfigured`] without a client id and secret.
    pub fn from_config(config: &ServiceM8Config) -> Result<Self, ServiceM8Error> {
        if !config.has_oauth_app() {
            return Err(ServiceM8Error::NotConfigured(
                "set servicem8.client_id and servicem8.client_secret",
            ));
        }
        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.oauth_url.clone(),
        })
    }
}

/// Which grant to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant<'a> {
    AuthorizationCode { code: &'a str, redirect_uri: &'a str },
    RefreshToken(&'a str),
}

/// Token endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl ServiceM8Client {
    /// Build the token request for `grant` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceM8Error::Http`] if the URL is invalid.
    pub fn build_token_request(
        &self,
        app: &OAuthApp,
        grant: &Grant<'_>,
    ) -> Result<reqwest::Request, ServiceM8Error> {
        let mut fields = vec![
            ("client_id", app.client_id.as_str()),
            ("client_secret", app.client_secret.as_str()),
        ];
        match grant {
            Grant::AuthorizationCode { code, redirect_uri } => {
                fields.push(("grant_type", "authorization_code"));
                fields.push(("code", *code));
                fields.push(("redirect_uri", *redirect_uri));
            }
            Grant::RefreshToken(token) => {
                fields.push(("grant_type", "refresh_token"));
                fields.push(("refresh_token", *token));
            }
        }

        Ok(self
            .http
            .post(&app.token_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .body(form_body(&fields))
            .build()?)
    }

    /// Exchange an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceM8Error`] if the endpoint rejects the grant or the
    /// body is not a token response.
    pub async fn exchange_code(
        &self,
        app: &OAuthApp,
        code: &str,
        redirect_uri: &str,
    ) -> Result<OAuthToken, ServiceM8Error> {
        self.request_token(app, &Grant::AuthorizationCode { code, redirect_uri })
            .await
    }

    /// Trade a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceM8Error`] if the endpoint rejects the grant.
    pub async fn refresh_token(
        &self,
        app: &OAuthApp,
        refresh_token: &str,
    ) -> Result<OAuthToken, ServiceM8Error> {
        self.request_token(app, &Grant::RefreshToken(refresh_token))
            .await
    }

    async fn request_token(
        &self,
        app: &OAuthApp,
        grant: &Grant<'_>,
    ) -> Result<OAuthToken, ServiceM8Error> {
        let request = self.build_token_request(app, grant)?;
        let path = request.url().path().to_string();
        let resp = check_response(self.http.execute(request).await?, &path).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceM8Error::Parse(e.to_string()))
    }
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
