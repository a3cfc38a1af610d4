//! HTTP implementation of `AuthApi`
//!
//! Maps a 2xx response to the returned user record and any other response to
//! an `AuthError` carrying the body's `message` (or the configured fallback).
//! Requests are never retried.

use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use crate::application::config::ClientConfig;
use crate::domain::entity::session::Session;
use crate::domain::port::AuthApi;
use crate::domain::value_object::{auth_outcome::AuthOutcome, credentials::Credentials};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{ErrorResponse, SignInRequest, SignUpRequest};

/// reqwest-backed auth API client
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpAuthApi {
    pub fn new(config: Arc<ClientConfig>) -> AuthResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .build()
            .map_err(|e| AuthError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// POST credentials and decode the user record
    async fn submit<B: Serialize>(&self, path: &str, body: &B) -> AuthResult<Session> {
        let url = self.config.endpoint(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error_from_response(response).await);
        }

        let unexpected = || AuthError::UnexpectedResponse {
            status: Some(status.as_u16()),
            message: self.config.fallback_failure_message.clone(),
        };

        let session = response.json::<Session>().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Undecodable user record");
            unexpected()
        })?;

        if !session.has_username() {
            tracing::warn!(url = %url, "User record without a username");
            return Err(unexpected());
        }

        Ok(session)
    }

    async fn error_from_response(&self, response: Response) -> AuthError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = ErrorResponse::parse(&body)
            .into_message()
            .unwrap_or_else(|| self.config.fallback_failure_message.clone());
        AuthError::from_status(status, message)
    }

    fn transport_error(&self, url: &str, error: &reqwest::Error) -> AuthError {
        tracing::debug!(url = %url, error = %error, timeout = error.is_timeout(), "Request failed");
        AuthError::Transport(self.config.transport_failure_message.clone())
    }

    fn finish(result: AuthResult<Session>) -> AuthOutcome {
        if let Err(e) = &result {
            e.log();
        }
        AuthOutcome::from(result)
    }
}

impl AuthApi for HttpAuthApi {
    async fn sign_in(&self, credentials: &Credentials, remember_me: bool) -> AuthOutcome {
        let body = SignInRequest::new(credentials, remember_me);
        Self::finish(self.submit(&self.config.signin_path, &body).await)
    }

    async fn sign_up(&self, credentials: &Credentials, remember_me: bool) -> AuthOutcome {
        let body = SignUpRequest::new(credentials, remember_me);
        Self::finish(self.submit(&self.config.signup_path, &body).await)
    }

    async fn current_user(&self) -> AuthResult<Option<Session>> {
        let url = self.config.endpoint(&self.config.me_path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, &e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(self.error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, &e))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        // Non-JSON bodies are treated as a bare username
        let value = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
        Ok(Session::from_bootstrap(value))
    }
}
