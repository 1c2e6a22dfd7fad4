//! Authentication methods for the Encore backend.

use crate::client::parse_response;
use crate::error::{ClientError, Result};
use crate::types::{
    ConfirmationRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the Encore backend.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username (or email) and password.
    ///
    /// Returns the bearer token on success.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<String> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        debug!(url = %url, user = %username_or_email, "Attempting login");

        let request = LoginRequest {
            username_or_email: username_or_email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let login: LoginResponse = parse_response(response, "login").await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        let token = login.token.ok_or_else(|| {
            ClientError::ParseError(format!("login response without token: {}", login.msg))
        })?;

        info!(user = %username_or_email, "Login successful");
        Ok(token)
    }

    /// Register a new account.
    ///
    /// Returns the backend's confirmation message.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        let url = format!("{}/api/v1/auth/register", self.base_url);
        debug!(url = %url, username = %username, "Registering account");

        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let message: MessageResponse = parse_response(response, "register").await?;
        info!(username = %username, "Registration submitted");
        Ok(message.msg)
    }

    /// Confirm a registration with the one-time code sent by email.
    pub async fn confirm(&self, username_or_email: &str, otp: &str) -> Result<String> {
        let url = format!("{}/api/v1/auth/register/confirmation", self.base_url);
        debug!(url = %url, user = %username_or_email, "Confirming registration");

        let request = ConfirmationRequest {
            username_or_email: username_or_email.to_string(),
            otp: otp.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let message: MessageResponse = parse_response(response, "confirmation").await?;
        info!(user = %username_or_email, "Registration confirmed");
        Ok(message.msg)
    }
}
