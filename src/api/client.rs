//! API client for communicating with the Eshtrak REST backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the account, subscription, and payment endpoints.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    CheckoutMode, CheckoutSession, Plan, Profile, ProfileUpdate, SubscriptionStatus, UserSnapshot,
};
use crate::session::TokenRefresher;

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Successful login payload: both tokens and the user snapshot, issued
/// together.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserSnapshot,
}

/// Fields the signup endpoint expects. `password2` is the confirmation the
/// backend re-validates server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub success: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// API client for the Eshtrak backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token (after logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Accounts =====

    /// Authenticate with email and password, receiving tokens and the user
    /// snapshot as one unit.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        self.post("/api/accounts/login/", &body).await
    }

    /// Register a new account. The backend sends an activation email; the
    /// response only confirms registration.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse> {
        self.post("/api/accounts/signup/", request).await
    }

    /// Revoke a refresh token server-side. Best-effort companion to the
    /// local logout; the local session is cleared regardless of outcome.
    pub async fn logout(&self, refresh_token: &str) -> Result<()> {
        let url = self.url("/api/accounts/logout/");
        let body = serde_json::json!({ "refresh": refresh_token });
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&body)
            .send()
            .await
            .context("Failed to send logout request")?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Fetch the authenticated user's profile
    pub async fn fetch_profile(&self) -> Result<Profile> {
        self.get("/api/accounts/profile/").await
    }

    /// Update the editable profile fields, returning the stored profile.
    /// The endpoint parses form data, not JSON.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        let url = self.url("/api/accounts/profile/edit-profile/");
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers()?)
            .form(update)
            .send()
            .await
            .context("Failed to send profile update")?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .context("Failed to parse profile update response")
    }

    // ===== Subscriptions =====

    /// Fetch the available plans. Unauthenticated.
    pub async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        self.get("/subscriptions/api/plans/").await
    }

    /// Fetch the authenticated user's subscription, if any.
    ///
    /// The endpoint answers 200 with a `has_subscription: false` flag when
    /// no subscription exists, so the body is inspected before parsing.
    pub async fn fetch_subscription(&self) -> Result<SubscriptionStatus> {
        let url = self.url("/subscriptions/api/subscription/");
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .context("Failed to fetch subscription")?;

        let response = Self::check_response(response).await?;
        let text = response.text().await.context("Failed to read subscription body")?;
        debug!("Subscription response received");

        SubscriptionStatus::from_json(&text)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    // ===== Payment =====

    /// Create a hosted-checkout session for a plan.
    pub async fn create_checkout_session(
        &self,
        plan_id: i64,
        mode: CheckoutMode,
    ) -> Result<CheckoutSession> {
        let body = serde_json::json!({
            "plan_id": plan_id,
            "mode": mode,
        });
        self.post("/api/payment/create-checkout-session/", &body).await
    }
}

#[async_trait]
impl TokenRefresher for ApiClient {
    /// Exchange a refresh token for a new access token.
    /// The refresh endpoint itself is unauthenticated.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String> {
        let url = self.url("/api/token/refresh/");
        let body = serde_json::json!({ "refresh": refresh_token });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .context("Failed to send token refresh request")?;

        let response = Self::check_response(response).await?;
        let refreshed: RefreshResponse = response
            .json()
            .await
            .context("Failed to parse token refresh response")?;
        Ok(refreshed.access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{
            "refresh": "r.t.k",
            "access": "a.t.k",
            "user": {"user_id": 3, "email": "sam@example.com", "username": null}
        }"#;

        let parsed: LoginResponse =
            serde_json::from_str(json).expect("Failed to parse login response");
        assert_eq!(parsed.access, "a.t.k");
        assert_eq!(parsed.refresh, "r.t.k");
        assert_eq!(parsed.user.user_id, 3);
        assert_eq!(parsed.user.email, "sam@example.com");
        assert!(parsed.user.username.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            api.url("/api/accounts/login/"),
            "http://127.0.0.1:8000/api/accounts/login/"
        );
    }

    #[test]
    fn test_signup_request_serializes_all_fields() {
        let request = SignupRequest {
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            email: "sam@example.com".to_string(),
            password: "hunter22".to_string(),
            password2: "hunter22".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["first_name"], "Sam");
        assert_eq!(value["password2"], "hunter22");
    }
}
