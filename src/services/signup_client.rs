// src/services/signup_client.rs
use std::time::Duration;

use url::Url;

use crate::error::SignupError;
use crate::models::SignupForm;

/// Relative to the account API base, so a base path prefix is kept.
pub const SIGNUP_ENDPOINT_PATH: &str = "api/signup";

/// Client for the remote account API. One instance is shared by all requests.
#[derive(Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SignupClient {
    pub fn new(api_base: &Url, timeout: Duration) -> Result<Self, SignupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: signup_endpoint(api_base)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends the whole form record as one JSON creation request. No retries.
    pub async fn create_account(&self, form: &SignupForm) -> Result<(), SignupError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SignupError::Rejected(status));
        }

        tracing::debug!("Signup endpoint answered {}", status);
        Ok(())
    }
}

/// `http://host/accounts` and `http://host/accounts/` both resolve to
/// `http://host/accounts/api/signup`.
fn signup_endpoint(api_base: &Url) -> Result<Url, url::ParseError> {
    let mut base = api_base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SIGNUP_ENDPOINT_PATH)
}
