// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the account API; the signup endpoint lives under it.
    pub signup_api_url: Url,
    pub login_url: String,
    pub redirect_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub enable_hsts: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let signup_api_url = var("SIGNUP_API_URL", "http://127.0.0.1:8080");
        let signup_api_url = Url::parse(&signup_api_url)
            .with_context(|| format!("SIGNUP_API_URL is not a valid URL: {}", signup_api_url))?;
        if signup_api_url.cannot_be_a_base() {
            anyhow::bail!("SIGNUP_API_URL cannot be used as a base URL: {}", signup_api_url);
        }

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "3000")
                .parse()
                .context("PORT must be a valid port number")?,
            signup_api_url,
            login_url: var("LOGIN_URL", "/login"),
            redirect_delay_ms: var("REDIRECT_DELAY_MS", "1500")
                .parse()
                .context("REDIRECT_DELAY_MS must be a number of milliseconds")?,
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            enable_hsts: var("ENABLE_HSTS", "false") == "true",
        })
    }

    pub fn server_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.host, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[cfg(test)]
impl Config {
    /// Local config pointing the signup client at `api_url`.
    pub fn for_api(api_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            signup_api_url: Url::parse(api_url).unwrap(),
            login_url: "/login".to_string(),
            redirect_delay_ms: 1500,
            request_timeout_secs: 5,
            enable_hsts: false,
        }
    }
}
