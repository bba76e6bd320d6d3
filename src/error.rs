// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Why a signup request did not create an account.
///
/// The variants exist for logging. Every one of them is shown to the
/// user as the same generic failure message.
#[derive(Error, Debug)]
pub enum SignupError {
    #[error("signup endpoint URL is invalid: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("signup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("signup rejected with status {0}")]
    Rejected(StatusCode),
}

impl SignupError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, SignupError::Rejected(status) if *status == StatusCode::CONFLICT)
    }

    /// Status for the page shown to the user. The message is the same for all variants.
    ///
    /// Only statuses that describe the submitted form are passed through;
    /// anything else from the backend is its own fault and becomes 502.
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode as PageStatus;

        match self {
            SignupError::Rejected(status) if *status == StatusCode::BAD_REQUEST => {
                PageStatus::BAD_REQUEST
            }
            SignupError::Rejected(status) if *status == StatusCode::CONFLICT => {
                PageStatus::CONFLICT
            }
            SignupError::Rejected(status) if *status == StatusCode::UNPROCESSABLE_ENTITY => {
                PageStatus::UNPROCESSABLE_ENTITY
            }
            _ => PageStatus::BAD_GATEWAY,
        }
    }
}
