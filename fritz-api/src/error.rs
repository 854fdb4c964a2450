use soap_client::{ActionError, SoapError};
use thiserror::Error;

/// High-level API errors for TR-064 actions
///
/// Transport failures, malformed responses and device faults stay
/// distinguishable after crossing the SOAP layer. Device faults keep the
/// full [`ActionError`] so callers can still match on its kind or category.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection refused, timeouts, DNS failures and similar.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-success HTTP status without a SOAP fault in the body
    #[error("HTTP error: status {0}")]
    HttpError(u16),

    /// The device answered with something that is not a usable SOAP response
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The device reported a UPnP fault for the action
    #[error("Action error: {0}")]
    Action(ActionError),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// The device fault behind this error, if any
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            ApiError::Action(err) => Some(err),
            _ => None,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::NetworkError(msg),
            SoapError::Http(status) => ApiError::HttpError(status),
            SoapError::MalformedResponse(msg) => ApiError::MalformedResponse(msg),
            SoapError::Action(err) => ApiError::Action(err),
        }
    }
}
