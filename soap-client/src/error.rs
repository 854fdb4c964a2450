//! Error types for the SOAP client

use std::fmt;

use thiserror::Error;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success HTTP status whose body is not a SOAP fault
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// Payload is not a SOAP envelope, or a fault lacks a usable error code
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// SOAP fault returned by the device, translated to a typed action error
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl SoapError {
    /// The action error behind this error, if the device reported a fault
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            SoapError::Action(err) => Some(err),
            _ => None,
        }
    }
}

/// Catch surfaces an [`ActionErrorKind`] belongs to
///
/// Every kind is a `ServiceAction` error. Kinds that describe a failed index
/// or key lookup also carry `ArrayIndex` or `Lookup`, so callers can handle
/// them together with other index/lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Any failure of a remote service action
    ServiceAction,
    /// An array index was out of range
    ArrayIndex,
    /// A key had no matching entry
    Lookup,
}

/// The distinguishable kinds of UPnP action failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionErrorKind {
    /// 401: the action is unknown or the caller may not invoke it
    ActionNotAuthorizedOrUnknown,
    /// 402: wrong number or type of arguments
    InvalidArgument,
    /// 501: the device failed to carry out the action
    ActionFailed,
    /// 600: an argument value is invalid
    ArgumentValueInvalid,
    /// 603: the device ran out of memory
    OutOfMemory,
    /// 606: the action requires authorization
    SecurityError,
    /// 713: the specified array index is invalid
    ArrayIndexInvalid,
    /// 714: no such entry in array
    LookupFailed,
    /// 801: a string argument is too short
    ArgumentStringTooShort,
    /// 802: a string argument is too long
    ArgumentStringTooLong,
    /// 803: a string argument contains an invalid character
    ArgumentCharacterInvalid,
    /// 820: internal device error
    InternalError,
    /// Any well-formed fault whose code has no catalog entry
    Generic,
}

impl ActionErrorKind {
    /// Capability tags of this kind, always starting with `ServiceAction`
    pub fn categories(&self) -> &'static [ErrorCategory] {
        match self {
            ActionErrorKind::ArrayIndexInvalid => {
                &[ErrorCategory::ServiceAction, ErrorCategory::ArrayIndex]
            }
            ActionErrorKind::LookupFailed => &[ErrorCategory::ServiceAction, ErrorCategory::Lookup],
            _ => &[ErrorCategory::ServiceAction],
        }
    }

    /// Whether this kind can be handled as the given category
    pub fn is(&self, category: ErrorCategory) -> bool {
        self.categories().contains(&category)
    }
}

/// A SOAP fault reported by the device for a remote action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    code: i64,
    kind: ActionErrorKind,
    label: &'static str,
    description: Option<String>,
}

impl ActionError {
    pub(crate) fn new(
        code: i64,
        kind: ActionErrorKind,
        label: &'static str,
        description: Option<String>,
    ) -> Self {
        Self {
            code,
            kind,
            label,
            description,
        }
    }

    /// The UPnP error code as sent by the device
    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn kind(&self) -> ActionErrorKind {
        self.kind
    }

    /// Human-readable label from the error catalog
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The device's `<errorDescription>`, if it sent one
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this error can be handled as the given category
    pub fn is(&self, category: ErrorCategory) -> bool {
        self.kind.is(category)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UPnP error {}: {}", self.code, self.label)?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ActionError {}
