use serde::{Deserialize, Serialize};
use soap_client::ActionResponse;

use crate::error::ApiError;
use crate::service::Service;

/// Base trait for all typed TR-064 actions
///
/// An implementor names the service and action, turns its request into the
/// ordered input arguments, and decodes the output arguments of a successful
/// call. Faults never reach `parse_response`; they are translated before.
pub trait FritzAction {
    /// The request type for this action
    type Request: Serialize;

    /// The response type for this action
    type Response: for<'de> Deserialize<'de>;

    /// The service this action belongs to
    const SERVICE: Service;

    /// The SOAP action name
    const ACTION: &'static str;

    /// Input arguments in the order the device expects them
    fn arguments(request: &Self::Request) -> Vec<(&'static str, String)>;

    /// Decode the output arguments into the typed response
    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError>;
}

/// Encode a boolean input argument
pub(crate) fn bool_argument(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
