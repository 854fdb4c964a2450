//! Connection state and reconnect actions for the WANIPConnection service

use serde::{Deserialize, Serialize};
use soap_client::ActionResponse;

use crate::{ApiError, FritzAction, Service};

/// WANIPConnection GetStatusInfo action
pub struct GetStatusInfoOperation;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetStatusInfoRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStatusInfoResponse {
    /// e.g. `Connected`, `Connecting`, `Disconnected`
    pub connection_status: String,
    pub last_connection_error: String,
    /// Seconds since the connection came up
    pub uptime: u32,
}

impl GetStatusInfoResponse {
    pub fn is_connected(&self) -> bool {
        self.connection_status == "Connected"
    }
}

impl FritzAction for GetStatusInfoOperation {
    type Request = GetStatusInfoRequest;
    type Response = GetStatusInfoResponse;

    const SERVICE: Service = Service::WANIPConnection;
    const ACTION: &'static str = "GetStatusInfo";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(GetStatusInfoResponse {
            connection_status: response.get_str("NewConnectionStatus")?.to_string(),
            last_connection_error: response
                .raw("NewLastConnectionError")
                .unwrap_or("ERROR_NONE")
                .to_string(),
            uptime: response.get_u32("NewUptime")?,
        })
    }
}

/// WANIPConnection GetExternalIPAddress action
pub struct GetExternalIpAddressOperation;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetExternalIpAddressRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetExternalIpAddressResponse {
    pub external_ip_address: String,
}

impl FritzAction for GetExternalIpAddressOperation {
    type Request = GetExternalIpAddressRequest;
    type Response = GetExternalIpAddressResponse;

    const SERVICE: Service = Service::WANIPConnection;
    const ACTION: &'static str = "GetExternalIPAddress";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(GetExternalIpAddressResponse {
            external_ip_address: response.get_str("NewExternalIPAddress")?.to_string(),
        })
    }
}

/// WANIPConnection ForceTermination action
///
/// Drops the internet connection; the router dials in again right away and
/// usually gets a new external address.
pub struct ForceTerminationOperation;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ForceTerminationRequest;

impl FritzAction for ForceTerminationOperation {
    type Request = ForceTerminationRequest;
    type Response = ();

    const SERVICE: Service = Service::WANIPConnection;
    const ACTION: &'static str = "ForceTermination";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(_response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
