//! Actions for the first WLANConfiguration service

use serde::{Deserialize, Serialize};
use soap_client::ActionResponse;

use crate::operation::bool_argument;
use crate::{ApiError, FritzAction, Service};

/// WLANConfiguration GetInfo action
pub struct GetWlanInfoOperation;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWlanInfoRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWlanInfoResponse {
    pub enable: bool,
    pub status: String,
    pub ssid: String,
    pub channel: u32,
    pub beacon_type: String,
    pub standard: String,
}

impl FritzAction for GetWlanInfoOperation {
    type Request = GetWlanInfoRequest;
    type Response = GetWlanInfoResponse;

    const SERVICE: Service = Service::WLANConfiguration;
    const ACTION: &'static str = "GetInfo";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(GetWlanInfoResponse {
            enable: response.get_bool("NewEnable")?,
            status: response.get_str("NewStatus")?.to_string(),
            ssid: response.get_str("NewSSID")?.to_string(),
            channel: response.get_u32("NewChannel")?,
            beacon_type: response.raw("NewBeaconType").unwrap_or_default().to_string(),
            standard: response.raw("NewStandard").unwrap_or_default().to_string(),
        })
    }
}

/// WLANConfiguration SetEnable action
pub struct SetWlanEnableOperation;

#[derive(Debug, Clone, Serialize)]
pub struct SetWlanEnableRequest {
    pub enable: bool,
}

impl FritzAction for SetWlanEnableOperation {
    type Request = SetWlanEnableRequest;
    type Response = ();

    const SERVICE: Service = Service::WLANConfiguration;
    const ACTION: &'static str = "SetEnable";

    fn arguments(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("NewEnable", bool_argument(request.enable))]
    }

    fn parse_response(_response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::response;

    #[test]
    fn test_set_enable_arguments() {
        let on = SetWlanEnableOperation::arguments(&SetWlanEnableRequest { enable: true });
        assert_eq!(on, vec![("NewEnable", "1".to_string())]);

        let off = SetWlanEnableOperation::arguments(&SetWlanEnableRequest { enable: false });
        assert_eq!(off, vec![("NewEnable", "0".to_string())]);
    }

    #[test]
    fn test_wlan_info_parsing() {
        let xml = response(
            "GetInfo",
            &[
                ("NewEnable", "0"),
                ("NewStatus", "Disabled"),
                ("NewChannel", "1"),
                ("NewSSID", "FRITZ!Box 7590 XY"),
                ("NewBeaconType", "11i"),
                ("NewStandard", "n"),
            ],
        );

        let result = GetWlanInfoOperation::parse_response(&xml).unwrap();
        assert!(!result.enable);
        assert_eq!(result.channel, 1);
        assert_eq!(result.ssid, "FRITZ!Box 7590 XY");
    }
}
