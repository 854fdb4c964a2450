//! GetInfo action for the DeviceInfo service

use serde::{Deserialize, Serialize};
use soap_client::ActionResponse;

use crate::{ApiError, FritzAction, Service};

/// DeviceInfo GetInfo action
pub struct GetDeviceInfoOperation;

/// Request for DeviceInfo GetInfo (no input arguments)
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetDeviceInfoRequest;

/// Response for DeviceInfo GetInfo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDeviceInfoResponse {
    pub manufacturer_name: String,
    pub model_name: String,
    pub serial_number: String,
    pub software_version: String,
    pub hardware_version: String,
    /// Seconds since the last boot
    pub up_time: u32,
}

impl FritzAction for GetDeviceInfoOperation {
    type Request = GetDeviceInfoRequest;
    type Response = GetDeviceInfoResponse;

    const SERVICE: Service = Service::DeviceInfo;
    const ACTION: &'static str = "GetInfo";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(GetDeviceInfoResponse {
            manufacturer_name: response.get_str("NewManufacturerName")?.to_string(),
            model_name: response.get_str("NewModelName")?.to_string(),
            serial_number: response.get_str("NewSerialNumber")?.to_string(),
            software_version: response.get_str("NewSoftwareVersion")?.to_string(),
            hardware_version: response.raw("NewHardwareVersion").unwrap_or_default().to_string(),
            up_time: response.get_u32("NewUpTime")?,
        })
    }
}
