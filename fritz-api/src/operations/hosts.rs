//! Host table actions for the Hosts service
//!
//! Generic entries are addressed by index (fault 713 past the end of the
//! table), specific entries by MAC address (fault 714 for an unknown MAC).

use serde::{Deserialize, Serialize};
use soap_client::ActionResponse;

use crate::{ApiError, FritzAction, Service};

/// A host known to the router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub ip_address: String,
    /// Empty for entries looked up by MAC address, which the device does not echo
    pub mac_address: String,
    pub address_source: String,
    pub lease_time_remaining: u32,
    pub interface_type: String,
    pub active: bool,
    pub host_name: String,
}

impl HostEntry {
    fn from_response(response: &ActionResponse) -> Result<Self, ApiError> {
        Ok(HostEntry {
            ip_address: response.get_str("NewIPAddress")?.to_string(),
            mac_address: response.raw("NewMACAddress").unwrap_or_default().to_string(),
            address_source: response.raw("NewAddressSource").unwrap_or_default().to_string(),
            lease_time_remaining: match response.raw("NewLeaseTimeRemaining") {
                Some(_) => response.get_u32("NewLeaseTimeRemaining")?,
                None => 0,
            },
            interface_type: response.raw("NewInterfaceType").unwrap_or_default().to_string(),
            active: response.get_bool("NewActive")?,
            host_name: response.get_str("NewHostName")?.to_string(),
        })
    }
}

/// Hosts GetHostNumberOfEntries action
pub struct GetHostNumberOfEntriesOperation;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetHostNumberOfEntriesRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetHostNumberOfEntriesResponse {
    pub host_number_of_entries: u32,
}

impl FritzAction for GetHostNumberOfEntriesOperation {
    type Request = GetHostNumberOfEntriesRequest;
    type Response = GetHostNumberOfEntriesResponse;

    const SERVICE: Service = Service::Hosts;
    const ACTION: &'static str = "GetHostNumberOfEntries";

    fn arguments(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        Ok(GetHostNumberOfEntriesResponse {
            host_number_of_entries: response.get_u32("NewHostNumberOfEntries")?,
        })
    }
}

/// Hosts GetGenericHostEntry action
pub struct GetGenericHostEntryOperation;

#[derive(Debug, Clone, Serialize)]
pub struct GetGenericHostEntryRequest {
    pub index: u32,
}

impl FritzAction for GetGenericHostEntryOperation {
    type Request = GetGenericHostEntryRequest;
    type Response = HostEntry;

    const SERVICE: Service = Service::Hosts;
    const ACTION: &'static str = "GetGenericHostEntry";

    fn arguments(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("NewIndex", request.index.to_string())]
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        HostEntry::from_response(response)
    }
}

/// Hosts GetSpecificHostEntry action
pub struct GetSpecificHostEntryOperation;

#[derive(Debug, Clone, Serialize)]
pub struct GetSpecificHostEntryRequest {
    pub mac_address: String,
}

impl FritzAction for GetSpecificHostEntryOperation {
    type Request = GetSpecificHostEntryRequest;
    type Response = HostEntry;

    const SERVICE: Service = Service::Hosts;
    const ACTION: &'static str = "GetSpecificHostEntry";

    fn arguments(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("NewMACAddress", request.mac_address.clone())]
    }

    fn parse_response(response: &ActionResponse) -> Result<Self::Response, ApiError> {
        HostEntry::from_response(response)
    }
}
