//! TR-064 actions organized by service

pub mod device_info;
pub mod hosts;
pub mod wan_ip_connection;
pub mod wlan_configuration;

pub use device_info::GetDeviceInfoOperation;
pub use hosts::{
    GetGenericHostEntryOperation, GetHostNumberOfEntriesOperation, GetSpecificHostEntryOperation,
};
pub use wan_ip_connection::{
    ForceTerminationOperation, GetExternalIpAddressOperation, GetStatusInfoOperation,
};
pub use wlan_configuration::{GetWlanInfoOperation, SetWlanEnableOperation};

#[cfg(test)]
pub(crate) mod test_support {
    use soap_client::ActionResponse;

    /// Wrap output arguments into a parsed success response
    pub fn response(action: &str, fields: &[(&str, &str)]) -> ActionResponse {
        let body: String = fields
            .iter()
            .map(|(name, value)| format!("<{0}>{1}</{0}>", name, value))
            .collect();
        let xml = format!(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:{0}Response xmlns:u="urn:dslforum-org:service:Test:1">{1}</u:{0}Response></s:Body></s:Envelope>"#,
            action, body
        );
        ActionResponse::parse(xml.as_str(), action).unwrap()
    }
}
