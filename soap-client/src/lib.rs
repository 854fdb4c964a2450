//! SOAP client for TR-064 device control
//!
//! This crate sends SOAP actions to a TR-064 device (such as a FRITZ!Box),
//! translates UPnP faults into typed [`ActionError`]s and decodes the
//! output arguments of successful actions.
//!
//! The translation and coercion layers are usable on their own:
//!
//! ```rust
//! use soap_client::{coerce, translate, Value};
//!
//! let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body/></s:Envelope>"#;
//! assert!(translate(body).is_ok());
//! assert_eq!(coerce("1"), Value::Bool(true));
//! assert_eq!(coerce("2"), Value::Text("2".to_string()));
//! ```

mod coerce;
mod error;
mod fault;
mod response;

pub use coerce::{coerce, Coercion, Value};
pub use error::{ActionError, ActionErrorKind, ErrorCategory, SoapError};
pub use fault::{lookup, translate, CatalogEntry, Payload, ERROR_CATALOG, GENERIC_LABEL};
pub use response::ActionResponse;

use std::io::Read;
use std::time::Duration;

use quick_xml::escape::escape;

/// Raw HTTP response handed over by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Payload for RawResponse {
    fn content(&self) -> &[u8] {
        &self.content
    }
}

/// A minimal blocking SOAP client for TR-064 actions
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
}

impl SoapClient {
    /// Create a new SOAP client with default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
    }

    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }

    /// Invoke `action` of the service at `control_url`
    ///
    /// # Arguments
    /// * `control_url` - Absolute control URL (e.g. `http://192.168.178.1:49000/upnp/control/hosts`)
    /// * `service_type` - Service type URN used as the action namespace
    /// * `action` - Action name
    /// * `arguments` - Input arguments, in the order the device expects them
    pub fn call(
        &self,
        control_url: &str,
        service_type: &str,
        action: &str,
        arguments: &[(&str, &str)],
    ) -> Result<ActionResponse, SoapError> {
        let body = build_envelope(service_type, action, arguments);
        let soap_action = format!("\"{}#{}\"", service_type, action);

        tracing::debug!(url = control_url, action, "sending SOAP request");

        let response = match self
            .agent
            .post(control_url)
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .set("SOAPACTION", &soap_action)
            .send_string(&body)
        {
            Ok(response) => response,
            // Faults arrive with HTTP 500; the body still has to be inspected.
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        let status = response.status();
        let mut content = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut content)
            .map_err(|e| SoapError::Network(e.to_string()))?;

        handle_response(RawResponse { status, content }, action)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_envelope(service_type: &str, action: &str, arguments: &[(&str, &str)]) -> String {
    let payload: String = arguments
        .iter()
        .map(|(name, value)| format!("<{name}>{}</{name}>", escape(*value), name = name))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
    <s:Body>
        <u:{action} xmlns:u="{service_type}">{payload}</u:{action}>
    </s:Body>
</s:Envelope>"#,
        action = action,
        service_type = service_type,
        payload = payload
    )
}

fn handle_response(raw: RawResponse, action: &str) -> Result<ActionResponse, SoapError> {
    match translate(&raw) {
        Ok(_) if raw.is_success() => ActionResponse::parse(&raw, action),
        Err(SoapError::Action(err)) => {
            tracing::debug!(code = err.code(), kind = ?err.kind(), action, "action returned UPnP fault");
            Err(SoapError::Action(err))
        }
        Err(err) if raw.is_success() => Err(err),
        _ => Err(SoapError::Http(raw.status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            content: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_soap_client_creation() {
        let _client = SoapClient::new();
        let _default_client = SoapClient::default();
        let _custom = SoapClient::with_timeouts(Duration::from_secs(1), Duration::from_secs(2));
    }

    #[test]
    fn test_build_envelope_escapes_arguments() {
        let envelope = build_envelope(
            "urn:dslforum-org:service:Hosts:1",
            "GetSpecificHostEntry",
            &[("NewMACAddress", "AA:BB:CC:DD:EE:FF"), ("NewNote", "a<b & c")],
        );

        assert!(envelope.contains(r#"<u:GetSpecificHostEntry xmlns:u="urn:dslforum-org:service:Hosts:1">"#));
        assert!(envelope.contains("<NewMACAddress>AA:BB:CC:DD:EE:FF</NewMACAddress>"));
        assert!(envelope.contains("<NewNote>a&lt;b &amp; c</NewNote>"));
        assert!(envelope.contains("</u:GetSpecificHostEntry>"));
    }

    #[test]
    fn test_handle_success_response() {
        let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
            <s:Body>
                <u:GetExternalIPAddressResponse xmlns:u="urn:dslforum-org:service:WANIPConnection:1">
                    <NewExternalIPAddress>203.0.113.7</NewExternalIPAddress>
                </u:GetExternalIPAddressResponse>
            </s:Body>
        </s:Envelope>"#;

        let response = handle_response(raw(200, body), "GetExternalIPAddress").unwrap();
        assert_eq!(response.raw("NewExternalIPAddress"), Some("203.0.113.7"));
    }

    #[test]
    fn test_handle_fault_with_status_500() {
        let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
            <s:Body>
                <s:Fault>
                    <faultcode>s:Client</faultcode>
                    <faultstring>UPnPError</faultstring>
                    <detail>
                        <UPnPError xmlns="urn:schemas-upnp-org:control-1-0">
                            <errorCode>713</errorCode>
                            <errorDescription>SpecifiedArrayIndexInvalid</errorDescription>
                        </UPnPError>
                    </detail>
                </s:Fault>
            </s:Body>
        </s:Envelope>"#;

        match handle_response(raw(500, body), "GetGenericHostEntry") {
            Err(SoapError::Action(err)) => {
                assert_eq!(err.kind(), ActionErrorKind::ArrayIndexInvalid);
                assert!(err.is(ErrorCategory::ArrayIndex));
            }
            other => panic!("Expected SoapError::Action, got {:?}", other),
        }
    }

    #[test]
    fn test_handle_http_error_without_fault() {
        let result = handle_response(raw(401, "<html>401 Unauthorized</html>"), "GetInfo");
        assert!(matches!(result, Err(SoapError::Http(401))));

        let result = handle_response(raw(404, "not found"), "GetInfo");
        assert!(matches!(result, Err(SoapError::Http(404))));
    }

    #[test]
    fn test_handle_malformed_success_body() {
        let result = handle_response(raw(200, "garbage"), "GetInfo");
        assert!(matches!(result, Err(SoapError::MalformedResponse(_))));
    }

    #[test]
    fn test_handle_invalid_utf8_body() {
        let response = RawResponse {
            status: 200,
            content: b"<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\"><s:Body>\xff\xfe</s:Body></s:Envelope>".to_vec(),
        };
        let result = handle_response(response, "GetInfo");
        assert!(matches!(result, Err(SoapError::MalformedResponse(_))));
    }
}
