//! UPnP fault detection and translation
//!
//! Every action result passes through [`translate`] before anything else
//! looks at it. Successful envelopes come back untouched; a `<s:Fault>` is
//! turned into an [`ActionError`] using the fixed [`ERROR_CATALOG`].

use xmltree::Element;

use crate::error::{ActionError, ActionErrorKind, SoapError};

/// One row of the UPnP error code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: i64,
    pub kind: ActionErrorKind,
    pub label: &'static str,
}

const fn entry(code: i64, kind: ActionErrorKind, label: &'static str) -> CatalogEntry {
    CatalogEntry { code, kind, label }
}

/// Error codes defined by the UPnP/TR-064 control protocol
pub static ERROR_CATALOG: [CatalogEntry; 12] = [
    entry(401, ActionErrorKind::ActionNotAuthorizedOrUnknown, "Invalid Action"),
    entry(402, ActionErrorKind::InvalidArgument, "Invalid Arguments"),
    entry(501, ActionErrorKind::ActionFailed, "Action Failed"),
    entry(600, ActionErrorKind::ArgumentValueInvalid, "Argument Value Invalid"),
    entry(603, ActionErrorKind::OutOfMemory, "Out of Memory"),
    entry(606, ActionErrorKind::SecurityError, "Action not authorized"),
    entry(713, ActionErrorKind::ArrayIndexInvalid, "Specified Array Index Invalid"),
    entry(714, ActionErrorKind::LookupFailed, "No Such Entry In Array"),
    entry(801, ActionErrorKind::ArgumentStringTooShort, "String Argument Too Short"),
    entry(802, ActionErrorKind::ArgumentStringTooLong, "String Argument Too Long"),
    entry(803, ActionErrorKind::ArgumentCharacterInvalid, "Argument Character Invalid"),
    entry(820, ActionErrorKind::InternalError, "Internal Error"),
];

/// Label used for codes missing from the catalog
pub const GENERIC_LABEL: &str = "Unknown Action Error";

/// Look up a UPnP error code in the catalog
pub fn lookup(code: i64) -> Option<&'static CatalogEntry> {
    ERROR_CATALOG.iter().find(|entry| entry.code == code)
}

/// Anything that exposes the raw bytes of a SOAP response
pub trait Payload {
    fn content(&self) -> &[u8];
}

impl Payload for [u8] {
    fn content(&self) -> &[u8] {
        self
    }
}

impl Payload for Vec<u8> {
    fn content(&self) -> &[u8] {
        self
    }
}

impl Payload for str {
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Payload for String {
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<P: Payload + ?Sized> Payload for &P {
    fn content(&self) -> &[u8] {
        (**self).content()
    }
}

/// Pass a response through unchanged, or fail with the fault it carries
///
/// Payloads that are not a SOAP envelope, and faults without a numeric
/// `<errorCode>`, fail with [`SoapError::MalformedResponse`].
pub fn translate<P: Payload>(response: P) -> Result<P, SoapError> {
    let envelope = parse_envelope(response.content())?;

    match find_fault(&envelope) {
        Some(fault) => Err(SoapError::Action(fault_to_error(fault)?)),
        None => Ok(response),
    }
}

/// Parse raw bytes into the `<Envelope>` root element
pub(crate) fn parse_envelope(content: &[u8]) -> Result<Element, SoapError> {
    let root = Element::parse(content).map_err(|e| SoapError::MalformedResponse(e.to_string()))?;

    if root.name != "Envelope" {
        return Err(SoapError::MalformedResponse(format!(
            "Expected SOAP Envelope, found <{}>",
            root.name
        )));
    }

    Ok(root)
}

fn find_fault(envelope: &Element) -> Option<&Element> {
    envelope.get_child("Body")?.get_child("Fault")
}

fn fault_to_error(fault: &Element) -> Result<ActionError, SoapError> {
    let upnp_error = fault
        .get_child("detail")
        .and_then(|detail| child_ignore_case(detail, "UPnPError"))
        .ok_or_else(|| SoapError::MalformedResponse("SOAP fault without UPnPError detail".to_string()))?;

    let raw_code = upnp_error
        .get_child("errorCode")
        .and_then(|c| c.get_text())
        .ok_or_else(|| SoapError::MalformedResponse("UPnPError without errorCode".to_string()))?;

    let code = raw_code.trim().parse::<i64>().map_err(|_| {
        SoapError::MalformedResponse(format!("UPnP errorCode is not an integer: '{}'", raw_code.trim()))
    })?;

    let description = upnp_error
        .get_child("errorDescription")
        .and_then(|d| d.get_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    Ok(match lookup(code) {
        Some(entry) => ActionError::new(code, entry.kind, entry.label, description),
        None => ActionError::new(code, ActionErrorKind::Generic, GENERIC_LABEL, description),
    })
}

// Devices disagree on the capitalisation of `UPnPError`.
fn child_ignore_case<'a>(parent: &'a Element, name: &str) -> Option<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .find(|element| element.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use rstest::rstest;

    fn fault_payload(error_code: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
<s:Body>
<s:Fault>
<faultcode>s:Client</faultcode>
<faultstring>UPnPError</faultstring>
<detail>
<UPnPError xmlns="urn:schemas-upnp-org:control-1-0">
<errorCode>{}</errorCode>
<errorDescription>Invalid Action</errorDescription>
</UPnPError>
</detail>
</s:Fault>
</s:Body>
</s:Envelope>"#,
            error_code
        )
    }

    fn translate_fault(error_code: &str) -> ActionError {
        match translate(fault_payload(error_code)) {
            Err(SoapError::Action(err)) => err,
            other => panic!("Expected SoapError::Action, got {:?}", other),
        }
    }

    #[rstest]
    #[case("401", ActionErrorKind::ActionNotAuthorizedOrUnknown)]
    #[case("402", ActionErrorKind::InvalidArgument)]
    #[case("501", ActionErrorKind::ActionFailed)]
    #[case("600", ActionErrorKind::ArgumentValueInvalid)]
    #[case("603", ActionErrorKind::OutOfMemory)]
    #[case("606", ActionErrorKind::SecurityError)]
    #[case("713", ActionErrorKind::ArrayIndexInvalid)]
    #[case("714", ActionErrorKind::LookupFailed)]
    #[case("801", ActionErrorKind::ArgumentStringTooShort)]
    #[case("802", ActionErrorKind::ArgumentStringTooLong)]
    #[case("803", ActionErrorKind::ArgumentCharacterInvalid)]
    #[case("820", ActionErrorKind::InternalError)]
    fn test_mapped_fault_codes(#[case] error_code: &str, #[case] expected: ActionErrorKind) {
        let err = translate_fault(error_code);
        assert_eq!(err.kind(), expected);
        assert_eq!(err.code().to_string(), error_code);
        assert!(err.is(ErrorCategory::ServiceAction));
    }

    #[rstest]
    #[case("713", ErrorCategory::ArrayIndex)]
    #[case("714", ErrorCategory::Lookup)]
    fn test_index_and_lookup_catch_surfaces(#[case] error_code: &str, #[case] category: ErrorCategory) {
        assert!(translate_fault(error_code).is(category));
    }

    #[rstest]
    #[case("999", 999)]
    #[case("70000", 70000)]
    #[case("-1", -1)]
    fn test_unmapped_code_is_generic(#[case] error_code: &str, #[case] expected_code: i64) {
        let err = translate_fault(error_code);
        assert_eq!(err.kind(), ActionErrorKind::Generic);
        assert_eq!(err.code(), expected_code);
        assert_eq!(err.label(), GENERIC_LABEL);
        assert!(err.is(ErrorCategory::ServiceAction));
    }

    #[test]
    fn test_fault_carries_label_and_description() {
        let err = translate_fault(" 401 ");
        assert_eq!(err.code(), 401);
        assert_eq!(err.label(), "Invalid Action");
        assert_eq!(err.description(), Some("Invalid Action"));
    }

    #[test]
    fn test_success_passes_through_unchanged() {
        let payload = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
            <s:Body>
                <u:GetInfoResponse xmlns:u="urn:dslforum-org:service:DeviceInfo:1">
                    <NewModelName>FRITZ!Box 7590</NewModelName>
                </u:GetInfoResponse>
            </s:Body>
        </s:Envelope>"#
            .as_bytes()
            .to_vec();

        let result = translate(payload.clone()).unwrap();
        assert_eq!(result, payload);
    }

    #[test]
    fn test_lowercase_upnp_error_element() {
        let payload = fault_payload("714").replace("UPnPError xmlns", "UpnPError xmlns").replace(
            "</UPnPError>",
            "</UpnPError>",
        );
        match translate(payload.as_str()) {
            Err(SoapError::Action(err)) => assert_eq!(err.kind(), ActionErrorKind::LookupFailed),
            other => panic!("Expected SoapError::Action, got {:?}", other),
        }
    }

    #[rstest]
    #[case::not_xml("this is not xml")]
    #[case::truncated("<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\"><s:Body>")]
    #[case::not_an_envelope("<html><body>Unauthorized</body></html>")]
    fn test_malformed_payload(#[case] payload: &str) {
        assert!(matches!(translate(payload), Err(SoapError::MalformedResponse(_))));
    }

    #[test]
    fn test_fault_without_detail_is_malformed() {
        let payload = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
            <s:Body>
                <s:Fault>
                    <faultcode>s:Server</faultcode>
                    <faultstring>Internal Error</faultstring>
                </s:Fault>
            </s:Body>
        </s:Envelope>"#;

        match translate(payload) {
            Err(SoapError::MalformedResponse(msg)) => assert!(msg.contains("UPnPError")),
            other => panic!("Expected SoapError::MalformedResponse, got {:?}", other),
        }
    }

    #[rstest]
    #[case("abc")]
    #[case("7.13")]
    #[case("")]
    fn test_non_integer_code_is_malformed(#[case] error_code: &str) {
        assert!(matches!(
            translate(fault_payload(error_code)),
            Err(SoapError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_catalog_codes_are_unique() {
        for (i, a) in ERROR_CATALOG.iter().enumerate() {
            for b in &ERROR_CATALOG[i + 1..] {
                assert_ne!(a.code, b.code);
                assert_ne!(a.kind, b.kind);
            }
        }
        assert!(lookup(999).is_none());
        assert_eq!(lookup(820).map(|e| e.kind), Some(ActionErrorKind::InternalError));
    }
}
