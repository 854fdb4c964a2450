//! Decoded body of a successful action

use crate::coerce::{coerce, Coercion, Value};
use crate::error::SoapError;
use crate::fault::{parse_envelope, Payload};

/// Output arguments of a successful action, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionResponse {
    action: String,
    fields: Vec<(String, String)>,
}

impl ActionResponse {
    /// Extract the `<{action}Response>` element of a non-fault envelope
    ///
    /// Callers run the payload through [`crate::translate`] first; a fault
    /// envelope reaching this point is reported as a missing response element.
    pub fn parse<P: Payload + ?Sized>(payload: &P, action: &str) -> Result<Self, SoapError> {
        let envelope = parse_envelope(payload.content())?;

        let body = envelope
            .get_child("Body")
            .ok_or_else(|| SoapError::MalformedResponse("Missing SOAP Body".to_string()))?;

        let response_name = format!("{}Response", action);
        let response = body.get_child(response_name.as_str()).ok_or_else(|| {
            SoapError::MalformedResponse(format!("Missing {} element", response_name))
        })?;

        let fields = response
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|field| {
                let text = field.get_text().map(|t| t.into_owned()).unwrap_or_default();
                (field.name.clone(), text)
            })
            .collect();

        Ok(Self {
            action: action.to_string(),
            fields,
        })
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The uncoerced text of a field
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// A field passed through the boolean coercion rule
    pub fn value(&self, name: &str) -> Option<Value> {
        self.raw(name).map(coerce)
    }

    /// A field passed through an explicit coercion rule
    pub fn value_as(&self, name: &str, rule: Coercion) -> Option<Value> {
        self.raw(name).map(|raw| rule.apply(raw))
    }

    /// All fields passed through the boolean coercion rule
    pub fn values(&self) -> Vec<(String, Value)> {
        self.fields
            .iter()
            .map(|(name, raw)| (name.clone(), coerce(raw)))
            .collect()
    }

    pub fn get_str(&self, name: &str) -> Result<&str, SoapError> {
        self.raw(name).ok_or_else(|| self.missing(name))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, SoapError> {
        let raw = self.get_str(name)?;
        coerce(raw).as_bool().ok_or_else(|| {
            SoapError::MalformedResponse(format!("Field {} is not a boolean: '{}'", name, raw))
        })
    }

    pub fn get_u32(&self, name: &str) -> Result<u32, SoapError> {
        let raw = self.get_str(name)?;
        raw.trim().parse::<u32>().map_err(|_| {
            SoapError::MalformedResponse(format!("Field {} is not an unsigned integer: '{}'", name, raw))
        })
    }

    fn missing(&self, name: &str) -> SoapError {
        SoapError::MalformedResponse(format!("Missing {} in {}Response", name, self.action))
    }
}
