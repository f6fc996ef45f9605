//! Payer identity attached to payment requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;

/// Immutable payer identity.
///
/// Serializes to exactly `{name, email, phone_number}` with stable field
/// order and no additional keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHolder {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl CardHolder {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// The transport-ready mapping for this cardholder.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("CardHolder serialization failed")
    }
}

/// Cardholder input accepted by payment builders: either the typed value
/// object, or a raw JSON mapping forwarded to the gateway untouched.
///
/// Normalization happens once, at body-assembly time. A raw value that is
/// not a JSON object fails with `"Invalid cardholder format"`.
#[derive(Debug, Clone, PartialEq)]
pub enum CardHolderData {
    Holder(CardHolder),
    Raw(Value),
}

impl CardHolderData {
    pub(crate) fn to_wire(&self) -> Result<Value, Error> {
        match self {
            CardHolderData::Holder(holder) => Ok(holder.to_value()),
            CardHolderData::Raw(value) if value.is_object() => Ok(value.clone()),
            CardHolderData::Raw(_) => Err(Error::validation("Invalid cardholder format")),
        }
    }
}

impl From<CardHolder> for CardHolderData {
    fn from(holder: CardHolder) -> Self {
        CardHolderData::Holder(holder)
    }
}

impl From<Value> for CardHolderData {
    fn from(value: Value) -> Self {
        CardHolderData::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_value_has_exactly_three_keys() {
        let holder = CardHolder::new("Test User", "test@example.com", "0912345678");
        let value = holder.to_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["name"], "Test User");
        assert_eq!(value["email"], "test@example.com");
        assert_eq!(value["phone_number"], "0912345678");
    }

    #[test]
    fn test_round_trip() {
        let holder = CardHolder::new("Test User", "test@example.com", "0912345678");
        let back: CardHolder = serde_json::from_value(holder.to_value()).unwrap();
        assert_eq!(back, holder);
    }

    #[test]
    fn test_typed_and_raw_normalize_to_the_same_wire_mapping() {
        let holder = CardHolder::new("Test User", "test@example.com", "0912345678");
        let typed = CardHolderData::from(holder.clone()).to_wire().unwrap();
        let raw = CardHolderData::from(json!({
            "name": "Test User",
            "email": "test@example.com",
            "phone_number": "0912345678",
        }))
        .to_wire()
        .unwrap();
        assert_eq!(typed, raw);
    }

    #[test]
    fn test_raw_non_object_is_rejected() {
        let err = CardHolderData::Raw(json!("invalid")).to_wire().unwrap_err();
        assert_eq!(err.to_string(), "Invalid cardholder format");
    }
}
