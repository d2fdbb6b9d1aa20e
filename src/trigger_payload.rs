use serde::{Serialize, Serializer};
use serde_json::value::{to_raw_value, RawValue};
use serde_json::Value;
use std::fmt;

/// A payload for `HX-Trigger*` headers, encoded to JSON when it is built.
///
/// Encoding happens up front so that a payload which cannot be represented
/// as JSON is reported where it is created, not when the response headers
/// are written. The encoded text is embedded verbatim in the header value.
#[derive(Clone)]
pub struct TriggerPayload {
    inner: Box<RawValue>,
}

impl TriggerPayload {
    /// Create a payload from any serializable value.
    pub fn json<T>(value: &T) -> serde_json::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        to_raw_value(value).map(|inner| TriggerPayload { inner })
    }

    /// Create a payload directly from a `serde_json::Value`.
    pub fn from_value(value: Value) -> Self {
        // a Value always renders as valid JSON
        let inner = RawValue::from_string(value.to_string())
            .expect("serde_json::Value rendered invalid JSON");
        TriggerPayload { inner }
    }

    /// Convenience helper for string payloads.
    pub fn text(value: impl Into<String>) -> Self {
        TriggerPayload::from_value(Value::String(value.into()))
    }

    /// Convenience helper for boolean payloads.
    pub fn boolean(value: bool) -> Self {
        TriggerPayload::from_value(Value::Bool(value))
    }

    /// Convenience helper for numeric payloads.
    pub fn number<N>(value: N) -> serde_json::Result<Self>
    where
        N: Serialize,
    {
        TriggerPayload::json(&value)
    }

    /// The encoded JSON text.
    pub fn as_json(&self) -> &str {
        self.inner.get()
    }
}

impl fmt::Debug for TriggerPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TriggerPayload").field(&self.as_json()).finish()
    }
}

impl PartialEq for TriggerPayload {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

impl Serialize for TriggerPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn encodes_when_built() {
        let payload = TriggerPayload::json(&json!({"ActiveEntry": "foo"})).unwrap();
        assert_eq!(payload.as_json(), r#"{"ActiveEntry":"foo"}"#);
    }

    #[test]
    fn helpers_produce_json_literals() {
        assert_eq!(TriggerPayload::text("hi \"there\"").as_json(), r#""hi \"there\"""#);
        assert_eq!(TriggerPayload::boolean(false).as_json(), "false");
        assert_eq!(TriggerPayload::number(42).unwrap().as_json(), "42");
    }

    #[test]
    fn unencodable_values_fail_at_construction() {
        let mut bad = HashMap::new();
        bad.insert((1u8, 2u8), "tuple keys are not valid JSON object keys");
        assert!(TriggerPayload::json(&bad).is_err());
    }
}
