use serde::Serialize;
use serde_json::value::{to_raw_value, RawValue};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{HxError, SwapType};

/// Builder for `HX-Location` header bodies.
///
/// HX-Location lets you instruct htmx to perform a navigation without a full
/// page reload while still providing extra context (target selector, swap mode,
/// request headers, etc.). Use [`Htmx::location`](crate::Htmx::location)
/// to send the resulting header.
///
/// When nothing but the path is set the header carries the bare path;
/// otherwise the whole descriptor is sent as a JSON object.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HxLocation {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replace: Option<String>,
}

impl HxLocation {
    /// Create a new HX-Location builder pointing to the provided path.
    ///
    /// An empty path means "no location": the header is not sent.
    pub fn new(path: impl Into<String>) -> Self {
        HxLocation {
            path: path.into(),
            ..HxLocation::default()
        }
    }

    /// Override which element receives the swap.
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// Set the selector for the element that should be treated as the source.
    pub fn source(mut self, selector: impl Into<String>) -> Self {
        self.source = Some(selector.into());
        self
    }

    /// Specify the event that "triggered" the request.
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Change the swap behaviour for the follow-up request.
    pub fn swap(mut self, swap: SwapType) -> Self {
        self.swap = Some(swap.to_string());
        self
    }

    /// Provide a custom client-side response handler.
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Restrict the response fragment that htmx should swap.
    pub fn select(mut self, selector: impl Into<String>) -> Self {
        self.select = Some(selector.into());
        self
    }

    /// Add a custom header to the follow-up request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Extend the custom headers with any iterator of key/value pairs.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Provide values to submit with the follow-up request.
    ///
    /// The values are encoded immediately. On failure the builder is dropped
    /// and the error names the `values` field.
    pub fn values<T>(mut self, values: &T) -> Result<Self, HxError>
    where
        T: Serialize + ?Sized,
    {
        let encoded =
            to_raw_value(values).map_err(|e| HxError::encoding("HX-Location: values", e))?;
        self.values = Some(encoded);
        Ok(self)
    }

    /// Prevent htmx from pushing a new history entry.
    pub fn disable_push(mut self) -> Self {
        self.push = Some(Value::Bool(false));
        self
    }

    /// Override the history push path for the follow-up request.
    pub fn push_path(mut self, path: impl Into<String>) -> Self {
        self.push = Some(Value::String(path.into()));
        self
    }

    /// Replace the browser history entry with the provided path.
    pub fn replace(mut self, path: impl Into<String>) -> Self {
        self.replace = Some(path.into());
        self
    }

    /// The URL the follow-up request loads.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    fn is_path_only(&self) -> bool {
        self.source.is_none()
            && self.event.is_none()
            && self.handler.is_none()
            && self.target.is_none()
            && self.swap.is_none()
            && self.values.is_none()
            && self.headers.is_empty()
            && self.select.is_none()
            && self.push.is_none()
            && self.replace.is_none()
    }

    pub(crate) fn header_value(&self) -> String {
        if self.is_path_only() {
            return self.path.clone();
        }
        serde_json::to_string(self).expect("HxLocation serialization failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn path_only_is_sent_bare() {
        assert_eq!(HxLocation::new("/test").header_value(), "/test");
    }

    #[test]
    fn extra_fields_switch_to_json() {
        let location = HxLocation::new("/test").target("#main");
        assert_eq!(location.path(), "/test");
        let value = location.header_value();
        let parsed: Value = serde_json::from_str(&value).unwrap();
        assert_eq!(parsed, json!({"path": "/test", "target": "#main"}));
    }

    #[test]
    fn values_are_embedded_without_reescaping() {
        let value = HxLocation::new("/test")
            .values(&json!({"q": "a\"b"}))
            .unwrap()
            .swap(SwapType::OuterHtml)
            .header("X-Extra", "1")
            .header_value();

        assert!(value.contains(r#""values":{"q":"a\"b"}"#));
        let parsed: Value = serde_json::from_str(&value).unwrap();
        assert_eq!(parsed["values"]["q"], "a\"b");
        assert_eq!(parsed["swap"], "outerHTML");
        assert_eq!(parsed["headers"]["X-Extra"], "1");
    }

    #[test]
    fn push_and_replace_options() {
        let parsed: Value =
            serde_json::from_str(&HxLocation::new("/a").disable_push().header_value()).unwrap();
        assert_eq!(parsed["push"], json!(false));

        let parsed: Value = serde_json::from_str(
            &HxLocation::new("/a")
                .push_path("/b")
                .replace("/c")
                .select("#frag")
                .header_value(),
        )
        .unwrap();
        assert_eq!(parsed["push"], "/b");
        assert_eq!(parsed["replace"], "/c");
        assert_eq!(parsed["select"], "#frag");
    }

    #[test]
    fn bad_values_name_the_field() {
        let mut bad = HashMap::new();
        bad.insert((1u8, 2u8), 3u8);
        let err = HxLocation::new("/test").values(&bad).unwrap_err();
        assert!(err.to_string().starts_with("HX-Location: values"));
    }
}
