//! Turns a [`ResponseIntent`] into wire headers.

use crate::headers::ResponseHeaders;
use crate::intent::Triggers;
use crate::{ResponseIntent, TriggerType};

/// The `(name, value)` pairs a record produces, one per non-empty field.
///
/// Order is fixed: location, push url, redirect, refresh, replace url,
/// reswap, retarget, reselect, then the three trigger headers.
pub fn header_pairs(intent: &ResponseIntent) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if !intent.location.is_empty() {
        pairs.push((ResponseHeaders::HX_LOCATION, intent.location.header_value()));
    }
    push_nonempty(&mut pairs, ResponseHeaders::HX_PUSH_URL, &intent.push_url);
    push_nonempty(&mut pairs, ResponseHeaders::HX_REDIRECT, &intent.redirect);
    if intent.refresh {
        pairs.push((ResponseHeaders::HX_REFRESH, "true".to_string()));
    }
    push_nonempty(&mut pairs, ResponseHeaders::HX_REPLACE_URL, &intent.replace_url);
    if let Some(swap) = intent.reswap {
        pairs.push((ResponseHeaders::HX_RESWAP, swap.to_string()));
    }
    push_nonempty(&mut pairs, ResponseHeaders::HX_RETARGET, &intent.retarget);
    push_nonempty(&mut pairs, ResponseHeaders::HX_RESELECT, &intent.reselect);

    for trigger_type in [
        TriggerType::Standard,
        TriggerType::AfterSettle,
        TriggerType::AfterSwap,
    ] {
        let triggers = intent.triggers(trigger_type);
        if !triggers.is_empty() {
            pairs.push((trigger_type.header_name(), triggers_header_value(triggers)));
        }
    }

    pairs
}

fn push_nonempty(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((name, value.to_string()));
    }
}

// Plain comma list unless at least one event carries a payload.
fn triggers_header_value(triggers: &Triggers) -> String {
    if triggers.values().all(Option::is_none) {
        return triggers.keys().map(String::as_str).collect::<Vec<_>>().join(",");
    }
    serde_json::to_string(triggers).expect("trigger map serialization failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HxLocation, SwapType, TriggerPayload};
    use serde_json::{json, Value};

    fn value_of<'a>(pairs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_record_emits_nothing() {
        assert!(header_pairs(&ResponseIntent::default()).is_empty());
    }

    #[test]
    fn every_field_in_order() {
        let mut intent = ResponseIntent {
            location: HxLocation::new("/loc"),
            push_url: "/push".into(),
            redirect: "/redir".into(),
            refresh: true,
            replace_url: "false".into(),
            reswap: Some(SwapType::AfterEnd),
            retarget: "#t".into(),
            reselect: "#s".into(),
            ..ResponseIntent::default()
        };
        intent.insert_trigger(TriggerType::Standard, "a", None);
        intent.insert_trigger(TriggerType::AfterSettle, "b", None);
        intent.insert_trigger(TriggerType::AfterSwap, "c", None);

        let pairs = header_pairs(&intent);
        let names: Vec<_> = pairs.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "HX-Location",
                "HX-Push-Url",
                "HX-Redirect",
                "HX-Refresh",
                "HX-Replace-Url",
                "HX-Reswap",
                "HX-Retarget",
                "HX-Reselect",
                "HX-Trigger",
                "HX-Trigger-After-Settle",
                "HX-Trigger-After-Swap",
            ]
        );
        assert_eq!(value_of(&pairs, "HX-Refresh"), Some("true"));
        assert_eq!(value_of(&pairs, "HX-Reswap"), Some("afterend"));
        assert_eq!(value_of(&pairs, "HX-Replace-Url"), Some("false"));
    }

    #[test]
    fn cleared_fields_are_suppressed() {
        let mut intent = ResponseIntent {
            redirect: "/gone".into(),
            refresh: true,
            location: HxLocation::new("").target("#ignored"),
            ..ResponseIntent::default()
        };
        intent.redirect = String::new();
        intent.refresh = false;

        assert!(header_pairs(&intent).is_empty());
    }

    #[test]
    fn triggers_without_payloads_are_a_plain_list() {
        let mut intent = ResponseIntent::default();
        for name in ["a", "b", "c"] {
            intent.insert_trigger(TriggerType::Standard, name, None);
        }

        let pairs = header_pairs(&intent);
        assert_eq!(value_of(&pairs, "HX-Trigger"), Some("a,b,c"));
    }

    #[test]
    fn any_payload_switches_to_json_object() {
        let mut intent = ResponseIntent::default();
        intent.insert_trigger(
            TriggerType::Standard,
            "reload-nav",
            Some(TriggerPayload::json(&json!({"ActiveEntry": "foo"})).unwrap()),
        );
        intent.insert_trigger(TriggerType::Standard, "update-cart", None);

        let pairs = header_pairs(&intent);
        let header = value_of(&pairs, "HX-Trigger").unwrap();
        let parsed: Value = serde_json::from_str(header).unwrap();
        assert_eq!(
            parsed,
            json!({"reload-nav": {"ActiveEntry": "foo"}, "update-cart": null})
        );
    }

    #[test]
    fn location_short_and_long_form() {
        let intent = ResponseIntent {
            location: HxLocation::new("/test"),
            ..ResponseIntent::default()
        };
        assert_eq!(value_of(&header_pairs(&intent), "HX-Location"), Some("/test"));

        let intent = ResponseIntent {
            location: HxLocation::new("/test").target("#main"),
            ..ResponseIntent::default()
        };
        let pairs = header_pairs(&intent);
        let header = value_of(&pairs, "HX-Location").unwrap();
        assert_ne!(header, "/test");
        let parsed: Value = serde_json::from_str(header).unwrap();
        assert_eq!(parsed["path"], "/test");
        assert_eq!(parsed["target"], "#main");
    }
}
