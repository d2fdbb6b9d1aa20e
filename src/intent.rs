use indexmap::IndexMap;
use std::fmt;

use crate::headers::ResponseHeaders;
use crate::{HxLocation, TriggerPayload};

/// Which `HX-Trigger*` header an event is sent in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerType {
    /// Fired as soon as the response is received.
    Standard,
    /// Fired after the settling step.
    AfterSettle,
    /// Fired after the swap step.
    AfterSwap,
}

impl TriggerType {
    pub(crate) fn header_name(self) -> &'static str {
        match self {
            TriggerType::Standard => ResponseHeaders::HX_TRIGGER,
            TriggerType::AfterSettle => ResponseHeaders::HX_TRIGGER_AFTER_SETTLE,
            TriggerType::AfterSwap => ResponseHeaders::HX_TRIGGER_AFTER_SWAP,
        }
    }
}

/// How htmx swaps the response content relative to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapType {
    InnerHtml,
    OuterHtml,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapType::InnerHtml => write!(f, "innerHTML"),
            SwapType::OuterHtml => write!(f, "outerHTML"),
            SwapType::BeforeBegin => write!(f, "beforebegin"),
            SwapType::AfterBegin => write!(f, "afterbegin"),
            SwapType::BeforeEnd => write!(f, "beforeend"),
            SwapType::AfterEnd => write!(f, "afterend"),
            SwapType::Delete => write!(f, "delete"),
            SwapType::None => write!(f, "none"),
        }
    }
}

pub(crate) type Triggers = IndexMap<String, Option<TriggerPayload>>;

/// Everything a request's handlers asked to send back in htmx response
/// headers.
///
/// Each field is independently empty by default and an empty field produces
/// no header. Writing a field again replaces the previous value; writing the
/// empty value (`""`, `false`, `None`) clears it.
#[derive(Clone, Debug, Default)]
pub struct ResponseIntent {
    pub location: HxLocation,
    pub push_url: String,
    pub redirect: String,
    pub refresh: bool,
    pub replace_url: String,
    pub reswap: Option<SwapType>,
    pub retarget: String,
    pub reselect: String,
    pub(crate) trigger: Triggers,
    pub(crate) trigger_after_settle: Triggers,
    pub(crate) trigger_after_swap: Triggers,
}

impl ResponseIntent {
    /// Add an event to one of the trigger headers.
    ///
    /// An event that is already present keeps its position and has its
    /// payload replaced.
    pub fn insert_trigger(
        &mut self,
        trigger_type: TriggerType,
        name: impl Into<String>,
        payload: Option<TriggerPayload>,
    ) {
        self.triggers_mut(trigger_type).insert(name.into(), payload);
    }

    /// Events queued for one of the trigger headers, in insertion order.
    pub fn triggers(&self, trigger_type: TriggerType) -> &IndexMap<String, Option<TriggerPayload>> {
        match trigger_type {
            TriggerType::Standard => &self.trigger,
            TriggerType::AfterSettle => &self.trigger_after_settle,
            TriggerType::AfterSwap => &self.trigger_after_swap,
        }
    }

    fn triggers_mut(&mut self, trigger_type: TriggerType) -> &mut Triggers {
        match trigger_type {
            TriggerType::Standard => &mut self.trigger,
            TriggerType::AfterSettle => &mut self.trigger_after_settle,
            TriggerType::AfterSwap => &mut self.trigger_after_swap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_upsert_replaces_in_place() {
        let mut intent = ResponseIntent::default();
        intent.insert_trigger(TriggerType::Standard, "a", None);
        intent.insert_trigger(TriggerType::Standard, "b", None);
        intent.insert_trigger(TriggerType::Standard, "a", Some(TriggerPayload::boolean(true)));

        let triggers = intent.triggers(TriggerType::Standard);
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers.get_index(0).unwrap().0, "a");
        assert_eq!(triggers["a"], Some(TriggerPayload::boolean(true)));
        assert!(intent.triggers(TriggerType::AfterSwap).is_empty());
    }

    #[test]
    fn swap_tokens() {
        assert_eq!(SwapType::InnerHtml.to_string(), "innerHTML");
        assert_eq!(SwapType::BeforeEnd.to_string(), "beforeend");
        assert_eq!(SwapType::None.to_string(), "none");
    }
}
