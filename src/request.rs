use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, HeaderValue};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use log::debug;

use crate::headers::RequestHeaders;
use crate::HxError;

/// The htmx headers sent with a request.
///
/// Only built for requests carrying `HX-Request: true`; anything else is
/// not an htmx request and has no snapshot at all. Extract
/// `Option<HxRequest>` in handlers that serve both kinds of request.
///
/// This extractor works without [`HtmxMiddleware`](crate::HtmxMiddleware).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HxRequest {
    /// The request is via an element using hx-boost.
    pub boosted: bool,
    /// The current URL of the browser.
    pub current_url: String,
    /// The request is for history restoration after a miss in the local
    /// history cache.
    pub history_restore_request: bool,
    /// The user response to an hx-prompt.
    pub prompt: String,
    /// The id of the target element, if it exists.
    pub target: String,
    /// The name of the triggered element, if it exists.
    pub trigger_name: String,
    /// The id of the triggered element, if it exists.
    pub trigger: String,
}

// Cached per request, including the "not htmx" answer.
#[derive(Clone)]
struct Snapshot(Option<HxRequest>);

impl HxRequest {
    /// Project a header map into a snapshot, or `None` if htmx did not send it.
    pub fn from_headers(headers: &HeaderMap) -> Option<HxRequest> {
        if !headers.get(RequestHeaders::HX_REQUEST).as_bool() {
            return None;
        }

        Some(HxRequest {
            boosted: headers.get(RequestHeaders::HX_BOOSTED).as_bool(),
            current_url: headers.get(RequestHeaders::HX_CURRENT_URL).as_string(),
            history_restore_request: headers
                .get(RequestHeaders::HX_HISTORY_RESTORE_REQUEST)
                .as_bool(),
            prompt: headers.get(RequestHeaders::HX_PROMPT).as_string(),
            target: headers.get(RequestHeaders::HX_TARGET).as_string(),
            trigger_name: headers.get(RequestHeaders::HX_TRIGGER_NAME).as_string(),
            trigger: headers.get(RequestHeaders::HX_TRIGGER).as_string(),
        })
    }

    /// The snapshot for `req`, computed on first use.
    pub fn of(req: &HttpRequest) -> Option<HxRequest> {
        if let Some(Snapshot(snapshot)) = req.extensions().get::<Snapshot>() {
            return snapshot.clone();
        }

        let snapshot = HxRequest::from_headers(req.headers());
        debug!(
            "{} {} is {}an htmx request",
            req.method(),
            req.path(),
            if snapshot.is_some() { "" } else { "not " }
        );
        req.extensions_mut().insert(Snapshot(snapshot.clone()));
        snapshot
    }
}

impl FromRequest for HxRequest {
    type Error = HxError;
    type Future = Ready<Result<HxRequest, HxError>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(HxRequest::of(req).ok_or(HxError::NotHtmxRequest))
    }
}

trait AsBool {
    fn as_bool(&self) -> bool;
}

trait AsString {
    fn as_string(&self) -> String;
}

impl AsBool for Option<&HeaderValue> {
    fn as_bool(&self) -> bool {
        matches!(self, Some(header) if header.as_bytes() == b"true")
    }
}

impl AsString for Option<&HeaderValue> {
    fn as_string(&self) -> String {
        self.and_then(|header| header.to_str().ok())
            .map(str::to_string)
            .unwrap_or_default()
    }
}
