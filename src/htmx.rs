use actix_web::dev::Payload;
use actix_web::error::Error;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use log::{debug, trace, warn};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{header_pairs, HxError, HxLocation, ResponseIntent, SwapType, TriggerPayload, TriggerType};

/// Handle to the htmx response headers of the current request.
///
/// [`HtmxMiddleware`](crate::HtmxMiddleware) attaches one to every request
/// it wraps; extracting `Htmx` in a handler (or in any middleware further
/// down the chain) gives access to that same record. All clones share it.
///
/// Setters can be called any number of times in any order, the last value
/// written wins. The headers are written to the response once, when the
/// middleware sees the response come back. Anything set after that point
/// is ignored.
///
/// # Panics
///
/// Extracting `Htmx` on a route that is not wrapped by `HtmxMiddleware`
/// panics: the headers would otherwise be silently lost.
#[derive(Clone)]
pub struct Htmx {
    inner: Rc<RefCell<HtmxInner>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlushState {
    Attached,
    Flushed,
}

struct HtmxInner {
    intent: ResponseIntent,
    state: FlushState,
}

impl Htmx {
    pub(crate) fn new() -> Htmx {
        Htmx {
            inner: Rc::new(RefCell::new(HtmxInner {
                intent: ResponseIntent::default(),
                state: FlushState::Attached,
            })),
        }
    }

    /// The handle attached to `req` by [`HtmxMiddleware`](crate::HtmxMiddleware).
    ///
    /// # Panics
    ///
    /// Panics if no middleware attached one.
    pub fn from_request_extensions(req: &HttpRequest) -> Htmx {
        match req.extensions().get::<Htmx>() {
            Some(htmx) => htmx.clone(),
            None => panic!(
                "no htmx response headers attached to {} {}; wrap the route with HtmxMiddleware",
                req.method(),
                req.path()
            ),
        }
    }

    fn update(&self, field: &str, apply: impl FnOnce(&mut ResponseIntent)) {
        let mut inner = self.inner.borrow_mut();
        if inner.state == FlushState::Flushed {
            debug!("ignoring {} set after the response headers were written", field);
            return;
        }
        apply(&mut inner.intent);
    }

    /// Client-side redirect without a full page reload.
    ///
    /// Sent as the bare path when only the path is set, as JSON otherwise.
    /// An empty path clears the header.
    pub fn location(&self, location: HxLocation) {
        self.update("HX-Location", |intent| intent.location = location);
    }

    /// Shorthand for `location(HxLocation::new(path))`.
    pub fn location_path(&self, path: impl Into<String>) {
        self.location(HxLocation::new(path));
    }

    /// Push a URL into the browser history. `"false"` prevents the push.
    pub fn push_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.update("HX-Push-Url", |intent| intent.push_url = url);
    }

    /// Equivalent to `push_url("false")`.
    pub fn prevent_push_url(&self) {
        self.push_url("false");
    }

    /// Client-side redirect to a new location with a full page load.
    pub fn redirect(&self, url: impl Into<String>) {
        let url = url.into();
        self.update("HX-Redirect", |intent| intent.redirect = url);
    }

    /// Full refresh of the page on the client side.
    pub fn refresh(&self, refresh: bool) {
        self.update("HX-Refresh", |intent| intent.refresh = refresh);
    }

    /// Replace the current URL in the browser history.
    /// `"false"` prevents the replacement.
    pub fn replace_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.update("HX-Replace-Url", |intent| intent.replace_url = url);
    }

    /// Equivalent to `replace_url("false")`.
    pub fn prevent_replace_url(&self) {
        self.replace_url("false");
    }

    /// How the response is swapped. `None` clears an earlier choice.
    pub fn reswap(&self, swap_type: impl Into<Option<SwapType>>) {
        let swap_type = swap_type.into();
        self.update("HX-Reswap", |intent| intent.reswap = swap_type);
    }

    /// CSS selector of the element that should receive the content instead.
    pub fn retarget(&self, selector: impl Into<String>) {
        let selector = selector.into();
        self.update("HX-Retarget", |intent| intent.retarget = selector);
    }

    /// CSS selector choosing which part of the response is swapped in.
    pub fn reselect(&self, selector: impl Into<String>) {
        let selector = selector.into();
        self.update("HX-Reselect", |intent| intent.reselect = selector);
    }

    /// Fire `name` on the client. An event that was already queued for the
    /// same trigger type has its payload replaced.
    pub fn trigger_event(
        &self,
        name: impl Into<String>,
        payload: Option<TriggerPayload>,
        trigger_type: TriggerType,
    ) {
        let name = name.into();
        self.update(trigger_type.header_name(), |intent| {
            intent.insert_trigger(trigger_type, name, payload)
        });
    }

    /// Shorthand for a [`TriggerType::Standard`] event without payload.
    pub fn trigger(&self, name: impl Into<String>) {
        self.trigger_event(name, None, TriggerType::Standard);
    }

    /// Fire `name` on the client with `data` encoded as its JSON payload.
    ///
    /// If `data` cannot be encoded nothing is queued and the error names the
    /// header and event.
    pub fn trigger_json<T>(
        &self,
        name: impl Into<String>,
        data: &T,
        trigger_type: TriggerType,
    ) -> Result<(), HxError>
    where
        T: Serialize + ?Sized,
    {
        let name = name.into();
        let payload = TriggerPayload::json(data).map_err(|e| {
            HxError::encoding(format!("{}: {}", trigger_type.header_name(), name), e)
        })?;
        self.trigger_event(name, Some(payload), trigger_type);
        Ok(())
    }

    /// Whether the headers have already been written to the response.
    pub fn is_flushed(&self) -> bool {
        self.inner.borrow().state == FlushState::Flushed
    }

    /// A copy of everything set so far.
    pub fn intent(&self) -> ResponseIntent {
        self.inner.borrow().intent.clone()
    }

    /// The headers a flush would write right now.
    pub fn header_pairs(&self) -> Vec<(&'static str, String)> {
        header_pairs(&self.inner.borrow().intent)
    }

    /// Write the headers into `headers`, once.
    ///
    /// Returns `false` without touching `headers` if this record was already
    /// flushed.
    pub(crate) fn flush(&self, headers: &mut HeaderMap) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state == FlushState::Flushed {
            trace!("htmx response headers already written");
            return false;
        }
        inner.state = FlushState::Flushed;

        let pairs = header_pairs(&inner.intent);
        trace!("writing {} htmx response headers", pairs.len());
        for (name, value) in pairs {
            let Ok(key) = HeaderName::from_bytes(name.as_bytes()) else {
                warn!("Failed to parse header name: {}", name);
                continue;
            };
            match HeaderValue::from_str(&value) {
                Ok(value) => {
                    headers.insert(key, value);
                }
                Err(_) => warn!("Failed to parse {} header value: {}", name, value),
            }
        }
        true
    }
}

impl FromRequest for Htmx {
    type Error = Error;
    type Future = Ready<Result<Htmx, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Htmx::from_request_extensions(req)))
    }
}
