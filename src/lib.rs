//! # actix-hx-headers
//!
//! `actix-hx-headers` collects htmx response directives while a request is
//! handled and writes them as `HX-*` headers exactly once, just before the
//! response head is sent.
//!
//! ## Features
//!
//! - **Request Detection**: an [`HxRequest`] snapshot of the htmx request headers, absent for non-htmx requests
//! - **Deferred Response Headers**: any number of handlers and middleware set directives on the shared [`Htmx`] record; the last value written wins
//! - **Event Triggering**: trigger client-side events with optional JSON payloads at the three htmx lifecycle stages
//! - **Compact Encoding**: bare paths and plain event lists when no extra data is attached, JSON only when needed
//! - **Early Errors**: payloads are encoded when they are set, so encoding failures surface in the handler that caused them
//!
//! # Getting Started
//! Register [`HtmxMiddleware`] on your `App` and use the [`Htmx`] and [`HxRequest`] extractors in your handlers:
//!
//! ```no_run
//! use actix_hx_headers::{Htmx, HtmxMiddleware, HxRequest, TriggerType};
//! use actix_web::{web, App, HttpResponse, HttpServer, Responder};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(HtmxMiddleware)
//!             .route("/", web::get().to(index))
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//!
//! async fn index(htmx: Htmx, hx: Option<HxRequest>) -> actix_web::Result<impl Responder> {
//!     match hx {
//!         Some(_) => {
//!             htmx.trigger_json("loaded", &["partial"], TriggerType::AfterSettle)?;
//!             Ok(HttpResponse::Ok().body("<div>Partial content for htmx</div>"))
//!         }
//!         None => Ok(HttpResponse::Ok().body("<html><body><div>Full page content</div></body></html>")),
//!     }
//! }
//! ```

mod error;
mod headers;
mod htmx;
mod intent;
mod location;
mod middleware;
mod request;
mod serialize;
mod trigger_payload;

pub use self::{
    error::HxError,
    htmx::Htmx,
    intent::{ResponseIntent, SwapType, TriggerType},
    location::HxLocation,
    middleware::HtmxMiddleware,
    request::HxRequest,
    serialize::header_pairs,
    trigger_payload::TriggerPayload,
};
