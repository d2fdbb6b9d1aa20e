use crate::Htmx;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// A middleware for Actix Web that collects htmx response headers.
///
/// [`HtmxMiddleware`] attaches an empty [`Htmx`] record to every request it
/// wraps. Handlers and inner middleware extract `Htmx` and set response
/// directives on it; when the response comes back up the chain the record
/// is written into the response headers exactly once, before actix sends
/// the response head.
///
/// Errors returned by handlers are already rendered into responses by the
/// time they reach the middleware, so directives set before an error (an
/// `HX-Retarget` to an error banner, say) are still sent. Wrapping a route
/// more than once is harmless: inner instances reuse the record of the
/// outer one and only the first flush writes anything.
///
/// # Example
///
/// ```no_run
/// use actix_web::{web, App, HttpResponse, HttpServer, Responder};
/// use actix_hx_headers::{Htmx, HtmxMiddleware, HxRequest, SwapType};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     HttpServer::new(|| {
///         App::new()
///             .wrap(HtmxMiddleware)
///             .route("/todos", web::post().to(create))
///     })
///     .bind("127.0.0.1:8080")?
///     .run()
///     .await
/// }
///
/// async fn create(htmx: Htmx, hx: Option<HxRequest>) -> impl Responder {
///     if hx.is_none() {
///         return HttpResponse::SeeOther()
///             .insert_header(("Location", "/todos"))
///             .finish();
///     }
///     htmx.trigger("todo-added");
///     htmx.reswap(SwapType::BeforeEnd);
///     HttpResponse::Ok().body("<li>new todo</li>")
/// }
/// ```
pub struct HtmxMiddleware;

impl<S, B> Transform<S, ServiceRequest> for HtmxMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = InnerHtmxMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InnerHtmxMiddleware { service }))
    }
}

#[doc(hidden)]
#[non_exhaustive]
pub struct InnerHtmxMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for InnerHtmxMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req.extensions().get::<Htmx>().cloned();
        let htmx = match existing {
            Some(htmx) => htmx,
            None => {
                let htmx = Htmx::new();
                req.extensions_mut().insert(htmx.clone());
                htmx
            }
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            htmx.flush(res.headers_mut());

            Ok(res)
        })
    }
}
