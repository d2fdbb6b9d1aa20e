use actix_web::http::StatusCode;
use actix_web::ResponseError;

/// Errors surfaced by the htmx helpers.
#[derive(Debug, thiserror::Error)]
pub enum HxError {
    /// A user supplied payload could not be encoded as JSON.
    ///
    /// Returned by the setter that received the payload; the request's
    /// header intent is left exactly as it was before the call.
    #[error("{field}: {source}")]
    Encoding {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// The [`HxRequest`](crate::HxRequest) extractor was used on a request
    /// that htmx did not send.
    #[error("request was not sent by htmx")]
    NotHtmxRequest,
}

impl HxError {
    pub(crate) fn encoding(field: impl Into<String>, source: serde_json::Error) -> Self {
        HxError::Encoding {
            field: field.into(),
            source,
        }
    }
}

impl ResponseError for HxError {
    fn status_code(&self) -> StatusCode {
        match self {
            HxError::Encoding { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HxError::NotHtmxRequest => StatusCode::BAD_REQUEST,
        }
    }
}
