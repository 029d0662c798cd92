//! Request ID propagation.
//!
//! `TracingLogger` assigns every request an id and records it on the root span.
//! This middleware hands the same id back to the client so a failed call can be
//! matched to its log lines.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use tracing_actix_web::RequestId;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Copy the tracing request id into the response headers.
///
/// Must run inside `TracingLogger`, which puts the id into the request extensions.
pub async fn echo_request_id<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error> {
    let request_id = req.extensions().get::<RequestId>().copied();

    let mut res = next.call(req).await?;

    if let Some(id) = request_id {
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
    }

    Ok(res)
}
