use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind};
use domain::verification::{self, SignedRequest, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use log::*;

use crate::{AppState, Error};

/// Rejects any request whose Slack signature does not verify.
///
/// The signature covers the raw body, so the body is buffered here and the
/// same bytes are handed on to the handler.
pub(crate) async fn require_slack_signature(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, app_state.config.max_body_bytes)
        .await
        .map_err(|err| {
            warn!("Failed to buffer request body for verification: {err}");
            DomainError {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Unverified),
            }
        })?;

    {
        let signed = SignedRequest::new(
            header_str(&parts.headers, TIMESTAMP_HEADER),
            header_str(&parts.headers, SIGNATURE_HEADER),
            &bytes,
        );
        verification::verify(app_state.verifier.as_ref(), &signed)?;
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
