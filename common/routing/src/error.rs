use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use std::error::Error;

/// Returned by endpoints when the layer beneath them fails.
/// The report is kept for logging, the client only ever sees a bare 500.
#[derive(thiserror::Error)]
#[error("there was an error running the endpoint")]
pub struct EndpointError<T: Error>(Report<T>);

impl<T: Error> std::fmt::Debug for EndpointError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> From<Report<T>> for EndpointError<T>
where
    T: Error + Send + Sync + 'static,
{
    fn from(value: Report<T>) -> Self {
        Self(value)
    }
}

impl<T: Error> IntoResponse for EndpointError<T> {
    fn into_response(self) -> axum::response::Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
