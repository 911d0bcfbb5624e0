//! Request-level failures and the status each one is answered with.
//!
//! Socket failures are not part of this taxonomy: they travel as
//! `anyhow::Error` up to the listener, which logs them and drops the
//! connection.

use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::response::{Response, StatusCode};
use crate::resource::ResourceError;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] ParseError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("no route matches {0}")]
    NoMatch(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::MalformedRequest(ParseError::HeadTooLarge(_)) => {
                StatusCode::RequestHeaderFieldsTooLarge
            }
            HttpError::MalformedRequest(ParseError::BodyTooLarge { .. }) => {
                StatusCode::PayloadTooLarge
            }
            HttpError::MalformedRequest(_) | HttpError::BadRequest(_) => StatusCode::BadRequest,
            HttpError::NoMatch(_) | HttpError::NotFound(_) => StatusCode::NotFound,
            HttpError::MethodNotAllowed(_) => StatusCode::MethodNotAllowed,
            HttpError::Internal(_) => StatusCode::InternalServerError,
        }
    }

    /// The response sent to the client. The body is the reason phrase only;
    /// details stay in the server log.
    pub fn into_response(self) -> Response {
        Response::status_only(self.status())
    }
}

impl From<ResourceError> for HttpError {
    fn from(err: ResourceError) -> Self {
        if err.is_not_found() {
            HttpError::NotFound(err.to_string())
        } else {
            HttpError::Internal(err.to_string())
        }
    }
}
