use crate::app::AppState;
use crate::controller::{Controller, serve_static};
use crate::error::HttpError;
use crate::http::request::Request;
use crate::http::response::Response;

/// Fallback controller for files under the content root.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticController;

impl Controller for StaticController {
    fn do_get(&self, req: &Request, state: &AppState) -> Result<Response, HttpError> {
        serve_static(req, state)
    }

    fn do_post(&self, req: &Request, _state: &AppState) -> Result<Response, HttpError> {
        Err(HttpError::MethodNotAllowed(req.method.as_str().to_string()))
    }
}
