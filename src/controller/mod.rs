//! Application controllers.
//!
//! A controller answers GET and POST for the paths it is bound to.
//! [`Controller::service`] dispatches on the method; anything other than GET
//! or POST gets 405 without reaching the handlers.

pub mod login;
pub mod register;
pub mod static_files;

pub use login::LoginController;
pub use register::RegistrationController;
pub use static_files::StaticController;

use std::sync::Arc;

use crate::app::AppState;
use crate::error::HttpError;
use crate::http::mime;
use crate::http::request::{Method, Request, SESSION_COOKIE};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::user::User;

/// Body served for `/`.
pub const WELCOME_MESSAGE: &str = "Hello world!";
/// Where a successful login or registration lands.
pub const HOME_PATH: &str = "/index.html";
/// Session attribute holding the signed-in [`User`].
pub const USER_ATTRIBUTE: &str = "user";

pub trait Controller: Send + Sync + std::fmt::Debug {
    fn service(&self, req: &Request, state: &AppState) -> Response {
        let result = match &req.method {
            Method::GET => self.do_get(req, state),
            Method::POST => self.do_post(req, state),
            other => Err(HttpError::MethodNotAllowed(other.as_str().to_string())),
        };

        result.unwrap_or_else(|err| {
            tracing::debug!(method = req.method.as_str(), path = %req.path, error = %err, "Request rejected");
            err.into_response()
        })
    }

    fn do_get(&self, req: &Request, state: &AppState) -> Result<Response, HttpError>;

    fn do_post(&self, req: &Request, state: &AppState) -> Result<Response, HttpError>;
}

/// Serves `/` with the welcome text and any other path from the static root.
pub(crate) fn serve_static(req: &Request, state: &AppState) -> Result<Response, HttpError> {
    if req.path == "/" {
        return Ok(Response::ok(WELCOME_MESSAGE, mime::TEXT_HTML));
    }

    let resource = state.resources.resolve(&req.path)?;
    Ok(Response::ok(resource.body, resource.content_type))
}

/// Opens a session for `user` and redirects home with the session cookie.
pub(crate) fn sign_in(user: User, state: &AppState) -> Result<Response, HttpError> {
    let account = user.account().to_string();
    let session = state.sessions.create();
    state
        .sessions
        .set_attribute(&session, USER_ATTRIBUTE, Arc::new(user))
        .map_err(|e| HttpError::Internal(e.to_string()))?;

    tracing::info!(account = %account, session_id = %session.id(), "User signed in");

    Ok(ResponseBuilder::new(StatusCode::Found)
        .location(HOME_PATH)
        .cookie(format!("{}={}", SESSION_COOKIE, session.id()))
        .build())
}
