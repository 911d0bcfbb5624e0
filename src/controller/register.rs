use crate::app::AppState;
use crate::controller::{Controller, serve_static, sign_in};
use crate::error::HttpError;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::user::User;

/// Creates an account from the posted form and signs the new user in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationController;

impl Controller for RegistrationController {
    fn do_get(&self, req: &Request, state: &AppState) -> Result<Response, HttpError> {
        serve_static(req, state)
    }

    fn do_post(&self, req: &Request, state: &AppState) -> Result<Response, HttpError> {
        let user = User::from_form(&req.form()).map_err(|e| HttpError::BadRequest(e.to_string()))?;

        state
            .users
            .save(user.clone())
            .map_err(|e| HttpError::BadRequest(e.to_string()))?;
        tracing::info!(account = %user.account(), "User registered");

        sign_in(user, state)
    }
}
