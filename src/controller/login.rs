use crate::app::AppState;
use crate::controller::{Controller, HOME_PATH, USER_ATTRIBUTE, serve_static, sign_in};
use crate::error::HttpError;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::user::User;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoginController;

impl LoginController {
    /// True when the request carries a cookie for a live session whose user
    /// is still registered. Unknown or stale cookies count as signed out.
    pub fn is_signed_in(req: &Request, state: &AppState) -> bool {
        let Some(id) = req.session_id() else {
            return false;
        };
        let Ok(session) = state.sessions.find(id) else {
            tracing::debug!(session_id = %id, "Cookie names no live session");
            return false;
        };
        session
            .attribute_as::<User>(USER_ATTRIBUTE)
            .is_some_and(|user| state.users.find_by_account(user.account()).is_some())
    }
}

impl Controller for LoginController {
    fn do_get(&self, req: &Request, state: &AppState) -> Result<Response, HttpError> {
        if Self::is_signed_in(req, state) {
            return Ok(Response::redirect(HOME_PATH));
        }
        serve_static(req, state)
    }

    fn do_post(&self, req: &Request, state: &AppState) -> Result<Response, HttpError> {
        let form = req.form();
        let account = form.get("account").map(String::as_str).unwrap_or_default();
        let password = form.get("password").map(String::as_str).unwrap_or_default();

        match state.users.find_by_account(account) {
            Some(user) if user.check_password(password) => sign_in(user, state),
            _ => {
                tracing::info!(account = %account, "Login failed");
                serve_static(req, state)
            }
        }
    }
}
