//! Application wiring shared by every connection.

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::resource::StaticResourceResolver;
use crate::routing::Router;
use crate::session::SessionStore;
use crate::user::UserRepository;

/// Stores and resolvers handed to controllers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub users: UserRepository,
    pub resources: StaticResourceResolver,
}

impl AppState {
    pub fn new(resources: StaticResourceResolver) -> Self {
        Self {
            sessions: SessionStore::new(),
            users: UserRepository::new(),
            resources,
        }
    }
}

pub struct App {
    pub state: AppState,
    pub router: Router,
}

impl App {
    pub fn new(state: AppState, router: Router) -> Self {
        Self { state, router }
    }

    /// Empty stores, the default routes, static files from the configured root.
    pub fn from_config(cfg: &Config) -> Self {
        let resources = StaticResourceResolver::new(&cfg.static_files.root);
        Self::new(AppState::new(resources), Router::with_default_routes())
    }

    /// Routes and dispatches one request. Never fails: every error becomes a
    /// response.
    pub fn handle(&self, req: &Request) -> Response {
        let response = match self.router.find(req) {
            Ok(controller) => controller.service(req, &self.state),
            Err(err) => err.into_response(),
        };

        tracing::info!(
            method = req.method.as_str(),
            path = %req.path,
            status = response.status.as_u16(),
            "Request handled"
        );

        response
    }
}
