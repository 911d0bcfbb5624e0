use crate::controller::{Controller, LoginController, RegistrationController, StaticController};
use crate::error::HttpError;
use crate::http::request::Request;
use crate::routing::matcher::{ExactPath, PathPrefix, RouteMatcher};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

#[derive(Debug)]
struct Route {
    matcher: Box<dyn RouteMatcher>,
    controller: Box<dyn Controller>,
}

#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in bindings: login, registration, then static files for
    /// everything else.
    pub fn with_default_routes() -> Self {
        Self::new()
            .route(ExactPath::new(LOGIN_PATH), LoginController)
            .route(ExactPath::new(REGISTER_PATH), RegistrationController)
            .route(PathPrefix::new("/"), StaticController)
    }

    /// Appends a binding. Earlier bindings take precedence.
    pub fn route(
        mut self,
        matcher: impl RouteMatcher + 'static,
        controller: impl Controller + 'static,
    ) -> Self {
        self.routes.push(Route {
            matcher: Box::new(matcher),
            controller: Box::new(controller),
        });
        self
    }

    pub fn find(&self, req: &Request) -> Result<&dyn Controller, HttpError> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(&req.path))
            .map(|route| route.controller.as_ref())
            .ok_or_else(|| HttpError::NoMatch(req.path.clone()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
