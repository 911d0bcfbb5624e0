#![allow(dead_code)]

use std::fs;

use ferrocat::app::{App, AppState};
use ferrocat::http::parser::parse_http_request;
use ferrocat::http::request::Request;
use ferrocat::resource::StaticResourceResolver;
use ferrocat::routing::Router;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<h1>index</h1>";
pub const LOGIN_HTML: &str = "<form action=\"/login\"></form>";
pub const REGISTER_HTML: &str = "<form action=\"/register\"></form>";
pub const STYLES_CSS: &str = "body {\n  margin: 0;\n}";

/// A content root with the pages the built-in controllers serve.
pub fn static_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    fs::write(dir.path().join("login.html"), LOGIN_HTML).unwrap();
    fs::write(dir.path().join("register.html"), REGISTER_HTML).unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/styles.css"), STYLES_CSS).unwrap();
    dir
}

/// App with default routes over `root`. Keep the TempDir alive while using it.
pub fn app(root: &TempDir) -> App {
    let state = AppState::new(StaticResourceResolver::new(root.path()));
    App::new(state, Router::with_default_routes())
}

pub fn request(raw: &str) -> Request {
    parse_http_request(raw.as_bytes()).unwrap().0
}

pub fn post_form(path: &str, body: &str) -> Request {
    request(&format!(
        "POST {} HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{}",
        path,
        body.len(),
        body
    ))
}

/// Extracts the id from a `JSESSIONID=<id>` Set-Cookie value.
pub fn cookie_id(set_cookie: &str) -> &str {
    set_cookie.strip_prefix("JSESSIONID=").unwrap()
}
