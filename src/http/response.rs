use std::collections::BTreeMap;

use crate::http::writer::serialize_response;

/// HTTP status codes supported by the server.
///
/// Common HTTP status codes used in responses:
/// - `Ok` (200): Request successful
/// - `Found` (302): Redirect, paired with a `Location` header
/// - `BadRequest` (400): Malformed request
/// - `Unauthorized` (401): Reserved, not produced by the built-in controllers
/// - `NotFound` (404): No route or resource
/// - `MethodNotAllowed` (405): Neither GET nor POST
/// - `PayloadTooLarge` (413): Content-Length over the body limit
/// - `RequestHeaderFieldsTooLarge` (431): Request head over the head limit
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 413 Payload Too Large
    PayloadTooLarge,
    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ferrocat::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::RequestHeaderFieldsTooLarge => 431,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ferrocat::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// The well-known headers have their own fields so serialization can emit
/// them in a fixed order; `headers` holds anything else. Content-Length is
/// not stored, it is computed from `body` when serializing.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub set_cookie: Option<String>,
    /// Extra headers, serialized after the well-known ones in name order
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use ferrocat::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Found)
///     .location("/index.html")
///     .cookie("JSESSIONID=abc")
///     .build();
/// assert_eq!(response.location.as_deref(), Some("/index.html"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<String>,
    location: Option<String>,
    set_cookie: Option<String>,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            location: None,
            set_cookie: None,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces an extra header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the `Location` header. The status is left as given to
    /// [`ResponseBuilder::new`].
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the `Set-Cookie` header value, e.g. `JSESSIONID=<id>`.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.set_cookie = Some(cookie.into());
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            location: self.location,
            set_cookie: self.set_cookie,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body and content type.
    pub fn ok(body: impl Into<Vec<u8>>, content_type: &str) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// Creates a 302 Found response pointing at `location`.
    pub fn redirect(location: &str) -> Self {
        ResponseBuilder::new(StatusCode::Found)
            .location(location)
            .build()
    }

    /// Creates a response whose body is the status' reason phrase.
    pub fn status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status)
            .content_type("text/plain")
            .body(status.reason_phrase())
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::status_only(StatusCode::NotFound)
    }

    /// Creates a 405 Method Not Allowed response, body `Method Not Allowed`.
    pub fn method_not_allowed() -> Self {
        Self::status_only(StatusCode::MethodNotAllowed)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::status_only(StatusCode::InternalServerError)
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Serializes to wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_response(self)
    }
}
