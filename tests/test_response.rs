use ferrocat::http::response::{Response, ResponseBuilder, StatusCode};

fn wire(response: &Response) -> String {
    String::from_utf8(response.to_bytes()).unwrap()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Found.as_u16(), 302);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::PayloadTooLarge.as_u16(), 413);
    assert_eq!(StatusCode::RequestHeaderFieldsTooLarge.as_u16(), 431);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Found.reason_phrase(), "Found");
    assert_eq!(StatusCode::Unauthorized.reason_phrase(), "Unauthorized");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(StatusCode::PayloadTooLarge.reason_phrase(), "Payload Too Large");
    assert_eq!(
        StatusCode::RequestHeaderFieldsTooLarge.reason_phrase(),
        "Request Header Fields Too Large"
    );
}

#[test]
fn test_serialize_ok_with_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/html")
        .body("Hello world!")
        .build();

    assert_eq!(
        wire(&response),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html\r\n\
         Content-Length: 12\r\n\
         \r\n\
         Hello world!"
    );
}

#[test]
fn test_serialize_redirect_with_cookie_in_fixed_order() {
    let response = ResponseBuilder::new(StatusCode::Found)
        .cookie("JSESSIONID=abc")
        .location("/index.html")
        .build();

    assert_eq!(
        wire(&response),
        "HTTP/1.1 302 Found\r\n\
         Content-Length: 0\r\n\
         Location: /index.html\r\n\
         Set-Cookie: JSESSIONID=abc\r\n\
         \r\n"
    );
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("héllo").build();

    assert_eq!(response.content_length(), 6);
    assert!(wire(&response).contains("Content-Length: 6\r\n"));
}

#[test]
fn test_location_does_not_change_status() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .location("/elsewhere")
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert!(wire(&response).starts_with("HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_extra_headers_follow_well_known_ones() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-Frame-Options", "DENY")
        .header("Cache-Control", "no-cache")
        .cookie("JSESSIONID=abc")
        .build();

    let text = wire(&response);
    let cookie = text.find("Set-Cookie").unwrap();
    let cache = text.find("Cache-Control").unwrap();
    let frame = text.find("X-Frame-Options").unwrap();
    assert!(cookie < cache);
    assert!(cache < frame);
}

#[test]
fn test_serialization_is_deterministic() {
    let build = || {
        ResponseBuilder::new(StatusCode::Ok)
            .header("B", "2")
            .header("A", "1")
            .body("x")
            .build()
    };

    assert_eq!(build().to_bytes(), build().to_bytes());
}

#[test]
fn test_response_method_not_allowed_helper() {
    let response = Response::method_not_allowed();

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
    assert_eq!(response.body, b"Method Not Allowed".to_vec());
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"Not Found".to_vec());
}

#[test]
fn test_response_redirect_helper() {
    let response = Response::redirect("/index.html");

    assert_eq!(response.status, StatusCode::Found);
    assert_eq!(response.location.as_deref(), Some("/index.html"));
    assert!(response.body.is_empty());
}
