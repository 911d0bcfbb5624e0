//! Tests for static resource resolution

mod common;

use std::fs;

use ferrocat::resource::{ResourceError, StaticResourceResolver};

#[test]
fn test_resolve_existing_file() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    let resource = resolver.resolve("/index.html").unwrap();

    assert_eq!(resource.body, format!("{}\n", common::INDEX_HTML));
    assert_eq!(resource.content_type, "text/html");
}

#[test]
fn test_resolve_appends_html_extension() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    assert_eq!(
        resolver.resource_path("/login").unwrap(),
        root.path().join("login.html")
    );
    let resource = resolver.resolve("/login").unwrap();
    assert_eq!(resource.body, format!("{}\n", common::LOGIN_HTML));
}

#[test]
fn test_resolve_css_content_type() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    let resource = resolver.resolve("/css/styles.css").unwrap();

    assert_eq!(resource.content_type, "text/css");
    assert_eq!(resource.body, "body {\n  margin: 0;\n}\n");
}

#[test]
fn test_resolve_normalizes_line_endings() {
    let root = common::static_root();
    fs::write(root.path().join("crlf.js"), "a();\r\nb();\r\n").unwrap();
    let resolver = StaticResourceResolver::new(root.path());

    let resource = resolver.resolve("/crlf.js").unwrap();

    assert_eq!(resource.body, "a();\nb();\n");
    assert_eq!(resource.content_type, "application/javascript");
}

#[test]
fn test_resolve_missing_file() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    let err = resolver.resolve("/missing.html").unwrap_err();

    assert!(matches!(err, ResourceError::NotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_resolve_directory_is_not_found() {
    let root = common::static_root();
    fs::create_dir(root.path().join("docs.d")).unwrap();
    let resolver = StaticResourceResolver::new(root.path());

    assert!(matches!(
        resolver.resolve("/docs.d"),
        Err(ResourceError::NotFound(_))
    ));
}

#[test]
fn test_resolve_rejects_parent_segments() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path().join("css"));

    let err = resolver.resolve("/../index.html").unwrap_err();

    assert!(matches!(err, ResourceError::OutsideRoot(_)));
    assert!(err.is_not_found());
}

#[cfg(unix)]
#[test]
fn test_resolve_rejects_symlink_escape() {
    let outside = common::static_root();
    let root = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(
        outside.path().join("index.html"),
        root.path().join("leak.html"),
    )
    .unwrap();
    let resolver = StaticResourceResolver::new(root.path());

    assert!(matches!(
        resolver.resolve("/leak.html"),
        Err(ResourceError::OutsideRoot(_))
    ));
}

#[test]
fn test_resolve_root_path_is_not_a_file() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    assert!(matches!(resolver.resolve("/"), Err(ResourceError::NotFound(_))));
}

#[test]
fn test_resolve_trailing_slash_is_not_found() {
    let root = common::static_root();
    let resolver = StaticResourceResolver::new(root.path());

    assert!(matches!(
        resolver.resolve("/index.html/"),
        Err(ResourceError::NotFound(_))
    ));
    assert!(matches!(
        resolver.resource_path("/login/"),
        Err(ResourceError::NotFound(_))
    ));
    assert!(matches!(
        resolver.resolve("/css/"),
        Err(ResourceError::NotFound(_))
    ));
}
