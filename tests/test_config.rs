use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use ferrocat::config::Config;
use ferrocat::http::parser::ParseLimits;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::load_from(env(&[])).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.read_timeout(), None);
    assert_eq!(cfg.server.parse_limits(), ParseLimits::default());
    assert_eq!(cfg.server.max_head_bytes, 8 * 1024);
    assert_eq!(cfg.static_files.root, PathBuf::from("static"));
}

#[test]
fn test_config_request_limits_from_yaml() {
    let cfg = Config::from_yaml("server:
  max_head_bytes: 4096
  max_body_bytes: 65536
").unwrap();

    assert_eq!(
        cfg.server.parse_limits(),
        ParseLimits {
            max_head_bytes: 4096,
            max_body_bytes: 65536,
        }
    );
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_custom_address_from_env() {
    let cfg = Config::load_from(env(&[("LISTEN", "0.0.0.0:3000")])).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_static_root_from_env() {
    let cfg = Config::load_from(env(&[("STATIC_ROOT", "/srv/www")])).unwrap();
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml(
        "server:\n  listen_addr: \"0.0.0.0:9000\"\n  read_timeout_secs: 15\nstatic_files:\n  root: public\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.server.read_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_yaml_missing_sections_default() {
    let cfg = Config::from_yaml("static_files:\n  root: public\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_file_then_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  listen_addr: \"0.0.0.0:9000\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cfg = Config::load_from(env(&[("FERROCAT_CONFIG", path.as_str())])).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");

    let cfg = Config::load_from(env(&[("FERROCAT_CONFIG", path.as_str()), ("LISTEN", "127.0.0.1:1")])).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:1");
}

#[test]
fn test_config_missing_file_is_error() {
    let result = Config::load_from(env(&[("FERROCAT_CONFIG", "/nonexistent/ferrocat.yaml")]));
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
