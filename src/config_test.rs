use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_bind_all_interfaces_on_3000() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.site_root, None);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("EDGERISK_HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("EDGERISK_SITE_ROOT", "/srv/edgerisk/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/edgerisk/site")));
}

#[test]
fn blank_values_use_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("EDGERISK_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_a_config_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config(ref msg) if msg.starts_with("PORT 'http'")));
}

#[test]
fn invalid_host_is_a_config_error() {
    let err = ServerConfig::from_lookup(lookup(&[("EDGERISK_HOST", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}
