use std::collections::HashMap;

use super::*;

fn config(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let cfg = config(&[("PORT", "  "), ("BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn explicit_values_are_used() {
    let cfg = config(&[("PORT", "8080"), ("BACKEND_URL", "https://api.example.com/"), ("BACKEND_TIMEOUT_SECS", "5")])
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.com");
    assert_eq!(cfg.backend_timeout_secs, 5);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(config(&[("PORT", "http")]), Err(ConfigError::InvalidPort { value: "http".into() }));
    assert_eq!(config(&[("PORT", "70000")]), Err(ConfigError::InvalidPort { value: "70000".into() }));
}

#[test]
fn backend_url_needs_http_scheme() {
    assert_eq!(
        config(&[("BACKEND_URL", "localhost:3001")]),
        Err(ConfigError::InvalidBackendUrl { value: "localhost:3001".into() })
    );
}

#[test]
fn zero_timeout_is_rejected() {
    assert_eq!(
        config(&[("BACKEND_TIMEOUT_SECS", "0")]),
        Err(ConfigError::InvalidTimeout { value: "0".into() })
    );
}
