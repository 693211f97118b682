use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.formspree.endpoint, DEFAULT_FORMSPREE_ENDPOINT);
    assert_eq!(
        cfg.formspree.timeouts,
        RelayTimeouts { request: Duration::from_secs(10), connect: Duration::from_secs(5) }
    );
    assert_eq!(cfg.rate_limit, RelayRateLimit { limit: 5, window: Duration::from_secs(60) });
}

#[test]
fn overrides_are_parsed_and_trimmed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("FORMSPREE_ENDPOINT", " http://127.0.0.1:9000/f/test "),
        ("FORMSPREE_TIMEOUT_SECS", "3"),
        ("FORMSPREE_CONNECT_TIMEOUT_SECS", "1"),
        ("RELAY_RATE_LIMIT", "20"),
        ("RELAY_RATE_WINDOW_SECS", "300"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.formspree.endpoint, "http://127.0.0.1:9000/f/test");
    assert_eq!(cfg.formspree.timeouts.request, Duration::from_secs(3));
    assert_eq!(cfg.formspree.timeouts.connect, Duration::from_secs(1));
    assert_eq!(cfg.rate_limit.limit, 20);
    assert_eq!(cfg.rate_limit.window, Duration::from_secs(300));
}

#[test]
fn unparsable_port_is_rejected() {
    assert_eq!(
        config_from(&[("PORT", "http")]),
        Err(ConfigError::Parse { var: "PORT", value: "http".to_owned() })
    );
}

#[test]
fn zero_values_are_rejected() {
    assert!(matches!(config_from(&[("PORT", "0")]), Err(ConfigError::Invalid { var: "PORT", .. })));
    assert!(matches!(
        config_from(&[("RELAY_RATE_LIMIT", "0")]),
        Err(ConfigError::Invalid { var: "RELAY_RATE_LIMIT", .. })
    ));
    assert!(matches!(
        config_from(&[("FORMSPREE_TIMEOUT_SECS", "0")]),
        Err(ConfigError::Invalid { var: "FORMSPREE_TIMEOUT_SECS", .. })
    ));
}

#[test]
fn non_http_endpoint_is_rejected() {
    assert!(matches!(
        config_from(&[("FORMSPREE_ENDPOINT", "formspree.io/f/x")]),
        Err(ConfigError::Invalid { var: "FORMSPREE_ENDPOINT", .. })
    ));
}
