use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_point_at_hosted_relay() {
    let settings = load_settings_from(None, no_env).expect("settings");
    assert_eq!(settings.relay_url, "https://formspree.io/f/xovepqgk");
    assert_eq!(settings.log_filter, "info");
    assert!(settings.database_url.starts_with("sqlite://"));
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
        relay_url = "http://127.0.0.1:9000/f/dev"
        database_url = "./data/dev.sqlite3"
    "#;
    let settings = load_settings_from(Some(raw), no_env).expect("settings");
    assert_eq!(settings.relay_url, "http://127.0.0.1:9000/f/dev");
    assert_eq!(settings.prepared_database_url(), "sqlite://./data/dev.sqlite3");
}

#[test]
fn app_prefixed_env_wins_over_plain_env_and_file() {
    let raw = r#"relay_url = "http://file/relay""#;
    let settings = load_settings_from(Some(raw), |name| match name {
        "RELAY_URL" => Some("http://plain/relay".into()),
        "APP__RELAY_URL" => Some("http://app/relay".into()),
        "APP__LOG_FILTER" => Some("debug".into()),
        _ => None,
    })
    .expect("settings");
    assert_eq!(settings.relay_url, "http://app/relay");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn malformed_file_is_an_error() {
    assert!(load_settings_from(Some("relay_url = "), no_env).is_err());
}

#[test]
fn relay_endpoint_requires_http_scheme() {
    let mut settings = Settings::default();
    assert!(settings.relay_endpoint().is_ok());

    settings.relay_url = "ftp://relay.example.com/f/x".into();
    assert!(settings.relay_endpoint().is_err());

    settings.relay_url = "not a url".into();
    assert!(settings.relay_endpoint().is_err());
}

#[test]
fn normalizes_plain_paths_to_sqlite_urls() {
    assert_eq!(
        normalize_database_url("./data/test.db"),
        "sqlite://./data/test.db"
    );
    assert_eq!(
        normalize_database_url("sqlite:C:\\Users\\alice\\test.db"),
        "sqlite://C:/Users/alice/test.db"
    );
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
}
