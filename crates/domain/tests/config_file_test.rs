use dnsdig_domain::{CliOverrides, Config, ConfigError, UpstreamFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_file_round_trip() {
    let file = write_config(
        r#"
[server]
bind_address = "127.0.0.1"
web_port = 3000
cors_allowed_origins = ["https://tools.example.com"]

[upstream]
url = "https://dns.google/resolve"
format = "json"
timeout_ms = 2500
empty_answer_as_nodata = true

[logging]
level = "dnsdig_infrastructure=debug,info"
json = true
"#,
    );

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.web_port, 3000);
    assert_eq!(
        config.server.cors_allowed_origins,
        vec!["https://tools.example.com".to_string()]
    );
    assert_eq!(config.upstream.timeout_ms, 2500);
    assert!(config.upstream.empty_answer_as_nodata);
    assert!(config.logging.json);
}

#[test]
fn test_cli_overrides_apply_on_top_of_file() {
    let file = write_config("[upstream]\nformat = \"json\"\ntimeout_ms = 1000\n");

    let config = Config::load(
        file.path().to_str(),
        CliOverrides {
            upstream_format: Some(UpstreamFormat::Wire),
            upstream_url: Some("https://cloudflare-dns.com/dns-query".into()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.upstream.format, UpstreamFormat::Wire);
    assert_eq!(config.upstream.timeout_ms, 1000);
}

#[test]
fn test_malformed_file_names_the_path() {
    let file = write_config("[upstream\nurl = ");

    let error = Config::load(file.path().to_str(), CliOverrides::default()).unwrap_err();

    match &error {
        ConfigError::Parse { path, .. } => {
            assert_eq!(path, &file.path().display().to_string());
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
