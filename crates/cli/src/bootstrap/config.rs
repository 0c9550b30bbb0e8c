use dnsdig_domain::{CliOverrides, Config};
use tracing::info;

/// Load and validate. Runs before logging is up, so the summary is logged
/// separately by [`log_config`].
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        upstream = %config.upstream.url,
        format = %config.upstream.format,
        timeout_ms = config.upstream.timeout_ms,
        "Configuration loaded"
    );
}
