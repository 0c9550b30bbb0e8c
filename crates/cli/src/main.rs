//! # dnsdig
//!
//! Multi-record DNS lookups over DNS-over-HTTPS, as an HTTP API or a
//! one-shot command.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Args, Parser, Subcommand};
use dnsdig_domain::{CliOverrides, UpstreamFormat};
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsdig")]
#[command(version)]
#[command(about = "Look up A, AAAA, MX, NS, TXT, CAA and SOA records over DNS-over-HTTPS")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Defaults to `serve`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// DoH resolver endpoint
    #[arg(short = 'u', long, global = true)]
    upstream: Option<String>,

    /// Resolver wire format: json or wire
    #[arg(short = 'f', long, global = true)]
    format: Option<UpstreamFormat>,

    /// Per-query timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level or filter directive
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Web server port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Resolve one domain and print the JSON result
    Lookup {
        domain: String,

        /// Record type, or ALL
        #[arg(short = 't', long = "type")]
        record_type: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve {
        bind: None,
        port: None,
    });

    let (bind_address, web_port) = match &command {
        Command::Serve { bind, port } => (bind.clone(), *port),
        Command::Lookup { .. } => (None, None),
    };

    let overrides = CliOverrides {
        bind_address,
        web_port,
        upstream_url: cli.global.upstream,
        upstream_format: cli.global.format,
        timeout_ms: cli.global.timeout_ms,
        log_level: cli.global.log_level,
    };

    let config = bootstrap::load_config(cli.global.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.global.config.as_deref());

    let services = di::Services::build(&config)?;

    match command {
        Command::Serve { .. } => {
            let bind_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

            info!(version = env!("CARGO_PKG_VERSION"), "dnsdig starting");
            server::start_web_server(bind_addr, services.app_state(), &config.server).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup {
            domain,
            record_type,
            pretty,
        } => {
            commands::run_lookup(&services.lookup, &domain, record_type.as_deref(), pretty).await
        }
    }
}
