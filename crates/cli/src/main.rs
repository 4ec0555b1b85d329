use clap::Parser;
use dashdns_domain::{CliOverrides, Config};
use dashdns_protocol::QueryHandler;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "dashdns")]
#[command(version)]
#[command(about = "Authoritative DNS responder for one dash-encoded IP zone")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone domain to answer for
    #[arg(short = 'z', long)]
    zone: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        domain: cli.zone,
        port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);

    info!("Starting dashdns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        zone = %config.zone.domain,
        nameservers = config.zone.nameservers.len(),
        "Authoritative zone loaded"
    );

    let handler = QueryHandler::new(Arc::new(config.zone.clone()));
    server::run_udp_server(&config.server.host, config.server.port, handler).await
}
