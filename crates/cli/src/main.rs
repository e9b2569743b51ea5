use anyhow::Context;
use clap::Parser;
use tracing::info;
use vpncheck_api::AppState;
use vpncheck_domain::{CliOverrides, Config};

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "vpncheck")]
#[command(version)]
#[command(about = "Reports whether traffic leaves through a VPN by comparing DNS and public-IP views")]
struct Cli {
    /// Port number to bind to
    #[arg(short = 'p', long, default_value_t = 8080)]
    port: u16,

    /// DNS server IP address to use
    #[arg(short = 'd', long, default_value = "8.8.8.8")]
    dns: String,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS query timeout in milliseconds
    #[arg(long)]
    dns_timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_overrides(self) -> CliOverrides {
        CliOverrides {
            port: Some(self.port),
            bind_address: self.bind,
            dns_server: Some(self.dns),
            dns_timeout_ms: self.dns_timeout_ms,
            log_level: self.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(bootstrap::normalize_legacy_flags(std::env::args_os()));

    let config = Config::load(cli.into_overrides()).context("Invalid configuration")?;

    bootstrap::init_logging(&config.logging);

    info!("Starting vpncheck v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    let app_state = AppState {
        check_vpn: services.check_vpn,
    };

    let listen_addr = config.listen_addr()?;
    let listener = server::bind(listen_addr).await?;

    println!("Server listening on port {}", config.server.port);
    println!("DNS server set to {}", services.resolver_addr);

    server::start_web_server(listener, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
