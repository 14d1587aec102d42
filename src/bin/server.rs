//! Quotos web server binary.

use std::net::IpAddr;

use clap::Parser;
use miette::Result;
use quotos::api::{self, Config};

#[derive(Parser)]
#[command(name = "quotos-server")]
#[command(author, version, about = "Quotos web server", long_about = None)]
struct Cli {
    /// Host address to bind to (default: QUOTOS_HOST env or 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (default: QUOTOS_PORT env or 3000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    api::run(config).await?;
    Ok(())
}
