//! bank-server: hosts the bank service module over HTTP

mod config;
mod database;
mod logging;
mod server;

use bank_service::BankServiceModule;
use clap::Parser;
use config::AppConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(name = "bank-server", version, about = "Bank catalog REST service")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "BANK_SERVER_CONFIG")]
    config: Option<PathBuf>,

    /// Socket address to bind, overrides `server.bind`
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Print the effective configuration as YAML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref(), cli.bind)?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    let db = database::connect(&config.database).await?;
    let module = BankServiceModule::init(config.bank_service.clone(), db)?;
    module.migrate().await?;

    let router = server::build_router(&module)?;
    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;

    let cancel = CancellationToken::new();
    server::spawn_shutdown_listener(cancel.clone());
    server::serve(listener, router, cancel).await
}
