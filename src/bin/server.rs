use clap::Parser;
use shipping_checker::server::{run_server, state::AppState};
use shipping_checker::utils::{logger, validation::Validate};
use shipping_checker::TomlConfig;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "shipping-checker-server")]
#[command(about = "HTTP service for postal-code shipping availability checks")]
struct ServerArgs {
    #[arg(long, default_value = "shipping-checker.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    logger::init_server_logger();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config '{}': {}", args.config, e);
            std::process::exit(2);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(2);
    }

    tracing::info!("Loaded configuration for '{}'", config.service.name);

    let state = Arc::new(AppState::from_config(&config, config.nonce_ttl())?);

    run_server(&config.service.bind_addr, state).await?;
    Ok(())
}
