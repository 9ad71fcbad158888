use clap::Parser;
use shipping_checker::utils::{logger, validation::Validate};
use shipping_checker::{
    AvailabilityOrchestrator, CliConfig, ConfigProvider, HttpGeocodeClient, HttpRateClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shipping availability check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?;

    let geocode = HttpGeocodeClient::new(client.clone(), config.geocode_endpoint());
    let rates = HttpRateClient::new(
        client,
        config.rate_engine_endpoint(),
        config.cart_item(),
        config.cart_quantity(),
    );
    let orchestrator = AvailabilityOrchestrator::new(geocode, rates, config.restrictions());

    match orchestrator.check(&config.postal_code, &config.country).await {
        Ok(verdict) => {
            if verdict.can_ship {
                println!("✅ Great news! We do ship to your Zip Code!");
                for quote in &verdict.quotes {
                    match quote.cost {
                        Some(cost) => println!("  - {} (${:.2})", quote.label, cost),
                        None => println!("  - {}", quote.label),
                    }
                }
            } else {
                println!("❌ We are sorry. We currently don't serve your Zip Code.");
            }
            if let Some(disclosure) = &verdict.disclosure {
                println!("⚠️  {}", disclosure);
            }
        }
        Err(e) => {
            tracing::error!("❌ Availability check failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
