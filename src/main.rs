use anyhow::Result;
use clap::Parser;
use shopping_cart::{
    cli::{Args, CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // RUST_LOG wins over LOG_LEVEL; --verbose wins over both
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Config: successfully loaded for {} environment", config.environment);
    tracing::info!(
        "🛒 Shopping cart starting in {} environment (strict coupons: {})",
        config.environment,
        config.strict_coupons
    );

    let app = CliApp::new(config);
    app.run(args)?;

    tracing::info!("🛒 Shopping cart stopped");
    Ok(())
}
