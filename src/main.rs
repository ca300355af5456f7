use clap::Parser;
use riskdesk::cli::{sample_builder, Cli, Commands};
use riskdesk::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::parse(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    riskdesk::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Snapshot(args) => {
            tracing::debug!("Building portfolio snapshot");
            args.execute(&config).await?;
        }
        Commands::Submit(args) => {
            tracing::debug!(symbol = %args.symbol, "Submitting order ticket");
            args.execute(&config).await?;
        }
        Commands::Limits => {
            let builder = sample_builder(&config);
            let limits = builder.source().controls();
            println!("Risk controls:");
            println!("  Max leverage:  {}x", limits.max_leverage);
            println!(
                "  Max drawdown:  {}%",
                limits.max_drawdown * rust_decimal_macros::dec!(100)
            );
            println!("  Per-trade VaR: {}", limits.per_trade_var);
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
            println!(
                "  Snapshot: confidence={}, win_rate={}, win_loss_ratio={}",
                config.snapshot.confidence, config.snapshot.win_rate, config.snapshot.win_loss_ratio
            );
            println!(
                "  Controls: max_leverage={}, max_drawdown={}, per_trade_var={}",
                config.controls.max_leverage,
                config.controls.max_drawdown,
                config.controls.per_trade_var
            );
        }
    }

    Ok(())
}
