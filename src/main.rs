use anyhow::Context;
use clap::Parser;
use concesionario::utils::logger;
use concesionario::{dealership_inventory, CliConfig, InventoryReport};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting concesionario report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let inventory = dealership_inventory();
    let report = InventoryReport::build(&inventory);

    let stdout = std::io::stdout();
    if let Err(e) = report.write_to(&mut stdout.lock()) {
        tracing::error!("❌ Failed to print inventory report: {}", e);
        return Err(e).context("failed to write inventory report to stdout");
    }

    tracing::info!("✅ Report printed for {} vehicles", report.rows().len());
    Ok(())
}
