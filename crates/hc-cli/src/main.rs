//! hc-interpret: interpret one home-control command against a hub inventory
//! and print the result as JSON.

use tracing_subscriber::EnvFilter;

use hc_cli::args::Args;
use hc_cli::config::CliConfig;
use hc_cli::inventory::Inventory;
use hc_cli::report::Report;
use hc_context::{ContextProcessor, DispatchOptions};
use hc_taxonomy::StaticCatalog;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let config = CliConfig::from_file(&args.config_path)?;
    tracing::info!(
        inventory = %config.inventory_path.display(),
        max_matches = config.processor.max_matches,
        "config loaded"
    );

    let inventory = Inventory::from_file(&config.inventory_path, &StaticCatalog)?;
    tracing::info!(
        devices = inventory.devices.len(),
        rooms = inventory.rooms.len(),
        "inventory loaded"
    );

    let processor = ContextProcessor::new(inventory.devices, inventory.rooms)
        .with_config(config.processor)?
        .with_dispatch_config(config.dispatch)?;

    let context = processor.process_context(&args.command);
    let options = DispatchOptions {
        force_device_id: args.force_device_id,
    };
    let plan = processor.plan_context(&context, &options);
    if let Err(e) = &plan {
        tracing::warn!(error = %e, "no control plan");
    }

    let report = Report::new(context, plan);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
