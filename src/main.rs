use anyhow::{Context, Result};
use settle::{
    config::DemoConfig,
    observability::{init_logging, route_panics_to_tracing},
    scenarios,
};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if matches!(args.get(1).map(String::as_str), Some("--help" | "-h")) {
        print_help();
        return Ok(());
    }

    let config_path = args.get(1).map(PathBuf::from);

    let config = DemoConfig::load(config_path.as_deref())
        .await
        .context("Failed to load configuration")?;

    init_logging(&config.log_level)?;
    route_panics_to_tracing();

    info!("settle v{} - running scenarios", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config_path {
        info!("Configuration loaded from: {}", path.display());
    }

    for report in scenarios::run_all().await? {
        let line = if config.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{}", line);
    }

    Ok(())
}

fn print_help() {
    println!("settle v{} - Outcome wrapper scenarios", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("  settle [CONFIG_FILE]    Run every scenario and print its outcome as JSON");
    println!("  settle --help           Show this help");
    println!();
    println!("CONFIG (JSON, all fields optional):");
    println!("  {{ \"log_level\": \"warn\", \"pretty\": false }}");
}
