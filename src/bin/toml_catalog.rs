use anyhow::Context;
use clap::Parser;
use restdoc_catalog::config::toml_config::TomlConfig;
use restdoc_catalog::core::ConfigProvider;
use restdoc_catalog::domain::model::join_uris;
use restdoc_catalog::utils::{logger, validation::Validate};
use restdoc_catalog::{CatalogEngine, CatalogError, LocalCatalogPipeline};

#[derive(Parser)]
#[command(name = "toml-catalog")]
#[command(about = "Service catalog builder driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "restdoc.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Extra method names to exclude, on top of the config file
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Dry run - show the services that would be generated without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based catalog build");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if !args.exclude.is_empty() {
        config
            .filter
            .get_or_insert_with(Default::default)
            .excludes
            .extend(args.exclude.iter().cloned());
        tracing::info!("🔧 Extra excludes: {}", args.exclude.join(", "));
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("Invalid configuration");
    }

    display_config_summary(&config);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = LocalCatalogPipeline::local(config)?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let Some(planned) = pipeline.plan()? else {
            println!("⏭️ Nothing to do for this packaging");
            return Ok(());
        };
        for service in planned {
            println!(
                "service-{}: [{}] {} ({} methods)",
                service.identifier,
                join_uris(&service.uris),
                service.controller.type_name,
                service.controller.methods.len()
            );
        }
        return Ok(());
    }

    let engine = CatalogEngine::new_with_monitoring(pipeline, monitor_enabled);
    match engine.run().map_err(CatalogError::wrap_build_failure)? {
        Some(report) => {
            tracing::info!("✅ {} completed in {:?}", report.build_id, report.duration);
            println!(
                "✅ {} services from {} controllers",
                report.services, report.controllers
            );
            println!("📁 Output saved to: {}", report.output_path);
        }
        None => println!("⏭️ Nothing to do for this packaging"),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Catalog: {}", config.catalog_name());
    tracing::info!("  📥 Input: {} (*{})", config.input_path(), config.controller_suffix());
    if let Some(marker) = config.root_marker() {
        tracing::info!("  📂 Root discovery via {}", marker);
    }
    tracing::info!("  🚫 Excludes: {:?}", config.excludes());
    tracing::info!("  💾 Output: {}", config.output_path());
    tracing::info!("  ⚔️ URI conflicts: {:?}", config.conflict_policy());
}
