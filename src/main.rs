use clap::Parser;
use restdoc_catalog::utils::error::ErrorSeverity;
use restdoc_catalog::utils::{logger, validation::Validate};
use restdoc_catalog::{CatalogEngine, CliConfig, LocalCatalogPipeline};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting restdoc-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let outcome = LocalCatalogPipeline::local(config)
        .and_then(|pipeline| CatalogEngine::new_with_monitoring(pipeline, monitor_enabled).run());

    match outcome {
        Ok(Some(report)) => {
            tracing::info!(
                "✅ {} finished in {:?}: {} controllers, {} services",
                report.build_id,
                report.duration,
                report.controllers,
                report.services
            );
            println!("✅ Documentation catalog built ({} services)", report.services);
            println!("📁 Output saved to: {}", report.output_path);
        }
        Ok(None) => {
            println!("⏭️ Nothing to do for this packaging");
        }
        Err(e) => {
            tracing::error!(
                "❌ Documentation build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            eprintln!("❌ {}", e.wrap_build_failure());
            std::process::exit(exit_code);
        }
    }
}

