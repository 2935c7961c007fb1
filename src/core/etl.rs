use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// 一次建置的結果摘要
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub build_id: String,
    pub started_at: DateTime<Utc>,
    pub controllers: usize,
    pub services: usize,
    pub output_path: String,
    pub duration: Duration,
}

/// Drives a pipeline through INGEST, FILTER+GROUP+SYNTHESIZE and SUMMARIZE.
/// The first error ends the build.
pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Returns `None` when the pipeline declines to run for this module.
    pub fn run(&self) -> Result<Option<BuildReport>> {
        if !self.pipeline.should_execute() {
            tracing::info!("⏭️ Skipping documentation build for this module");
            return Ok(None);
        }

        let started_at = Utc::now();
        let build_id = format!("restdoc_{}", started_at.format("%Y%m%d_%H%M%S"));
        let start = Instant::now();
        tracing::info!("🚀 Starting documentation build {}", build_id);

        tracing::info!("📥 Collecting controller javadocs");
        let controllers = self.pipeline.extract()?;
        let controller_count = controllers.len();
        tracing::info!("📥 Collected {} controllers", controller_count);
        self.monitor.log_stage("Ingest");

        tracing::info!("🔄 Generating services");
        let services = self.pipeline.transform(controllers)?;
        let service_count = services.len();
        tracing::info!("🔄 Generated {} services", service_count);
        self.monitor.log_stage("Synthesize");

        let output_path = self.pipeline.load(services)?;
        tracing::info!("💾 Catalog saved to: {}", output_path);
        self.monitor.log_stage("Summarize");

        Ok(Some(BuildReport {
            build_id,
            started_at,
            controllers: controller_count,
            services: service_count,
            output_path,
            duration: start.elapsed(),
        }))
    }
}
