pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonControllerSource, JsonMarshaller, LocalStorage};
pub use app::pipelines::catalog_pipeline::{CatalogPipeline, LocalCatalogPipeline};
pub use core::etl::{BuildReport, CatalogEngine};
pub use domain::model::{ConflictPolicy, Controller, ControllerSummary, Method, Service, Services, Uri};
pub use utils::error::{CatalogError, Result};
