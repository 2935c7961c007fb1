pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::ConflictPolicy;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_excludes, validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTROLLER_SUFFIX: &str = ".controller.json";
pub const DEFAULT_ROOT_MARKER: &str = "pom.xml";
pub const DEFAULT_OUTPUT_PATH: &str = "./restdoclet";
pub const WAR_PACKAGING: &str = "war";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "restdoc-catalog")]
#[command(about = "Builds a REST service catalog from controller javadoc records")]
pub struct CliConfig {
    #[arg(long, default_value = ".")]
    pub input_path: String,

    #[arg(long, default_value = DEFAULT_CONTROLLER_SUFFIX)]
    pub controller_suffix: String,

    #[arg(long, help = "Scan from the outermost ancestor that still contains --root-marker")]
    pub discover_root: bool,

    #[arg(long, default_value = DEFAULT_ROOT_MARKER)]
    pub root_marker: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', help = "Method names to leave out (case-insensitive)")]
    pub excludes: Vec<String>,

    #[arg(long, default_value = WAR_PACKAGING, help = "Packaging of the module; only war modules are documented")]
    pub packaging: String,

    #[arg(long, value_enum, default_value_t = ConflictPolicy::Error)]
    pub on_uri_conflict: ConflictPolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn controller_suffix(&self) -> &str {
        &self.controller_suffix
    }

    fn root_marker(&self) -> Option<&str> {
        self.discover_root.then_some(self.root_marker.as_str())
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn excludes(&self) -> &[String] {
        &self.excludes
    }

    fn conflict_policy(&self) -> ConflictPolicy {
        self.on_uri_conflict
    }

    fn packaging(&self) -> &str {
        &self.packaging
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("controller_suffix", &self.controller_suffix)?;
        if self.discover_root {
            validate_non_empty_string("root_marker", &self.root_marker)?;
        }
        validate_non_empty_string("packaging", &self.packaging)?;
        validate_excludes("excludes", &self.excludes)
    }
}
