use crate::config::{DEFAULT_CONTROLLER_SUFFIX, DEFAULT_ROOT_MARKER, WAR_PACKAGING};
use crate::core::ConfigProvider;
use crate::domain::model::ConflictPolicy;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_excludes, validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Accepted `monitoring.log_format` values, matched case-insensitively.
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogInfo>,
    pub source: SourceConfig,
    pub filter: Option<FilterConfig>,
    pub output: OutputConfig,
    pub build: Option<BuildConfig>,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
    pub controller_suffix: Option<String>,
    pub discover_root: Option<bool>,
    pub root_marker: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    pub packaging: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_uri_conflict: Option<ConflictPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROJECT_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("restdoc")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn log_format(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_format.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format()
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.input_path", &self.source.input_path)?;
        validate_non_empty_string("source.controller_suffix", self.controller_suffix())?;
        if let Some(marker) = self.root_marker() {
            validate_non_empty_string("source.root_marker", marker)?;
        }
        validate_path("output.output_path", &self.output.output_path)?;
        validate_non_empty_string("build.packaging", self.packaging())?;
        validate_excludes("filter.excludes", self.excludes())?;

        if let Some(format) = self.log_format() {
            if !LOG_FORMATS.iter().any(|f| f.eq_ignore_ascii_case(format)) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        LOG_FORMATS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn controller_suffix(&self) -> &str {
        self.source
            .controller_suffix
            .as_deref()
            .unwrap_or(DEFAULT_CONTROLLER_SUFFIX)
    }

    fn root_marker(&self) -> Option<&str> {
        if !self.source.discover_root.unwrap_or(false) {
            return None;
        }
        Some(self.source.root_marker.as_deref().unwrap_or(DEFAULT_ROOT_MARKER))
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn excludes(&self) -> &[String] {
        self.filter
            .as_ref()
            .map(|f| f.excludes.as_slice())
            .unwrap_or(&[])
    }

    fn conflict_policy(&self) -> ConflictPolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_uri_conflict)
            .unwrap_or_default()
    }

    fn packaging(&self) -> &str {
        self.build
            .as_ref()
            .and_then(|b| b.packaging.as_deref())
            .unwrap_or(WAR_PACKAGING)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
