use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No controller documentation found under {location}. Is the javadoc collector configured correctly?")]
    NoControllerDocs { location: String },

    #[error("Service {identifier} is invalid: {reason}")]
    InvalidService { identifier: u32, reason: String },

    #[error("Services catalog is invalid: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Invalid {entity}: {reason}")]
    InvalidModel { entity: String, reason: String },

    #[error("URI group [{uris}] is mapped by both {first} and {second}")]
    UriConflict {
        uris: String,
        first: String,
        second: String,
    },

    #[error("Failed to marshal {destination}: {source_type}: {message}")]
    MarshalError {
        destination: String,
        source_type: String,
        message: String,
    },

    #[error("Failed to unmarshal {source_path}: {message}")]
    UnmarshalError { source_path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Build failed: {kind}: {message}")]
    BuildFailure { kind: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Validation,
    Persistence,
    Configuration,
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::NoControllerDocs { .. } => ErrorCategory::Precondition,
            CatalogError::InvalidService { .. }
            | CatalogError::InvalidCatalog { .. }
            | CatalogError::InvalidModel { .. }
            | CatalogError::UriConflict { .. } => ErrorCategory::Validation,
            CatalogError::MarshalError { .. }
            | CatalogError::UnmarshalError { .. }
            | CatalogError::IoError(_) => ErrorCategory::Persistence,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::BuildFailure { .. } => ErrorCategory::Unexpected,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Precondition | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Persistence | ErrorCategory::Unexpected => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Precondition => format!("Nothing to document: {}", self),
            ErrorCategory::Validation => format!("Documentation catalog rejected: {}", self),
            ErrorCategory::Persistence => format!("Could not write documentation: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Unexpected => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::NoControllerDocs { .. } => {
                "Run the javadoc collector first and check --input-path / --controller-suffix"
            }
            CatalogError::UriConflict { .. } => {
                "Map the route from a single controller, or set on_uri_conflict = \"last_wins\""
            }
            CatalogError::InvalidService { .. }
            | CatalogError::InvalidCatalog { .. }
            | CatalogError::InvalidModel { .. } => {
                "Check that every controller has a type and javadoc and every routed method has a name"
            }
            CatalogError::MarshalError { .. } | CatalogError::IoError(_) => {
                "Check that the output directory is writable"
            }
            CatalogError::UnmarshalError { .. } => {
                "Regenerate the controller records; the file is not valid JSON for this schema"
            }
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => "Fix the configuration and run again",
            CatalogError::BuildFailure { .. } => "Re-run with --verbose for details",
        }
    }

    /// Name of the variant, used as the error type in wrapped build failures.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NoControllerDocs { .. } => "NoControllerDocs",
            CatalogError::InvalidService { .. } => "InvalidService",
            CatalogError::InvalidCatalog { .. } => "InvalidCatalog",
            CatalogError::InvalidModel { .. } => "InvalidModel",
            CatalogError::UriConflict { .. } => "UriConflict",
            CatalogError::MarshalError { .. } => "MarshalError",
            CatalogError::UnmarshalError { .. } => "UnmarshalError",
            CatalogError::IoError(_) => "IoError",
            CatalogError::ConfigError { .. } => "ConfigError",
            CatalogError::ConfigValidationError { .. } => "ConfigValidationError",
            CatalogError::InvalidConfigValueError { .. } => "InvalidConfigValueError",
            CatalogError::BuildFailure { .. } => "BuildFailure",
        }
    }

    /// Wraps the error uniformly as `<kind>: <message>`. Already wrapped
    /// failures pass through unchanged.
    pub fn wrap_build_failure(self) -> Self {
        if let CatalogError::BuildFailure { .. } = self {
            return self;
        }
        CatalogError::BuildFailure {
            kind: self.kind().to_string(),
            message: self.to_string(),
        }
    }

    pub(crate) fn marshal<E: std::error::Error>(destination: &str, err: E) -> Self {
        CatalogError::MarshalError {
            destination: destination.to_string(),
            source_type: short_type_name::<E>().to_string(),
            message: err.to_string(),
        }
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_error_carries_source_type_name() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = CatalogError::marshal("service-1.json", io);

        assert_eq!(err.category(), ErrorCategory::Persistence);
        assert_eq!(
            err.to_string(),
            "Failed to marshal service-1.json: Error: read-only"
        );
    }

    #[test]
    fn test_wrap_build_failure_names_the_variant() {
        let inner = CatalogError::InvalidCatalog {
            reason: "empty".to_string(),
        };
        let wrapped = inner.wrap_build_failure();

        match &wrapped {
            CatalogError::BuildFailure { kind, message } => {
                assert_eq!(kind, "InvalidCatalog");
                assert_eq!(message, "Services catalog is invalid: empty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            wrapped.to_string(),
            "Build failed: InvalidCatalog: Services catalog is invalid: empty"
        );
        assert_eq!(wrapped.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_wrap_build_failure_keeps_persistence_kind() {
        let marshal = CatalogError::marshal(
            "services.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert!(marshal
            .wrap_build_failure()
            .to_string()
            .starts_with("Build failed: MarshalError: "));

        let conflict = CatalogError::UriConflict {
            uris: "/shared".to_string(),
            first: "A".to_string(),
            second: "B".to_string(),
        };
        let wrapped = conflict.wrap_build_failure().wrap_build_failure();
        assert!(matches!(
            wrapped,
            CatalogError::BuildFailure { ref kind, .. } if kind == "UriConflict"
        ));
    }

    #[test]
    fn test_precondition_is_high_severity() {
        let err = CatalogError::NoControllerDocs {
            location: "/tmp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
