use crate::domain::model::{join_uris, Controller, ControllerSummary, Method, Service, Services};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Exclusion names are matched whole, so blank entries can never match anything.
pub fn validate_excludes(field_name: &str, excludes: &[String]) -> Result<()> {
    for exclude in excludes {
        validate_non_empty_string(field_name, exclude)?;
    }
    Ok(())
}

fn invalid(entity: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidModel {
        entity: entity.to_string(),
        reason: reason.into(),
    }
}

impl Validate for Method {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(
                "method",
                format!("method mapped to [{}] has no name", join_uris(&self.uris)),
            ));
        }
        Ok(())
    }
}

impl Validate for Controller {
    fn validate(&self) -> Result<()> {
        if self.type_name.trim().is_empty() {
            return Err(invalid("controller", "type name is empty"));
        }
        if self.javadoc.is_none() {
            return Err(invalid(
                "controller",
                format!("{} has no javadoc", self.type_name),
            ));
        }
        for method in &self.methods {
            method.validate()?;
        }
        Ok(())
    }
}

impl Validate for Service {
    fn validate(&self) -> Result<()> {
        let reject = |reason: String| CatalogError::InvalidService {
            identifier: self.identifier,
            reason,
        };

        if self.identifier == 0 {
            return Err(reject("identifiers start at 1".to_string()));
        }
        if self.uris.is_empty() {
            return Err(reject("no uris".to_string()));
        }
        if self.controller.methods.is_empty() {
            return Err(reject(format!(
                "no methods for [{}]",
                join_uris(&self.uris)
            )));
        }
        self.controller
            .validate()
            .map_err(|e| reject(e.to_string()))
    }
}

impl Validate for ControllerSummary {
    fn validate(&self) -> Result<()> {
        if self.type_name.trim().is_empty() {
            return Err(invalid("controller summary", "type name is empty"));
        }
        if self.services.is_empty() {
            return Err(invalid(
                "controller summary",
                format!("{} has no services", self.type_name),
            ));
        }
        for service in &self.services {
            service.validate()?;
            if service.controller.type_name != self.type_name {
                return Err(invalid(
                    "controller summary",
                    format!(
                        "service {} belongs to {}, not {}",
                        service.identifier, service.controller.type_name, self.type_name
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Validate for Services {
    fn validate(&self) -> Result<()> {
        let mut types = HashSet::new();
        let mut identifiers = HashSet::new();

        for summary in &self.controllers {
            summary
                .validate()
                .map_err(|e| CatalogError::InvalidCatalog {
                    reason: e.to_string(),
                })?;

            if !types.insert(summary.type_name.as_str()) {
                return Err(CatalogError::InvalidCatalog {
                    reason: format!("controller {} listed twice", summary.type_name),
                });
            }
            for service in &summary.services {
                if !identifiers.insert(service.identifier) {
                    return Err(CatalogError::InvalidCatalog {
                        reason: format!("service identifier {} reused", service.identifier),
                    });
                }
            }
        }
        Ok(())
    }
}
