use crate::core::{Controller, ControllerSource, Marshaller, Service, Services, Storage};
use crate::utils::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const SERVICES_FILE: &str = "services.json";

pub fn service_file(identifier: u32) -> String {
    format!("service-{}.json", identifier)
}

/// 以 serde_json 寫入 / 讀回 Service 與目錄
#[derive(Debug, Clone)]
pub struct JsonMarshaller<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonMarshaller<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write_json<T: Serialize>(&self, value: &T, destination: &str) -> Result<()> {
        let data =
            serde_json::to_vec_pretty(value).map_err(|e| CatalogError::marshal(destination, e))?;
        self.storage
            .write_file(destination, &data)
            .map_err(|e| match e {
                CatalogError::IoError(io) => CatalogError::marshal(destination, io),
                other => other,
            })
    }

    fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let data = self.storage.read_file(path)?;
        serde_json::from_slice(&data).map_err(|e| CatalogError::UnmarshalError {
            source_path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn unmarshal_controller(&self, path: &str) -> Result<Controller> {
        self.read_json(path)
    }

    pub fn unmarshal_service(&self, path: &str) -> Result<Service> {
        self.read_json(path)
    }

    pub fn unmarshal_services(&self, path: &str) -> Result<Services> {
        self.read_json(path)
    }
}

impl<S: Storage> Marshaller for JsonMarshaller<S> {
    fn marshal_service(&self, service: &Service, destination: &str) -> Result<()> {
        tracing::debug!("Marshalling service {} to {}", service.identifier, destination);
        self.write_json(service, destination)
    }

    fn marshal_services(&self, services: &Services, destination: &str) -> Result<()> {
        tracing::debug!(
            "Marshalling {} controller summaries to {}",
            services.controllers.len(),
            destination
        );
        self.write_json(services, destination)
    }
}

/// Reads every `*<suffix>` controller record found under the storage root.
#[derive(Debug, Clone)]
pub struct JsonControllerSource<S: Storage> {
    reader: JsonMarshaller<S>,
    suffix: String,
}

impl<S: Storage> JsonControllerSource<S> {
    pub fn new(storage: S, suffix: impl Into<String>) -> Self {
        Self {
            reader: JsonMarshaller::new(storage),
            suffix: suffix.into(),
        }
    }
}

impl<S: Storage> ControllerSource for JsonControllerSource<S> {
    fn collect(&self) -> Result<Vec<Controller>> {
        let files = self.reader.storage().list_files(&self.suffix)?;
        let mut controllers = Vec::with_capacity(files.len());

        for file in files {
            let controller = self.reader.unmarshal_controller(&file)?;
            tracing::info!("📄 {} ({})", controller.type_name, file);
            for method in &controller.methods {
                tracing::debug!("    {}", method);
            }
            controllers.push(controller);
        }

        Ok(controllers)
    }

    fn location(&self) -> String {
        self.reader.storage().location()
    }
}
