use crate::adapters::{
    find_project_root, service_file, JsonControllerSource, JsonMarshaller, LocalStorage,
    SERVICES_FILE,
};
use crate::config::WAR_PACKAGING;
use crate::core::grouping::group_by_uris;
use crate::core::ingest::dedupe_controllers;
use crate::core::summary::summarize;
use crate::core::synthesis::synthesize_services;
use crate::core::{ConfigProvider, Controller, ControllerSource, Marshaller, Pipeline, Service};
use crate::utils::error::{CatalogError, Result};
use std::path::Path;

pub struct CatalogPipeline<S: ControllerSource, M: Marshaller, C: ConfigProvider> {
    pub(crate) source: S,
    pub(crate) marshaller: M,
    pub(crate) config: C,
}

pub type LocalCatalogPipeline<C> =
    CatalogPipeline<JsonControllerSource<LocalStorage>, JsonMarshaller<LocalStorage>, C>;

impl<S: ControllerSource, M: Marshaller, C: ConfigProvider> CatalogPipeline<S, M, C> {
    pub fn new(source: S, marshaller: M, config: C) -> Self {
        Self {
            source,
            marshaller,
            config,
        }
    }

    /// 只做分組與合成，不寫入任何檔案；非 war 模組回傳 None
    pub fn plan(&self) -> Result<Option<Vec<Service>>> {
        if !self.should_execute() {
            return Ok(None);
        }
        let controllers = self.extract()?;
        let groups = group_by_uris(
            &controllers,
            self.config.excludes(),
            self.config.conflict_policy(),
        )?;
        synthesize_services(groups, |_| Ok(())).map(Some)
    }
}

impl<C: ConfigProvider> LocalCatalogPipeline<C> {
    /// Reads controller records from the filesystem and writes JSON next to them.
    pub fn local(config: C) -> Result<Self> {
        let input = Path::new(config.input_path());
        let scan_root = match config.root_marker() {
            Some(marker) => {
                let root = find_project_root(input, marker)?;
                tracing::info!("📂 Project root: {}", root.display());
                root
            }
            None => input.to_path_buf(),
        };

        let source = JsonControllerSource::new(
            LocalStorage::new(scan_root).skipping(config.output_path()),
            config.controller_suffix(),
        );
        let marshaller = JsonMarshaller::new(LocalStorage::new(config.output_path()));
        Ok(Self::new(source, marshaller, config))
    }
}

impl<S: ControllerSource, M: Marshaller, C: ConfigProvider> Pipeline for CatalogPipeline<S, M, C> {
    fn extract(&self) -> Result<Vec<Controller>> {
        let controllers = self.source.collect()?;
        if controllers.is_empty() {
            return Err(CatalogError::NoControllerDocs {
                location: self.source.location(),
            });
        }
        Ok(dedupe_controllers(controllers))
    }

    fn transform(&self, controllers: Vec<Controller>) -> Result<Vec<Service>> {
        let groups = group_by_uris(
            &controllers,
            self.config.excludes(),
            self.config.conflict_policy(),
        )?;
        synthesize_services(groups, |service| {
            self.marshaller
                .marshal_service(service, &service_file(service.identifier))
        })
    }

    fn load(&self, services: Vec<Service>) -> Result<String> {
        let catalog = summarize(services)?;

        tracing::info!("💾 Marshalling services...");
        self.marshaller.marshal_services(&catalog, SERVICES_FILE)?;

        Ok(Path::new(self.config.output_path())
            .join(SERVICES_FILE)
            .display()
            .to_string())
    }

    fn should_execute(&self) -> bool {
        let packaging = self.config.packaging();
        if !packaging.eq_ignore_ascii_case(WAR_PACKAGING) {
            tracing::info!("Packaging is '{}', not '{}'", packaging, WAR_PACKAGING);
            return false;
        }
        true
    }
}
