use crate::domain::model::{ControllerSummary, Service, Services};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;

/// 依控制器型別把 Service 歸併成 ControllerSummary，並驗證整份目錄
pub fn summarize(services: Vec<Service>) -> Result<Services> {
    tracing::info!("📚 Processing services...");
    let mut catalog = Services::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for service in services {
        let type_name = service.controller.type_name.clone();
        match positions.get(&type_name).copied() {
            Some(position) => catalog.controllers[position].add_service(service),
            None => {
                let mut summary =
                    ControllerSummary::new(type_name.clone(), service.controller.javadoc.clone());
                summary.add_service(service);
                positions.insert(type_name, catalog.controllers.len());
                catalog.add_controller(summary);
            }
        }
    }

    catalog.validate()?;
    Ok(catalog)
}
