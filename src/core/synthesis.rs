use crate::core::grouping::{UriGroup, UriGroups};
use crate::domain::model::{join_uris, Service};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 將一個 URI 群組包裝成 Service，控制器只保留群組內的方法
pub fn build_service(identifier: u32, group: &UriGroup<'_>) -> Service {
    let controller = group
        .controller
        .narrowed(group.methods.iter().map(|&method| method.clone()));
    Service::new(identifier, group.uris.to_vec(), controller)
}

/// Turns every group into a validated Service numbered from 1, handing each
/// one to `persist` before the next group is processed.
pub fn synthesize_services<F>(groups: UriGroups<'_>, mut persist: F) -> Result<Vec<Service>>
where
    F: FnMut(&Service) -> Result<()>,
{
    tracing::info!("⚙️ Processing controllers...");
    let mut services = Vec::with_capacity(groups.len());
    let mut identifier: u32 = 1;

    for group in groups {
        tracing::info!(
            "Processing controllers for [{}], found controller {}",
            join_uris(group.uris),
            group.controller.type_name
        );
        tracing::debug!("Found {} methods", group.methods.len());

        let service = build_service(identifier, &group);
        service.validate()?;
        persist(&service)?;

        services.push(service);
        identifier += 1;
    }

    Ok(services)
}
