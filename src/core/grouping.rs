use crate::core::filter::exclude_method;
use crate::domain::model::{join_uris, ConflictPolicy, Controller, Method, Uri};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

/// 共用同一組（有序）URI 的方法，以及擁有它們的控制器
#[derive(Debug)]
pub struct UriGroup<'a> {
    pub controller: &'a Controller,
    pub uris: &'a [Uri],
    pub methods: Vec<&'a Method>,
}

/// Groups keyed by a method's full Uri list.
///
/// The key is the ordered list itself, so `[/a, /b]` and `[/b, /a]` are
/// different groups. Groups iterate in the order their key was first seen.
#[derive(Debug, Default)]
pub struct UriGroups<'a> {
    groups: Vec<UriGroup<'a>>,
    index: HashMap<&'a [Uri], usize>,
}

impl<'a> UriGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, uris: &[Uri]) -> Option<&UriGroup<'a>> {
        self.index.get(uris).map(|&position| &self.groups[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UriGroup<'a>> {
        self.groups.iter()
    }

    fn insert(
        &mut self,
        controller: &'a Controller,
        method: &'a Method,
        policy: ConflictPolicy,
    ) -> Result<()> {
        let uris = method.uris.as_slice();

        let Some(position) = self.index.get(uris).copied() else {
            self.index.insert(uris, self.groups.len());
            self.groups.push(UriGroup {
                controller,
                uris,
                methods: vec![method],
            });
            return Ok(());
        };

        let group = &mut self.groups[position];
        if group.controller.type_name != controller.type_name {
            match policy {
                ConflictPolicy::Error => {
                    return Err(CatalogError::UriConflict {
                        uris: join_uris(uris),
                        first: group.controller.type_name.clone(),
                        second: controller.type_name.clone(),
                    });
                }
                ConflictPolicy::LastWins => {
                    tracing::warn!(
                        "⚠️ [{}] also mapped by {}, replacing owner {}",
                        join_uris(uris),
                        controller.type_name,
                        group.controller.type_name
                    );
                    group.controller = controller;
                }
            }
        }
        group.methods.push(method);
        Ok(())
    }
}

impl<'a> IntoIterator for UriGroups<'a> {
    type Item = UriGroup<'a>;
    type IntoIter = std::vec::IntoIter<UriGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Collects every non-excluded, routed method of `controllers` into Uri groups.
pub fn group_by_uris<'a>(
    controllers: &'a [Controller],
    excludes: &[String],
    policy: ConflictPolicy,
) -> Result<UriGroups<'a>> {
    tracing::info!("🔎 Looking for mappings");
    let mut groups = UriGroups::new();

    for controller in controllers {
        tracing::info!("- Controller {}", controller.type_name);
        for method in &controller.methods {
            tracing::debug!("... for Method {}", method);

            if exclude_method(method, excludes) {
                tracing::debug!("⏭️ Excluded method {}", method.name);
                continue;
            }
            if method.uris.is_empty() {
                continue;
            }
            groups.insert(controller, method, policy)?;
        }
    }

    Ok(groups)
}
