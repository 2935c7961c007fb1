use crate::domain::model::Controller;
use std::collections::HashSet;

/// 依型別名稱去重，保留第一次出現的控制器
pub fn dedupe_controllers(controllers: Vec<Controller>) -> Vec<Controller> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(controllers.len());

    for controller in controllers {
        if seen.insert(controller.type_name.clone()) {
            kept.push(controller);
        } else {
            tracing::warn!("⚠️ Duplicate controller {} ignored", controller.type_name);
        }
    }

    kept
}
