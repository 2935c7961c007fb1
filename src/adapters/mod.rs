// Adapters layer: concrete implementations of the domain ports.

pub mod json;
pub mod storage;

pub use json::{service_file, JsonControllerSource, JsonMarshaller, SERVICES_FILE};
pub use storage::{find_project_root, LocalStorage};
