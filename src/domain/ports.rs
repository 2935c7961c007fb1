use crate::domain::model::{ConflictPolicy, Controller, Service, Services};
use crate::utils::error::Result;

/// 阻塞式檔案存取
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Relative paths of every file whose name ends with `suffix`.
    fn list_files(&self, suffix: &str) -> Result<Vec<String>>;
    /// Human readable location, used in log lines and errors.
    fn location(&self) -> String;
}

/// Supplies the controller records deposited by the javadoc collector.
pub trait ControllerSource {
    fn collect(&self) -> Result<Vec<Controller>>;
    fn location(&self) -> String;
}

/// 持久化邊界：寫入單一 Service 或整個目錄
pub trait Marshaller {
    fn marshal_service(&self, service: &Service, destination: &str) -> Result<()>;
    fn marshal_services(&self, services: &Services, destination: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn controller_suffix(&self) -> &str;
    /// When set, scanning starts at the outermost ancestor holding this file.
    fn root_marker(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn excludes(&self) -> &[String];
    fn conflict_policy(&self) -> ConflictPolicy;
    fn packaging(&self) -> &str;
}

pub trait Pipeline {
    /// INGEST: read and dedupe controller records.
    fn extract(&self) -> Result<Vec<Controller>>;
    /// FILTER + GROUP + SYNTHESIZE, persisting each service as it is built.
    fn transform(&self, controllers: Vec<Controller>) -> Result<Vec<Service>>;
    /// SUMMARIZE and persist the catalog; returns where it was written.
    fn load(&self, services: Vec<Service>) -> Result<String>;

    /// 根據設定決定是否執行
    fn should_execute(&self) -> bool {
        true
    }
}
