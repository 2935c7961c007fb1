pub mod etl;
pub mod filter;
pub mod grouping;
pub mod ingest;
pub mod summary;
pub mod synthesis;

pub use crate::domain::model::{Controller, ControllerSummary, Method, Service, Services, Uri};
pub use crate::domain::ports::{ConfigProvider, ControllerSource, Marshaller, Pipeline, Storage};
pub use crate::utils::error::Result;
