pub mod engine;
pub mod manifest;
pub mod pipeline;

pub use crate::domain::model::{AssemblyResult, ManifestSet, PackageMetadata};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
