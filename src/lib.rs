pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::PackageDescriptor;
pub use core::{engine::MetadataEngine, pipeline::ManifestPipeline};
pub use domain::model::PackageMetadata;
pub use utils::error::{PkgError, Result};
