#[cfg(feature = "cli")]
pub mod cli;
pub mod descriptor;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use descriptor::PackageDescriptor;
