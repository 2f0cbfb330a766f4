use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{PkgError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pkgmeta")]
#[command(about = "Compute package distribution metadata from dependency manifests")]
pub struct CliConfig {
    /// Path to the package descriptor TOML
    #[arg(long, default_value = "package.toml")]
    pub descriptor: String,

    /// Path to the mandatory dependency manifest
    #[arg(long, default_value = "requirements.txt")]
    pub requirements: String,

    /// Path to the grouped optional dependency manifest
    #[arg(long, default_value = "optional-requirements.txt")]
    pub optional_requirements: String,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    /// Output formats to emit (json, toml)
    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn requirements_path(&self) -> &str {
        &self.requirements
    }

    fn optional_requirements_path(&self) -> &str {
        &self.optional_requirements
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("descriptor", &self.descriptor)?;
        validation::validate_path("requirements", &self.requirements)?;
        validation::validate_path("optional_requirements", &self.optional_requirements)?;
        validation::validate_path("output_path", &self.output_path)?;

        if self.output_formats.is_empty() {
            return Err(PkgError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: String::new(),
                reason: "At least one output format is required".to_string(),
            });
        }

        let valid_formats = ["json", "toml"];
        for format in &self.output_formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(PkgError::InvalidConfigValueError {
                    field: "output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            descriptor: "package.toml".to_string(),
            requirements: "requirements.txt".to_string(),
            optional_requirements: "optional-requirements.txt".to_string(),
            output_path: "./dist".to_string(),
            output_formats: vec!["json".to_string()],
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = base_config();
        config.output_formats = vec!["yaml".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_formats_rejected() {
        let mut config = base_config();
        config.output_formats = vec![];
        assert!(config.validate().is_err());
    }
}
