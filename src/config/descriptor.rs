use crate::utils::error::{PkgError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 套件描述檔：取代原本寫死在打包腳本裡的常數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub package: PackageSection,
    #[serde(default)]
    pub classifiers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,
    pub version: String,
    pub description: String,
    pub repository: Option<String>,
    pub homepage: Option<String>,
}

impl PackageDescriptor {
    /// 從 TOML 檔案載入套件描述
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PkgError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析套件描述
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PkgError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PKG_VERSION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證描述檔的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("package.name", &self.package.name)?;
        validation::validate_non_empty_string("package.version", &self.package.version)?;
        validation::validate_non_empty_string("package.description", &self.package.description)?;

        if let Some(repository) = &self.package.repository {
            validation::validate_url("package.repository", repository)?;
        }

        if let Some(homepage) = &self.package.homepage {
            validation::validate_url("package.homepage", homepage)?;
        }

        for classifier in &self.classifiers {
            validation::validate_non_empty_string("classifiers", classifier)?;
        }

        Ok(())
    }
}

impl Validate for PackageDescriptor {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
