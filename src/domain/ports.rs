use crate::domain::model::{AssemblyResult, ManifestSet};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn requirements_path(&self) -> &str;
    fn optional_requirements_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}

pub trait Pipeline {
    fn extract(&self) -> Result<ManifestSet>;
    fn transform(&self, manifests: ManifestSet) -> Result<AssemblyResult>;
    fn load(&self, result: AssemblyResult) -> Result<String>;
}
