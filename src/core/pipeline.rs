use crate::config::descriptor::PackageDescriptor;
use crate::core::manifest::{self, ALL_GROUP};
use crate::core::{AssemblyResult, ConfigProvider, ManifestSet, PackageMetadata, Pipeline, Storage};
use crate::utils::error::{PkgError, Result};
use std::fs;

pub struct ManifestPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    descriptor: PackageDescriptor,
}

impl<S: Storage, C: ConfigProvider> ManifestPipeline<S, C> {
    pub fn new(storage: S, config: C, descriptor: PackageDescriptor) -> Self {
        Self {
            storage,
            config,
            descriptor,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ManifestPipeline<S, C> {
    fn extract(&self) -> Result<ManifestSet> {
        // 缺少清單檔案直接中止，不做重試或回退
        tracing::debug!(
            "Reading mandatory manifest: {}",
            self.config.requirements_path()
        );
        let requirements = fs::read_to_string(self.config.requirements_path())?;

        tracing::debug!(
            "Reading optional manifest: {}",
            self.config.optional_requirements_path()
        );
        let optional_requirements = fs::read_to_string(self.config.optional_requirements_path())?;

        Ok(ManifestSet {
            requirements,
            optional_requirements,
        })
    }

    fn transform(&self, manifests: ManifestSet) -> Result<AssemblyResult> {
        let mut extras = manifest::parse_extras(&manifests.optional_requirements);

        // The union is computed over every parsed group, then installed under
        // the reserved name. An explicit `#/all` group gets overwritten, but
        // its members still feed the union.
        let all = manifest::synthesize_all(&extras);
        extras.insert(ALL_GROUP.to_string(), all);

        let install_requires = manifest::parse_requirements(&manifests.requirements);

        tracing::debug!(
            "Parsed {} extras groups, {} mandatory requirements",
            extras.len(),
            install_requires.len()
        );

        let metadata = PackageMetadata {
            name: self.descriptor.package.name.clone(),
            version: self.descriptor.package.version.clone(),
            description: self.descriptor.package.description.clone(),
            install_requires,
            classifiers: self.descriptor.classifiers.clone(),
            extras_require: extras,
        };

        let json_output = serde_json::to_string_pretty(&metadata)?;
        let toml_output = toml::to_string_pretty(&metadata)?;

        Ok(AssemblyResult {
            metadata,
            json_output,
            toml_output,
        })
    }

    fn load(&self, result: AssemblyResult) -> Result<String> {
        let mut primary_output = None;

        for format in self.config.output_formats() {
            let (filename, body) = match format.as_str() {
                "json" => ("metadata.json", result.json_output.as_bytes()),
                "toml" => ("metadata.toml", result.toml_output.as_bytes()),
                other => {
                    return Err(PkgError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: json, toml".to_string(),
                    })
                }
            };

            tracing::debug!("Writing {}", filename);
            self.storage.write_file(filename, body)?;

            if primary_output.is_none() {
                primary_output = Some(format!("{}/{}", self.config.output_path(), filename));
            }
        }

        primary_output.ok_or_else(|| PkgError::InvalidConfigValueError {
            field: "output_formats".to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        })
    }
}
