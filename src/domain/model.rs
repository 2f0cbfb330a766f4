use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The flat metadata record handed to the downstream packaging step.
///
/// `extras_require` includes the synthesized `all` group. Field order keeps
/// the extras table last so the record also renders as valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub install_requires: Vec<String>,
    pub classifiers: Vec<String>,
    pub extras_require: BTreeMap<String, Vec<String>>,
}

/// Raw manifest text as read from disk, before any parsing.
#[derive(Debug, Clone)]
pub struct ManifestSet {
    pub requirements: String,
    pub optional_requirements: String,
}

#[derive(Debug, Clone)]
pub struct AssemblyResult {
    pub metadata: PackageMetadata,
    pub json_output: String,
    pub toml_output: String,
}
