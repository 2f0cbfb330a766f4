//! Manifest format edge cases pinned through the full pipeline, so the
//! emitted metadata matches what existing manifests have always produced.

use pkgmeta::{
    CliConfig, LocalStorage, ManifestPipeline, MetadataEngine, PackageDescriptor, PackageMetadata,
};
use tempfile::TempDir;

const DESCRIPTOR: &str = r#"
[package]
name = "fixture"
version = "0.1.0"
description = "fixture package"
"#;

fn assemble(optional: &str, requirements: &str) -> PackageMetadata {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::write(root.join("package.toml"), DESCRIPTOR).unwrap();
    std::fs::write(root.join("requirements.txt"), requirements).unwrap();
    std::fs::write(root.join("optional-requirements.txt"), optional).unwrap();

    let config = CliConfig {
        descriptor: root.join("package.toml").to_str().unwrap().to_string(),
        requirements: root.join("requirements.txt").to_str().unwrap().to_string(),
        optional_requirements: root
            .join("optional-requirements.txt")
            .to_str()
            .unwrap()
            .to_string(),
        output_path: root.join("dist").to_str().unwrap().to_string(),
        output_formats: vec!["json".to_string()],
        verbose: false,
    };

    let descriptor = PackageDescriptor::from_file(&config.descriptor).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ManifestPipeline::new(storage, config, descriptor);
    let output_file = MetadataEngine::new(pipeline).run().unwrap();

    let json_content = std::fs::read_to_string(output_file).unwrap();
    serde_json::from_str(&json_content).unwrap()
}

#[test]
fn headerless_optional_manifest_yields_only_the_empty_all_group() {
    let metadata = assemble("numpy\nfastapi\n", "uvicorn\n");

    assert_eq!(metadata.extras_require.len(), 1);
    assert!(metadata.extras_require["all"].is_empty());
}

#[test]
fn specifiers_before_the_first_header_are_dropped() {
    let metadata = assemble("stray\n#/gpu\ntorch\n", "");

    assert_eq!(metadata.extras_require["gpu"], vec!["torch"]);
    assert!(!metadata.extras_require["all"].contains(&"stray".to_string()));
}

#[test]
fn blank_line_handling_differs_between_the_two_manifests() {
    let metadata = assemble("#/api\nfastapi\n\nuvicorn\n", "a\n\n# c\nb\n");

    // Optional parser skips blanks entirely.
    assert_eq!(metadata.extras_require["api"], vec!["fastapi", "uvicorn"]);

    // Mandatory parser keeps the blank as an empty entry.
    assert_eq!(metadata.install_requires, vec!["a", "", "b"]);
}

#[test]
fn explicit_all_group_is_replaced_by_the_union() {
    let metadata = assemble("#/all\ncustom-dep\n#/gpu\ntorch\n", "");

    // Members of a hand-written `all` group still feed the union, but the
    // group itself is recomputed.
    assert_eq!(metadata.extras_require["all"], vec!["custom-dep", "torch"]);
    assert_eq!(metadata.extras_require["gpu"], vec!["torch"]);
}

#[test]
fn malformed_specifiers_pass_through_uninterpreted() {
    let metadata = assemble(
        "#/broken\nnot a valid specifier !!\n",
        ">= this is nonsense\n",
    );

    assert_eq!(
        metadata.extras_require["broken"],
        vec!["not a valid specifier !!"]
    );
    assert_eq!(metadata.install_requires, vec![">= this is nonsense"]);
}
