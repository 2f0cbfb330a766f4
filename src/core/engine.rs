use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MetadataEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MetadataEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting metadata assembly...");

        // Extract
        println!("Reading dependency manifests...");
        let manifests = self.pipeline.extract()?;

        // Transform
        println!("Computing package metadata...");
        let result = self.pipeline.transform(manifests)?;
        println!(
            "Computed {} extras groups and {} mandatory requirements",
            result.metadata.extras_require.len(),
            result.metadata.install_requires.len()
        );

        // Load
        println!("Writing metadata...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
