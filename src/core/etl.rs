use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting flatten run");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} venue records", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Flattened {} rows (city: {})",
            result.rows.len(),
            result.city
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
