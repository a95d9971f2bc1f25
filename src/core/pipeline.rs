use crate::core::flatten::{flatten_for_city, infer_city};
use crate::core::output::render_csv;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult, VenueRecord};
use crate::utils::error::Result;

pub struct FlattenPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FlattenPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FlattenPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<VenueRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading venue records from: {}", input_path);

        let raw = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", raw.len());

        // 整份文件必須是物件陣列，否則直接失敗
        let records: Vec<VenueRecord> = serde_json::from_slice(&raw)?;
        Ok(records)
    }

    async fn transform(&self, data: Vec<VenueRecord>) -> Result<TransformResult> {
        let source_id = self.config.input_path();
        let city = infer_city(source_id);
        tracing::debug!("Inferred city '{}' from '{}'", city, source_id);

        let rows = flatten_for_city(&data, city);
        let csv_output = render_csv(&rows)?;

        Ok(TransformResult {
            rows,
            city,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing {} rows ({} bytes) to storage",
            result.rows.len(),
            result.csv_output.len()
        );
        self.storage
            .write_file(&output_path, result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
