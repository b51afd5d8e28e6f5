use crate::domain::model::{BatchSummary, SentimentLabel};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        let started = Instant::now();
        tracing::info!("🚀 Starting batch analysis");

        // Extract
        let records = self.pipeline.extract().await?;
        let total = records.len();
        tracing::info!("📥 Read {} tweets", total);

        // Transform
        let result = self.pipeline.transform(records).await?;
        let positive = result
            .rows
            .iter()
            .filter(|row| row.sentiment == SentimentLabel::Positive)
            .count();
        let negative = result.rows.len() - positive;
        let skipped = result.skipped_lines.len();
        tracing::info!(
            "🧠 Classified {} tweets ({} positive, {} negative, {} skipped)",
            result.rows.len(),
            positive,
            negative,
            skipped
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("📁 Predictions saved to: {} in {:?}", output_path, started.elapsed());

        Ok(BatchSummary {
            total,
            positive,
            negative,
            skipped,
            output_path,
        })
    }
}
