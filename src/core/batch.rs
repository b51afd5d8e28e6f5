use crate::core::analyzer::SentimentAnalyzer;
use crate::domain::model::{Analysis, BatchResult, BatchRow, TweetRecord};
use crate::domain::ports::{Pipeline, Storage, TextClassifier};
use crate::utils::error::{Result, SentimentError};

/// Reads a CSV of tweets, classifies every row and writes a predictions CSV.
pub struct BatchPipeline<S: Storage, C: TextClassifier> {
    storage: S,
    analyzer: SentimentAnalyzer<C>,
    input_path: String,
    output_path: String,
    text_column: String,
}

impl<S: Storage, C: TextClassifier> BatchPipeline<S, C> {
    pub fn new(
        storage: S,
        analyzer: SentimentAnalyzer<C>,
        input_path: impl Into<String>,
        output_path: impl Into<String>,
        text_column: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            analyzer,
            input_path: input_path.into(),
            output_path: output_path.into(),
            text_column: text_column.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: TextClassifier> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TweetRecord>> {
        tracing::debug!("Reading tweets from: {}", self.input_path);
        let data = self.storage.read_file(&self.input_path).await?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_slice());

        let column = reader
            .headers()?
            .iter()
            .position(|header| header.trim() == self.text_column)
            .ok_or_else(|| SentimentError::ValidationError {
                message: format!(
                    "column '{}' not found in {}",
                    self.text_column, self.input_path
                ),
            })?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            records.push(TweetRecord {
                // 第 1 行是標題
                line: index + 2,
                text: row.get(column).unwrap_or_default().to_string(),
            });
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<TweetRecord>) -> Result<BatchResult> {
        let mut rows = Vec::with_capacity(records.len());
        let mut skipped_lines = Vec::new();

        for record in records {
            match self.analyzer.analyze(&record.text)? {
                Analysis::EmptyInput => {
                    tracing::warn!("🚫 Line {} is empty, skipping", record.line);
                    skipped_lines.push(record.line);
                }
                Analysis::Classified(prediction) => rows.push(BatchRow {
                    text: prediction.raw,
                    cleaned: prediction.cleaned,
                    label: prediction.label.as_raw(),
                    sentiment: prediction.label,
                    confidence: prediction.confidence,
                    analyzed_at: chrono::Utc::now(),
                }),
            }
        }

        Ok(BatchResult {
            rows,
            skipped_lines,
        })
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &result.rows {
            writer.serialize(row)?;
        }
        // 沒有資料列時仍輸出標題
        if result.rows.is_empty() {
            writer.write_record([
                "text",
                "cleaned",
                "label",
                "sentiment",
                "confidence",
                "analyzed_at",
            ])?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| SentimentError::IoError(e.into_error()))?;

        tracing::debug!("Writing {} predictions ({} bytes)", result.rows.len(), data.len());
        self.storage.write_file(&self.output_path, &data).await?;
        Ok(self.output_path.clone())
    }
}
