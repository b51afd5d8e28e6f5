use crate::adapters::linear::LinearModel;
use crate::adapters::tfidf::TfidfVectorizer;
use crate::domain::model::SentimentLabel;
use crate::domain::ports::{Storage, TextClassifier};
use crate::utils::error::{Result, SentimentError};

/// `TextClassifier` backed by an exported vectorizer + linear model pair.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
}

impl ArtifactClassifier {
    pub fn new(vectorizer: TfidfVectorizer, model: LinearModel) -> Result<Self> {
        if vectorizer.n_features() != model.n_features() {
            return Err(SentimentError::artifact(
                "model",
                format!(
                    "model expects {} features but the vectorizer produces {}",
                    model.n_features(),
                    vectorizer.n_features()
                ),
            ));
        }
        Ok(Self { vectorizer, model })
    }

    pub async fn load<S: Storage>(storage: &S, vectorizer_path: &str, model_path: &str) -> Result<Self> {
        tracing::info!("📦 Loading vectorizer from: {}", vectorizer_path);
        let vectorizer = TfidfVectorizer::from_json(&storage.read_file(vectorizer_path).await?)?;

        tracing::info!("📦 Loading model from: {}", model_path);
        let model = LinearModel::from_json(&storage.read_file(model_path).await?)?;

        let classifier = Self::new(vectorizer, model)?;
        tracing::debug!("Artifacts loaded ({} features)", classifier.n_features());
        Ok(classifier)
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features()
    }
}

impl TextClassifier for ArtifactClassifier {
    fn classify(&self, normalized: &str) -> Result<SentimentLabel> {
        let features = self.vectorizer.transform(normalized);
        let raw = self.model.predict(&features)?;
        Ok(SentimentLabel::from_raw(raw))
    }

    fn positive_probability(&self, normalized: &str) -> Result<Option<f64>> {
        self.classify_with_confidence(normalized)
            .map(|(_, probability)| probability)
    }

    fn classify_with_confidence(&self, normalized: &str) -> Result<(SentimentLabel, Option<f64>)> {
        let features = self.vectorizer.transform(normalized);
        let (raw, positive) = self.model.predict_with_probability(&features)?;
        Ok((SentimentLabel::from_raw(raw), Some(positive)))
    }
}
