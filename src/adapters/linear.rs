use crate::adapters::tfidf::SparseVector;
use crate::utils::error::{Result, SentimentError};
use serde::Deserialize;

const ARTIFACT: &str = "model";

#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    pub coef: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

/// Binary linear model (logistic regression / linear SVM export).
#[derive(Debug, Clone)]
pub struct LinearModel {
    coef: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LinearModel {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let artifact: LinearArtifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self> {
        let classes: [i64; 2] = artifact.classes.as_slice().try_into().map_err(|_| {
            SentimentError::artifact(
                ARTIFACT,
                format!("expected 2 classes, found {}", artifact.classes.len()),
            )
        })?;

        if artifact.coef.iter().any(|c| !c.is_finite()) || !artifact.intercept.is_finite() {
            return Err(SentimentError::artifact(ARTIFACT, "weights must be finite numbers"));
        }

        Ok(Self {
            coef: artifact.coef,
            intercept: artifact.intercept,
            classes,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn decision_function(&self, features: &SparseVector) -> Result<f64> {
        let mut score = self.intercept;
        for &(index, weight) in features {
            let coef = self.coef.get(index).ok_or_else(|| SentimentError::ClassificationError {
                message: format!(
                    "feature index {} is outside the model's {} coefficients",
                    index,
                    self.coef.len()
                ),
            })?;
            score += coef * weight;
        }
        Ok(score)
    }

    fn class_for(&self, score: f64) -> i64 {
        if score > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }

    pub fn predict(&self, features: &SparseVector) -> Result<i64> {
        let score = self.decision_function(features)?;
        Ok(self.class_for(score))
    }

    /// Predicted class and the probability of raw label `1`, from one decision value.
    ///
    /// The sigmoid gives the probability of `classes[1]`; it is flipped when label `1`
    /// sits at `classes[0]`, and is `0.0` when neither class is `1`.
    pub fn predict_with_probability(&self, features: &SparseVector) -> Result<(i64, f64)> {
        let score = self.decision_function(features)?;
        let second = 1.0 / (1.0 + (-score).exp());
        let positive = if self.classes[1] == 1 {
            second
        } else if self.classes[0] == 1 {
            1.0 - second
        } else {
            0.0
        };
        Ok((self.class_for(score), positive))
    }
}
