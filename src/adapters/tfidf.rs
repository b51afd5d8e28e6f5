use crate::utils::error::{Result, SentimentError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

// Default token pattern of the vectorizer the artifacts are exported from.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

const ARTIFACT: &str = "vectorizer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// (feature index, weight), sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let artifact: TfidfArtifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        let n_features = artifact.idf.len();
        if artifact.vocabulary.len() != n_features {
            return Err(SentimentError::artifact(
                ARTIFACT,
                format!(
                    "vocabulary has {} terms but idf has {} weights",
                    artifact.vocabulary.len(),
                    n_features
                ),
            ));
        }

        if let Some((term, index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= n_features)
        {
            return Err(SentimentError::artifact(
                ARTIFACT,
                format!("term '{}' points at index {} (only {} features)", term, index, n_features),
            ));
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SentimentError::artifact(
                ARTIFACT,
                format!("invalid ngram_range [{}, {}]", min_n, max_n),
            ));
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
        })
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    fn terms<'a>(&self, text: &'a str) -> Vec<String> {
        let tokens: Vec<&'a str> = TOKEN_REGEX.find_iter(text).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (index, tf * self.idf[index])
            })
            .collect();
        vector.sort_by_key(|(index, _)| *index);

        let norm = match self.norm {
            Some(Norm::L2) => vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => vector.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if norm > 0.0 {
            for (_, weight) in vector.iter_mut() {
                *weight /= norm;
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(json: serde_json::Value) -> Result<TfidfVectorizer> {
        TfidfVectorizer::from_json(json.to_string().as_bytes())
    }

    #[test]
    fn test_unigrams_l2_normalized() {
        let v = vectorizer(serde_json::json!({
            "vocabulary": {"good": 0, "day": 1, "bad": 2},
            "idf": [1.0, 2.0, 1.5]
        }))
        .unwrap();

        let vector = v.transform("good good day unknown");
        // tf*idf = good 2.0, day 2.0 -> each 1/sqrt(2)
        assert_eq!(vector.len(), 2);
        assert_eq!(vector[0].0, 0);
        assert_eq!(vector[1].0, 1);
        assert!((vector[0].1 - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((vector[1].1 - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_single_char_tokens_are_ignored() {
        let v = vectorizer(serde_json::json!({
            "vocabulary": {"i": 0, "am": 1},
            "idf": [1.0, 1.0]
        }))
        .unwrap();

        assert_eq!(v.transform("i am"), vec![(1, 1.0)]);
    }

    #[test]
    fn test_bigrams_and_sublinear_tf_without_norm() {
        let v = vectorizer(serde_json::json!({
            "vocabulary": {"not": 0, "good": 1, "not good": 2},
            "idf": [1.0, 1.0, 3.0],
            "ngram_range": [1, 2],
            "sublinear_tf": true,
            "norm": null
        }))
        .unwrap();

        let vector = v.transform("not good not good");
        let expected_unigram = 1.0 + 2.0_f64.ln();
        assert_eq!(vector.len(), 3);
        assert!((vector[0].1 - expected_unigram).abs() < 1e-12);
        assert!((vector[1].1 - expected_unigram).abs() < 1e-12);
        assert!((vector[2].1 - 3.0 * expected_unigram).abs() < 1e-12);
    }

    #[test]
    fn test_empty_text_gives_empty_vector() {
        let v = vectorizer(serde_json::json!({
            "vocabulary": {"good": 0},
            "idf": [1.0]
        }))
        .unwrap();

        assert!(v.transform("").is_empty());
    }

    #[test]
    fn test_rejects_inconsistent_artifacts() {
        assert!(vectorizer(serde_json::json!({
            "vocabulary": {"good": 0, "bad": 1},
            "idf": [1.0]
        }))
        .is_err());

        assert!(vectorizer(serde_json::json!({
            "vocabulary": {"good": 0, "bad": 5},
            "idf": [1.0, 1.0]
        }))
        .is_err());

        assert!(vectorizer(serde_json::json!({
            "vocabulary": {"good": 0},
            "idf": [1.0],
            "ngram_range": [2, 1]
        }))
        .is_err());
    }
}
