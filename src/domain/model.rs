use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Positive,
}

impl SentimentLabel {
    /// Raw classifier output: only `1` counts as positive.
    pub fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_raw(self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::Positive => write!(f, "Positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub raw: String,
    pub cleaned: String,
    pub label: SentimentLabel,
    /// Probability of the positive class, when the classifier exposes one.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    EmptyInput,
    Classified(Prediction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Warning,
    Celebrate,
    Commiserate,
}

impl Analysis {
    pub fn reaction(&self) -> Reaction {
        match self {
            Self::EmptyInput => Reaction::Warning,
            Self::Classified(prediction) => match prediction.label {
                SentimentLabel::Positive => Reaction::Celebrate,
                SentimentLabel::Negative => Reaction::Commiserate,
            },
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::EmptyInput => None,
            Self::Classified(prediction) => Some(prediction),
        }
    }
}

/// One row of a batch input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub text: String,
    pub cleaned: String,
    pub label: u8,
    pub sentiment: SentimentLabel,
    pub confidence: Option<f64>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub rows: Vec<BatchRow>,
    pub skipped_lines: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub skipped: usize,
    pub output_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_is_positive() {
        assert_eq!(SentimentLabel::from_raw(1), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_raw(0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw(4), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw(-1), SentimentLabel::Negative);
    }

    #[test]
    fn test_reaction_routing() {
        assert_eq!(Analysis::EmptyInput.reaction(), Reaction::Warning);

        let positive = Analysis::Classified(Prediction {
            raw: "Great day!".to_string(),
            cleaned: "great day".to_string(),
            label: SentimentLabel::Positive,
            confidence: None,
        });
        assert_eq!(positive.reaction(), Reaction::Celebrate);

        let negative = Analysis::Classified(Prediction {
            raw: "awful".to_string(),
            cleaned: "awful".to_string(),
            label: SentimentLabel::Negative,
            confidence: Some(0.1),
        });
        assert_eq!(negative.reaction(), Reaction::Commiserate);
    }
}
