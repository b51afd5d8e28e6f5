#![allow(dead_code)]

use std::path::Path;

pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const MODEL_FILE: &str = "sentiment_model.json";

pub fn vectorizer_json() -> serde_json::Value {
    serde_json::json!({
        "vocabulary": {
            "love": 0, "great": 1, "happy": 2, "best": 3,
            "hate": 4, "awful": 5, "sad": 6, "worst": 7,
            "not good": 8, "good": 9, "not": 10
        },
        "idf": [1.4, 1.6, 1.5, 1.7, 1.4, 1.9, 1.6, 1.8, 2.3, 1.2, 1.1],
        "ngram_range": [1, 2],
        "sublinear_tf": false,
        "norm": "l2"
    })
}

pub fn model_json() -> serde_json::Value {
    serde_json::json!({
        "coef": [2.4, 2.0, 1.9, 2.2, -2.6, -2.9, -2.1, -2.5, -3.5, 1.5, -0.4],
        "intercept": 0.1,
        "classes": [0, 1]
    })
}

pub fn write_artifacts(dir: &Path) {
    std::fs::write(dir.join(VECTORIZER_FILE), vectorizer_json().to_string()).unwrap();
    std::fs::write(dir.join(MODEL_FILE), model_json().to_string()).unwrap();
}
