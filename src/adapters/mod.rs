// Adapters layer: concrete implementations for external systems (artifacts, storage).

pub mod classifier;
pub mod linear;
pub mod storage;
pub mod tfidf;

pub use classifier::ArtifactClassifier;
pub use storage::{HttpStorage, LocalStorage};
