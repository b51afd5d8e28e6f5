use crate::core::text::{clean_text, is_blank};
use crate::domain::model::{Analysis, Prediction};
use crate::domain::ports::TextClassifier;
use crate::utils::error::Result;

pub struct SentimentAnalyzer<C: TextClassifier> {
    classifier: C,
}

impl<C: TextClassifier> SentimentAnalyzer<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// One "Analyze" press: blank input short-circuits before the classifier is touched.
    pub fn analyze(&self, raw: &str) -> Result<Analysis> {
        if is_blank(raw) {
            tracing::debug!("Blank input, skipping classification");
            return Ok(Analysis::EmptyInput);
        }

        let cleaned = clean_text(raw);
        tracing::debug!("Cleaned input: {:?}", cleaned);

        let (label, confidence) = self.classifier.classify_with_confidence(&cleaned)?;
        tracing::debug!("Predicted {} (confidence: {:?})", label, confidence);

        Ok(Analysis::Classified(Prediction {
            raw: raw.to_string(),
            cleaned,
            label,
            confidence,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Reaction, SentimentLabel};
    use crate::utils::error::SentimentError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FixedClassifier {
        label: SentimentLabel,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl FixedClassifier {
        fn new(label: SentimentLabel) -> Self {
            Self {
                label,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextClassifier for FixedClassifier {
        fn classify(&self, normalized: &str) -> Result<SentimentLabel> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(normalized.to_string());
            Ok(self.label)
        }
    }

    /// Only the combined path is usable.
    struct SinglePassClassifier {
        passes: AtomicUsize,
    }

    impl TextClassifier for SinglePassClassifier {
        fn classify(&self, _normalized: &str) -> Result<SentimentLabel> {
            Err(SentimentError::ClassificationError {
                message: "classify called separately".to_string(),
            })
        }

        fn classify_with_confidence(
            &self,
            _normalized: &str,
        ) -> Result<(SentimentLabel, Option<f64>)> {
            self.passes.fetch_add(1, Ordering::SeqCst);
            Ok((SentimentLabel::Positive, Some(0.75)))
        }
    }

    struct FailingClassifier;

    impl TextClassifier for FailingClassifier {
        fn classify(&self, _normalized: &str) -> Result<SentimentLabel> {
            Err(SentimentError::ClassificationError {
                message: "model unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_blank_input_never_reaches_classifier() {
        let analyzer = SentimentAnalyzer::new(FixedClassifier::new(SentimentLabel::Positive));

        for input in ["", "   ", "\n\t"] {
            assert_eq!(analyzer.analyze(input).unwrap(), Analysis::EmptyInput);
        }
        assert_eq!(analyzer.classifier().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_classifier_receives_cleaned_text() {
        let analyzer = SentimentAnalyzer::new(FixedClassifier::new(SentimentLabel::Positive));
        let analysis = analyzer.analyze("@bob Best. Day. EVER!! http://pic.me/1").unwrap();

        let prediction = analysis.prediction().unwrap();
        assert_eq!(prediction.cleaned, "best day ever");
        assert_eq!(prediction.raw, "@bob Best. Day. EVER!! http://pic.me/1");
        assert_eq!(
            *analyzer.classifier().seen.lock().unwrap(),
            vec!["best day ever".to_string()]
        );
    }

    #[test]
    fn test_fixed_label_routes_every_input() {
        let inputs = ["I hate mondays", "what a lovely day", "@only_a_mention", "..."];

        let positive = SentimentAnalyzer::new(FixedClassifier::new(SentimentLabel::Positive));
        let negative = SentimentAnalyzer::new(FixedClassifier::new(SentimentLabel::Negative));

        for input in inputs {
            assert_eq!(positive.analyze(input).unwrap().reaction(), Reaction::Celebrate);
            assert_eq!(negative.analyze(input).unwrap().reaction(), Reaction::Commiserate);
        }
        assert_eq!(positive.classifier().calls.load(Ordering::SeqCst), inputs.len());
    }

    #[test]
    fn test_label_and_confidence_come_from_one_pass() {
        let analyzer = SentimentAnalyzer::new(SinglePassClassifier {
            passes: AtomicUsize::new(0),
        });

        let prediction = analyzer.analyze("so good").unwrap().prediction().cloned().unwrap();
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert_eq!(prediction.confidence, Some(0.75));
        assert_eq!(analyzer.classifier().passes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_classifier_errors_propagate() {
        let analyzer = SentimentAnalyzer::new(FailingClassifier);
        let err = analyzer.analyze("anything").unwrap_err();
        assert!(matches!(err, SentimentError::ClassificationError { .. }));
        // 空輸入不應觸發錯誤
        assert!(analyzer.analyze(" ").is_ok());
    }
}
