// Frequency-counting Naive Bayes over string feature maps, with Laplace
// smoothing. The model is a plain value: training mutates it, prediction
// reads it, and callers own the sharing story.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification outcome for a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Benign,
    Malicious,
}

impl Label {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Benign => "benign",
            Self::Malicious => "malicious",
        }
    }
}

/// Per-class observation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ClassCounts {
    benign: u64,
    malicious: u64,
}

impl ClassCounts {
    fn bump(&mut self, label: Label) {
        match label {
            Label::Benign => self.benign += 1,
            Label::Malicious => self.malicious += 1,
        }
    }

    fn get(self, label: Label) -> u64 {
        match label {
            Label::Benign => self.benign,
            Label::Malicious => self.malicious,
        }
    }
}

/// Naive Bayes classifier over feature maps.
///
/// Counters only; no feature weighting, no decay. The serialized form is
/// the full counter state, so persistence round-trips losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    /// Samples seen per class.
    class_counts: ClassCounts,
    /// feature name -> observed value -> per-class counts.
    feature_value_counts: HashMap<String, HashMap<String, ClassCounts>>,
    /// Total samples seen.
    total_samples: u64,
}

impl NaiveBayes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once at least one sample has been trained.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.total_samples > 0
    }

    /// Record one labeled sample.
    pub fn train(&mut self, features: &BTreeMap<String, String>, label: Label) {
        self.total_samples += 1;
        self.class_counts.bump(label);
        for (feature, value) in features {
            self.feature_value_counts
                .entry(feature.clone())
                .or_default()
                .entry(value.clone())
                .or_default()
                .bump(label);
        }
        debug!(
            label = label.as_str(),
            total = self.total_samples,
            "trained sample"
        );
    }

    /// Posterior probability that the sample is malicious, normalized over
    /// both classes. `None` before any training.
    #[must_use]
    pub fn predict_probability(&self, features: &BTreeMap<String, String>) -> Option<f64> {
        if !self.is_trained() {
            return None;
        }
        let malicious = self.class_likelihood(features, Label::Malicious);
        let benign = self.class_likelihood(features, Label::Benign);
        let total = malicious + benign;
        if total == 0.0 {
            // Both priors can only vanish with no samples, handled above.
            return Some(0.5);
        }
        Some(malicious / total)
    }

    /// Most probable label for the sample. `None` before any training.
    #[must_use]
    pub fn predict(&self, features: &BTreeMap<String, String>) -> Option<Label> {
        let p = self.predict_probability(features)?;
        Some(if p >= 0.5 {
            Label::Malicious
        } else {
            Label::Benign
        })
    }

    /// Prior times Laplace-smoothed per-feature likelihoods. Features or
    /// values never seen in training contribute nothing to either class.
    #[allow(clippy::cast_precision_loss)]
    fn class_likelihood(&self, features: &BTreeMap<String, String>, label: Label) -> f64 {
        let class_count = self.class_counts.get(label);
        let mut prob = class_count as f64 / self.total_samples as f64;
        for (feature, value) in features {
            let Some(values) = self.feature_value_counts.get(feature) else {
                continue;
            };
            let Some(counts) = values.get(value) else {
                continue;
            };
            let smoothed = (counts.get(label) + 1) as f64;
            prob *= smoothed / (class_count + values.len() as u64) as f64;
        }
        prob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_features;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_untrained_model_predicts_nothing() {
        let nb = NaiveBayes::new();
        assert!(!nb.is_trained());
        assert_eq!(nb.predict(&map(&[("a", "1")])), None);
        assert_eq!(nb.predict_probability(&map(&[("a", "1")])), None);
    }

    #[test]
    fn test_separable_features_classify_correctly() {
        let mut nb = NaiveBayes::new();
        for _ in 0..5 {
            nb.train(&map(&[("has_drop", "false")]), Label::Benign);
            nb.train(&map(&[("has_drop", "true")]), Label::Malicious);
        }
        assert_eq!(
            nb.predict(&map(&[("has_drop", "true")])),
            Some(Label::Malicious)
        );
        assert_eq!(
            nb.predict(&map(&[("has_drop", "false")])),
            Some(Label::Benign)
        );
    }

    #[test]
    fn test_probability_is_normalized() {
        let mut nb = NaiveBayes::new();
        nb.train(&map(&[("x", "1")]), Label::Benign);
        nb.train(&map(&[("x", "2")]), Label::Malicious);
        let p = nb.predict_probability(&map(&[("x", "2")])).unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert!(p > 0.5);
    }

    #[test]
    fn test_unseen_feature_values_are_skipped() {
        let mut nb = NaiveBayes::new();
        nb.train(&map(&[("x", "1")]), Label::Benign);
        nb.train(&map(&[("x", "2")]), Label::Malicious);
        // Value "3" was never observed: only the priors remain, which are
        // equal here.
        let p = nb.predict_probability(&map(&[("x", "3")])).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_end_to_end_with_extracted_features() {
        let mut nb = NaiveBayes::new();
        nb.train(
            &extract_features("SELECT name FROM users WHERE id = 1").unwrap(),
            Label::Benign,
        );
        nb.train(
            &extract_features("SELECT email FROM users WHERE org = 2").unwrap(),
            Label::Benign,
        );
        nb.train(&extract_features("DROP TABLE users").unwrap(), Label::Malicious);
        nb.train(
            &extract_features("SELECT * FROM users WHERE '1' = '1'").unwrap(),
            Label::Malicious,
        );

        let verdict = nb
            .predict(&extract_features("DROP TABLE accounts").unwrap())
            .unwrap();
        assert_eq!(verdict, Label::Malicious);

        let verdict = nb
            .predict(&extract_features("SELECT age FROM users WHERE id = 7").unwrap())
            .unwrap();
        assert_eq!(verdict, Label::Benign);
    }
}
