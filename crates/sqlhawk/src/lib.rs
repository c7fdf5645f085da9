//! Public API facade for sqlhawk.
//!
//! The analysis pipeline (tokenize → segment → parse) is re-exported for
//! callers that want tokens or ASTs directly; [`Detector`] wires the
//! pipeline to the classifier and exposes the three service operations:
//! submit a known-malicious sample, submit a known-benign sample, classify
//! an unknown sample. Transport and encoding stay the caller's concern.

use std::path::Path;

use tracing::debug;

pub use sqlhawk_ast as ast;
pub use sqlhawk_classifier::{extract_features, Label, NaiveBayes};
pub use sqlhawk_error::SqlhawkError;
pub use sqlhawk_parser::{
    parse_all, segment, tokenize, LexError, ParseError, ParseErrorKind, Parser, Statement, Token,
    TokenType,
};

/// Parse an input all the way to ASTs, folding the first per-statement
/// failure into the umbrella error type. Callers that want the surviving
/// statements alongside the failures use [`parse_all`] instead.
pub fn analyze(sql: &str) -> Result<Vec<ast::Statement>, SqlhawkError> {
    let (statements, errors) =
        parse_all(sql).map_err(|e| SqlhawkError::Lex { offset: e.offset })?;
    if let Some(e) = errors.into_iter().next() {
        return Err(match e.kind {
            ParseErrorKind::Unsupported => SqlhawkError::UnsupportedStatement {
                statement: e.statement,
            },
            _ => SqlhawkError::Parse {
                statement: e.statement,
                position: e.position,
                detail: e.message,
            },
        });
    }
    Ok(statements)
}

/// Classification result for one unknown sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub label: Label,
    /// Posterior probability that the sample is malicious, in `[0, 1]`.
    pub malicious_probability: f64,
}

/// A trainable SQL injection detector: the parser pipeline feeding a
/// Naive Bayes model.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    model: NaiveBayes,
}

impl Detector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Train on a sample known to be malicious.
    pub fn submit_malicious(&mut self, sql: &str) -> Result<(), SqlhawkError> {
        let features = extract_features(sql)?;
        self.model.train(&features, Label::Malicious);
        Ok(())
    }

    /// Train on a sample known to be benign.
    pub fn submit_benign(&mut self, sql: &str) -> Result<(), SqlhawkError> {
        let features = extract_features(sql)?;
        self.model.train(&features, Label::Benign);
        Ok(())
    }

    /// Classify an unknown sample against the trained model.
    pub fn classify(&self, sql: &str) -> Result<Verdict, SqlhawkError> {
        let features = extract_features(sql)?;
        let malicious_probability = self
            .model
            .predict_probability(&features)
            .ok_or(SqlhawkError::UntrainedModel)?;
        let label = if malicious_probability >= 0.5 {
            Label::Malicious
        } else {
            Label::Benign
        };
        debug!(
            label = label.as_str(),
            probability = malicious_probability,
            "classified sample"
        );
        Ok(Verdict {
            label,
            malicious_probability,
        })
    }

    /// Persist the trained model.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SqlhawkError> {
        self.model.save_to_file(path)
    }

    /// Restore a detector from a persisted model.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SqlhawkError> {
        Ok(Self {
            model: NaiveBayes::load_from_file(path)?,
        })
    }

    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.model.is_trained()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_before_training_is_an_error() {
        let detector = Detector::new();
        let err = detector.classify("SELECT 1").unwrap_err();
        assert!(matches!(err, SqlhawkError::UntrainedModel));
    }

    #[test]
    fn test_lex_failure_surfaces_through_the_facade() {
        let mut detector = Detector::new();
        let err = detector.submit_benign("SELECT §").unwrap_err();
        assert!(matches!(err, SqlhawkError::Lex { offset: 7 }));
    }

    #[test]
    fn test_analyze_maps_parse_failures() {
        let err = analyze("SELECT FROM;").unwrap_err();
        assert!(matches!(err, SqlhawkError::Parse { .. }));

        let err = analyze("WITH c AS (SELECT 1) SELECT * FROM c;").unwrap_err();
        assert!(matches!(err, SqlhawkError::UnsupportedStatement { .. }));

        let statements = analyze("SELECT 1; DELETE FROM t;").unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_reexported_pipeline_is_usable_directly() {
        let tokens = tokenize("SELECT id FROM t;").unwrap();
        let statements = segment(tokens);
        assert_eq!(statements.len(), 1);
        let ast = Parser::new(statements.into_iter().next().unwrap())
            .parse()
            .unwrap();
        assert!(matches!(ast, ast::Statement::Select(_)));
    }
}
