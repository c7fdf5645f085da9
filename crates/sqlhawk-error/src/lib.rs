use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for sqlhawk operations.
///
/// The parser crate keeps its own `LexError`/`ParseError` types close to the
/// code that raises them; consumers that need one error surface (the
/// classifier, the detector facade) fold those into this enum.
#[derive(Error, Debug)]
pub enum SqlhawkError {
    // === Lexical analysis ===
    /// No lexical rule matched the input at the given byte offset.
    #[error("no lexical rule matches input at byte offset {offset}")]
    Lex { offset: usize },

    /// Reserved: statement segmentation is total over its input today and
    /// raises no errors, but the taxonomy keeps the slot.
    #[error("statement segmentation failed: {detail}")]
    Segmentation { detail: String },

    // === Parsing ===
    /// A grammar expectation failed while parsing one statement.
    #[error("parse error at token {position} in {statement:?}: {detail}")]
    Parse {
        statement: String,
        position: usize,
        detail: String,
    },

    /// The statement's leading token does not start any supported statement.
    #[error("unsupported statement: {statement:?}")]
    UnsupportedStatement { statement: String },

    // === Classifier ===
    /// Classification was requested before any training sample was
    /// submitted.
    #[error("classifier has no training data")]
    UntrainedModel,

    /// The model file could not be decoded.
    #[error("malformed model file '{path}': {detail}")]
    MalformedModel { path: PathBuf, detail: String },

    // === I/O ===
    /// File I/O error (model persistence).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, SqlhawkError>;
