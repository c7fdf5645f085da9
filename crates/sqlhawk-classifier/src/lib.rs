//! Feature extraction and Naive Bayes classification over parsed SQL.
//!
//! This crate sits downstream of `sqlhawk-parser`: it reads token streams
//! and ASTs (never mutating them) and derives a string-keyed feature map,
//! which a frequency-counting Naive Bayes model turns into a
//! benign/malicious verdict.

pub mod bayes;
pub mod features;

mod persist;

pub use bayes::{Label, NaiveBayes};
pub use features::extract_features;
