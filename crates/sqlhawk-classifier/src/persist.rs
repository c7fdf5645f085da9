// Model persistence. The trained counter state serializes to JSON; the
// format is private to this crate and carries no versioning beyond the
// field names.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use sqlhawk_error::SqlhawkError;
use tracing::debug;

use crate::bayes::NaiveBayes;

impl NaiveBayes {
    /// Serialize the trained model to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SqlhawkError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self).map_err(|e| {
            SqlhawkError::MalformedModel {
                path: path.to_owned(),
                detail: e.to_string(),
            }
        })?;
        debug!(path = %path.display(), "saved model");
        Ok(())
    }

    /// Load a model previously written by [`NaiveBayes::save_to_file`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SqlhawkError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let model = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SqlhawkError::MalformedModel {
                path: path.to_owned(),
                detail: e.to_string(),
            }
        })?;
        debug!(path = %path.display(), "loaded model");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write;

    use crate::bayes::{Label, NaiveBayes};
    use sqlhawk_error::SqlhawkError;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut nb = NaiveBayes::new();
        nb.train(&map(&[("has_drop", "true")]), Label::Malicious);
        nb.train(&map(&[("has_drop", "false")]), Label::Benign);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        nb.save_to_file(&path).unwrap();

        let loaded = NaiveBayes::load_from_file(&path).unwrap();
        assert_eq!(loaded, nb);
        assert_eq!(
            loaded.predict(&map(&[("has_drop", "true")])),
            Some(Label::Malicious)
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NaiveBayes::load_from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SqlhawkError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_a_malformed_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"not json at all").unwrap();

        let err = NaiveBayes::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SqlhawkError::MalformedModel { .. }));
    }
}
