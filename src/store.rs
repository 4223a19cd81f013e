//! Model store: where per-(language, order) frequency resources come from.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelFile;
use crate::ngram::NgramOrder;

/// Failure to obtain or decode a frequency model. Fatal for the
/// (language, order) pair that needed it.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no model resource for language `{iso_code}` at order `{order}`")]
    Missing {
        iso_code: String,
        order: &'static str,
    },
    #[error("failed to read model resource for `{iso_code}` at order `{order}`")]
    Io {
        iso_code: String,
        order: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode model for `{iso_code}` at order `{order}`")]
    Decode {
        iso_code: String,
        order: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("model resource for `{iso_code}` declares language `{declared}`")]
    LanguageMismatch { iso_code: String, declared: String },
    #[error(
        "model for `{iso_code}` at order `{order}` contains `{ngram}` of a different length"
    )]
    WrongOrder {
        iso_code: String,
        order: &'static str,
        ngram: String,
    },
    #[error(
        "model for `{iso_code}` maps `{ngram}` to {value}, expected a relative frequency in (0, 1]"
    )]
    InvalidFrequency {
        iso_code: String,
        ngram: String,
        value: f64,
    },
}

/// Content resolver for serialized frequency models, keyed by ISO code and
/// order name (`unigrams` .. `fivegrams`). Implementations only hand back
/// bytes; decoding and validation happen in [`crate::model`].
pub trait ModelStore: Send + Sync {
    fn read(&self, iso_code: &str, order: NgramOrder) -> Result<Vec<u8>, ModelError>;
}

/// Reads models from `<root>/<iso_code>/<order>.json` on disk.
#[derive(Debug, Clone)]
pub struct DirModelStore {
    root: PathBuf,
}

impl DirModelStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirModelStore { root: root.into() }
    }
}

impl ModelStore for DirModelStore {
    fn read(&self, iso_code: &str, order: NgramOrder) -> Result<Vec<u8>, ModelError> {
        let path = self
            .root
            .join(iso_code)
            .join(format!("{}.json", order.name()));
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ModelError::Missing {
                    iso_code: iso_code.to_owned(),
                    order: order.name(),
                }
            } else {
                ModelError::Io {
                    iso_code: iso_code.to_owned(),
                    order: order.name(),
                    source,
                }
            }
        })
    }
}

/// In-memory store, mainly for tests and benchmarks.
#[derive(Debug, Default, Clone)]
pub struct MemoryModelStore {
    resources: HashMap<(String, NgramOrder), Vec<u8>>,
}

impl MemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers raw resource bytes for a (language, order) pair.
    pub fn with_bytes(
        mut self,
        iso_code: &str,
        order: NgramOrder,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.resources
            .insert((iso_code.to_owned(), order), bytes.into());
        self
    }

    /// Registers a model from plain (n-gram, frequency) entries, encoded in
    /// the store's JSON shape.
    pub fn with_model(
        self,
        iso_code: &str,
        order: NgramOrder,
        entries: &[(&str, f64)],
    ) -> Result<Self, serde_json::Error> {
        let file = ModelFile {
            language: iso_code.to_owned(),
            ngrams: entries
                .iter()
                .map(|&(ngram, freq)| (ngram.to_owned(), freq))
                .collect(),
        };
        let bytes = serde_json::to_vec(&file)?;
        Ok(self.with_bytes(iso_code, order, bytes))
    }
}

impl ModelStore for MemoryModelStore {
    fn read(&self, iso_code: &str, order: NgramOrder) -> Result<Vec<u8>, ModelError> {
        self.resources
            .get(&(iso_code.to_owned(), order))
            .cloned()
            .ok_or_else(|| ModelError::Missing {
                iso_code: iso_code.to_owned(),
                order: order.name(),
            })
    }
}
