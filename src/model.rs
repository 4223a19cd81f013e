//! Frequency models and their lazy, once-published cache.

use std::collections::HashMap;

use ahash::AHashMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lang::{Language, ALL_LANGUAGES};
use crate::ngram::NgramOrder;
use crate::store::{ModelError, ModelStore};

/// Serialized shape of one model resource.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ModelFile {
    pub language: String,
    pub ngrams: HashMap<String, f64>,
}

/// Immutable mapping from n-gram text to its relative frequency in (0, 1].
///
/// Absent keys mean the n-gram was unseen in training. Read-only once
/// decoded and safe to share across concurrent detection calls.
#[derive(Debug)]
pub struct NgramModel {
    ngrams: AHashMap<String, f64>,
}

impl NgramModel {
    /// Decodes and validates one store resource. Every key must have the
    /// resource's order and every frequency must lie in (0, 1].
    pub fn decode(iso_code: &str, order: NgramOrder, bytes: &[u8]) -> Result<Self, ModelError> {
        let file: ModelFile =
            serde_json::from_slice(bytes).map_err(|source| ModelError::Decode {
                iso_code: iso_code.to_owned(),
                order: order.name(),
                source,
            })?;
        if file.language != iso_code {
            return Err(ModelError::LanguageMismatch {
                iso_code: iso_code.to_owned(),
                declared: file.language,
            });
        }
        let mut ngrams = AHashMap::with_capacity(file.ngrams.len());
        for (ngram, frequency) in file.ngrams {
            if ngram.chars().count() != order.len() {
                return Err(ModelError::WrongOrder {
                    iso_code: iso_code.to_owned(),
                    order: order.name(),
                    ngram,
                });
            }
            if !(frequency > 0.0 && frequency <= 1.0) {
                return Err(ModelError::InvalidFrequency {
                    iso_code: iso_code.to_owned(),
                    ngram,
                    value: frequency,
                });
            }
            ngrams.insert(ngram, frequency);
        }
        Ok(NgramModel { ngrams })
    }

    /// Relative frequency of `ngram`, or `None` when unseen in training.
    #[inline]
    pub fn frequency(&self, ngram: &str) -> Option<f64> {
        self.ngrams.get(ngram).copied()
    }

    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }
}

/// Lazily populated model table: one cell per (language, order) pair.
///
/// Each cell is decoded at most once and published through a
/// [`OnceCell`], so concurrent detection calls on a shared detector
/// observe either nothing or the finished model, never a partial one.
pub struct ModelCache {
    store: Box<dyn ModelStore>,
    cells: Vec<OnceCell<NgramModel>>,
}

impl ModelCache {
    pub fn new(store: Box<dyn ModelStore>) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(ALL_LANGUAGES.len() * NgramOrder::ALL.len(), OnceCell::new);
        ModelCache { store, cells }
    }

    #[inline]
    fn cell(&self, lang: Language, order: NgramOrder) -> &OnceCell<NgramModel> {
        let index = lang as usize * NgramOrder::ALL.len() + order.index();
        &self.cells[index]
    }

    /// The model for `(lang, order)`, decoding it from the store on first
    /// access. A failed decode is fatal for this pair and is reported to
    /// every caller that needs it.
    pub fn model(&self, lang: Language, order: NgramOrder) -> Result<&NgramModel, ModelError> {
        debug_assert!(lang != Language::Unknown);
        self.cell(lang, order).get_or_try_init(|| {
            let bytes = self.store.read(lang.iso_code(), order)?;
            let model = NgramModel::decode(lang.iso_code(), order, &bytes)?;
            debug!(
                language = lang.iso_code(),
                order = order.name(),
                entries = model.len(),
                "decoded n-gram model"
            );
            Ok(model)
        })
    }

    /// Frequency lookup dispatched on the n-gram's length.
    pub fn frequency(&self, lang: Language, ngram: &str) -> Result<Option<f64>, ModelError> {
        match NgramOrder::from_len(ngram.chars().count()) {
            Some(order) => Ok(self.model(lang, order)?.frequency(ngram)),
            None => Ok(None),
        }
    }

    /// Eagerly decodes all five orders for `lang`.
    pub fn preload(&self, lang: Language) -> Result<(), ModelError> {
        for order in NgramOrder::ALL {
            self.model(lang, order)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self.cells.iter().filter(|c| c.get().is_some()).count();
        f.debug_struct("ModelCache")
            .field("loaded", &loaded)
            .field("slots", &self.cells.len())
            .finish()
    }
}
