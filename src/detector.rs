//! Detector: public entry points composing rules, extraction, and scoring.

use ahash::AHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::extract;
use crate::lang::{Language, LanguageSet};
use crate::model::ModelCache;
use crate::ngram::NgramOrder;
use crate::rules;
use crate::scorer;
use crate::store::{ModelError, ModelStore};

#[derive(Debug, Error)]
pub enum DetectError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("a model store is required to build a detector")]
    MissingStore,
}

/// Language detector over a fixed set of enabled languages.
///
/// Detection calls take `&self` and keep all per-call state on the call
/// frame, so a shared detector supports concurrent calls; enabling or
/// disabling languages needs `&mut self` and is therefore writer-exclusive
/// by construction.
pub struct Detector {
    enabled: LanguageSet,
    models: ModelCache,
    preload: bool,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    /// The currently enabled languages, in ordinal order.
    pub fn enabled_languages(&self) -> Vec<Language> {
        self.enabled.iter().collect()
    }

    /// Enables a language for subsequent detections. Under the eager cache
    /// policy its five models are decoded immediately.
    pub fn add_language(&mut self, language: Language) -> Result<(), DetectError> {
        self.enabled.insert(language);
        if self.preload && language != Language::Unknown {
            self.models.preload(language)?;
        }
        Ok(())
    }

    /// Disables a language. Already-decoded models stay cached for the
    /// detector's lifetime.
    pub fn remove_language(&mut self, language: Language) {
        self.enabled.remove(language);
    }

    /// Identifies the language of `text`, or [`Language::Unknown`] when no
    /// decision can be made.
    pub fn detect(&self, text: &str) -> Result<Language, DetectError> {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() || !normalized.chars().any(char::is_alphabetic) {
            return Ok(Language::Unknown);
        }

        // Word split keys off the *original* text: without an ASCII space
        // the whole normalized text is treated as a single word.
        let words: SmallVec<[&str; 8]> = if text.contains(' ') {
            normalized.split(' ').collect()
        } else {
            SmallVec::from_slice(&[normalized.as_str()])
        };

        let by_rules = rules::detect_by_rules(&words);
        if by_rules != Language::Unknown && self.enabled.contains(by_rules) {
            trace!(language = by_rules.iso_code(), "rule short-circuit");
            return Ok(by_rules);
        }

        let mut candidates = self.enabled;
        rules::filter_by_rules(&words, &mut candidates);

        let char_count = normalized.chars().count();
        let mut layers = Vec::with_capacity(NgramOrder::ALL.len());
        for order in NgramOrder::ALL {
            if char_count < order.len() {
                continue;
            }
            let test_ngrams = extract::ngrams(&normalized, order);
            if let Some(layer) = scorer::score_layer(candidates, &test_ngrams, &self.models)? {
                layers.push(layer);
            }
        }

        Ok(most_likely(&layers, candidates))
    }

    /// Maps [`detect`](Self::detect) over a batch; calls are independent.
    pub fn detect_batch<I>(&self, texts: I) -> Result<Vec<Language>, DetectError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.detect(text.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("enabled", &self.enabled.len())
            .field("models", &self.models)
            .field("preload", &self.preload)
            .finish()
    }
}

/// Sums each candidate's accepted-layer log-likelihoods and takes the
/// argmax. Ties break toward the lower ordinal; a candidate whose total is
/// exactly 0.0 never wins, and no accepted layers at all means no decision.
fn most_likely(layers: &[AHashMap<Language, f64>], candidates: LanguageSet) -> Language {
    if layers.is_empty() {
        return Language::Unknown;
    }
    let mut best = Language::Unknown;
    let mut best_total = 0.0f64;
    for language in candidates {
        let total: f64 = layers.iter().filter_map(|layer| layer.get(&language)).sum();
        if total != 0.0 && (best == Language::Unknown || total > best_total) {
            best = language;
            best_total = total;
        }
    }
    best
}

/// Configures and builds a [`Detector`].
///
/// The cache policy flag chooses between decoding every enabled model at
/// build time (`preload(true)`) and decoding each model at its first use.
#[derive(Default)]
pub struct DetectorBuilder {
    languages: Option<LanguageSet>,
    store: Option<Box<dyn ModelStore>>,
    preload: bool,
}

impl DetectorBuilder {
    /// Enables exactly the given languages. `Unknown` entries are ignored.
    pub fn languages(mut self, languages: &[Language]) -> Self {
        self.languages = Some(LanguageSet::from_slice(languages));
        self
    }

    /// Enables every supported language (the default).
    pub fn all_languages(mut self) -> Self {
        self.languages = Some(LanguageSet::full());
        self
    }

    pub fn store(mut self, store: impl ModelStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Eagerly decode all models at build time instead of on first use.
    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn build(self) -> Result<Detector, DetectError> {
        let store = self.store.ok_or(DetectError::MissingStore)?;
        let detector = Detector {
            enabled: self.languages.unwrap_or_else(LanguageSet::full),
            models: ModelCache::new(store),
            preload: self.preload,
        };
        if detector.preload {
            for language in detector.enabled {
                detector.models.preload(language)?;
            }
        }
        Ok(detector)
    }
}
