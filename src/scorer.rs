//! Probabilistic layer scoring: summed log-likelihoods with back-off.

use ahash::{AHashMap, AHashSet};
use tracing::trace;

use crate::lang::{Language, LanguageSet};
use crate::model::ModelCache;
use crate::ngram::Ngram;
use crate::store::ModelError;

/// Scores one n-gram order for every candidate.
///
/// Per candidate and test n-gram, the back-off sequence is walked from the
/// full length down to the unigram; the first frequency hit contributes its
/// natural log and ends the walk. An n-gram unseen at every order
/// contributes nothing.
///
/// Returns `None` when any candidate ends the layer at exactly 0.0 — a
/// candidate without a single hit would otherwise poison the argmax, so the
/// whole order is discarded. The check covers the current candidates only.
pub(crate) fn score_layer(
    candidates: LanguageSet,
    test_ngrams: &AHashSet<Ngram>,
    models: &ModelCache,
) -> Result<Option<AHashMap<Language, f64>>, ModelError> {
    let mut scores = AHashMap::with_capacity(candidates.len());
    for language in candidates {
        let mut sum = 0.0f64;
        for ngram in test_ngrams {
            for shorter in ngram.back_off() {
                if let Some(frequency) = models.frequency(language, shorter)? {
                    sum += frequency.ln();
                    break;
                }
            }
        }
        scores.insert(language, sum);
    }
    if scores.values().any(|&sum| sum == 0.0) {
        trace!(candidates = scores.len(), "layer without full evidence discarded");
        return Ok(None);
    }
    Ok(Some(scores))
}
