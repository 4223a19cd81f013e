#![forbid(unsafe_code)]

//! Natural language detection from character n-gram statistics.
//!
//! The pipeline layers cheap rule filters — script classification and
//! distinctive characters — over a probabilistic scorer that sums
//! log-likelihoods of the text's n-grams (orders 1..=5, with back-off)
//! under precomputed per-language frequency models.
//!
//! ```no_run
//! use glotta::{Detector, DirModelStore, Language};
//!
//! # fn main() -> Result<(), glotta::DetectError> {
//! let detector = Detector::builder()
//!     .languages(&[Language::English, Language::German, Language::Russian])
//!     .store(DirModelStore::new("models"))
//!     .build()?;
//!
//! assert_eq!(detector.detect("языки интересны")?, Language::Russian);
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod extract;
pub mod lang;
pub mod model;
pub mod ngram;
pub mod store;

pub use detector::{DetectError, Detector, DetectorBuilder};
pub use lang::{Language, LanguageSet, Script, ALL_LANGUAGES};
pub use model::NgramModel;
pub use ngram::{InvalidNgram, Ngram, NgramOrder};
pub use store::{DirModelStore, MemoryModelStore, ModelError, ModelStore};

// Internal only
mod rules;
mod scorer;
mod script;
