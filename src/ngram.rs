//! Character n-gram value type and its back-off sequence.

use thiserror::Error;

/// Maximum supported n-gram order.
pub const MAX_NGRAM_LENGTH: usize = 5;

/// Constructing an n-gram outside the supported 1..=5 character range is a
/// programmer error and fails fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("n-gram length must be between 1 and {MAX_NGRAM_LENGTH} characters, got {0}")]
pub struct InvalidNgram(pub usize);

/// One of the five supported n-gram orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NgramOrder {
    Unigram,
    Bigram,
    Trigram,
    Quadrigram,
    Fivegram,
}

impl NgramOrder {
    /// All orders, lowest first.
    pub const ALL: [NgramOrder; 5] = [
        NgramOrder::Unigram,
        NgramOrder::Bigram,
        NgramOrder::Trigram,
        NgramOrder::Quadrigram,
        NgramOrder::Fivegram,
    ];

    /// Number of characters in an n-gram of this order.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self as usize + 1
    }

    /// Resource name the model store is keyed by.
    pub const fn name(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigrams",
            NgramOrder::Bigram => "bigrams",
            NgramOrder::Trigram => "trigrams",
            NgramOrder::Quadrigram => "quadrigrams",
            NgramOrder::Fivegram => "fivegrams",
        }
    }

    pub fn from_len(len: usize) -> Option<NgramOrder> {
        match len {
            1 => Some(NgramOrder::Unigram),
            2 => Some(NgramOrder::Bigram),
            3 => Some(NgramOrder::Trigram),
            4 => Some(NgramOrder::Quadrigram),
            5 => Some(NgramOrder::Fivegram),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A contiguous sequence of 1 to 5 characters, case-folded by the caller.
///
/// Equality and hashing are by text; the order is implied by the character
/// count, which is validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ngram {
    text: String,
}

impl Ngram {
    /// Builds an n-gram, rejecting the zerogram and anything longer than
    /// five characters.
    pub fn new(text: impl Into<String>) -> Result<Ngram, InvalidNgram> {
        let text = text.into();
        let len = text.chars().count();
        if len == 0 || len > MAX_NGRAM_LENGTH {
            return Err(InvalidNgram(len));
        }
        Ok(Ngram { text })
    }

    /// Internal constructor for windows the extractor has already sized.
    pub(crate) fn from_chars(chars: &[char]) -> Ngram {
        debug_assert!(!chars.is_empty() && chars.len() <= MAX_NGRAM_LENGTH);
        Ngram {
            text: chars.iter().collect(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count, 1..=5.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    // Never true; present only for clippy::len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn order(&self) -> NgramOrder {
        // Length is validated on construction, so this cannot miss.
        NgramOrder::from_len(self.len()).unwrap_or(NgramOrder::Unigram)
    }

    /// The back-off sequence: the n-gram itself, then progressively shorter
    /// prefixes obtained by dropping the final character, down to length 1.
    ///
    /// `"abcd"` yields `"abcd"`, `"abc"`, `"ab"`, `"a"`. The truncation end
    /// is fixed; training uses the same convention.
    pub fn back_off(&self) -> BackOff<'_> {
        BackOff { rest: &self.text }
    }
}

impl std::fmt::Display for Ngram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Iterator over an n-gram's back-off sequence, highest order first.
pub struct BackOff<'a> {
    rest: &'a str,
}

impl<'a> Iterator for BackOff<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (last_start, _) = self.rest.char_indices().next_back()?;
        let current = self.rest;
        self.rest = &current[..last_start];
        Some(current)
    }
}

impl std::iter::FusedIterator for BackOff<'_> {}
