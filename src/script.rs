//! Unicode script classification for rule-based filtering.
//!
//! Membership is decided by code-point range tables covering the blocks the
//! supported languages actually write in. All predicates are
//! `#[inline(always)]` and resolve to a handful of compare instructions.

use crate::lang::Script;

/// Latin letters: Basic Latin, Latin-1 Supplement (minus the two arithmetic
/// signs), Extended-A/B, IPA extensions, and Latin Extended Additional —
/// the last one carries the Vietnamese tone-marked vowels.
#[inline(always)]
pub fn is_latin(c: char) -> bool {
    matches!(c as u32,
        0x0041..=0x005A |
        0x0061..=0x007A |
        0x00C0..=0x00D6 | // Latin-1 letters, excluding × (U+00D7)
        0x00D8..=0x00F6 | // and ÷ (U+00F7)
        0x00F8..=0x02AF |
        0x1E00..=0x1EFF
    )
}

/// Greek and Coptic block plus Greek Extended (polytonic).
#[inline(always)]
pub fn is_greek(c: char) -> bool {
    matches!(c as u32,
        0x0370..=0x03FF |
        0x1F00..=0x1FFF
    )
}

/// Cyrillic block plus Cyrillic Supplement.
#[inline(always)]
pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32,
        0x0400..=0x04FF |
        0x0500..=0x052F
    )
}

/// Arabic block, supplements, and presentation forms.
#[inline(always)]
pub fn is_arabic(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF |
        0x0750..=0x077F |
        0x08A0..=0x08FF |
        0xFB50..=0xFDFF |
        0xFE70..=0xFEFF
    )
}

#[inline(always)]
fn in_script(c: char, script: Script) -> bool {
    match script {
        Script::Latin => is_latin(c),
        Script::Greek => is_greek(c),
        Script::Cyrillic => is_cyrillic(c),
        Script::Arabic => is_arabic(c),
    }
}

/// Whether every letter of `word` belongs to `script`.
///
/// Code points outside Unicode category L (punctuation, digits, symbols)
/// are script-neutral: `¿cómo` counts as a Latin word, `мир.` as Cyrillic.
/// A word with no letter at all matches no script.
pub fn word_matches(word: &str, script: Script) -> bool {
    let mut saw_letter = false;
    for c in word.chars() {
        if in_script(c, script) {
            saw_letter = true;
        } else if c.is_alphabetic() {
            return false;
        }
    }
    saw_letter
}
