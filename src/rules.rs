//! Rule-based classification: script short-circuits and candidate narrowing.

use tracing::trace;

use crate::lang::Language::{self, *};
use crate::lang::{LanguageSet, Script};
use crate::script::word_matches;

/// Characters that decide a language on their own. Scanned in definition
/// order; the first entry hit by any character of the word wins.
static SINGLE_LANGUAGE_CHARS: &[(&str, Language)] = &[
    ("Ëë", Albanian),
    ("Ïï", Catalan),
    ("ĚěŘřŮů", Czech),
    ("ß", German),
    ("ŐőŰű", Hungarian),
    ("ĀāĒēĢģĪīĶķĻļŅņ", Latvian),
    ("ĖėĮįŲų", Lithuanian),
    ("ŁłŃńŚśŹź", Polish),
    ("Țţ", Romanian),
    ("ĹĺĽľŔŕ", Slovak),
    ("¿¡", Spanish),
    ("İıĞğ", Turkish),
    // Vietnamese tone-marked vowels: ă â ê ô ơ ư y with every accent that
    // no other supported language writes (ý is shared and stays out).
    (
        "ẮắẰằẲẳẴẵẶặẤấẦầẨẩẪẫẬậẾếỀềỂểỄễỆệỐốỒồỔổỖỗỘộỚớỜờỞởỠỡỢợỨứỪừỬửỮữỰựỲỳỶỷỸỹỴỵ",
        Vietnamese,
    ),
];

/// Characters shared by a handful of languages. The union of every set hit
/// by the word narrows the candidates; scan order does not matter.
static MULTI_LANGUAGE_CHARS: &[(&str, &[Language])] = &[
    ("Åå", &[Bokmal, Danish, Norwegian, Nynorsk, Swedish]),
    ("Ææ", &[Bokmal, Danish, Icelandic, Norwegian, Nynorsk]),
    ("Øø", &[Bokmal, Danish, Norwegian, Nynorsk]),
    ("Ää", &[Estonian, Finnish, German, Slovak, Swedish]),
    ("Öö", &[Estonian, Finnish, German, Hungarian, Icelandic, Swedish, Turkish]),
    ("Üü", &[Catalan, Estonian, German, Hungarian, Spanish, Turkish]),
    ("Ãã", &[Portuguese, Vietnamese]),
    ("Ăă", &[Romanian, Vietnamese]),
    ("ĄąĘę", &[Lithuanian, Polish]),
    ("Ćć", &[Croatian, Polish]),
    ("Żż", &[Polish, Romanian]),
    ("Çç", &[Albanian, Catalan, French, Portuguese, Turkish]),
    ("ČčŠšŽž", &[Croatian, Czech, Estonian, Latvian, Lithuanian, Slovak, Slovene]),
    ("Đđ", &[Croatian, Vietnamese]),
    ("Ññ", &[Spanish]),
    ("ŇňŤť", &[Czech, Slovak]),
    ("Şş", &[Romanian, Turkish]),
    ("ÐðÞþ", &[Icelandic]),
    ("Àà", &[Catalan, French, Italian, Portuguese, Vietnamese]),
    ("Èè", &[Catalan, French, Italian, Vietnamese]),
    ("Ìì", &[Italian, Vietnamese]),
    ("Òò", &[Catalan, Italian, Vietnamese]),
    ("Ùù", &[French, Italian, Vietnamese]),
    ("Ââ", &[French, Portuguese, Romanian, Turkish, Vietnamese]),
    ("Êê", &[French, Portuguese, Vietnamese]),
    ("Îî", &[French, Romanian]),
    ("Ôô", &[French, Portuguese, Slovak, Vietnamese]),
    ("Ûû", &[French]),
    ("Õõ", &[Estonian, Portuguese, Vietnamese]),
    (
        "Áá",
        &[Catalan, Czech, Hungarian, Icelandic, Irish, Portuguese, Slovak, Spanish, Vietnamese],
    ),
    (
        "Éé",
        &[Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak, Vietnamese],
    ),
    (
        "Íí",
        &[Catalan, Czech, Hungarian, Icelandic, Irish, Portuguese, Slovak, Spanish, Vietnamese],
    ),
    (
        "Óó",
        &[Catalan, Czech, Hungarian, Icelandic, Irish, Polish, Portuguese, Slovak, Spanish, Vietnamese],
    ),
    (
        "Úú",
        &[Catalan, Czech, Hungarian, Icelandic, Irish, Portuguese, Slovak, Spanish, Vietnamese],
    ),
    ("Ýý", &[Czech, Icelandic, Slovak, Vietnamese]),
];

#[inline]
fn contains_any(word: &str, charset: &str) -> bool {
    word.chars().any(|c| charset.contains(c))
}

/// Tries to decide the language from a single distinctive word.
///
/// Returns [`Language::Unknown`] when no rule fires, meaning: no
/// short-circuit, proceed to probabilistic scoring.
pub(crate) fn detect_by_rules(words: &[&str]) -> Language {
    for word in words {
        if word_matches(word, Script::Greek) {
            return Greek;
        }
        if word_matches(word, Script::Latin) {
            for &(charset, language) in SINGLE_LANGUAGE_CHARS {
                if contains_any(word, charset) {
                    trace!(%language, %word, "single-language character rule hit");
                    return language;
                }
            }
        }
    }
    Unknown
}

/// Narrows `candidates` from the first word with a recognizable script.
///
/// Scripts are tried per word in the priority Cyrillic, Arabic, Latin; the
/// first word that hits any branch decides and later words are ignored —
/// rule filtering is cheap triage, not a consensus step.
pub(crate) fn filter_by_rules(words: &[&str], candidates: &mut LanguageSet) {
    for word in words {
        if word_matches(word, Script::Cyrillic) {
            candidates.retain(Language::uses_cyrillic_alphabet);
            return;
        }
        if word_matches(word, Script::Arabic) {
            candidates.retain(Language::uses_arabic_alphabet);
            return;
        }
        if word_matches(word, Script::Latin) {
            candidates.retain(Language::uses_latin_alphabet);
            // With both written standards still in play, the umbrella
            // Norwegian only steals probability mass from them.
            if candidates.contains(Bokmal) && candidates.contains(Nynorsk) {
                candidates.remove(Norwegian);
            }
            let mut union = LanguageSet::empty();
            for &(charset, languages) in MULTI_LANGUAGE_CHARS {
                if contains_any(word, charset) {
                    for &language in languages {
                        union.insert(language);
                    }
                }
            }
            if !union.is_empty() {
                candidates.intersect(union);
            }
            return;
        }
    }
}
