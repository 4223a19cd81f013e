//! # Language inventory — single source of truth
//! * **All metadata in `define_languages!`** — ISO code, display name, script
//! * **phf perfect-hash** for ISO lookup — O(1), compile-time
//! * **`LanguageSet`** — call-local candidate bitset keyed by enum ordinal

use phf::Map;

/// Writing system a supported language uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
}

macro_rules! define_languages {
    ($(
        $variant:ident, $iso:literal, $name:literal, $script:ident
    );* $(;)?) => {
        /// A supported natural language, or the [`Unknown`](Language::Unknown)
        /// sentinel when no decision can be made.
        ///
        /// The discriminant doubles as the ordinal used by [`LanguageSet`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Language {
            $($variant,)*
            /// Sentinel: no language was selected. Never scored.
            Unknown,
        }

        /// Every supported language, in ordinal order. Excludes `Unknown`.
        pub static ALL_LANGUAGES: &[Language] = &[$(Language::$variant),*];

        static ISO_CODES: Map<&'static str, Language> = phf::phf_map! {
            $($iso => Language::$variant,)*
        };

        impl Language {
            /// ISO 639-1 code. `Unknown` has none.
            pub const fn iso_code(self) -> &'static str {
                match self {
                    $(Language::$variant => $iso,)*
                    Language::Unknown => "",
                }
            }

            /// English display name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Language::$variant => $name,)*
                    Language::Unknown => "Unknown",
                }
            }

            /// The script this language is written in. `Unknown` has none.
            pub const fn script(self) -> Option<Script> {
                match self {
                    $(Language::$variant => Some(Script::$script),)*
                    Language::Unknown => None,
                }
            }
        }
    };
}

define_languages! {
    Albanian,   "sq", "Albanian",   Latin;
    Arabic,     "ar", "Arabic",     Arabic;
    Belarusian, "be", "Belarusian", Cyrillic;
    Bokmal,     "nb", "Bokmal",     Latin;
    Bulgarian,  "bg", "Bulgarian",  Cyrillic;
    Catalan,    "ca", "Catalan",    Latin;
    Croatian,   "hr", "Croatian",   Latin;
    Czech,      "cs", "Czech",      Latin;
    Danish,     "da", "Danish",     Latin;
    Dutch,      "nl", "Dutch",      Latin;
    English,    "en", "English",    Latin;
    Estonian,   "et", "Estonian",   Latin;
    Finnish,    "fi", "Finnish",    Latin;
    French,     "fr", "French",     Latin;
    German,     "de", "German",     Latin;
    Greek,      "el", "Greek",      Greek;
    Hungarian,  "hu", "Hungarian",  Latin;
    Icelandic,  "is", "Icelandic",  Latin;
    Irish,      "ga", "Irish",      Latin;
    Italian,    "it", "Italian",    Latin;
    Latvian,    "lv", "Latvian",    Latin;
    Lithuanian, "lt", "Lithuanian", Latin;
    Norwegian,  "no", "Norwegian",  Latin;
    Nynorsk,    "nn", "Nynorsk",    Latin;
    Persian,    "fa", "Persian",    Arabic;
    Polish,     "pl", "Polish",     Latin;
    Portuguese, "pt", "Portuguese", Latin;
    Romanian,   "ro", "Romanian",   Latin;
    Russian,    "ru", "Russian",    Cyrillic;
    Slovak,     "sk", "Slovak",     Latin;
    Slovene,    "sl", "Slovene",    Latin;
    Spanish,    "es", "Spanish",    Latin;
    Swedish,    "sv", "Swedish",    Latin;
    Turkish,    "tr", "Turkish",    Latin;
    Vietnamese, "vi", "Vietnamese", Latin;
}

impl Language {
    /// Looks a language up by its ISO 639-1 code, case-insensitively.
    pub fn from_iso_code(code: &str) -> Option<Language> {
        let lower = code.to_lowercase();
        ISO_CODES.get(lower.as_str()).copied()
    }

    #[inline(always)]
    pub fn uses_latin_alphabet(self) -> bool {
        self.script() == Some(Script::Latin)
    }

    #[inline(always)]
    pub fn uses_cyrillic_alphabet(self) -> bool {
        self.script() == Some(Script::Cyrillic)
    }

    #[inline(always)]
    pub fn uses_greek_alphabet(self) -> bool {
        self.script() == Some(Script::Greek)
    }

    #[inline(always)]
    pub fn uses_arabic_alphabet(self) -> bool {
        self.script() == Some(Script::Arabic)
    }

    #[inline(always)]
    fn ordinal(self) -> Option<u32> {
        match self {
            Language::Unknown => None,
            lang => Some(lang as u32),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of candidate languages, carried on the call frame of a detection.
///
/// A plain `u64` bitset keyed by the `Language` ordinal. `Unknown` is not
/// representable; inserting or removing it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSet(u64);

impl LanguageSet {
    pub const fn empty() -> Self {
        LanguageSet(0)
    }

    /// The set of every supported language.
    pub fn full() -> Self {
        LanguageSet((1u64 << ALL_LANGUAGES.len()) - 1)
    }

    pub fn from_slice(languages: &[Language]) -> Self {
        let mut set = LanguageSet::empty();
        for &lang in languages {
            set.insert(lang);
        }
        set
    }

    pub fn insert(&mut self, lang: Language) {
        if let Some(ordinal) = lang.ordinal() {
            self.0 |= 1 << ordinal;
        }
    }

    pub fn remove(&mut self, lang: Language) {
        if let Some(ordinal) = lang.ordinal() {
            self.0 &= !(1 << ordinal);
        }
    }

    #[inline]
    pub fn contains(self, lang: Language) -> bool {
        match lang.ordinal() {
            Some(ordinal) => self.0 & (1 << ordinal) != 0,
            None => false,
        }
    }

    /// Keeps only the members also present in `other`.
    pub fn intersect(&mut self, other: LanguageSet) {
        self.0 &= other.0;
    }

    /// Keeps only the members satisfying `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(Language) -> bool) {
        for lang in *self {
            if !keep(lang) {
                self.remove(lang);
            }
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ordinal order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl IntoIterator for LanguageSet {
    type Item = Language;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Language> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        let mut set = LanguageSet::empty();
        for lang in iter {
            set.insert(lang);
        }
        set
    }
}

pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Language;

    fn next(&mut self) -> Option<Language> {
        if self.0 == 0 {
            return None;
        }
        let ordinal = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(ALL_LANGUAGES[ordinal])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
