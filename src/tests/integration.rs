#[cfg(test)]
mod integration_tests {
    use crate::{Detector, Language, MemoryModelStore, NgramOrder};

    /// Builds a store holding all five orders for each language, bucketing
    /// the given entries by n-gram length. Orders without entries get an
    /// empty (but present) resource, as a complete model set would.
    fn store_for(models: &[(&str, &[(&str, f64)])]) -> MemoryModelStore {
        let mut store = MemoryModelStore::new();
        for &(iso_code, entries) in models {
            for order in NgramOrder::ALL {
                let subset: Vec<(&str, f64)> = entries
                    .iter()
                    .copied()
                    .filter(|(ngram, _)| ngram.chars().count() == order.len())
                    .collect();
                store = store.with_model(iso_code, order, &subset).unwrap();
            }
        }
        store
    }

    /// English and French unigram models over the letters of the pangram,
    /// with English clearly more probable on every letter.
    fn latin_fixture() -> MemoryModelStore {
        const LETTERS: &str = "thequickbrownfx";
        let en: Vec<(String, f64)> = LETTERS
            .chars()
            .map(|c| (c.to_string(), 0.06))
            .collect();
        let fr: Vec<(String, f64)> = LETTERS
            .chars()
            .map(|c| (c.to_string(), 0.03))
            .collect();
        let en_refs: Vec<(&str, f64)> = en.iter().map(|(s, f)| (s.as_str(), *f)).collect();
        let fr_refs: Vec<(&str, f64)> = fr.iter().map(|(s, f)| (s.as_str(), *f)).collect();
        store_for(&[("en", &en_refs), ("fr", &fr_refs)])
    }

    fn cyrillic_fixture() -> MemoryModelStore {
        store_for(&[
            ("ru", &[("м", 0.03), ("и", 0.09), ("р", 0.05)]),
            ("be", &[("м", 0.01), ("и", 0.005), ("р", 0.01)]),
            ("en", &[("a", 0.08)]),
        ])
    }

    #[test]
    fn scoring_picks_the_better_latin_candidate() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        assert_eq!(
            detector.detect("the quick brown fox").unwrap(),
            Language::English
        );
    }

    #[test]
    fn cyrillic_text_is_filtered_then_scored() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::Russian, Language::Belarusian])
            .store(cyrillic_fixture())
            .build()
            .unwrap();
        assert_eq!(detector.detect("мир").unwrap(), Language::Russian);
    }

    #[test]
    fn cyrillic_text_without_cyrillic_candidates_is_unknown() {
        let detector = Detector::builder()
            .languages(&[Language::English])
            .store(cyrillic_fixture())
            .build()
            .unwrap();
        // The script filter leaves no candidate to score.
        assert_eq!(detector.detect("мир").unwrap(), Language::Unknown);
    }

    #[test]
    fn rule_short_circuit_is_authoritative() {
        // Scoring data heavily favors English, but `ß` decides first.
        let detector = Detector::builder()
            .languages(&[Language::English, Language::German])
            .store(latin_fixture())
            .build()
            .unwrap();
        assert_eq!(
            detector.detect("the quick ß fox").unwrap(),
            Language::German
        );
    }

    #[test]
    fn distinctive_inputs_across_scripts() {
        let detector = Detector::builder()
            .all_languages()
            .store(latin_fixture())
            .build()
            .unwrap();
        assert_eq!(detector.detect("ß").unwrap(), Language::German);
        assert_eq!(detector.detect("¿Cómo estás?").unwrap(), Language::Spanish);
        assert_eq!(
            detector.detect("árvíztűrő tükörfúrógép").unwrap(),
            Language::Hungarian
        );
        assert_eq!(detector.detect("Αθήνα").unwrap(), Language::Greek);
        assert_eq!(detector.detect("***").unwrap(), Language::Unknown);
    }

    #[test]
    fn case_does_not_change_the_outcome() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        let lower = detector.detect("the quick brown fox").unwrap();
        let upper = detector.detect("THE QUICK BROWN FOX").unwrap();
        let mixed = detector.detect("The Quick Brown Fox").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn repeated_detection_is_stable() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        let first = detector.detect("the quick brown fox").unwrap();
        for _ in 0..5 {
            assert_eq!(detector.detect("the quick brown fox").unwrap(), first);
        }
    }

    #[test]
    fn adding_a_language_can_only_shift_the_result_toward_it() {
        let mut detector = Detector::builder()
            .languages(&[Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        // French is the only candidate with evidence, so it wins.
        assert_eq!(
            detector.detect("the quick brown fox").unwrap(),
            Language::French
        );
        detector.add_language(Language::English).unwrap();
        assert_eq!(
            detector.detect("the quick brown fox").unwrap(),
            Language::English
        );
    }

    #[test]
    fn removing_an_unselected_language_changes_nothing() {
        let mut detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        let before = detector.detect("the quick brown fox").unwrap();
        detector.remove_language(Language::French);
        assert_eq!(detector.detect("the quick brown fox").unwrap(), before);
    }

    #[test]
    fn removing_the_winner_dethrones_it() {
        let mut detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        assert_eq!(
            detector.detect("the quick brown fox").unwrap(),
            Language::English
        );
        detector.remove_language(Language::English);
        assert_eq!(
            detector.detect("the quick brown fox").unwrap(),
            Language::French
        );
    }

    #[test]
    fn result_is_always_enabled_or_unknown() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        for text in ["the quick brown fox", "ß", "Αθήνα", "***", "¿qué?"] {
            let result = detector.detect(text).unwrap();
            assert!(
                result == Language::Unknown
                    || detector.enabled_languages().contains(&result),
                "`{text}` yielded disabled {result:?}"
            );
        }
    }

    #[test]
    fn preloaded_and_lazy_detectors_agree() {
        let lazy = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        let eager = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .preload(true)
            .build()
            .unwrap();
        for text in ["the quick brown fox", "fox", "***"] {
            assert_eq!(lazy.detect(text).unwrap(), eager.detect(text).unwrap());
        }
    }

    #[test]
    fn concurrent_detection_on_a_shared_detector() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| detector.detect("the quick brown fox").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Language::English);
            }
        });
    }

    #[test]
    fn batch_results_match_individual_calls() {
        let detector = Detector::builder()
            .languages(&[Language::English, Language::French])
            .store(latin_fixture())
            .build()
            .unwrap();
        let texts = ["ß", "¿qué?", "the quick brown fox", ""];
        let batch = detector.detect_batch(texts).unwrap();
        for (text, batched) in texts.iter().zip(batch) {
            assert_eq!(detector.detect(text).unwrap(), batched);
        }
    }
}
