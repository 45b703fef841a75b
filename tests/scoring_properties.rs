//! Property-based tests for answer scoring.

use proptest::prelude::*;

use mood_guide::domain::questionnaire::{weight_or_zero, AnswerSheet, SeverityBand};

/// Strategy: one recognized answer letter, either case.
fn letter_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "E", "a", "b", "c", "d", "e"])
        .prop_map(str::to_string)
}

/// Strategy: a token that is never a valid answer.
fn junk_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[F-Zf-z0-9]",
        "[A-Ea-e]{2,4}",
    ]
}

proptest! {
    // 1. Ten answers always score within 0..=40
    #[test]
    fn ten_answers_score_in_range(letters in prop::collection::vec(letter_strategy(), 10)) {
        let score = AnswerSheet::parse(&letters.join(",")).total_score();
        prop_assert!(score <= 40, "score={score}");
    }

    // 2. Total equals the sum of individual weights
    #[test]
    fn total_is_sum_of_weights(letters in prop::collection::vec(letter_strategy(), 0..30)) {
        let raw = letters.join(",");
        let expected: u32 = raw.split(',').map(weight_or_zero).sum();
        prop_assert_eq!(AnswerSheet::parse(&raw).total_score(), expected);
    }

    // 3. Junk tokens never change the score
    #[test]
    fn junk_tokens_add_nothing(
        letters in prop::collection::vec(letter_strategy(), 1..10),
        junk in prop::collection::vec(junk_strategy(), 1..10),
    ) {
        let clean = AnswerSheet::parse(&letters.join(",")).total_score();
        let mut mixed = letters.clone();
        mixed.extend(junk);
        prop_assert_eq!(AnswerSheet::parse(&mixed.join(",")).total_score(), clean);
    }

    // 4. Bands are monotonic in the score
    #[test]
    fn bands_are_monotonic(a in 0u32..=40, b in 0u32..=40) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(SeverityBand::from_score(lo) <= SeverityBand::from_score(hi));
    }

    // 5. Case does not affect the score
    #[test]
    fn scoring_is_case_insensitive(letters in prop::collection::vec(letter_strategy(), 0..20)) {
        let raw = letters.join(",");
        prop_assert_eq!(
            AnswerSheet::parse(&raw.to_uppercase()).total_score(),
            AnswerSheet::parse(&raw.to_lowercase()).total_score()
        );
    }
}
