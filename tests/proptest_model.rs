//! Property-based tests for normalization, vocabulary trimming and evaluation.

use proptest::prelude::*;
use review_sentiment::core::evaluator::evaluate;
use review_sentiment::core::normalizer::{normalize, tokenize_all};
use review_sentiment::core::scorer::ClassModel;
use review_sentiment::core::vocabulary::VocabularyBuilder;
use review_sentiment::core::TokenSequence;
use std::collections::HashSet;

/// Strategy for review-like text: words, numbers, punctuation and hyphens
fn review_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 '!.,?-]{0,60}"
}

/// Strategy for a small corpus drawn from a limited vocabulary so counts repeat
fn corpus() -> impl Strategy<Value = Vec<String>> {
    let word = prop_oneof![
        Just("the"),
        Just("good"),
        Just("bad"),
        Just("phone"),
        Just("battery"),
        Just("great"),
        Just("5"),
        Just("works"),
    ];
    prop::collection::vec(
        prop::collection::vec(word, 0..8).prop_map(|words| words.join(" ")),
        0..10,
    )
}

fn keys(reviews: &[TokenSequence], cutoff: i64) -> HashSet<String> {
    VocabularyBuilder::build(reviews, cutoff)
        .unwrap()
        .iter()
        .map(|(token, _)| token.to_string())
        .collect()
}

proptest! {
    /// Property: normalizing twice changes nothing
    #[test]
    fn normalize_is_idempotent(text in review_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: arbitrary unicode never panics and yields ascii tokens
    #[test]
    fn normalize_is_total(text in any::<String>()) {
        let normalized = normalize(&text);
        prop_assert!(normalized.is_ascii());
        prop_assert!(!normalized.contains("  "));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    /// Property: consecutive num sentinels never survive
    #[test]
    fn num_tokens_never_repeat(text in review_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.split(' ').collect::<Vec<_>>().windows(2).any(|w| w[0] == "num" && w[1] == "num"));
    }

    /// Property: a larger cutoff keeps a subset of the smaller cutoff's tokens
    #[test]
    fn cutoff_is_monotonic(reviews in corpus(), low in 0i64..6, extra in 1i64..6) {
        let reviews = tokenize_all(&reviews);
        let high = low + extra;
        let kept_low = keys(&reviews, low);
        let kept_high = keys(&reviews, high);
        let distinct = keys(&reviews, 0).len();

        prop_assert!(kept_high.is_subset(&kept_low));
        prop_assert_eq!(kept_low.len(), distinct.saturating_sub(low as usize));
        prop_assert_eq!(kept_high.len(), distinct.saturating_sub(high as usize));
    }

    /// Property: scores are finite and never negative
    #[test]
    fn scores_are_finite(reviews in corpus(), query in review_text(), prior in 0.0f64..=1.0) {
        let reviews = tokenize_all(&reviews);
        let model = ClassModel::new(prior, VocabularyBuilder::build(&reviews, 1).unwrap());
        let score = model.score(&tokenize_all(&[query])[0]);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    /// Property: confusion totals match the size of each labeled test set
    #[test]
    fn evaluator_totals_match(
        positive in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..50),
        negative in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..50),
    ) {
        let (pos_pos, pos_neg): (Vec<f64>, Vec<f64>) = positive.iter().copied().unzip();
        let (neg_pos, neg_neg): (Vec<f64>, Vec<f64>) = negative.iter().copied().unzip();
        let counts = evaluate(&pos_pos, &pos_neg, &neg_pos, &neg_neg).unwrap();

        prop_assert_eq!(counts.true_positive + counts.false_positive, positive.len());
        prop_assert_eq!(counts.true_negative + counts.false_negative, negative.len());
    }
}
