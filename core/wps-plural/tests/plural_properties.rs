//! Property-based tests for the pluralizer.

use proptest::prelude::*;
use wps_plural::{plural, PluralError};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,12}").unwrap()
}

proptest! {
    /// Counts of zero and one echo the word.
    #[test]
    fn singular_counts_echo(word in word_strategy(), count in 0i64..=1) {
        prop_assert_eq!(plural(&word, count, false).unwrap(), word);
    }

    /// Any negative count is rejected for a valid word.
    #[test]
    fn negative_counts_fail(word in word_strategy(), count in i64::MIN..0) {
        prop_assert_eq!(plural(&word, count, false), Err(PluralError::NegativeCount(count)));
    }

    /// The prefix is exactly the count followed by a space.
    #[test]
    fn prefix_is_count_and_space(word in word_strategy(), count in 0i64..10_000) {
        let bare = plural(&word, count, false).unwrap();
        let prefixed = plural(&word, count, true).unwrap();
        prop_assert_eq!(prefixed, format!("{count} {bare}"));
    }

    /// The plural form never depends on how large the count is beyond one.
    #[test]
    fn plural_form_is_count_independent(word in word_strategy(), a in 2i64..1000, b in 2i64..1000) {
        prop_assert_eq!(plural(&word, a, false).unwrap(), plural(&word, b, false).unwrap());
    }
}
