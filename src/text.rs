//! String-level cleanup applied to every fragment lifted out of the page.
//!
//! Javadoc output is full of rendering noise: `&nbsp;` between a type and its
//! name, hard line breaks inside sentences, and (from some IDE exports) long
//! indentation runs injected into inline tags.

use regex::Regex;
use std::sync::LazyLock;

// 10 is calibrated against known Eclipse exports; shorter runs are kept as-is.
static RE_LONG_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{10,}").unwrap());

/// Replace every U+00A0 with a plain space.
pub fn strip_non_breaking_spaces(s: &str) -> String {
    s.replace('\u{a0}', " ")
}

/// Remove every `\n` and `\r`. Nothing is inserted in their place.
pub fn strip_line_breaks(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Replace runs of ten or more whitespace characters with one space.
pub fn collapse_long_space_runs(s: &str) -> String {
    RE_LONG_SPACE_RUN.replace_all(s, " ").into_owned()
}

/// Cleanup for a notes fragment (`@param`, `@return`, `@throws` text).
pub fn normalize_note(s: &str) -> String {
    strip_line_breaks(&collapse_long_space_runs(s))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn whitespace_char() -> impl Strategy<Value = char> {
        prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{a0}'])
    }

    proptest! {
        /// Collapsing twice gives the same result as collapsing once.
        #[test]
        fn collapse_is_idempotent(input in "[a-z \t\n\r\u{a0}]{0,80}") {
            let once = collapse_long_space_runs(&input);
            prop_assert_eq!(collapse_long_space_runs(&once), once);
        }

        #[test]
        fn collapse_is_idempotent_for_any_string(input in any::<String>()) {
            let once = collapse_long_space_runs(&input);
            prop_assert_eq!(collapse_long_space_runs(&once), once);
        }

        /// Runs of one to nine whitespace characters pass through untouched.
        #[test]
        fn short_runs_survive(
            run in prop::collection::vec(whitespace_char(), 1..=9)
        ) {
            let input = format!("a{}b", run.iter().collect::<String>());
            prop_assert_eq!(collapse_long_space_runs(&input), input);
        }

        /// Runs of ten or more whitespace characters become one space.
        #[test]
        fn long_runs_become_one_space(
            run in prop::collection::vec(whitespace_char(), 10..200)
        ) {
            let input = format!("a{}b", run.iter().collect::<String>());
            prop_assert_eq!(collapse_long_space_runs(&input), "a b");
        }
    }
}
