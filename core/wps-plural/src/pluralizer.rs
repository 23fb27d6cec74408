use crate::error::{PluralError, PluralResult};
use crate::exceptions::{DefaultExceptions, ExceptionMap, ExceptionProvider};
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Count used when the caller asks for "the plural" without a number.
pub const DEFAULT_COUNT: i64 = 2;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,}$").expect("word pattern is valid"));

/// Which step produced the plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Exception,
    ConsonantY,
    FToVes,
    Es,
    S,
}

impl Rule {
    fn as_str(self) -> &'static str {
        match self {
            Rule::Exception => "exception",
            Rule::ConsonantY => "consonant+y -> ies",
            Rule::FToVes => "f/fe -> ves",
            Rule::Es => "es",
            Rule::S => "s",
        }
    }
}

/// Pluralizes nouns against an exception table supplied by a provider.
///
/// The provider is asked for the table on every call, so a provider backed
/// by changing state is always current.
#[derive(Clone)]
pub struct Pluralizer {
    provider: Arc<dyn ExceptionProvider>,
}

impl Pluralizer {
    /// Creates a pluralizer using only the built-in exceptions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(DefaultExceptions)
    }

    /// Creates a pluralizer that consults `provider` before each call.
    #[must_use]
    pub fn with_provider(provider: impl ExceptionProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// The exception table currently in effect.
    pub fn exceptions(&self) -> ExceptionMap {
        self.provider.exceptions(ExceptionMap::builtin())
    }

    /// Returns the form of `word` appropriate for `count` things.
    ///
    /// Counts of 0 and 1 leave the (lowercased) word as is; only counts above
    /// one pluralize. With `prefix_with_count` the result reads `"3 knives"`.
    pub fn pluralize(
        &self,
        word: &str,
        count: i64,
        prefix_with_count: bool,
    ) -> PluralResult<String> {
        let trimmed = word.trim_matches(is_trimmable);
        if !WORD.is_match(trimmed) {
            return Err(PluralError::InvalidWord(word.to_string()));
        }
        let word = trimmed.to_ascii_lowercase();

        if count < 0 {
            return Err(PluralError::NegativeCount(count));
        }

        let form = if count > 1 {
            let (form, rule) = apply_rules(&word, &self.exceptions());
            debug!("Pluralized {} -> {} (rule: {})", word, form, rule.as_str());
            form
        } else {
            word
        };

        Ok(if prefix_with_count {
            format!("{count} {form}")
        } else {
            form
        })
    }

    /// Shorthand for `pluralize(word, DEFAULT_COUNT, false)`.
    pub fn plural_of(&self, word: &str) -> PluralResult<String> {
        self.pluralize(word, DEFAULT_COUNT, false)
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pluralizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pluralizer").finish_non_exhaustive()
    }
}

/// Pluralizes with the built-in exception table.
pub fn plural(word: &str, count: i64, prefix_with_count: bool) -> PluralResult<String> {
    Pluralizer::new().pluralize(word, count, prefix_with_count)
}

/// ASCII whitespace and NUL; other Unicode whitespace is part of the word.
fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Expects a lowercase ASCII word of at least two letters.
fn apply_rules(word: &str, exceptions: &ExceptionMap) -> (String, Rule) {
    if let Some(irregular) = exceptions.get(word) {
        return (irregular.to_string(), Rule::Exception);
    }

    let &[.., penultimate, last] = word.as_bytes() else {
        return (format!("{word}s"), Rule::S);
    };

    if last == b'y' && !is_vowel(penultimate) {
        return (format!("{}ies", word.trim_end_matches('y')), Rule::ConsonantY);
    }

    if let Some(stem) = word.strip_suffix("fe").or_else(|| word.strip_suffix('f')) {
        return (format!("{stem}ves"), Rule::FToVes);
    }

    let consonant_o = last == b'o' && !is_vowel(penultimate);
    let sibilant = ["ch", "sh", "ss"].iter().any(|s| word.ends_with(s))
        || matches!(last, b's' | b'x' | b'z');
    if consonant_o || sibilant {
        return (format!("{word}es"), Rule::Es);
    }

    (format!("{word}s"), Rule::S)
}
