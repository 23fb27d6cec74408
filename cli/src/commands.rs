use anyhow::{Context, Result};
use serde_json::Value;
use wps_ofilter::FilterSpec;
use wps_plural::Pluralizer;

/// Pluralizes `word` for `count` things.
pub fn run_plural(
    pluralizer: &Pluralizer,
    word: &str,
    count: i64,
    with_count: bool,
) -> Result<String> {
    pluralizer
        .pluralize(word, count, with_count)
        .with_context(|| format!("cannot pluralize {word:?} for count {count}"))
}

/// Filters a JSON array of records and renders the kept ones as pretty JSON.
///
/// `spec` is the JSON shorthand accepted by [`FilterSpec::from_json`], or a
/// bare property name such as `size`.
pub fn run_filter(spec: &str, input: &str) -> Result<String> {
    let spec_json = if is_bare_property(spec) {
        Value::String(spec.to_string())
    } else {
        serde_json::from_str::<Value>(spec).context("spec is not valid JSON")?
    };
    let spec = FilterSpec::from_json(&spec_json)?;

    let records: Vec<Value> =
        serde_json::from_str(input).context("input must be a JSON array of records")?;
    let kept = spec.apply(&records)?;

    serde_json::to_string_pretty(&kept).context("failed to render filtered records")
}

/// A plain name: no JSON punctuation or whitespace, and not a JSON literal.
fn is_bare_property(spec: &str) -> bool {
    !spec.is_empty()
        && !spec
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | '{' | '}' | '"' | ',' | ':'))
        && serde_json::from_str::<Value>(spec).is_err()
}

/// Renders the exception table in effect as pretty JSON.
pub fn run_exceptions(pluralizer: &Pluralizer) -> Result<String> {
    serde_json::to_string_pretty(&pluralizer.exceptions()).context("failed to render exceptions")
}
