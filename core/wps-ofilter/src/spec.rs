use crate::error::{BoxError, FilterError, FilterResult};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&Value) -> Result<bool, BoxError> + Send + Sync;

/// A caller-supplied check on a property value.
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    /// Wraps an infallible check.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::try_new(move |value| Ok::<_, Infallible>(f(value)))
    }

    /// Wraps a check that may fail. Its error reaches the filter's caller
    /// unchanged.
    pub fn try_new<F, E>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self(Arc::new(move |value| f(value).map_err(Into::into)))
    }

    pub fn test(&self, value: &Value) -> Result<bool, BoxError> {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// What a criterion checks about the value it resolves to.
#[derive(Debug, Clone)]
pub enum Test {
    /// Present and not empty (see [`crate::is_empty`]).
    Exists,
    /// Present and loosely equal to the literal (see [`crate::loose_eq`]).
    Equals(Value),
    /// Present and accepted by the predicate.
    Predicate(Predicate),
}

/// One entry of a [`FilterSpec`].
#[derive(Debug, Clone)]
pub struct Criterion {
    path: Vec<String>,
    property: String,
    test: Test,
}

impl Criterion {
    pub fn new(property: impl Into<String>, test: Test) -> Self {
        Self {
            path: Vec::new(),
            property: property.into(),
            test,
        }
    }

    /// The property must exist and hold a non-empty value.
    pub fn exists(property: impl Into<String>) -> Self {
        Self::new(property, Test::Exists)
    }

    /// The property must loosely equal `literal`, ignoring case.
    pub fn equals(property: impl Into<String>, literal: impl Into<Value>) -> Self {
        Self::new(property, Test::Equals(literal.into()))
    }

    /// The property must exist and satisfy `f`.
    pub fn predicate<F>(property: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(property, Test::Predicate(Predicate::new(f)))
    }

    /// Like [`Criterion::predicate`] for checks that can fail.
    pub fn try_predicate<F, E>(property: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::new(property, Test::Predicate(Predicate::try_new(f)))
    }

    /// Applies this criterion to the object reached by walking `path` from
    /// the record. Segments are prepended to any existing path.
    #[must_use]
    pub fn within<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut full: Vec<String> = path.into_iter().map(Into::into).collect();
        full.append(&mut self.path);
        self.path = full;
        self
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn test(&self) -> &Test {
        &self.test
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment}.")?;
        }
        f.write_str(&self.property)?;
        match &self.test {
            Test::Exists => Ok(()),
            Test::Equals(literal) => write!(f, " == {literal}"),
            Test::Predicate(_) => f.write_str(" matches predicate"),
        }
    }
}

/// A list of criteria that must all pass.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    criteria: Vec<Criterion>,
}

impl FilterSpec {
    /// An empty spec, which every record passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Builds a spec from its JSON shorthand.
    ///
    /// - `"size"`: `size` must be non-empty
    /// - `{"size": 3, "name": "a"}`: one equality per key
    /// - `[entry, ...]`: each entry is a name, an equality object, or a nested
    ///   path `["user", ..., leaf]` whose leaf is a name or a single-key object
    ///
    /// Predicates cannot be expressed in JSON.
    pub fn from_json(spec: &Value) -> FilterResult<Self> {
        match spec {
            Value::String(_) | Value::Object(_) => entry_criteria(spec).map(Self::from),
            Value::Array(entries) => {
                let mut out = Self::new();
                for entry in entries {
                    out.criteria.extend(entry_criteria(entry)?);
                }
                Ok(out)
            }
            other => Err(invalid(format!("expected a string, object or array, got {other}"))),
        }
    }
}

fn invalid(message: impl Into<String>) -> FilterError {
    FilterError::InvalidSpec(message.into())
}

fn entry_criteria(entry: &Value) -> FilterResult<Vec<Criterion>> {
    match entry {
        Value::String(name) => Ok(vec![Criterion::exists(name.as_str())]),
        Value::Object(map) => Ok(map
            .iter()
            .map(|(name, literal)| Criterion::equals(name.as_str(), literal.clone()))
            .collect()),
        Value::Array(parts) => nested_criterion(parts).map(|c| vec![c]),
        other => Err(invalid(format!("unsupported entry {other}"))),
    }
}

fn nested_criterion(parts: &[Value]) -> FilterResult<Criterion> {
    let Some((leaf, path)) = parts.split_last() else {
        return Err(invalid("nested path is empty"));
    };
    if path.is_empty() {
        return Err(invalid("nested path needs at least one segment before its leaf"));
    }

    let path = path
        .iter()
        .map(|segment| {
            segment
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| invalid(format!("path segment {segment} is not a string")))
        })
        .collect::<FilterResult<Vec<_>>>()?;

    let leaf = match leaf {
        Value::String(name) => Criterion::exists(name.as_str()),
        Value::Object(map) => {
            let mut pairs = map.iter();
            match (pairs.next(), pairs.next()) {
                (Some((name, literal)), None) => Criterion::equals(name.as_str(), literal.clone()),
                _ => return Err(invalid("nested leaf object must have exactly one key")),
            }
        }
        other => return Err(invalid(format!("unsupported nested leaf {other}"))),
    };

    Ok(leaf.within(path))
}

impl From<&str> for FilterSpec {
    fn from(property: &str) -> Self {
        Self::from(Criterion::exists(property))
    }
}

impl From<String> for FilterSpec {
    fn from(property: String) -> Self {
        Self::from(Criterion::exists(property))
    }
}

impl From<Criterion> for FilterSpec {
    fn from(criterion: Criterion) -> Self {
        Self {
            criteria: vec![criterion],
        }
    }
}

impl From<Vec<Criterion>> for FilterSpec {
    fn from(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }
}

impl FromIterator<Criterion> for FilterSpec {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn within_prepends_segments() {
        let c = Criterion::exists("forename").within(["profile"]).within(["user"]);
        assert_eq!(c.path(), ["user", "profile"]);
        assert_eq!(c.to_string(), "user.profile.forename");
    }

    #[test]
    fn display_shows_literal() {
        assert_eq!(Criterion::equals("size", 3).to_string(), "size == 3");
    }

    #[test]
    fn nested_leaf_with_two_keys_is_rejected() {
        let err = FilterSpec::from_json(&json!([["user", {"a": 1, "b": 2}]])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidSpec(_)));
    }
}
