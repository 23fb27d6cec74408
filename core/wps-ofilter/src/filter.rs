use crate::error::{FilterError, FilterResult};
use crate::record::Record;
use crate::spec::{Criterion, FilterSpec, Test};
use crate::value::{is_empty, loose_eq};
use serde_json::Value;
use tracing::{debug, trace};

impl FilterSpec {
    /// Whether `record` passes every criterion.
    ///
    /// Stops at the first failing criterion; a predicate error is returned
    /// as is.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> FilterResult<bool> {
        for criterion in self.criteria() {
            if !evaluate(record, criterion)? {
                trace!("Record rejected by {}", criterion);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Keeps the records that pass, in their original order.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> FilterResult<Vec<&'a R>> {
        if records.is_empty() {
            return Err(FilterError::EmptyInput);
        }

        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if self.matches(record)? {
                kept.push(record);
            }
        }

        debug!(
            "Kept {} of {} records ({} criteria)",
            kept.len(),
            records.len(),
            self.len()
        );
        Ok(kept)
    }
}

/// Filters `records` against `spec`; a bare property name checks that the
/// property is non-empty.
pub fn ofilter<'a, R: Record>(
    records: &'a [R],
    spec: impl Into<FilterSpec>,
) -> FilterResult<Vec<&'a R>> {
    spec.into().apply(records)
}

fn evaluate<R: Record + ?Sized>(record: &R, criterion: &Criterion) -> FilterResult<bool> {
    let Some(value) = resolve(record, criterion.path(), criterion.property()) else {
        return Ok(false);
    };

    match criterion.test() {
        Test::Exists => Ok(!is_empty(value)),
        Test::Equals(literal) => Ok(loose_eq(value, literal)),
        Test::Predicate(predicate) => predicate.test(value).map_err(FilterError::Predicate),
    }
}

/// Walks `path` from the record and looks up `property` on the object it
/// ends at. Any missing segment yields `None`.
fn resolve<'a, R: Record + ?Sized>(
    record: &'a R,
    path: &[String],
    property: &str,
) -> Option<&'a Value> {
    let Some((head, rest)) = path.split_first() else {
        return record.property(property);
    };

    let mut node = record.property(head)?;
    for segment in rest {
        node = node.property(segment)?;
    }
    node.property(property)
}
