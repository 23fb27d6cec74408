use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Anything with named properties that can be looked up by name.
///
/// A property whose value is `null` still exists; only an absent key is
/// "missing".
pub trait Record {
    fn property(&self, name: &str) -> Option<&Value>;

    fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

/// Only JSON objects have properties; every other value has none.
impl Record for Value {
    fn property(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl Record for Map<String, Value> {
    fn property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn property(&self, name: &str) -> Option<&Value> {
        (**self).property(name)
    }
}
