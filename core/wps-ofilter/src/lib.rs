//! Declarative filtering of record-like objects.
//!
//! A [`FilterSpec`] is a list of [`Criterion`]s combined with logical AND.
//! Each criterion names a property, optionally reached through a path of
//! nested objects, and one [`Test`] to run against its value:
//! - [`Test::Exists`] — the property is present and its value is not empty
//! - [`Test::Equals`] — case-insensitive loose equality with a literal
//! - [`Test::Predicate`] — an arbitrary caller-supplied check
//!
//! Records are anything implementing [`Record`]; JSON objects and string-keyed
//! maps of JSON values work out of the box.
//!
//! ```
//! use serde_json::json;
//! use wps_ofilter::{ofilter, Criterion, FilterSpec};
//!
//! let items = vec![
//!     json!({"size": 3, "name": "a", "user": {"forename": "Bob"}}),
//!     json!({"size": 5, "name": "b"}),
//! ];
//!
//! let spec = FilterSpec::new()
//!     .with(Criterion::equals("size", 3))
//!     .with(Criterion::equals("forename", "bob").within(["user"]));
//!
//! let kept = ofilter(&items, spec).unwrap();
//! assert_eq!(kept, vec![&items[0]]);
//! ```

mod error;
mod filter;
mod record;
mod spec;
mod value;

pub use error::{BoxError, FilterError, FilterResult};
pub use filter::ofilter;
pub use record::Record;
pub use spec::{Criterion, FilterSpec, Predicate, Test};
pub use value::{is_empty, loose_eq};
