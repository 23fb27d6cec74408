//! English noun pluralization.
//!
//! Converts a singular noun to its plural form using a small set of suffix
//! rules, after consulting a table of irregular plurals:
//! - [`ExceptionMap`] — irregular singular → plural forms (`man` → `men`)
//! - [`ExceptionProvider`] — extension point that may augment or replace the
//!   built-in table before every pluralization
//! - [`Pluralizer`] — applies the table and the suffix rules
//!
//! # Rules
//!
//! Applied in order, first match wins:
//! 1. consonant + `y` → `ies` (baby, lady)
//! 2. `f` / `fe` → `ves` (leaf, knife)
//! 3. consonant + `o`, or `ch` / `sh` / `ss` / `s` / `x` / `z` → `es`
//!    (mango, match, dish, bus, glass, fox, buzz)
//! 4. anything else → `s` (boy, radio, cat)
//!
//! ```
//! use wps_plural::plural;
//!
//! assert_eq!(plural("boy", 0, false).unwrap(), "boy");
//! assert_eq!(plural("mango", 2, false).unwrap(), "mangoes");
//! assert_eq!(plural("knife", 3, true).unwrap(), "3 knives");
//! ```

mod error;
mod exceptions;
mod pluralizer;

pub use error::{PluralError, PluralResult};
pub use exceptions::{DefaultExceptions, ExceptionMap, ExceptionProvider, ReplaceExceptions};
pub use pluralizer::{plural, Pluralizer, DEFAULT_COUNT};
