//! Keywise – functional traversal and guarded lookup helpers for keyed containers.
//!
//! Keywise centers on reading an associative container declaratively:
//! * [`traverse::Traverse`] visits, transforms or folds every entry exactly once
//!   (`each`, `map_entries`, `reduce`).
//! * [`lookup::Lookup`] collapses "if this key exists and satisfies X, do Y,
//!   else Z" guard clauses into one call (`with_value`, `with_value_or`,
//!   `with_value_if`, `with_value_if_or`).
//! * [`lookup::TypedLookup`] adds the tag-guarded variants (`with_value_of`,
//!   `with_value_of_or`) for containers holding heterogeneous [`value::Value`]s.
//!
//! All helpers are read-only with respect to the container, stateless between
//! calls, and never raise: "key absent", "tag mismatch" and "predicate false"
//! are ordinary control-flow branches that either fall through silently or
//! dispatch a caller-supplied fallback closure.
//!
//! ## Modules
//! * [`keyed`] – The [`keyed::Keyed`] abstraction over `HashMap` / `BTreeMap`
//!   plus the seahash-backed [`keyed::ValueMap`] alias.
//! * [`traverse`] – Whole-container traversal (`each` / `map_entries` / `reduce`).
//! * [`lookup`] – Guarded single-key lookup families.
//! * [`value`] – The closed heterogeneous value domain: [`value::Value`],
//!   its [`value::ValueKind`] tags and the [`value::ValueType`] payload trait
//!   (string, integer, boolean, decimal, temporal, JSON).
//! * [`error`] – Parse errors for textual value literals.
//!
//! ## Traversal Order
//! Entries are visited in the underlying container's own iteration order:
//! ascending key order for `BTreeMap`, an arbitrary but per-instance stable
//! order for `HashMap`. A non-commutative `reduce` is therefore consistent
//! across repeated calls on the same unmodified instance, but not across
//! instances.
//!
//! ## Quick Start
//! ```
//! use std::cell::Cell;
//! use keywise::keyed::ValueMap;
//! use keywise::traverse::Traverse;
//! use keywise::lookup::TypedLookup;
//! use keywise::value::Value;
//!
//! let mut prefs: ValueMap<&str> = ValueMap::default();
//! prefs.insert("volume", Value::Int(5));
//! prefs.insert("theme", Value::from("dark"));
//!
//! let total = prefs.reduce(0_i64, |sum, _key, value| match value {
//!     Value::Int(i) => sum + i,
//!     _ => sum,
//! });
//! assert_eq!(total, 5);
//!
//! let mut theme = String::from("light");
//! prefs.with_value_of::<String, _>(&"theme", |name| theme = name.clone());
//! assert_eq!(theme, "dark");
//!
//! let volume = Cell::new(-1_i64);
//! prefs.with_value_of_or::<i64, _, _>(
//!     &"brightness",
//!     |v| volume.set(*v),
//!     || volume.set(0),
//! );
//! assert_eq!(volume.get(), 0);
//! ```

pub mod error;
pub mod keyed;
pub mod lookup;
pub mod traverse;
pub mod value;
