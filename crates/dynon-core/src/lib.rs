//! # dynon-core
//!
//! **DYNON (Dynamic Object Notation)** — an owned, mutable JSON document
//! model.
//!
//! A parsed document is a tree of [`Value`] nodes: null, booleans, typed
//! integers (which remember their width and signedness and wrap like the
//! native type), doubles (with an optional display precision), strings, and
//! insertion-ordered arrays and maps. Containers own their children, so
//! moving a subtree between documents is `extract` + `append`, with the
//! borrow checker ruling out double ownership.
//!
//! ## Quick start
//!
//! ```rust
//! use dynon_core::parse;
//!
//! let mut doc = parse(r#"{"name":"Alice","hours":[8.25,7.5]}"#).unwrap();
//!
//! // Checked access: wrong kinds answer None, absent keys answer None.
//! assert_eq!(doc.find_path("name").unwrap().as_str(), Some("Alice"));
//! assert!(doc.find_path("wages").is_none());
//!
//! // Edit in place, then serialize. Insertion order is preserved.
//! doc.as_map_mut().unwrap().append("active", true);
//! assert_eq!(
//!     doc.to_json(),
//!     r#"{"name":"Alice","hours":[8.25,7.5],"active":true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree: kind predicates, checked accessors,
//!   coercions, subtree lookup
//! - [`integer`] — fixed-width wraparound integer cells
//! - [`double`] — floats with an optional display precision
//! - [`map`] / [`array`] — insertion-ordered owning containers
//! - [`parser`] — JSON text/file → [`Value`]
//! - [`serializer`] — [`Value`] → compact or pretty JSON
//! - [`error`] — error types for parse/convert/edit failures

pub mod array;
pub mod double;
pub mod error;
pub mod integer;
pub mod map;
pub mod parser;
pub mod serializer;
pub mod value;

pub use array::Array;
pub use double::Double;
pub use error::{DynonError, Result};
pub use integer::{Integer, Width};
pub use map::Map;
pub use parser::{parse, parse_file};
pub use value::{Kind, Value};
