//! The document value tree.
//!
//! [`Value`] is a tagged union over the seven DYNON kinds. Scalars embed
//! the typed cells from [`crate::integer`] and [`crate::double`];
//! containers own their children outright, so detaching a subtree
//! ([`Map::extract`](crate::Map::extract)) and attaching it elsewhere is a
//! move, never a shared pointer.
//!
//! Inspection never fails: predicates answer `false` and checked accessors
//! answer `None` on the wrong kind. The `to_*` coercions return a
//! [`TypeMismatch`](crate::DynonError::TypeMismatch) error instead, for
//! call sites that require a value rather than probe for one.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::array::Array;
use crate::double::Double;
use crate::error::{DynonError, Result};
use crate::integer::Integer;
use crate::map::Map;
use crate::serializer;

/// The seven kinds a [`Value`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Double,
    String,
    Array,
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "Null",
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::Double => "Double",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Map => "Map",
        };
        f.write_str(name)
    }
}

/// A DYNON document node: null, a typed scalar, or an owning container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(Integer),
    Double(Double),
    String(String),
    Array(Array),
    Map(Map),
}

impl Value {
    /// The node's kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    // Kind predicates. On a possibly-absent lookup result, compose with
    // Option: `map.find("k").is_some_and(Value::is_map)`.

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// True for both integers and doubles.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    // Checked accessors: `Some` only when the kind matches.

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_integer_mut(&mut self) -> Option<&mut Integer> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<&Double> {
        match self {
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_double_mut(&mut self) -> Option<&mut Double> {
        match self {
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric coercion: integers (per their signedness) and doubles
    /// convert; every other kind is a [`DynonError::TypeMismatch`].
    pub fn to_double(&self) -> Result<f64> {
        match self {
            Value::Integer(n) => Ok(n.to_f64()),
            Value::Double(d) => Ok(d.value()),
            other => Err(DynonError::TypeMismatch {
                expected: Kind::Double,
                actual: other.kind(),
            }),
        }
    }

    /// Boolean coercion: only booleans convert. Numbers and strings do not
    /// quietly become truth values.
    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(DynonError::TypeMismatch {
                expected: Kind::Boolean,
                actual: other.kind(),
            }),
        }
    }

    /// Text coercion: string content, or a scalar rendered the way the
    /// serializer would render it (doubles honor their display precision).
    /// Null and containers are a [`DynonError::TypeMismatch`].
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Integer(n) => Ok(n.to_string()),
            Value::Double(d) => Ok(d.to_string()),
            other => Err(DynonError::TypeMismatch {
                expected: Kind::String,
                actual: other.kind(),
            }),
        }
    }

    /// Dotted-path lookup on a map node. A non-map receiver is simply
    /// "not found", so this can be called on any freshly parsed root.
    pub fn find_path(&self, path: &str) -> Option<&Value> {
        self.as_map()?.find_path(path)
    }

    /// Turn this node into a double carrying `value`, dropping whatever
    /// was here before, and return the cell for follow-up configuration:
    ///
    /// ```rust
    /// use dynon_core::Value;
    ///
    /// let mut v = Value::from("stale");
    /// v.make_double(0.0).set_precision(2);
    /// assert_eq!(v.to_text().unwrap(), "0.00");
    /// ```
    pub fn make_double(&mut self, value: f64) -> &mut Double {
        if let Value::Double(d) = self {
            d.set_value(value);
        } else {
            *self = Value::Double(Double::new(value));
        }
        let Value::Double(d) = self else {
            unreachable!("node was just made a double")
        };
        d
    }

    /// Serialize to compact JSON (no insignificant whitespace).
    pub fn to_json(&self) -> String {
        serializer::to_compact(self)
    }

    /// Serialize to pretty JSON (2-space indentation).
    pub fn to_json_pretty(&self) -> String {
        serializer::to_pretty(self)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Integer> for Value {
    fn from(v: Integer) -> Self {
        Value::Integer(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Integer(Integer::from(v))
    }
}

impl From<Double> for Value {
    fn from(v: Double) -> Self {
        Value::Double(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(Double::new(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Value::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

/// Feeds a DYNON tree into any serde serializer. Integers pass through as
/// `i64`/`u64` per their signedness; doubles lose their display precision
/// (that attribute exists only in DYNON's own serializer).
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => {
                if n.is_signed() {
                    serializer.serialize_i64(n.as_i64())
                } else {
                    serializer.serialize_u64(n.as_u64())
                }
            }
            Value::Double(d) => serializer.serialize_f64(d.value()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}
