//! JSON serializer — renders a [`Value`] tree back to text.
//!
//! Two modes: compact (no insignificant whitespace) and pretty (2-space
//! indentation, one entry per line). Both honor map insertion order and
//! each double's display precision, and both escape strings as an exact
//! inverse of the parser's unescaping, so parse → serialize → parse is
//! structure-preserving. Non-finite doubles render as `null`; JSON has no
//! spelling for them.

use std::fmt::Write;

use crate::double::Double;
use crate::value::Value;

/// Serialize `value` as compact JSON.
pub fn to_compact(value: &Value) -> String {
    let mut out = String::new();
    write_compact(value, &mut out);
    out
}

/// Serialize `value` as pretty JSON. Empty containers stay inline as
/// `{}` and `[]`.
pub fn to_pretty(value: &Value) -> String {
    let mut out = String::new();
    write_pretty(value, 0, &mut out);
    out
}

fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Double(d) => write_double(d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(arr) => {
            out.push('[');
            let mut first = true;
            for element in arr {
                if !first {
                    out.push(',');
                }
                first = false;
                write_compact(element, out);
            }
            out.push(']');
        }
        Value::Map(map) => {
            out.push('{');
            let mut first = true;
            for (key, child) in map {
                if !first {
                    out.push(',');
                }
                first = false;
                write_string(key, out);
                out.push(':');
                write_compact(child, out);
            }
            out.push('}');
        }
    }
}

fn write_pretty(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            out.push_str("[\n");
            let indent = make_indent(depth + 1);
            let mut first = true;
            for element in arr {
                if !first {
                    out.push_str(",\n");
                }
                first = false;
                out.push_str(&indent);
                write_pretty(element, depth + 1, out);
            }
            out.push('\n');
            out.push_str(&make_indent(depth));
            out.push(']');
        }
        Value::Map(map) if !map.is_empty() => {
            out.push_str("{\n");
            let indent = make_indent(depth + 1);
            let mut first = true;
            for (key, child) in map {
                if !first {
                    out.push_str(",\n");
                }
                first = false;
                out.push_str(&indent);
                write_string(key, out);
                out.push_str(": ");
                write_pretty(child, depth + 1, out);
            }
            out.push('\n');
            out.push_str(&make_indent(depth));
            out.push('}');
        }
        // Scalars and empty containers render the same in both modes.
        other => write_compact(other, out),
    }
}

fn write_double(d: &Double, out: &mut String) {
    if d.value().is_finite() {
        out.push_str(&d.to_string());
    } else {
        out.push_str("null");
    }
}

/// Quote and escape a string: the two mandatory escapes plus the short
/// forms for common control characters, `\u00XX` for the rest, and
/// everything else (non-ASCII included) passed through as UTF-8.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
