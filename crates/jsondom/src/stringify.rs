//! The compact JSON serializer.

use alloc::string::String;

use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

/// Serializes `value` into compact JSON text.
///
/// The output contains no extraneous whitespace, and parsing it back yields
/// a tree equal to `value`. Numbers are written with the fewest digits that
/// still round-trip to the identical double. The one exception to the
/// round-trip guarantee: JSON has no lexical form for NaN or infinity, so a
/// programmatically constructed non-finite number serializes as `null`.
///
/// # Examples
///
/// ```rust
/// use jsondom::{json, stringify};
///
/// let value = json!({"k": [1.5, null, "a\tb"]});
/// assert_eq!(stringify(&value), r#"{"k":[1.5,null,"a\tb"]}"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(number) => write_number(out, *number),
        Value::String(string) => write_string(out, string),
        Value::Array(array) => write_array(out, array),
        Value::Object(object) => write_object(out, object),
    }
}

fn write_number(out: &mut String, number: f64) {
    if number.is_finite() {
        out.push_str(ryu::Buffer::new().format_finite(number));
    } else {
        out.push_str("null");
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn write_string(out: &mut String, string: &str) {
    out.push('"');
    for c in string.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                // Control characters without a short escape; always in the
                // \u00XX range.
                let code = c as usize;
                out.push_str("\\u00");
                out.push(HEX_DIGITS[code >> 4] as char);
                out.push(HEX_DIGITS[code & 0xF] as char);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn write_array(out: &mut String, array: &Array) {
    out.push('[');
    for (index, element) in array.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        write_value(out, element);
    }
    out.push(']');
}

fn write_object(out: &mut String, object: &Object) {
    out.push('{');
    for (index, member) in object.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        write_string(out, member.key());
        out.push(':');
        write_value(out, member.value());
    }
    out.push('}');
}
