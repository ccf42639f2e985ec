//! The JSON value tree and its conversions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::array::Array;
use crate::error::ParseError;
use crate::object::Object;
use crate::stringify::stringify;

/// A JSON value as defined by [RFC 8259].
///
/// A `Value` is a tree: the `Array` and `Object` variants own their
/// children, and dropping a value recursively releases everything reachable
/// from it. A freshly constructed (`Value::default()`) or
/// [`reset`](Self::reset) value is always `Null`; there is no uninitialized
/// state.
///
/// # Examples
///
/// ```rust
/// use jsondom::{json, Value};
///
/// let v: Value = "sample".into();
/// assert_eq!(v.as_str(), Some("sample"));
///
/// let doc = json!({"tags": ["a", "b"]});
/// assert_eq!(doc["tags"][1], json!("b"));
/// ```
///
/// # Equality
///
/// Numbers compare with IEEE-754 semantics, so `NaN` never equals itself.
/// Objects compare as order-insensitive multisets of members; see
/// [`Object`].
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON `true` or `false`.
    Boolean(bool),
    /// A number, stored as an IEEE-754 double.
    Number(f64),
    /// An owned string. After escape decoding it may contain any scalar
    /// content, including embedded NUL.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// An insertion-ordered sequence of key/value members.
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

/// The discriminator identifying which variant of a [`Value`] is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Value {
    /// The active variant's discriminator.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(..) => ValueKind::Boolean,
            Self::Number(..) => ValueKind::Number,
            Self::String(..) => ValueKind::String,
            Self::Array(..) => ValueKind::Array,
            Self::Object(..) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if the value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if the value is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if the value is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::parse;
    ///
    /// let v = parse(r#""café""#)?;
    /// assert_eq!(v.as_str(), Some("café"));
    /// # Ok::<(), jsondom::ParseError>(())
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array payload, if the value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Mutable access to the array payload.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The object payload, if the value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable access to the object payload.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Takes the value out, leaving `Null` behind.
    ///
    /// This is the O(1) ownership transfer: no child is duplicated, and the
    /// source stays valid for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{json, Value};
    ///
    /// let mut slot = json!([1, 2]);
    /// let taken = slot.take();
    /// assert_eq!(taken, json!([1, 2]));
    /// assert_eq!(slot, Value::Null);
    /// ```
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Releases the owned subtree and resets the value to `Null`.
    ///
    /// A no-op on a value that is already `Null`.
    pub fn reset(&mut self) {
        *self = Self::Null;
    }

    /// Exchanges the complete state of two values in O(1).
    pub fn swap(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[allow(clippy::cast_precision_loss)]
            fn from(v: $ty) -> Self {
                Self::Number(v as f64)
            }
        }
    )*};
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(Array::from(v))
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        crate::parse(s)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Indexing a non-array value, or indexing past the end, is a contract
    /// violation and panics. Use [`Value::as_array`] and [`Array::get`] for
    /// checked access.
    fn index(&self, index: usize) -> &Value {
        match self {
            Self::Array(array) => &array[index],
            _ => panic!("cannot index a non-array value with index {index}"),
        }
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Self::Array(array) => &mut array[index],
            _ => panic!("cannot index a non-array value with index {index}"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Looks up the first member with this key.
    ///
    /// # Panics
    ///
    /// Indexing a non-object value, or a missing key, is a contract
    /// violation and panics. Use [`Value::as_object`] and [`Object::get`]
    /// for checked access.
    fn index(&self, key: &str) -> &Value {
        match self {
            Self::Object(object) => object
                .get(key)
                .unwrap_or_else(|| panic!("no member with key {key:?}")),
            _ => panic!("cannot index a non-object value with a key"),
        }
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self {
            Self::Object(object) => object
                .get_mut(key)
                .unwrap_or_else(|| panic!("no member with key {key:?}")),
            _ => panic!("cannot index a non-object value with a key"),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the compact serialization, identical to
    /// [`stringify`](crate::stringify).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}
