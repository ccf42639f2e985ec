//! `serde::Deserialize` for [`Value`].

use alloc::string::String;
use core::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Boolean(v))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E>(self, v: i64) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Number(v as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E>(self, v: u64) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Number(v as f64))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Number(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::String(String::from(v)))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::String(v))
            }

            fn visit_unit<E>(self) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E>
            where
                E: Error,
            {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut array = Array::new();
                while let Some(element) = seq.next_element()? {
                    array.push(element);
                }
                Ok(Value::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Members are appended in order; duplicate keys survive.
                let mut object = Object::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    object.push(key, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
