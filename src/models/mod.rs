pub mod card;
pub mod set;

pub use card::*;
pub use set::*;

use serde_json::Value;

// Field readers that treat a wrong JSON type the same as a missing field.

pub(crate) fn str_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(String::from)
}

pub(crate) fn int_field(obj: &Value, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}
