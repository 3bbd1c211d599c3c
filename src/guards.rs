//! Shape checks for untyped values.

use js_sys::{Array, Function, Object, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// True only for key-value mappings; arrays, strings, numbers and null are not objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_js_array(value: &JsValue) -> bool {
    Array::is_array(value)
}

/// Plain-object check using `Object.prototype.toString`, so arrays, dates
/// and functions are rejected.
pub fn is_js_object(value: &JsValue) -> bool {
    let base = Object::get_prototype_of(&Object::new().into());
    let to_string = match Reflect::get(&base, &JsValue::from_str("toString"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    {
        Some(f) => f,
        None => return false,
    };

    to_string
        .call0(value)
        .ok()
        .and_then(|tag| tag.as_string())
        .map(|tag| tag == "[object Object]")
        .unwrap_or(false)
}
