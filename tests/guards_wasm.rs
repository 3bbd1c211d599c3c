#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Date, Object};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

use domkit::{is_js_array, is_js_object};

#[wasm_bindgen_test]
fn test_js_array_check() {
    assert!(is_js_array(&Array::new().into()));
    assert!(!is_js_array(&Object::new().into()));
    assert!(!is_js_array(&JsValue::from_str("[]")));
}

#[wasm_bindgen_test]
fn test_js_object_is_plain_mapping_only() {
    assert!(is_js_object(&Object::new().into()));
    assert!(!is_js_object(&Array::new().into()));
    assert!(!is_js_object(&Date::new_0().into()));
    assert!(!is_js_object(&JsValue::NULL));
    assert!(!is_js_object(&JsValue::from_f64(1.0)));
}
