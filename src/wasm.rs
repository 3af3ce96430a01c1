use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::catalog::FailureReasonCatalog;
use crate::catalog::mapping::{self, CatalogEntry};
use crate::reason::TransactionFailureReason;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

/// Returns `{code, name, description}` for a known code, or `{error}` otherwise.
#[wasm_bindgen]
pub fn describe_failure_reason(code: i32) -> JsValue {
    match TransactionFailureReason::try_from(i64::from(code)) {
        Ok(reason) => to_js(&CatalogEntry::from(reason)),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Check whether a code belongs to the catalog.
#[wasm_bindgen]
pub fn is_known_failure_reason(code: i32) -> bool {
    FailureReasonCatalog::is_known(i64::from(code))
}

/// All catalog rows in declaration order.
#[wasm_bindgen]
pub fn get_all_failure_reasons() -> JsValue {
    to_js(&mapping::catalog_entries())
}

/// Display text for any code, falling back to an explicit "unrecognized" message.
#[wasm_bindgen]
pub fn failure_reason_text(code: i32) -> String {
    mapping::describe_or_unrecognized(i64::from(code)).into_owned()
}
