use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod multi_value;

pub use multi_value::MultiValueMap;

/// A submitted form body.
/// Standard POST submissions support multi-value lookup, where one field name
/// carries several values (repeated inputs sharing a name). Some data sources
/// only support single-value lookup; that is a deliberate fallback, not an
/// error, and widgets treat it differently.
/// The variant is chosen at construction instead of probing the source at
/// lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum FormData {
    MultiValue(MultiValueMap),
    SingleValue(HashMap<String, String>),
}

impl FormData {
    /// All values submitted under `name`, in submission order.
    /// `None` for single-value sources, which cannot answer this question.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        match self {
            FormData::MultiValue(values) => values.get_all(name),
            FormData::SingleValue(_) => None,
        }
    }

    /// A single value for `name`. For multi-value sources this is the last
    /// submitted value.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            FormData::MultiValue(values) => values.get(name),
            FormData::SingleValue(values) => values.get(name).map(String::as_str),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            FormData::MultiValue(values) => values.contains(name),
            FormData::SingleValue(values) => values.contains_key(name),
        }
    }
}
