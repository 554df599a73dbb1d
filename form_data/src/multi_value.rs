use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mapping from field name to the ordered values submitted under that name.
/// Values for one name keep their submission order; names themselves are
/// unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct MultiValueMap {
    values: HashMap<String, Vec<String>>,
}

impl MultiValueMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the map from decoded `(name, value)` pairs, the shape of a
    /// urlencoded form body.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.append(name, value);
        }
        map
    }

    /// Adds one value at the end of the list for `name`.
    pub fn append<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces all values for `name`.
    pub fn insert<K: Into<String>>(&mut self, name: K, values: Vec<String>) {
        self.values.insert(name.into(), values);
    }

    /// All values for `name`, in submission order.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// The last value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
