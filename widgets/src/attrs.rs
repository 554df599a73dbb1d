use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// HTML-level attributes attached to a rendered control.
/// A sorted map, so iteration and the rendered markup are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct Attrs {
    values: BTreeMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.insert(name, value);
        }
        attrs
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The `id` attribute, when one was set.
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
