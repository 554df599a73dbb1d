use form_data::multi_value::MultiValueMap;

use crate::context::SubwidgetKind;
use crate::error::{ParseError, SerializationError};

pub mod date_time;
pub mod json;
pub mod text;

pub use date_time::DateTimeStrategy;
pub use json::JsonStrategy;
pub use text::TextStrategy;

/// How one array item is read back from a submission and shown again.
/// A strategy parameterizes the one generic `ArrayWidget` instead of each
/// item type being its own widget.
pub trait ItemStrategy {
    type Item;

    /// The control a template renders per item.
    fn kind(&self) -> SubwidgetKind;

    /// Collects the raw submitted texts for this field, in submission order.
    /// Exactly-empty entries are dropped here, everything else is kept.
    fn submitted_texts(&self, data: &MultiValueMap, name: &str) -> Vec<String> {
        data.get_all(name)
            .unwrap_or(&[])
            .iter()
            .filter(|value| !value.is_empty())
            .cloned()
            .collect()
    }

    /// Turns one submitted text into an item.
    fn parse(&self, text: &str) -> Result<Self::Item, ParseError>;

    /// Turns one stored item into its display text.
    fn format(&self, item: &Self::Item) -> Result<String, SerializationError>;
}
