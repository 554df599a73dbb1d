use super::ItemStrategy;
use crate::context::SubwidgetKind;
use crate::error::{ParseError, SerializationError};

/// Plain text items, shown as single-line or multi-line controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStrategy {
    kind: SubwidgetKind,
}

impl TextStrategy {
    pub fn new() -> Self {
        TextStrategy {
            kind: SubwidgetKind::TextInput,
        }
    }

    /// The textarea variant differs from the base in nothing but the control.
    pub fn textarea() -> Self {
        TextStrategy {
            kind: SubwidgetKind::Textarea,
        }
    }
}

impl Default for TextStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStrategy for TextStrategy {
    type Item = String;

    fn kind(&self) -> SubwidgetKind {
        self.kind
    }

    fn parse(&self, text: &str) -> Result<String, ParseError> {
        Ok(text.to_string())
    }

    fn format(&self, item: &String) -> Result<String, SerializationError> {
        Ok(item.clone())
    }
}
