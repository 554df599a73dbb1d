use serde_json::Value;

use super::ItemStrategy;
use crate::context::SubwidgetKind;
use crate::error::{ParseError, SerializationError};

/// Items that may be structured JSON values.
/// String items pass through verbatim for display; every other value becomes
/// its compact JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonStrategy;

impl ItemStrategy for JsonStrategy {
    type Item = Value;

    fn kind(&self) -> SubwidgetKind {
        SubwidgetKind::TextInput
    }

    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        // Submitted texts stay strings here; the field layer decodes JSON.
        Ok(Value::String(text.to_string()))
    }

    fn format(&self, item: &Value) -> Result<String, SerializationError> {
        match item {
            Value::String(text) => Ok(text.clone()),
            other => Ok(serde_json::to_string(other)?),
        }
    }
}
