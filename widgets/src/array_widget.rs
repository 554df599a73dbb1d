use form_data::FormData;
use serde::{Deserialize, Serialize};

use crate::attrs::Attrs;
use crate::context::{RenderContext, SubwidgetContext};
use crate::error::{ParseError, SerializationError};
use crate::strategy::{DateTimeStrategy, ItemStrategy, JsonStrategy, TextStrategy};

/// A value read back from a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmittedValue<T> {
    /// Parsed items from a multi-value submission, in submission order.
    Items(Vec<T>),
    /// The raw scalar from a single-value data source, passed through
    /// unchanged. No list conversion happens for those sources.
    Raw(Option<String>),
}

/// One growable list of input controls for an array-valued field.
/// Holds only construction-time configuration; every operation is a pure
/// function of its arguments, and nothing survives across requests.
#[derive(Debug, Clone)]
pub struct ArrayWidget<S> {
    strategy: S,
    required: bool,
}

pub type TextArrayWidget = ArrayWidget<TextStrategy>;
pub type TextareaArrayWidget = ArrayWidget<TextStrategy>;
pub type DateTimeArrayWidget = ArrayWidget<DateTimeStrategy>;
pub type JsonArrayWidget = ArrayWidget<JsonStrategy>;

impl ArrayWidget<TextStrategy> {
    /// Single-line text items, the default field kind.
    pub fn text() -> Self {
        Self::new(TextStrategy::new())
    }

    pub fn textarea() -> Self {
        Self::new(TextStrategy::textarea())
    }
}

impl ArrayWidget<DateTimeStrategy> {
    pub fn date_time() -> Self {
        Self::new(DateTimeStrategy)
    }
}

impl ArrayWidget<JsonStrategy> {
    pub fn json() -> Self {
        Self::new(JsonStrategy)
    }
}

impl<S: ItemStrategy> ArrayWidget<S> {
    pub fn new(strategy: S) -> Self {
        ArrayWidget {
            strategy,
            required: false,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Builds the context the templating layer renders: the parent attrs plus
    /// one subwidget context per item.
    /// An absent value renders as a single empty placeholder row, so the UI
    /// always shows at least one input. Subwidget ids derive from the base id
    /// and the position only, never from item content.
    pub fn render_context(
        &self,
        name: &str,
        value: Option<&[S::Item]>,
        attrs: &Attrs,
    ) -> Result<RenderContext, SerializationError> {
        let display_values = match value {
            Some(_) => self.format_value(value)?,
            None => vec![String::new()],
        };
        let base_id = attrs.id().map(str::to_string);

        let subwidgets = display_values
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let mut subwidget_attrs = attrs.clone();
                if let Some(id) = &base_id {
                    subwidget_attrs.insert("id", format!("{}_{}", id, index));
                }
                SubwidgetContext {
                    name: name.to_string(),
                    kind: self.strategy.kind(),
                    required: self.required,
                    attrs: subwidget_attrs,
                    value: item,
                }
            })
            .collect();

        Ok(RenderContext {
            name: name.to_string(),
            required: self.required,
            is_empty: value.is_none(),
            attrs: attrs.clone(),
            subwidgets,
        })
    }

    /// The display texts for a stored value, an empty list when absent.
    pub fn format_value(&self, value: Option<&[S::Item]>) -> Result<Vec<String>, SerializationError> {
        match value {
            Some(items) => items.iter().map(|item| self.strategy.format(item)).collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Reads the submitted value back out of a form body.
    /// Multi-value sources yield the parsed items in submission order;
    /// single-value sources fall back to the raw scalar under `name`.
    pub fn value_from_form(
        &self,
        data: &FormData,
        name: &str,
    ) -> Result<SubmittedValue<S::Item>, ParseError> {
        match data {
            FormData::MultiValue(values) => {
                let items = self
                    .strategy
                    .submitted_texts(values, name)
                    .iter()
                    .map(|text| self.strategy.parse(text))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SubmittedValue::Items(items))
            }
            FormData::SingleValue(_) => {
                Ok(SubmittedValue::Raw(data.get(name).map(str::to_string)))
            }
        }
    }

    /// An array field counts as present in every submission, even when it
    /// resolves to an empty list. Required-field validation must not treat
    /// present-but-empty as omitted.
    pub fn value_omitted(&self, _data: &FormData, _name: &str) -> bool {
        false
    }
}
