use chrono::NaiveDateTime;
use form_data::FormData;
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use widgets::{ArrayWidget, Attrs, DateTimeStrategy, JsonStrategy, TextStrategy};

enum FieldWidget {
    Text(ArrayWidget<TextStrategy>),
    DateTime(ArrayWidget<DateTimeStrategy>),
    Json(ArrayWidget<JsonStrategy>),
}

/// One array field, constructed once per field definition and reused across
/// requests. Values cross the boundary as plain JSON-ish structures.
#[wasm_bindgen]
pub struct ArrayFieldBindings {
    widget: FieldWidget,
    serializer: serde_wasm_bindgen::Serializer,
}

#[wasm_bindgen]
impl ArrayFieldBindings {
    pub fn text(required: bool) -> Self {
        Self::with_widget(FieldWidget::Text(ArrayWidget::text().with_required(required)))
    }

    pub fn textarea(required: bool) -> Self {
        Self::with_widget(FieldWidget::Text(
            ArrayWidget::textarea().with_required(required),
        ))
    }

    pub fn date_time(required: bool) -> Self {
        Self::with_widget(FieldWidget::DateTime(
            ArrayWidget::date_time().with_required(required),
        ))
    }

    pub fn json(required: bool) -> Self {
        Self::with_widget(FieldWidget::Json(ArrayWidget::json().with_required(required)))
    }

    pub fn render_context(
        &self,
        name: &str,
        value: JsValue,
        attrs: JsValue,
    ) -> Result<JsValue, JsValue> {
        let attrs: Attrs = serde_wasm_bindgen::from_value(attrs)?;
        match &self.widget {
            FieldWidget::Text(widget) => {
                let value: Option<Vec<String>> = serde_wasm_bindgen::from_value(value)?;
                let context = widget
                    .render_context(name, value.as_deref(), &attrs)
                    .map_err(to_js_error)?;
                Ok(context.serialize(&self.serializer)?)
            }
            FieldWidget::DateTime(widget) => {
                let value: Option<Vec<NaiveDateTime>> = serde_wasm_bindgen::from_value(value)?;
                let context = widget
                    .render_context(name, value.as_deref(), &attrs)
                    .map_err(to_js_error)?;
                Ok(context.serialize(&self.serializer)?)
            }
            FieldWidget::Json(widget) => {
                let value: Option<Vec<serde_json::Value>> = serde_wasm_bindgen::from_value(value)?;
                let context = widget
                    .render_context(name, value.as_deref(), &attrs)
                    .map_err(to_js_error)?;
                Ok(context.serialize(&self.serializer)?)
            }
        }
    }

    pub fn value_from_form(&self, data: JsValue, name: &str) -> Result<JsValue, JsValue> {
        let data: FormData = serde_wasm_bindgen::from_value(data)?;
        match &self.widget {
            FieldWidget::Text(widget) => {
                let value = widget.value_from_form(&data, name).map_err(to_js_error)?;
                Ok(value.serialize(&self.serializer)?)
            }
            FieldWidget::DateTime(widget) => {
                let value = widget.value_from_form(&data, name).map_err(to_js_error)?;
                Ok(value.serialize(&self.serializer)?)
            }
            FieldWidget::Json(widget) => {
                let value = widget.value_from_form(&data, name).map_err(to_js_error)?;
                Ok(value.serialize(&self.serializer)?)
            }
        }
    }

    pub fn value_omitted(&self) -> bool {
        // An array field is present in every submission.
        false
    }

    fn with_widget(widget: FieldWidget) -> Self {
        Self {
            widget,
            serializer: serde_wasm_bindgen::Serializer::new(),
        }
    }
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
