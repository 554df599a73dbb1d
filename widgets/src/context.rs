use serde::{Deserialize, Serialize};

use crate::attrs::Attrs;

/// Which control a template renders for one array item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum SubwidgetKind {
    /// A single-line text control
    TextInput,
    /// A multi-line text control
    Textarea,
    /// A paired date control and time control
    SplitDateTime,
}

/// The render context for one array item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct SubwidgetContext {
    pub name: String,
    pub kind: SubwidgetKind,
    pub required: bool,
    /// The parent attrs, with the id rewritten to `{base_id}_{index}` when a
    /// base id exists.
    pub attrs: Attrs,
    /// The display-formatted item text.
    pub value: String,
}

/// The render context for the whole array field: one container element plus
/// one element per subwidget, consumed by the templating layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct RenderContext {
    pub name: String,
    pub required: bool,
    /// True when no stored value existed. The single subwidget is then an
    /// empty placeholder row, so the UI always shows at least one input.
    pub is_empty: bool,
    pub attrs: Attrs,
    pub subwidgets: Vec<SubwidgetContext>,
}
