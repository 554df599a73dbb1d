pub mod array_widget;
pub mod attrs;
pub mod context;
pub mod error;
pub mod strategy;

pub use array_widget::{
    ArrayWidget, DateTimeArrayWidget, JsonArrayWidget, SubmittedValue, TextArrayWidget,
    TextareaArrayWidget,
};
pub use attrs::Attrs;
pub use context::{RenderContext, SubwidgetContext, SubwidgetKind};
pub use error::{ParseError, SerializationError};
pub use strategy::{DateTimeStrategy, ItemStrategy, JsonStrategy, TextStrategy};
