//! HTML attributes: values, allow-lists, sanitization, rendering.

pub mod allow_list;
pub mod html;
pub mod sanitize;

pub use allow_list::{AllowList, BASE_ALLOWED_ATTRIBUTES};
pub use html::{AttributeValue, HtmlAttributes};
