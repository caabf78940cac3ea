//! Attribute validation and sanitization against an allow-list.

use tracing::debug;

use crate::attributes::allow_list::AllowList;
use crate::attributes::html::HtmlAttributes;
use crate::error::ValidationError;

/// Fail if any attribute name is outside `base ∪ extra`.
///
/// The error lists every disallowed name in attribute order.
pub fn validate(
    attributes: &HtmlAttributes,
    base: &AllowList,
    extra: &AllowList,
) -> Result<(), ValidationError> {
    let names: Vec<String> = attributes
        .names()
        .filter(|name| !is_allowed(name, base, extra))
        .map(str::to_owned)
        .collect();

    if names.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::DisallowedAttributes { names })
    }
}

/// Copy of `attributes` restricted to names in `base ∪ extra`. Never fails.
pub fn sanitize(attributes: &HtmlAttributes, base: &AllowList, extra: &AllowList) -> HtmlAttributes {
    let mut sanitized = attributes.clone();
    sanitized.retain(|name, _| is_allowed(name, base, extra));

    let dropped = attributes.len() - sanitized.len();
    if dropped > 0 {
        debug!(dropped, "dropped disallowed html attributes");
    }
    sanitized
}

fn is_allowed(name: &str, base: &AllowList, extra: &AllowList) -> bool {
    base.allows(name) || extra.allows(name)
}
