//! Composite label codec: `(category, sub_category)` ↔ `"category:sub_category"`.
//!
//! A label may carry only a top-level category; its sub-category then reads
//! back as `"General"`.

use tally_core::constants::{GENERAL_SUB_CATEGORY, LABEL_SEPARATOR};
use tally_core::errors::LabelError;

/// Join a category pair into one composite label.
///
/// Parts are kept verbatim, surrounding whitespace included. A blank
/// `sub_category` is stored as `"General"`. Fails when `category` is blank or
/// either part contains the separator.
pub fn encode(category: &str, sub_category: &str) -> Result<String, LabelError> {
    let invalid = |reason: &str| LabelError::InvalidLabel {
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        reason: reason.to_string(),
    };

    if category.trim().is_empty() {
        return Err(invalid("category is empty"));
    }
    if category.contains(LABEL_SEPARATOR) || sub_category.contains(LABEL_SEPARATOR) {
        return Err(invalid("contains the label separator ':'"));
    }

    let sub_category = if sub_category.trim().is_empty() {
        GENERAL_SUB_CATEGORY
    } else {
        sub_category
    };
    Ok(format!("{category}{LABEL_SEPARATOR}{sub_category}"))
}

/// Split a composite label on its first separator.
///
/// A missing or empty sub-category decodes as `"General"`.
pub fn decode(label: &str) -> (String, String) {
    match label.split_once(LABEL_SEPARATOR) {
        Some((category, sub)) if !sub.is_empty() => (category.to_string(), sub.to_string()),
        Some((category, _)) => (category.to_string(), GENERAL_SUB_CATEGORY.to_string()),
        None => (label.to_string(), GENERAL_SUB_CATEGORY.to_string()),
    }
}
