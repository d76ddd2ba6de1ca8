// Validation utilities for tool arguments
use crate::error::{Error, Result};
use tracing::warn;

/// Trim every entry, drop blank ones, and enforce an upper bound on the list size.
///
/// `field` names the argument in error messages.
pub fn clean_list(field: &str, items: &[String], max_items: usize) -> Result<Vec<String>> {
    if items.len() > max_items {
        warn!(
            "Rejected {} list with {} entries (max {})",
            field,
            items.len(),
            max_items
        );
        return Err(Error::Validation(format!(
            "Too many {field}: {} given, at most {max_items} allowed",
            items.len()
        )));
    }

    Ok(items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}
