//! Display name resolution
//!
//! An item's display label comes from the first metadata field that
//! yields one, in strict order:
//!
//! 1. `meta.display-name`, cleaned of one quote layer and, when it is a
//!    JSON rich-text component, reduced to its plain text
//! 2. `meta.title` (written books), cleaned of one quote layer
//! 3. `meta.stored-enchants`, summarized as
//!    `Enchanted Book [Name Numeral, ...]`
//! 4. the caller-supplied fallback label
//!
//! An empty field falls through to the next branch, but a non-empty
//! `display-name` that merely cleans to an empty string still wins over
//! a title further down the chain.

use crate::enchant;
use crate::meta::{scalar_string, ItemMeta};

/// Resolve the display label for an item.
///
/// `fallback` is returned when no metadata field yields a label; it is
/// normally the label part of the item code.
pub fn resolve_display_name(meta: &ItemMeta, fallback: &str) -> String {
    if let Some(name) = meta.display_name() {
        if !name.is_empty() {
            return clean_rich_name(&name);
        }
    }
    if let Some(title) = meta.title() {
        if !title.is_empty() {
            return strip_quotes(&title).to_string();
        }
    }
    if let Some(enchants) = meta.stored_enchants() {
        let parts = enchant_parts(enchants);
        if !parts.is_empty() {
            return format!("Enchanted Book [{}]", parts.join(", "));
        }
    }
    fallback.to_string()
}

/// Reduce a raw display-name value to plain text.
///
/// Strips one layer of surrounding quotes, then unwraps JSON rich-text
/// components: a non-empty `text` field wins, else the first `extra`
/// element. Text that merely looks brace-delimited but fails to parse
/// is returned as-is.
fn clean_rich_name(name: &str) -> String {
    let stripped = strip_quotes(name);
    if !(stripped.starts_with('{') && stripped.ends_with('}')) {
        return stripped.to_string();
    }

    let component: serde_json::Value = match serde_json::from_str(stripped) {
        Ok(value) => value,
        Err(_) => return stripped.to_string(),
    };

    if let Some(text) = component.get("text").and_then(serde_json::Value::as_str) {
        if !text.is_empty() {
            return text.to_string();
        }
    }
    if let Some(extra) = component.get("extra").and_then(serde_json::Value::as_array) {
        if let Some(first) = extra.first() {
            if let Some(text) = first.as_str() {
                return text.to_string();
            }
            if let Some(text) = first.get("text").and_then(serde_json::Value::as_str) {
                return text.to_string();
            }
        }
    }
    String::new()
}

/// Strip one layer of surrounding double quotes
fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// `"Name Numeral"` part for each enchantment entry, in document order
fn enchant_parts(enchants: &serde_yaml::Mapping) -> Vec<String> {
    let mut parts = Vec::new();
    for (key, level) in enchants {
        let key_text = match scalar_string(key) {
            Some(text) => text,
            None => continue,
        };
        let name = enchant::enchantment_name(&key_text);
        let level_text = match level.as_i64() {
            Some(level) => enchant::level_numeral(level),
            None => match scalar_string(level) {
                Some(text) => text,
                None => continue,
            },
        };
        parts.push(format!("{name} {level_text}"));
    }
    parts
}
