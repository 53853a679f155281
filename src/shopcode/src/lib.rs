//! # shopcode
//!
//! ChestShop item code resolver library - base-62 ids, item metadata,
//! and display names.
//!
//! This library provides functionality to:
//! - Parse `label#id` item codes and decode their base-62 ids
//! - Read serialized Java string payloads back into YAML text
//! - Parse item metadata and resolve display labels
//! - Rewrite whole shop listings through a pluggable record store
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse a shop line's item code
//! let code = shopcode::ItemCode::parse("Apple#2NV")?;
//! assert_eq!(code.label(), "Apple");
//! assert_eq!(code.id()?, 10783u32.into());
//!
//! // Metadata from a record payload resolves to a display label
//! let meta = shopcode::ItemMeta::from_yaml("meta:\n  display-name: '\"My Sword\"'\n")?;
//! let label = shopcode::resolve_display_name(&meta, code.label());
//! assert_eq!(label, "My Sword");
//! # Ok(())
//! # }
//! ```

pub mod base62;
pub mod code;
pub mod display;
pub mod enchant;
pub mod meta;
pub mod objstream;
pub mod pipeline;
pub mod store;

// Re-export commonly used items
#[doc(inline)]
pub use base62::{Base62Error, BASE62_ALPHABET};
#[doc(inline)]
pub use code::{CodeError, ItemCode};
#[doc(inline)]
pub use display::resolve_display_name;
#[doc(inline)]
pub use meta::{ItemMeta, MetaError};
#[doc(inline)]
pub use objstream::ObjStreamError;
#[doc(inline)]
pub use pipeline::{
    code_metadata, fetch_metadata, process_lines, resolve_code, ProcessOutcome, ResolveError,
};
#[doc(inline)]
pub use store::{ItemRecord, RecordStore, StoreError, StoreResult};

// Enchantment reference data (names, numeric ids, level numerals)
#[doc(inline)]
pub use enchant::{
    enchantment_by_id, enchantment_by_key, enchantment_name, level_numeral,
    NamespacedEnchantment, NumericEnchantment, NAMESPACED_ENCHANTMENTS, NUMERIC_ENCHANTMENTS,
    ROMAN_NUMERALS,
};
