//! End-to-end code resolution
//!
//! Ties the stages together: parse the `label#id` code, decode the
//! base-62 id, fetch the record, unwrap the payload (base64 over a
//! serialized Java string), parse the YAML metadata, and resolve a
//! display label. [`process_lines`] applies the same resolution to a
//! whole shop listing at once.

use base64::prelude::*;

use crate::base62::Base62Error;
use crate::code::{CodeError, ItemCode};
use crate::display::resolve_display_name;
use crate::meta::{ItemMeta, MetaError};
use crate::objstream::{self, ObjStreamError};
use crate::store::{RecordStore, StoreError};

/// Errors that can occur while resolving an item code
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Malformed item code: {0}")]
    Code(#[from] CodeError),

    #[error("Invalid encoded id: {0}")]
    Base62(#[from] Base62Error),

    #[error("Item with id {0} not found in database")]
    NotFound(String),

    #[error("Failed to decode payload for item {id}: {source}")]
    Payload { id: i64, source: base64::DecodeError },

    #[error("Failed to deserialize item payload: {0}")]
    Stream(#[from] ObjStreamError),

    #[error("Invalid item metadata: {0}")]
    Meta(#[from] MetaError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve a raw `label#id` code to its display label.
///
/// The label part of the code is the fallback when the record's
/// metadata carries no name of its own. An empty result is possible:
/// a present `display-name` that cleans to nothing is returned as-is.
pub fn resolve_code<S: RecordStore>(store: &S, raw: &str) -> Result<String, ResolveError> {
    let code = ItemCode::parse(raw)?;
    let meta = code_metadata(store, &code)?;
    Ok(resolve_display_name(&meta, code.label()))
}

/// Metadata for the record an item code points at
pub fn code_metadata<S: RecordStore>(
    store: &S,
    code: &ItemCode,
) -> Result<ItemMeta, ResolveError> {
    let id = code.id()?;
    // Ids beyond i64 can never exist as SQLite row ids
    let id = i64::try_from(&id).map_err(|_| ResolveError::NotFound(id.to_string()))?;
    fetch_metadata(store, id)
}

/// Fetch a record by id and parse its payload into metadata
pub fn fetch_metadata<S: RecordStore>(store: &S, id: i64) -> Result<ItemMeta, ResolveError> {
    let record = store
        .lookup(id)?
        .ok_or_else(|| ResolveError::NotFound(id.to_string()))?;
    let raw = BASE64_STANDARD
        .decode(record.payload.trim())
        .map_err(|source| ResolveError::Payload { id, source })?;
    let yaml = objstream::read_string(&raw)?;
    Ok(ItemMeta::from_yaml(&yaml)?)
}

/// Summary of a bulk line-processing run
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    /// Output lines, one per input line
    pub lines: Vec<String>,
    /// Lines whose code resolved to a non-empty label
    pub replaced: usize,
    /// Lines left as they were, including failed resolutions
    pub kept: usize,
    /// Codes that failed to resolve, with the error text
    pub failures: Vec<(String, String)>,
}

/// Resolve every item code in a shop listing.
///
/// Each line is trimmed. Lines containing `#` are treated as item codes
/// and replaced by their resolved label; failed resolutions and labels
/// that come back empty keep the original line, so a listing can be
/// processed again after the database is fixed. Lines without `#` pass
/// through untouched. Output is produced for every input line, in
/// order.
pub fn process_lines<S, L>(store: &S, input: &[L]) -> ProcessOutcome
where
    S: RecordStore,
    L: AsRef<str>,
{
    let mut outcome = ProcessOutcome::default();

    for line in input {
        let line = line.as_ref().trim();
        if !line.contains('#') {
            outcome.lines.push(line.to_string());
            outcome.kept += 1;
            continue;
        }

        match resolve_code(store, line) {
            Ok(label) if !label.is_empty() => {
                outcome.lines.push(label);
                outcome.replaced += 1;
            }
            Ok(_) => {
                outcome.lines.push(line.to_string());
                outcome.kept += 1;
            }
            Err(error) => {
                outcome.lines.push(line.to_string());
                outcome.kept += 1;
                outcome.failures.push((line.to_string(), error.to_string()));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ItemRecord, StoreResult};
    use std::collections::HashMap;

    struct MemoryStore {
        records: HashMap<i64, String>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                records: HashMap::new(),
            }
        }

        fn insert_yaml(&mut self, id: i64, yaml: &str) {
            self.records.insert(id, encode_payload(yaml));
        }

        fn insert_raw(&mut self, id: i64, payload: &str) {
            self.records.insert(id, payload.to_string());
        }
    }

    impl RecordStore for MemoryStore {
        fn lookup(&self, id: i64) -> StoreResult<Option<ItemRecord>> {
            Ok(self.records.get(&id).map(|payload| ItemRecord {
                id,
                payload: payload.clone(),
            }))
        }
    }

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn lookup(&self, _id: i64) -> StoreResult<Option<ItemRecord>> {
            Err(StoreError::Database("disk on fire".to_string()))
        }
    }

    /// Base64 of a serialized-string stream wrapping `yaml`
    fn encode_payload(yaml: &str) -> String {
        let mut stream = vec![0xAC, 0xED, 0x00, 0x05, 0x74];
        stream.extend_from_slice(&(yaml.len() as u16).to_be_bytes());
        stream.extend_from_slice(yaml.as_bytes());
        BASE64_STANDARD.encode(stream)
    }

    #[test]
    fn test_resolve_display_name() {
        let mut store = MemoryStore::new();
        store.insert_yaml(10783, "meta:\n  display-name: '\"My Sword\"'\n");
        assert_eq!(resolve_code(&store, "Apple#2NV").unwrap(), "My Sword");
    }

    #[test]
    fn test_resolve_falls_back_to_label() {
        let mut store = MemoryStore::new();
        store.insert_yaml(1, "type: STICK\n");
        assert_eq!(resolve_code(&store, "Stick#1").unwrap(), "Stick");
    }

    #[test]
    fn test_resolve_empty_display_name_stays_empty() {
        let mut store = MemoryStore::new();
        store.insert_yaml(1, "meta:\n  display-name: '{\"text\":\"\"}'\n");
        assert_eq!(resolve_code(&store, "Stick#1").unwrap(), "");
    }

    #[test]
    fn test_resolve_payload_with_whitespace() {
        let mut store = MemoryStore::new();
        let payload = format!("{}\n", encode_payload("meta:\n  display-name: Clean\n"));
        store.insert_raw(7, &payload);
        assert_eq!(resolve_code(&store, "X#7").unwrap(), "Clean");
    }

    #[test]
    fn test_resolve_unknown_id() {
        let store = MemoryStore::new();
        let error = resolve_code(&store, "Apple#zz").unwrap_err();
        assert!(matches!(error, ResolveError::NotFound(ref id) if id == "2205"));
    }

    #[test]
    fn test_resolve_id_beyond_row_id_range() {
        let store = MemoryStore::new();
        let big = num_bigint::BigUint::from(u64::MAX);
        let raw = format!("Item#{}", crate::base62::encode(&big));
        let error = resolve_code(&store, &raw).unwrap_err();
        assert!(matches!(error, ResolveError::NotFound(ref id) if *id == u64::MAX.to_string()));
    }

    #[test]
    fn test_resolve_malformed_code() {
        let store = MemoryStore::new();
        assert!(matches!(
            resolve_code(&store, "Apple"),
            Err(ResolveError::Code(_))
        ));
    }

    #[test]
    fn test_resolve_invalid_symbol() {
        let store = MemoryStore::new();
        assert!(matches!(
            resolve_code(&store, "Apple#2N!"),
            Err(ResolveError::Base62(_))
        ));
    }

    #[test]
    fn test_resolve_bad_base64_payload() {
        let mut store = MemoryStore::new();
        store.insert_raw(1, "not base64!!");
        assert!(matches!(
            resolve_code(&store, "X#1"),
            Err(ResolveError::Payload { id: 1, .. })
        ));
    }

    #[test]
    fn test_resolve_bad_stream_payload() {
        let mut store = MemoryStore::new();
        store.insert_raw(1, &BASE64_STANDARD.encode([0u8, 1, 2, 3]));
        assert!(matches!(
            resolve_code(&store, "X#1"),
            Err(ResolveError::Stream(_))
        ));
    }

    #[test]
    fn test_resolve_bad_yaml_payload() {
        let mut store = MemoryStore::new();
        store.insert_yaml(1, "meta: [unclosed\n");
        assert!(matches!(
            resolve_code(&store, "X#1"),
            Err(ResolveError::Meta(_))
        ));
    }

    #[test]
    fn test_resolve_store_failure() {
        assert!(matches!(
            resolve_code(&FailingStore, "X#1"),
            Err(ResolveError::Store(_))
        ));
    }

    mod process_tests {
        use super::*;

        fn listing_store() -> MemoryStore {
            let mut store = MemoryStore::new();
            store.insert_yaml(1, "meta:\n  display-name: '\"My Sword\"'\n");
            store.insert_yaml(2, "type: STONE\n");
            store
        }

        #[test]
        fn test_mixed_listing() {
            let store = listing_store();
            let input = [
                "Apple#1",
                "  Stone#2  ",
                "plain line",
                "Broken#x#y",
                "Ghost#zz",
                "",
            ];
            let outcome = process_lines(&store, &input);

            assert_eq!(
                outcome.lines,
                vec!["My Sword", "Stone", "plain line", "Broken#x#y", "Ghost#zz", ""]
            );
            assert_eq!(outcome.replaced, 2);
            assert_eq!(outcome.kept, 4);
            assert_eq!(outcome.failures.len(), 2);
            assert_eq!(outcome.failures[0].0, "Broken#x#y");
            assert_eq!(outcome.failures[1].0, "Ghost#zz");
        }

        #[test]
        fn test_empty_label_keeps_line() {
            let mut store = MemoryStore::new();
            store.insert_yaml(1, "meta:\n  display-name: '{\"text\":\"\"}'\n");
            let outcome = process_lines(&store, &["Gone#1"]);

            assert_eq!(outcome.lines, vec!["Gone#1"]);
            assert_eq!(outcome.replaced, 0);
            assert_eq!(outcome.kept, 1);
            assert!(outcome.failures.is_empty());
        }

        #[test]
        fn test_second_pass_is_stable() {
            let store = listing_store();
            let input = ["Apple#1", "plain line", "Ghost#zz"];
            let first = process_lines(&store, &input);
            let second = process_lines(&store, &first.lines);

            assert_eq!(first.lines, second.lines);
            assert_eq!(second.replaced, 0);
        }

        #[test]
        fn test_empty_input() {
            let store = MemoryStore::new();
            let outcome = process_lines(&store, &[] as &[&str]);
            assert!(outcome.lines.is_empty());
            assert_eq!(outcome.replaced, 0);
            assert_eq!(outcome.kept, 0);
        }
    }
}
