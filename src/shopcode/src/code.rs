//! Item code parsing
//!
//! Shop lines reference items as `label#id`: a human-readable label, a
//! `#` separator, and a base-62 encoded database id. `Apple#2NV` points
//! at record 10783 under the label `Apple`.

use std::fmt;

use num_bigint::BigUint;

use crate::base62::{self, Base62Error};

/// Errors that can occur while parsing an item code
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("Item code '{0}' is not of the form label#id")]
    Malformed(String),

    #[error("Item code '{0}' has an empty encoded id")]
    EmptyEncodedId(String),
}

/// A `label#id` item reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCode {
    label: String,
    encoded_id: String,
}

impl ItemCode {
    /// Parse a raw `label#id` code.
    ///
    /// Exactly one `#` must be present and the id part must be
    /// non-empty. The label may be empty.
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        let mut parts = raw.split('#');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(label), Some(encoded_id), None) => {
                if encoded_id.is_empty() {
                    return Err(CodeError::EmptyEncodedId(raw.to_string()));
                }
                Ok(Self {
                    label: label.to_string(),
                    encoded_id: encoded_id.to_string(),
                })
            }
            _ => Err(CodeError::Malformed(raw.to_string())),
        }
    }

    /// Label part, before the `#`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Encoded id part, after the `#`
    pub fn encoded_id(&self) -> &str {
        &self.encoded_id
    }

    /// Decode the id part from base-62
    pub fn id(&self) -> Result<BigUint, Base62Error> {
        base62::decode(&self.encoded_id)
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.encoded_id)
    }
}
