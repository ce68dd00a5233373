//! The `label:name:uuid` encoding of a partition's identity.
//!
//! This is the string an enrollment tool prints after encrypting a
//! partition, and the input [`crate::store::update`] consumes. Fields are
//! joined with a bare `:` and nothing is escaped, so a label or device name
//! that itself contains `:` cannot be decoded.

use std::fmt;

use crate::error::StoreError;

const SEPARATOR: char = ':';

/// One partition as reported by block-device inspection at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionIdentity {
    pub label: String,
    /// Kernel-assigned node name. Carried through the encoding, never a key.
    pub name: String,
    pub uuid: String,
}

impl PartitionIdentity {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            uuid: uuid.into(),
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PartitionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.label, self.name, self.uuid
        )
    }
}

/// Split an encoded identity into `(label, uuid)`, dropping the device name.
///
/// Surrounding whitespace is ignored so captured command output can be
/// passed through as-is. Anything other than exactly three fields is
/// rejected.
pub fn decode_identity(encoded: &str) -> Result<(&str, &str), StoreError> {
    let trimmed = encoded.trim();
    let fields: Vec<&str> = trimmed.split(SEPARATOR).collect();

    match fields.as_slice() {
        [label, _name, uuid] => Ok((*label, *uuid)),
        _ => Err(StoreError::MalformedIdentity {
            input: trimmed.to_string(),
            fields: fields.len(),
        }),
    }
}
