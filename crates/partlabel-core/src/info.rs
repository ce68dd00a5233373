//! `PartitionInfo`, the in-memory label to UUID mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Maps a partition label to a partition UUID.
///
/// Lets a caller ask for a partition's passphrase by label even when the
/// label is not readable yet (the partition is still encrypted): the UUID
/// recorded here identifies the partition, and the label can be found again
/// from the UUID.
///
/// Backed by a sorted map so the serialized form is stable. The mapping is a
/// record, not a live view: entries may refer to partitions that no longer
/// exist.
///
/// A null value (`boot: ~`) loads as an empty UUID rather than as the
/// literal text of the null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PartitionInfo(BTreeMap<String, String>);

impl PartitionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uuid_for(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Reverse lookup by linear scan. If several labels point at the same
    /// UUID, the first label in sorted order is returned.
    pub fn label_for(&self, uuid: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, u)| u.as_str() == uuid)
            .map(|(label, _)| label.as_str())
    }

    /// Point `label` at `uuid`, returning the UUID it replaced, if any.
    pub fn set(&mut self, label: impl Into<String>, uuid: impl Into<String>) -> Option<String> {
        self.0.insert(label.into(), uuid.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries as `(label, uuid)`, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }
}

impl FromIterator<(String, String)> for PartitionInfo {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for PartitionInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(label, uuid)| (label, uuid.unwrap_or_default()))
            .collect())
    }
}
