//! Load, save and update of the YAML partition info file.
//!
//! The file at the caller-supplied path is the only copy that outlives a
//! call. Every operation reads it fresh, works on a private
//! [`PartitionInfo`] and, for [`update`], writes the whole mapping back.
//!
//! There is no locking: two concurrent updates of the same file race and
//! the last save wins. Saves overwrite the file in place, so a crash in the
//! middle of a write can leave it truncated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::StoreError;
use crate::identity::decode_identity;
use crate::info::PartitionInfo;

/// Read and parse the mapping at `path`.
///
/// A missing file is an error, not an empty mapping; use [`init_store`] to
/// create one. A file with no YAML document in it (empty, only comments,
/// only `---`, or a bare null) is rejected as well, while a document holding
/// an explicit empty mapping (`{}`) loads as an empty `PartitionInfo`.
pub fn load(path: &Path) -> Result<PartitionInfo, StoreError> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let empty = || StoreError::Empty {
        path: path.to_path_buf(),
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(empty());
    }

    let info: PartitionInfo = serde_yaml::from_slice::<Option<PartitionInfo>>(&bytes)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(empty)?;

    tracing::debug!(path = %path.display(), entries = info.len(), "loaded partition info");
    Ok(info)
}

/// Serialize `info` and replace the contents of `path` with it.
pub fn save(info: &PartitionInfo, path: &Path) -> Result<(), StoreError> {
    let content = serde_yaml::to_string(info).map_err(StoreError::Serialize)?;
    std::fs::write(path, content).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), entries = info.len(), "saved partition info");
    Ok(())
}

/// Record the partition described by `encoded` (`label:name:uuid`) in the
/// file at `path`, replacing any UUID previously stored for the same label.
///
/// The file is only written after it has been loaded and the identity has
/// been decoded, so any failure before the save leaves it untouched.
pub fn update(encoded: &str, path: &Path) -> Result<(), StoreError> {
    let mut info = load(path)?;
    let (label, uuid) = decode_identity(encoded)?;

    if let Some(previous) = info.set(label, uuid) {
        if previous != uuid {
            tracing::warn!(
                label,
                previous = %previous,
                uuid,
                "partition label now points at a different UUID"
            );
        }
    }

    save(&info, path)?;
    tracing::info!(label, uuid, path = %path.display(), "updated partition label mapping");
    Ok(())
}

/// Load `path` and return the UUID recorded for `label`.
pub fn lookup_uuid(path: &Path, label: &str) -> Result<Option<String>, StoreError> {
    let info = load(path)?;
    Ok(info.uuid_for(label).map(str::to_string))
}

/// Create `path` holding an empty mapping unless it already exists.
///
/// Returns `true` if the file was created. An existing file is never
/// rewritten, whatever it contains.
pub fn init_store(path: &Path) -> Result<bool, StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "partition info file already exists");
            return Ok(false);
        }
        Err(e) => return Err(write_err(e)),
    };

    let content = serde_yaml::to_string(&PartitionInfo::new()).map_err(StoreError::Serialize)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;

    tracing::info!(path = %path.display(), "created empty partition info file");
    Ok(true)
}
