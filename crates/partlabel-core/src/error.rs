use std::path::PathBuf;

/// Coarse classification of a [`StoreError`], for callers that only care
/// about which phase failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The store file could not be read or written.
    Io,
    /// The store file exists but does not hold a label to UUID mapping.
    Decode,
    /// The mapping could not be serialized.
    Encode,
    /// An encoded identity did not have the `label:name:uuid` shape.
    MalformedIdentity,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reading the partition info file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unmarshalling partition info file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("partition info file {} is empty", path.display())]
    Empty { path: PathBuf },

    #[error("marshalling the new partition info to yaml")]
    Serialize(#[source] serde_yaml::Error),

    #[error("writing back the partition info file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed partition identity `{input}`: expected label:name:uuid, got {fields} field(s)")]
    MalformedIdentity { input: String, fields: usize },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Write { .. } => ErrorKind::Io,
            Self::Parse { .. } | Self::Empty { .. } => ErrorKind::Decode,
            Self::Serialize(_) => ErrorKind::Encode,
            Self::MalformedIdentity { .. } => ErrorKind::MalformedIdentity,
        }
    }
}
