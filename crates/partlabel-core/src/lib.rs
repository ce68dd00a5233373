pub mod error;
pub mod identity;
pub mod info;
pub mod store;

#[cfg(test)]
mod test_util;

pub use error::{ErrorKind, StoreError};
pub use identity::{decode_identity, PartitionIdentity};
pub use info::PartitionInfo;
pub use store::{init_store, load, lookup_uuid, save, update};
