//! Loading of named indexes and their metadata sidecars.

use crate::config::IntegrityCheck;
use crate::error::{Result, SemsearchError};
use crate::index::VectorIndex;
use log::warn;

pub mod file;
pub mod metadata;

pub use file::FileIndexStorage;
pub use metadata::{FileRecord, IndexMetadata};

/// Resolves an index name to a loaded index and its metadata.
#[cfg_attr(test, mockall::automock)]
pub trait IndexStore {
    /// Loads the index called `name`.
    fn load_index(&self, name: &str) -> Result<(Box<dyn VectorIndex>, IndexMetadata)>;
}

/// Compares the vector count with the number of metadata records.
///
/// Equal counts do not prove alignment, but unequal counts prove misalignment.
pub fn check_integrity(
    index_name: &str,
    num_vectors: usize,
    metadata: &IndexMetadata,
    policy: IntegrityCheck,
) -> Result<()> {
    let num_files = metadata.files.len();
    if policy == IntegrityCheck::Off || num_vectors == num_files {
        return Ok(());
    }

    let message = format!(
        "index '{index_name}' holds {num_vectors} vectors but its metadata lists {num_files} files"
    );
    match policy {
        IntegrityCheck::Strict => Err(SemsearchError::IndexIntegrity(message)),
        _ => {
            warn!("{message}; results may be misattributed");
            Ok(())
        }
    }
}
