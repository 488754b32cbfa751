use stresswatch_core::error::CoreError;
use stresswatch_core::types::DbId;
use stresswatch_db::StoreError;

/// Errors returned by pipeline operations.
///
/// Validation failures happen before any write. Storage failures are split
/// by stage so callers can tell when a reading was already persisted.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input rejected before anything was written.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The reading write failed; nothing was persisted.
    #[error("Failed to store reading: {0}")]
    ReadingWrite(#[source] StoreError),

    /// The reading was persisted but its alert write failed.
    #[error("Reading {reading_id} stored but its alert was not: {source}")]
    AlertWrite {
        reading_id: DbId,
        #[source]
        source: StoreError,
    },

    /// Any other store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl PipelineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }

    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::ReadingWrite(_) | Self::AlertWrite { .. } | Self::Storage(_)
        )
    }
}
