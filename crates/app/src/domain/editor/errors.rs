//! Editor errors.

use thiserror::Error;

use crate::domain::products::{ProductsServiceError, ValidationError};

/// Why an editor action was refused or failed.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The editor has no open session.
    #[error("no product is open in the editor")]
    NoDraft,

    /// A second upload was started before the first finished.
    #[error("an image upload is already in progress")]
    UploadInProgress,

    /// The upload's session was cancelled or replaced while it ran.
    #[error("upload belongs to a session that is no longer open")]
    StaleUpload,

    /// Another upload or save is running.
    #[error("the editor is busy")]
    Busy,

    /// No draft image at the given position.
    #[error("no image at index {index} (draft has {len})")]
    ImageIndex {
        /// Requested position.
        index: usize,

        /// Number of images in the draft.
        len: usize,
    },

    /// The draft failed local checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the write.
    #[error(transparent)]
    Products(#[from] ProductsServiceError),
}
