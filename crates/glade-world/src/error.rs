//! Generation error types.

use glade_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// A catalog lookup failed mid-phase. The grid may be partially painted;
    /// callers should restart from phase 0.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A prop tile list is empty, so a scatter walk could never spend its
    /// budget. Checked before the walk starts.
    #[error("prop tile list '{kind}' is empty")]
    EmptyPropTiles { kind: &'static str },
}
