//! Catalog error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no tile sheet registered for tier {0}")]
    MissingTier(u8),

    #[error("group index {index} out of range for tier {tier} (sheet has {len} groups)")]
    IndexOutOfRange { tier: u8, index: usize, len: usize },

    #[error("tile sheet for tier {tier} has no variant groups")]
    EmptySheet { tier: u8 },
}
