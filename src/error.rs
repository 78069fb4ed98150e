//! # Errors
//!
//! This module defines the single error type shared by every demonstration.
//! There are exactly two ways anything here can fail: a variant refusing a
//! capability its contract promised, or the output sink rejecting a write.

/// Errors that can occur while running a demonstration.
#[derive(Debug, thiserror::Error)]
pub enum SolidError {
    /// A variant was asked to perform a capability it does not have.
    ///
    /// Only the Liskov violation example produces this (see
    /// [`crate::lsp::violation::Ostrich`]).
    #[error("{variant} can't {capability}")]
    UnsupportedCapability {
        variant: &'static str,
        capability: &'static str,
    },

    /// Writing a line to the output sink failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolidError>;
