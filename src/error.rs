//! Error taxonomy for scene construction.
//!
//! Coordinate queries are total functions and never error; the only fallible
//! operations are the ones that build layers and frames from caller-supplied
//! data. Errors are reported synchronously to the caller that supplied the
//! bad input, and re-running with the same inputs yields the same outcome.

use thiserror::Error;

/// Errors produced while building a layer or a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The layer sequence handed to a frame cannot produce sensible
    /// dimensions (negative extent, or an extent outside the i32 range).
    #[error("invalid layer sequence: layer {index} {reason}")]
    InvalidLayerSequence {
        /// Index of the offending layer in the input sequence.
        index: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A layer's backing grid does not match its advertised dimensions.
    #[error("malformed layer: {width}x{height} grid needs {expected} cells, got {actual}")]
    MalformedLayer {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },
}
