//! # glyphstack
//!
//! Layered character-grid scene compositing for terminal renderers.
//!
//! An external engine builds positioned [`Layer`]s once per render tick and
//! stacks them into a [`Frame`]; the frame resolves, per coordinate, the
//! topmost non-transparent [`CharPixel`]. A display driver then diffs the
//! resolved cells against an [`OutputBuffer`] and redraws only what changed.
//!
//! ```text
//! engine builds layers → Frame::new(&stack) → char_at(x, y) per cell
//!                                                   │
//!                              OutputBuffer::diff ←─┘ → CellPatch list → driver
//! ```
//!
//! The crate decides nothing about *when* to render and performs no I/O:
//! compositing one frame is a bounded, synchronous, pull-based computation,
//! and all coordinate queries are total functions with [`CharPixel::CLEAR`]
//! as the safe default.
//!
//! One inherited quirk, kept deliberately for caller compatibility: an empty
//! layer sequence yields a frame of width 0 but height 1.
//!
//! ## Modules
//!
//! - [`geometry`] - Vector2 and BoundingBox primitives
//! - [`types`] - Rgba, Attr, CharPixel
//! - [`layer`] - the Layer capability and concrete grid/fill variants
//! - [`frame`] - the compositing algorithm
//! - [`output`] - the diffing cache a display driver owns

pub mod error;
pub mod frame;
pub mod geometry;
pub mod layer;
pub mod output;
pub mod types;

// Re-export the working set
pub use error::SceneError;
pub use frame::Frame;
pub use geometry::{BoundingBox, Vector2};
pub use layer::{FillLayer, GridLayer, Layer};
pub use output::{CellPatch, OutputBuffer};
pub use types::{Attr, CharPixel, Rgba};
