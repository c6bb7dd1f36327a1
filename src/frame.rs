//! Frame - one complete, ordered stack of layers.
//!
//! A frame represents a single renderable instant: the layer sequence for
//! exactly one render pass, plus the overall extent derived from it. The
//! driving loop builds a new frame every tick and discards it after querying
//! every cell; a frame never mutates (or outlives the borrow of) its layers.
//!
//! # Compositing
//!
//! `char_at` scans the stack from the topmost layer downward and stops at the
//! first non-transparent cell - painter's-algorithm occlusion without
//! pre-flattening the scene. That matters because layers are usually sparse:
//! most layers cover a small part of the frame and most queries fall through
//! to [`CharPixel::CLEAR`]. When two layers both have an opaque cell at one
//! coordinate, the later index wins unconditionally; there is no blending or
//! priority beyond stack order.

use crate::error::SceneError;
use crate::geometry::Vector2;
use crate::layer::Layer;
use crate::types::CharPixel;

/// One ordered stack of layers with its derived extent.
///
/// Insertion order is z-order: the last layer in the slice renders on top.
/// The frame holds shared borrows only, so layer content is frozen for the
/// frame's lifetime by construction.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    layers: &'a [&'a dyn Layer],
    width: i32,
    height: i32,
}

impl<'a> Frame<'a> {
    /// Build a frame from an ordered layer sequence.
    ///
    /// Overall dimensions are computed once, here, by folding every layer's
    /// `origin + dimens`: width is the maximum right edge (floor 0), height
    /// the maximum bottom edge with a floor of 1 even for an empty sequence.
    /// The height floor is a compatibility contract with existing callers -
    /// see the crate docs.
    ///
    /// Fails with [`SceneError::InvalidLayerSequence`] when a layer reports
    /// negative dimensions or an extent outside the i32 range; dimensions
    /// derived from such a sequence would be nonsense, so this is rejected
    /// here rather than surfacing as misrendering later.
    pub fn new(layers: &'a [&'a dyn Layer]) -> Result<Self, SceneError> {
        let mut width: i32 = 0;
        let mut height: i32 = 1;

        for (index, layer) in layers.iter().enumerate() {
            let origin = layer.origin();
            let dimens = layer.dimens();

            if dimens.x < 0 || dimens.y < 0 {
                return Err(SceneError::InvalidLayerSequence {
                    index,
                    reason: "has negative dimensions",
                });
            }

            let right = origin.x.checked_add(dimens.x);
            let bottom = origin.y.checked_add(dimens.y);
            let (Some(right), Some(bottom)) = (right, bottom) else {
                return Err(SceneError::InvalidLayerSequence {
                    index,
                    reason: "extent overflows the coordinate range",
                });
            };

            width = width.max(right);
            height = height.max(bottom);
        }

        log::trace!("frame: {} layers, {}x{}", layers.len(), width, height);

        Ok(Self {
            layers,
            width,
            height,
        })
    }

    /// Overall width and height, frozen at construction.
    #[inline]
    pub fn dimens(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Number of layers in the stack.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The visible cell at global coordinate (x, y).
    ///
    /// Total for any i32 pair: coordinates no layer covers (including
    /// everything outside `dimens()`) resolve to [`CharPixel::CLEAR`].
    /// Querying outside the frame's own extent is a defined no-op, not an
    /// error; callers normally only scan within `dimens()`.
    pub fn char_at(&self, x: i32, y: i32) -> CharPixel {
        let p = Vector2::new(x, y);
        for layer in self.layers.iter().rev() {
            let local = p.saturating_sub(layer.origin());
            let pixel = layer.char_at(local.x, local.y);
            if !pixel.is_transparent() {
                return pixel;
            }
        }
        CharPixel::CLEAR
    }

    /// Row-major iterator over every resolved cell within `dimens()`.
    ///
    /// This is the shape a diffing consumer wants: the full extent, in the
    /// order it writes output.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, CharPixel)> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y, self.char_at(x, y))))
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("layers", &self.layers.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
