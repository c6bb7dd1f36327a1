//! OutputBuffer - the renderer-owned cache of previously drawn cells.
//!
//! A display driver resolves a new [`Frame`] every tick, but rewriting every
//! cell is wasteful: most frames differ from the previous one in a handful of
//! cells. The OutputBuffer holds what was last written so the driver can emit
//! only the changes.
//!
//! # Algorithm
//!
//! 1. If the frame's dimensions differ from the buffer's, reallocate and
//!    drop the old contents - a size change always forces a full re-emit.
//! 2. For each cell in the frame: if the buffer is primed and the stored
//!    cell is equal, skip; otherwise record a patch and store the new value.
//! 3. Hand the patch list to the driver and mark the buffer primed.
//!
//! This component does not run the compositing algorithm and does not write
//! to any terminal; it is a downstream cache keyed by coordinate.

use crate::frame::Frame;
use crate::types::CharPixel;

// =============================================================================
// CellPatch
// =============================================================================

/// One cell a display driver must redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPatch {
    pub x: i32,
    pub y: i32,
    pub pixel: CharPixel,
}

// =============================================================================
// OutputBuffer
// =============================================================================

/// A sized grid of the previously resolved cells.
///
/// Uses flat storage with row-major indexing, like every grid in this crate.
/// An unprimed buffer (fresh, resized, or invalidated) diffs as if every
/// cell changed.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBuffer {
    width: i32,
    height: i32,
    cells: Vec<CharPixel>,
    primed: bool,
}

impl OutputBuffer {
    /// Create an empty, unprimed buffer.
    ///
    /// The first `diff` will size it to the active frame.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            primed: false,
        }
    }

    /// (Re)allocate to the given size, discarding previous contents.
    ///
    /// Dimensions are clamped to a floor of 0. The buffer comes back
    /// unprimed: whatever was on screen before is no longer trusted.
    pub fn init(&mut self, width: i32, height: i32) {
        let width = width.max(0);
        let height = height.max(0);
        log::debug!("output buffer: init {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, CharPixel::CLEAR);
        self.primed = false;
    }

    /// Buffer width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the buffer holds a trusted previous frame.
    #[inline]
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// The stored cell at (x, y), if in bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&CharPixel> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
    }

    /// Forget the previous frame; the next diff emits every cell.
    ///
    /// Use after the screen may have been corrupted by something outside
    /// the driver's control.
    pub fn invalidate(&mut self) {
        self.primed = false;
    }

    /// Diff a frame against the stored cells.
    ///
    /// Returns the cells that changed (all of them when the buffer was
    /// unprimed or the frame size differs), stores the frame's cells, and
    /// primes the buffer. Two consecutive diffs of the same frame yield an
    /// empty patch list.
    pub fn diff(&mut self, frame: &Frame<'_>) -> Vec<CellPatch> {
        let dimens = frame.dimens();
        if dimens.x != self.width || dimens.y != self.height {
            self.init(dimens.x, dimens.y);
        }

        let mut patches = Vec::new();
        let primed = self.primed;

        for (x, y, pixel) in frame.cells() {
            let idx = y as usize * self.width as usize + x as usize;
            if !primed || self.cells[idx] != pixel {
                patches.push(CellPatch { x, y, pixel });
                self.cells[idx] = pixel;
            }
        }

        self.primed = true;
        patches
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector2;
    use crate::layer::{GridLayer, Layer};

    fn opaque_grid(origin: Vector2, width: u16, height: u16, glyph: char) -> GridLayer {
        let mut layer = GridLayer::new(origin, width, height);
        layer.fill(CharPixel::from_char(glyph));
        layer
    }

    #[test]
    fn test_first_diff_emits_everything() {
        let layer = opaque_grid(Vector2::ZERO, 3, 2, '#');
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        let patches = buffer.diff(&frame);
        assert_eq!(patches.len(), 6);
        assert!(buffer.is_primed());
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
    }

    #[test]
    fn test_unchanged_frame_diffs_empty() {
        let layer = opaque_grid(Vector2::ZERO, 3, 2, '#');
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        buffer.diff(&frame);
        assert!(buffer.diff(&frame).is_empty());
    }

    #[test]
    fn test_diff_reports_only_changed_cells() {
        let mut layer = opaque_grid(Vector2::ZERO, 3, 2, '#');
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        buffer.diff(&frame);

        // Next tick: one cell changes
        layer.set(1, 1, CharPixel::from_char('@'));
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();
        let patches = buffer.diff(&frame);

        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].x, 1);
        assert_eq!(patches[0].y, 1);
        assert_eq!(patches[0].pixel.as_char(), Some('@'));
    }

    #[test]
    fn test_resize_forces_full_emit() {
        let small = opaque_grid(Vector2::ZERO, 2, 2, 'a');
        let layers: Vec<&dyn Layer> = vec![&small];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        buffer.diff(&frame);

        let big = opaque_grid(Vector2::ZERO, 4, 4, 'a');
        let layers: Vec<&dyn Layer> = vec![&big];
        let frame = Frame::new(&layers).unwrap();
        let patches = buffer.diff(&frame);

        assert_eq!(patches.len(), 16);
        assert_eq!(buffer.width(), 4);
    }

    #[test]
    fn test_invalidate_forces_full_emit() {
        let layer = opaque_grid(Vector2::ZERO, 3, 2, '#');
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        buffer.diff(&frame);
        buffer.invalidate();
        assert!(!buffer.is_primed());
        assert_eq!(buffer.diff(&frame).len(), 6);
    }

    #[test]
    fn test_get_bounds() {
        let layer = opaque_grid(Vector2::ZERO, 2, 1, 'x');
        let layers: Vec<&dyn Layer> = vec![&layer];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        buffer.diff(&frame);

        assert_eq!(buffer.get(0, 0).unwrap().as_char(), Some('x'));
        assert!(buffer.get(2, 0).is_none());
        assert!(buffer.get(-1, 0).is_none());
    }

    #[test]
    fn test_empty_frame_diff() {
        let layers: Vec<&dyn Layer> = vec![];
        let frame = Frame::new(&layers).unwrap();

        let mut buffer = OutputBuffer::new();
        // Empty scene is 0x1: zero cells to patch
        let patches = buffer.diff(&frame);
        assert!(patches.is_empty());
        assert_eq!(buffer.height(), 1);
        assert_eq!(buffer.width(), 0);
    }
}
