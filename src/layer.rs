//! Layers - positioned rectangular grids of character cells.
//!
//! A [`Layer`] is the capability a frame composites over: a position, a size,
//! and a total per-cell query. Concrete variants implement the trait directly
//! rather than inheriting from a common base; a frame never cares which kind
//! it is looking at.
//!
//! # Design Decisions
//!
//! - **Total queries**: `char_at` answers every local coordinate. Outside the
//!   layer's own bounds it returns [`CharPixel::CLEAR`] - out-of-range
//!   queries are a normal occurrence during compositing (most layers cover a
//!   small part of the frame) and must never fail.
//! - **Frozen per frame**: a [`crate::Frame`] borrows its layers, so the
//!   borrow checker rules out content changes becoming visible mid-scan.
//! - **Flat storage**: [`GridLayer`] uses `Vec<CharPixel>` with row-major
//!   indexing for cache efficiency.

use unicode_width::UnicodeWidthChar;

use crate::error::SceneError;
use crate::geometry::{BoundingBox, Vector2};
use crate::types::{Attr, CharPixel, Rgba};

// =============================================================================
// Layer capability
// =============================================================================

/// A positioned rectangular grid contributing cells to a composited scene.
///
/// `origin` and `dimens` are read by a frame once, at construction, to derive
/// the overall extent; `char_at` is queried per cell in *local* coordinates
/// (the layer is the authority on its own coordinate space).
pub trait Layer {
    /// Top-left corner, as an offset from the frame origin.
    fn origin(&self) -> Vector2;

    /// Width and height of this layer's grid.
    fn dimens(&self) -> Vector2;

    /// The cell at local coordinate (x, y).
    ///
    /// Total: coordinates outside `[0, width) x [0, height)` yield
    /// [`CharPixel::CLEAR`].
    fn char_at(&self, x: i32, y: i32) -> CharPixel;

    /// The layer's extent in frame coordinates.
    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.origin(), self.dimens())
    }
}

// =============================================================================
// GridLayer
// =============================================================================

/// A dense, positioned grid of cells with drawing primitives.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`.
/// Cells start out transparent, so an untouched region of a grid layer lets
/// lower layers show through.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayer {
    origin: Vector2,
    width: u16,
    height: u16,
    cells: Vec<CharPixel>,
}

impl GridLayer {
    /// Create a layer of the given size, fully transparent.
    pub fn new(origin: Vector2, width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            origin,
            width,
            height,
            cells: vec![CharPixel::CLEAR; size],
        }
    }

    /// Create a layer from pre-built cells in row-major order.
    ///
    /// Fails with [`SceneError::MalformedLayer`] when the cell count does not
    /// match `width * height`.
    pub fn from_cells(
        origin: Vector2,
        width: u16,
        height: u16,
        cells: Vec<CharPixel>,
    ) -> Result<Self, SceneError> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(SceneError::MalformedLayer {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            origin,
            width,
            height,
            cells,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if local coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Set a single cell. Returns true if the cell was set.
    pub fn set(&mut self, x: u16, y: u16, pixel: CharPixel) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = pixel;
        true
    }

    /// Reset every cell to transparent.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = CharPixel::CLEAR;
        }
    }

    /// Fill the whole grid with one pixel.
    pub fn fill(&mut self, pixel: CharPixel) {
        for cell in &mut self.cells {
            *cell = pixel;
        }
    }

    /// Fill a rectangle with one pixel, clamped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, pixel: CharPixel) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        if x2 <= x || y2 <= y {
            return;
        }
        for row in y..y2 {
            let row_start = self.index(x, row);
            let row_end = self.index(x2, row);
            for cell in &mut self.cells[row_start..row_end] {
                *cell = pixel;
            }
        }
    }

    /// Draw text starting at a position.
    ///
    /// Returns the number of columns used. Wide characters (CJK, emoji)
    /// occupy two cells; the second is an opaque continuation cell with
    /// glyph 0. Zero-width characters are skipped.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, bg: Rgba, attrs: Attr) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = ch.width().unwrap_or(0);
            if char_width == 0 {
                continue;
            }

            self.set(col, y, CharPixel::opaque(ch, fg, bg, attrs));
            if char_width == 2 && col + 1 < self.width {
                // Continuation marker for the second column of a wide glyph
                self.set(col + 1, y, CharPixel::from_codepoint(0, fg, bg, attrs));
            }

            col += char_width as u16;
        }

        col.saturating_sub(x)
    }
}

impl Layer for GridLayer {
    #[inline]
    fn origin(&self) -> Vector2 {
        self.origin
    }

    #[inline]
    fn dimens(&self) -> Vector2 {
        Vector2::new(self.width as i32, self.height as i32)
    }

    fn char_at(&self, x: i32, y: i32) -> CharPixel {
        if !BoundingBox::sized(self.dimens()).contains(Vector2::new(x, y)) {
            return CharPixel::CLEAR;
        }
        self.cells[self.index(x as u16, y as u16)]
    }
}

// =============================================================================
// FillLayer
// =============================================================================

/// A solid rectangle of one repeated pixel.
///
/// The sparse case: no backing storage, every in-bounds query answers the
/// same cell. Useful for full-frame backdrops and solid panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLayer {
    origin: Vector2,
    width: u16,
    height: u16,
    pixel: CharPixel,
}

impl FillLayer {
    /// Create a solid layer.
    pub const fn new(origin: Vector2, width: u16, height: u16, pixel: CharPixel) -> Self {
        Self {
            origin,
            width,
            height,
            pixel,
        }
    }

    /// The pixel this layer repeats.
    #[inline]
    pub const fn pixel(&self) -> CharPixel {
        self.pixel
    }
}

impl Layer for FillLayer {
    #[inline]
    fn origin(&self) -> Vector2 {
        self.origin
    }

    #[inline]
    fn dimens(&self) -> Vector2 {
        Vector2::new(self.width as i32, self.height as i32)
    }

    fn char_at(&self, x: i32, y: i32) -> CharPixel {
        if BoundingBox::sized(self.dimens()).contains(Vector2::new(x, y)) {
            self.pixel
        } else {
            CharPixel::CLEAR
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
