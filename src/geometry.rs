//! Geometric primitives for layer placement.
//!
//! Everything here is a plain `Copy` value: operations allocate a new value
//! and nothing exposes a mutator. Coordinates are `i32` so that layers can be
//! positioned partially off-frame (negative origins) without special cases.

use std::ops::Add;

// =============================================================================
// Vector2
// =============================================================================

/// An immutable 2D integer point or size.
///
/// Equality is structural; addition produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    /// The origin / zero size.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition that saturates instead of wrapping.
    ///
    /// Used on the compositing path where a far-off coordinate must stay a
    /// far-off coordinate rather than wrap back into range.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }

    /// Component-wise subtraction that saturates instead of wrapping.
    #[inline]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

// =============================================================================
// BoundingBox
// =============================================================================

/// An immutable rectangle: top-left corner plus dimensions.
///
/// Containment follows the half-open rule - the right and bottom edges are
/// excluded. A box with a zero or negative dimension contains no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub top_left: Vector2,
    pub dimens: Vector2,
}

impl BoundingBox {
    /// Create a box from a top-left corner and dimensions.
    ///
    /// Negative dimensions are representable; such a box is empty.
    #[inline]
    pub const fn new(top_left: Vector2, dimens: Vector2) -> Self {
        Self { top_left, dimens }
    }

    /// Create a box of the given dimensions anchored at the origin.
    ///
    /// This is the layer-local case: a layer's own grid always starts at
    /// (0, 0) in its own coordinate space.
    #[inline]
    pub const fn sized(dimens: Vector2) -> Self {
        Self {
            top_left: Vector2::ZERO,
            dimens,
        }
    }

    /// The exclusive bottom-right corner (`top_left + dimens`).
    #[inline]
    pub fn bottom_right(&self) -> Vector2 {
        self.top_left.saturating_add(self.dimens)
    }

    /// Check whether a point is inside this box.
    ///
    /// Half-open on both axes: `top_left.x <= p.x < top_left.x + dimens.x`
    /// and the same for y. Empty boxes (dimens <= 0) contain nothing.
    #[inline]
    pub fn contains(&self, p: Vector2) -> bool {
        let br = self.bottom_right();
        p.x >= self.top_left.x && p.x < br.x && p.y >= self.top_left.y && p.y < br.y
    }
}

// =============================================================================
// Tests
// =============================================================================
