//! Core cell types for glyphstack.
//!
//! These types define what a composited scene is made of: a styled glyph per
//! cell, plus the transparency flag the compositor keys on. The renderer that
//! consumes our output understands nothing richer than these.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Special value: r=-1 means "terminal default" (let the terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let the terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Create from 0xRRGGBB integer format.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse a hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// CharPixel - The atomic unit of a composited scene
// =============================================================================

/// One character cell: a styled glyph plus a transparency flag.
///
/// The payload (glyph, colors, attributes) of a transparent pixel is
/// meaningless and must be ignored by consumers; `is_transparent()` is the
/// single predicate the compositor relies on. Values are `Copy` snapshots -
/// no cell is ever mutated in place after being produced by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharPixel {
    /// Unicode codepoint (32 for space, 0 for a wide-glyph continuation).
    pub glyph: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
    transparent: bool,
}

impl CharPixel {
    /// The transparent blank pixel - the compositor's fallback value.
    pub const CLEAR: Self = Self {
        glyph: b' ' as u32,
        fg: Rgba::TERMINAL_DEFAULT,
        bg: Rgba::TERMINAL_DEFAULT,
        attrs: Attr::NONE,
        transparent: true,
    };

    /// Create an opaque pixel from a char and styling.
    pub const fn opaque(glyph: char, fg: Rgba, bg: Rgba, attrs: Attr) -> Self {
        Self {
            glyph: glyph as u32,
            fg,
            bg,
            attrs,
            transparent: false,
        }
    }

    /// Create an opaque pixel with default styling.
    pub const fn from_char(glyph: char) -> Self {
        Self::opaque(glyph, Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT, Attr::NONE)
    }

    /// Create an opaque pixel from a raw codepoint (continuation cells use 0).
    pub const fn from_codepoint(glyph: u32, fg: Rgba, bg: Rgba, attrs: Attr) -> Self {
        Self {
            glyph,
            fg,
            bg,
            attrs,
            transparent: false,
        }
    }

    /// Whether this cell lets the layer beneath show through.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// The glyph as a char, if it is a valid scalar value.
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.glyph)
    }
}

impl Default for CharPixel {
    fn default() -> Self {
        Self::CLEAR
    }
}

// =============================================================================
// Tests
// =============================================================================
