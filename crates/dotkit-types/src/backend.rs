//! Render backend trait definition.
//!
//! The indicator and its host views draw through [`RenderBackend`], never
//! against a platform API directly. The two core methods are required; the
//! extended shape methods carry default implementations that approximate
//! with `fill_rect`, so a minimal backend still renders every dot as a
//! square and can upgrade to real circles later.

use crate::error::Result;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Opaque handle to a texture owned by the backend.
///
/// dotkit never loads textures itself. Hosts load their artwork through
/// whatever path their backend provides and hand the resulting ids to the
/// style layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Rendering backend trait.
///
/// # Core Methods (required)
///
/// Every backend must implement `fill_rect` and `blit`.
///
/// # Extended Primitives (optional, with defaults)
///
/// Backends may override `fill_rounded_rect` and `fill_circle` for
/// native-accelerated shapes. The defaults approximate using `fill_rect`,
/// so existing backends keep working without changes.
pub trait RenderBackend {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Blit a texture at the given position and size.
    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw a filled rectangle with rounded corners.
    ///
    /// `radius` specifies the corner radius in pixels. If `radius` exceeds
    /// half the smaller dimension, the backend clamps it. A radius of 0 is
    /// equivalent to `fill_rect`.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        // Default: fall back to sharp-cornered fill_rect.
        self.fill_rect(x, y, w, h, color)
    }

    /// Draw a filled circle.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let r = radius as i32;
        self.fill_rect(cx - r, cy - r, radius as u32 * 2, radius as u32 * 2, color)
    }
}
