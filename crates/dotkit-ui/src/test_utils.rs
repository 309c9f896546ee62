//! Shared test utilities for dotkit-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.
//! The extended shape methods are overridden so tests see the exact
//! primitive the widget asked for instead of the `fill_rect` fallback.

use dotkit_types::backend::{Color, RenderBackend, TextureId};
use dotkit_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    FillRoundedRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u16,
        color: Color,
    },
    Blit {
        tex: TextureId,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `FillRoundedRect` calls.
    pub fn fill_rounded_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRoundedRect { .. }))
            .count()
    }

    /// Count of `FillCircle` calls.
    pub fn fill_circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count()
    }

    /// Count of `Blit` calls.
    pub fn blit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Blit { .. }))
            .count()
    }

    /// Count of calls drawn in the given fill color, any shape.
    pub fn color_count(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|c| match c {
                DrawCall::FillRect { color: c, .. }
                | DrawCall::FillRoundedRect { color: c, .. }
                | DrawCall::FillCircle { color: c, .. } => *c == color,
                DrawCall::Blit { .. } => false,
            })
            .count()
    }

    /// Return circle calls as `(cx, cy, radius, color)` tuples, sorted by
    /// X position for easy geometric analysis.
    pub fn circle_positions(&self) -> Vec<(i32, i32, u16, Color)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::FillCircle {
                    cx,
                    cy,
                    radius,
                    color,
                } = c
                {
                    Some((*cx, *cy, *radius, *color))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.0.cmp(&b.0));
        positions
    }

    /// Return rounded-rect calls as `(x, y, w, h, radius, color)` tuples,
    /// sorted by X position.
    pub fn rounded_rect_positions(&self) -> Vec<(i32, i32, u32, u32, u16, Color)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::FillRoundedRect {
                    x,
                    y,
                    w,
                    h,
                    radius,
                    color,
                } = c
                {
                    Some((*x, *y, *w, *h, *radius, *color))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.0.cmp(&b.0));
        positions
    }

    /// Check whether any call blits the given texture.
    pub fn has_blit(&self, tex: TextureId) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, DrawCall::Blit { tex: t, .. } if *t == tex))
    }
}

impl RenderBackend for MockBackend {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.calls.push(DrawCall::Blit { tex, x, y, w, h });
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::FillRoundedRect {
            x,
            y,
            w,
            h,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
        Ok(())
    }
}
