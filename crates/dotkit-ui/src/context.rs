//! Theme-aware drawing context.
//!
//! All dotkit widgets render through `DrawContext`, which wraps a
//! `&mut dyn RenderBackend` and provides access to the active theme.

use dotkit_types::backend::RenderBackend;
use dotkit_types::error::Result;

use crate::theme::Theme;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    /// Draw a themed strip behind a row of paging controls.
    pub fn control_strip(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.backend
            .fill_rounded_rect(x, y, w, h, self.theme.radius_sm, self.theme.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{DrawCall, MockBackend};

    #[test]
    fn control_strip_uses_surface_color() {
        let theme = Theme::dark();
        let mut backend = MockBackend::new();
        {
            let mut ctx = DrawContext::new(&mut backend, &theme);
            ctx.control_strip(10, 20, 100, 24).unwrap();
        }
        assert_eq!(backend.calls.len(), 1);
        match backend.calls[0] {
            DrawCall::FillRoundedRect { x, y, w, h, color, .. } => {
                assert_eq!((x, y, w, h), (10, 20, 100, 24));
                assert_eq!(color, Theme::dark().surface);
            },
            ref other => panic!("unexpected call: {other:?}"),
        }
    }
}
