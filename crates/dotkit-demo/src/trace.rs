//! Console render target.
//!
//! Prints one line per draw call so the demo's frame output is visible
//! without a windowing backend.

use dotkit_types::backend::{Color, RenderBackend, TextureId};
use dotkit_types::error::Result;

/// Backend that prints its command stream to stdout.
pub struct TraceBackend;

impl RenderBackend for TraceBackend {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        println!("  fill_rect         ({x:4},{y:4}) {w}x{h} {}", hex(color));
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        println!("  blit              ({x:4},{y:4}) {w}x{h} tex#{}", tex.0);
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
        println!(
            "  fill_rounded_rect ({x:4},{y:4}) {w}x{h} r{radius} {}",
            hex(color)
        );
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        println!("  fill_circle       ({cx:4},{cy:4}) r{radius} {}", hex(color));
        Ok(())
    }
}

fn hex(color: Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.r, color.g, color.b, color.a
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formats_rgba() {
        assert_eq!(hex(Color::rgba(0x1A, 0x2B, 0x3C, 0xFF)), "#1A2B3CFF");
    }
}
