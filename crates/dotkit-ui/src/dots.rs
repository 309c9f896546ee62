//! DotsIndicator widget.
//!
//! A horizontal row of dots mirroring the page state of a paged content
//! view: one dot per page, the current page's dot restyled. The row holds
//! real dot elements rather than deriving them at draw time, so a page
//! flip restyles exactly the two affected dots and a count change
//! rebuilds the row wholesale.

use dotkit_types::error::Result;

use crate::context::DrawContext;
use crate::layout;
use crate::style::{DotFill, DotShape, DotStyle, ROUNDED_RADIUS};
use crate::widget::Widget;

/// One dot element with its resolved appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    fill: DotFill,
}

impl Dot {
    /// Appearance this dot renders with.
    pub fn fill(&self) -> DotFill {
        self.fill
    }
}

/// The dots page indicator.
pub struct DotsIndicator {
    style: DotStyle,
    dots: Vec<Dot>,
    current: usize,
}

impl DotsIndicator {
    /// Create an indicator with no dots.
    pub fn new(style: DotStyle) -> Self {
        Self {
            style,
            dots: Vec::new(),
            current: 0,
        }
    }

    /// The style this indicator was built with.
    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    /// Number of dots in the row.
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Index of the selected dot. Zero when the row is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The dot row, leftmost first.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Whether the dot at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        !self.dots.is_empty() && index == self.current
    }

    /// Rebuild the row for a new page count.
    ///
    /// The selection survives the rebuild where it can: an index past the
    /// new end clamps to the last dot instead of snapping back to zero.
    pub fn set_dot_count(&mut self, count: usize) {
        self.current = if count == 0 {
            0
        } else {
            self.current.min(count - 1)
        };
        self.dots = (0..count)
            .map(|i| Dot {
                fill: self.style.fill(i == self.current),
            })
            .collect();
    }

    /// Move the selection to `index`, restyling exactly the two affected
    /// dots. Out-of-range indices are ignored without side effects.
    pub fn set_current_index(&mut self, index: usize) {
        if index >= self.dots.len() {
            return;
        }
        self.dots[self.current].fill = self.style.fill(false);
        self.dots[index].fill = self.style.fill(true);
        self.current = index;
    }
}


impl Widget for DotsIndicator {
    fn measure(&self, _ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        if self.dots.is_empty() {
            return (0, 0);
        }
        let width = layout::slotted_span(
            self.dots.len() as u32,
            self.style.dot_size,
            self.style.dot_spacing,
        );
        (width, self.style.dot_size)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        if self.dots.is_empty() {
            return Ok(());
        }
        let size = self.style.dot_size;
        let margin = self.style.dot_spacing;
        let slot = size + margin * 2;
        let row_w = layout::slotted_span(self.dots.len() as u32, size, margin);
        let x0 = x + layout::center(w, row_w);
        let y0 = y + layout::center(h, size);

        for (i, dot) in self.dots.iter().enumerate() {
            let dx = x0 + (i as u32 * slot + margin) as i32;
            match dot.fill() {
                DotFill::Texture(tex) => {
                    ctx.backend.blit(tex, dx, y0, size, size)?;
                },
                DotFill::Shape {
                    shape: DotShape::Circle,
                    color,
                } => {
                    let r = (size / 2) as i32;
                    ctx.backend.fill_circle(dx + r, y0 + r, r as u16, color)?;
                },
                DotFill::Shape {
                    shape: DotShape::Rounded,
                    color,
                } => {
                    ctx.backend
                        .fill_rounded_rect(dx, y0, size, size, ROUNDED_RADIUS, color)?;
                },
            }
        }
        Ok(())
    }
}
