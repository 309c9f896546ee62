//! Theme system for consistent indicator styling.

use dotkit_types::backend::Color;

/// Visual theme for the paging controls.
pub struct Theme {
    /// Main background color.
    pub background: Color,
    /// Surface color for control strips behind the dots.
    pub surface: Color,

    /// Dot color for the selected page.
    pub dot_active: Color,
    /// Dot color for every other page.
    pub dot_inactive: Color,

    /// Small spacing.
    pub spacing_sm: u16,
    /// Medium spacing.
    pub spacing_md: u16,

    /// Small border radius.
    pub radius_sm: u16,
}

impl Theme {
    /// Dark theme. Dots are white with the inactive ones faded out.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 24),
            surface: Color::rgb(30, 30, 40),

            dot_active: Color::rgba(255, 255, 255, 200),
            dot_inactive: Color::rgba(255, 255, 255, 50),

            spacing_sm: 4,
            spacing_md: 8,

            radius_sm: 2,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(245, 245, 250),
            surface: Color::rgb(255, 255, 255),

            dot_active: Color::rgba(20, 20, 30, 220),
            dot_inactive: Color::rgba(20, 20, 30, 60),

            spacing_sm: 4,
            spacing_md: 8,

            radius_sm: 2,
        }
    }
}
