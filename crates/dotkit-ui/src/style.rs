//! Dot styling: shapes, colors, textures, and TOML style sheets.
//!
//! A [`DotStyle`] fixes every visual attribute of the indicator at
//! construction time. Styles come from one of three places: the
//! [`Default`] values, the active [`Theme`] via [`DotStyle::from_theme`],
//! or a TOML style sheet via [`DotStyle::from_toml`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use dotkit_types::backend::{Color, TextureId};
use dotkit_types::color::parse_hex_color;
use dotkit_types::error::{DotkitError, Result};

use crate::theme::Theme;

/// Shape drawn for a dot when no custom texture is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotShape {
    /// A filled circle with diameter `dot_size`.
    Circle,
    /// A `dot_size` square with [`ROUNDED_RADIUS`] corners.
    Rounded,
}

/// Corner radius for [`DotShape::Rounded`] dots.
pub const ROUNDED_RADIUS: u16 = 4;

/// Resolved appearance of a single dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotFill {
    /// Solid shape in one color.
    Shape { shape: DotShape, color: Color },
    /// Host-provided texture, blitted at dot size.
    Texture(TextureId),
}

/// Style attributes for the indicator, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotStyle {
    /// Dot width and height in pixels.
    pub dot_size: u32,
    /// Margin on each side of every dot in pixels.
    pub dot_spacing: u32,
    /// Fill color for the selected dot.
    pub selected_color: Color,
    /// Fill color for every other dot.
    pub unselected_color: Color,
    /// Shape used when no texture overrides it.
    pub shape: DotShape,
    /// Texture for the selected dot, overriding shape and color.
    pub selected_texture: Option<TextureId>,
    /// Texture for unselected dots, overriding shape and color.
    pub unselected_texture: Option<TextureId>,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            dot_size: 16,
            dot_spacing: 8,
            selected_color: Color::WHITE,
            unselected_color: Color::BLACK,
            shape: DotShape::Circle,
            selected_texture: None,
            unselected_texture: None,
        }
    }
}

impl DotStyle {
    /// Style driven by the active theme's dot colors.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            selected_color: theme.dot_active,
            unselected_color: theme.dot_inactive,
            ..Self::default()
        }
    }

    /// Parse a style sheet from TOML text. Missing keys keep their
    /// defaults; a malformed color string is an error rather than a
    /// silent fallback.
    pub fn from_toml(text: &str) -> Result<Self> {
        let def: StyleDef = toml::from_str(text)?;
        let selected_color = parse_color(&def.selected_color)?;
        let unselected_color = parse_color(&def.unselected_color)?;
        Ok(Self {
            dot_size: def.dot_size,
            dot_spacing: def.dot_spacing,
            selected_color,
            unselected_color,
            shape: def.shape,
            selected_texture: None,
            unselected_texture: None,
        })
    }

    /// Load a style sheet from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let style = Self::from_toml(&text)?;
        log::debug!("Loaded dot style from {}", path.display());
        Ok(style)
    }

    /// Appearance of a dot in the given selection state: the custom
    /// texture when one is configured, otherwise a shape fill.
    pub fn fill(&self, selected: bool) -> DotFill {
        let texture = if selected {
            self.selected_texture
        } else {
            self.unselected_texture
        };
        match texture {
            Some(tex) => DotFill::Texture(tex),
            None => DotFill::Shape {
                shape: self.shape,
                color: if selected {
                    self.selected_color
                } else {
                    self.unselected_color
                },
            },
        }
    }
}

/// Raw style sheet as written in TOML (`style.toml`).
#[derive(Debug, Clone, Deserialize)]
struct StyleDef {
    #[serde(default = "default_dot_size")]
    dot_size: u32,
    #[serde(default = "default_dot_spacing")]
    dot_spacing: u32,
    #[serde(default = "default_selected_color")]
    selected_color: String,
    #[serde(default = "default_unselected_color")]
    unselected_color: String,
    #[serde(default = "default_shape")]
    shape: DotShape,
}

fn default_dot_size() -> u32 {
    16
}
fn default_dot_spacing() -> u32 {
    8
}
fn default_selected_color() -> String {
    "#FFFFFF".to_string()
}
fn default_unselected_color() -> String {
    "#000000".to_string()
}
fn default_shape() -> DotShape {
    DotShape::Circle
}

fn parse_color(s: &str) -> Result<Color> {
    parse_hex_color(s).ok_or_else(|| DotkitError::Style(format!("invalid color '{s}'")))
}
