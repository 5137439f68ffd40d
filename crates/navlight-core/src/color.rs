use serde::{Deserialize, Serialize};
use std::fmt;

/// A chart color of a navigational light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Amber,
}

impl Color {
    /// All chart colors, in no particular order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Amber,
    ];

    /// The letter printed on charts ("W", "R", "G", "Y", "Am")
    pub fn letter(&self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Red => "R",
            Color::Green => "G",
            Color::Yellow => "Y",
            Color::Amber => "Am",
        }
    }

    /// Parse a chart letter, case-insensitively
    pub fn from_token(token: &str) -> Option<Color> {
        match token.to_ascii_uppercase().as_str() {
            "W" => Some(Color::White),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            "Y" => Some(Color::Yellow),
            "AM" => Some(Color::Amber),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Color shown by one segment: a single chart color, or several at once
///
/// Composites arise from single-flash codes that list more than one color;
/// the flash shows all of them simultaneously and renderers look the joined
/// token (e.g. "W/R") up in the [`Palette`](crate::Palette).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Single(Color),
    Composite(Vec<Color>),
}

impl ColorToken {
    /// Build a token from an ordered color list: one color stays single,
    /// several become a composite.
    pub fn from_colors(colors: &[Color]) -> ColorToken {
        match colors {
            [color] => ColorToken::Single(*color),
            _ => ColorToken::Composite(colors.to_vec()),
        }
    }

    /// The leading color (white for a degenerate empty composite)
    pub fn first(&self) -> Color {
        match self {
            ColorToken::Single(color) => *color,
            ColorToken::Composite(colors) => colors.first().copied().unwrap_or(Color::White),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, ColorToken::Composite(_))
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        ColorToken::Single(color)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Single(color) => write!(f, "{}", color),
            ColorToken::Composite(colors) => {
                for (i, color) in colors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "/")?;
                    }
                    write!(f, "{}", color)?;
                }
                Ok(())
            }
        }
    }
}
