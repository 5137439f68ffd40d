use crate::ColorToken;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only map from chart color tokens to renderable CSS color values
///
/// The compiler only emits tokens; renderers resolve them here. Composite
/// tokens ("W/R") get their own entries so simultaneous flashes can blend
/// into a distinct hue instead of averaging at draw time. Unknown tokens
/// fall back to white.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    entries: HashMap<String, String>,
    fallback: String,
}

impl Palette {
    pub fn new(entries: HashMap<String, String>, fallback: impl Into<String>) -> Self {
        Palette {
            entries,
            fallback: fallback.into(),
        }
    }

    /// CSS color for a segment's color token
    pub fn css(&self, token: &ColorToken) -> &str {
        self.css_for(&token.to_string())
    }

    /// CSS color for a raw token string such as "Am" or "W/R"
    pub fn css_for(&self, token: &str) -> &str {
        self.entries
            .get(token)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn set(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = [
            ("W", "white"),
            ("R", "red"),
            ("G", "green"),
            ("Y", "yellow"),
            ("Am", "#FFBF00"),
            ("W/R", "orange"),
            ("W/G", "#88ffcc"),
            ("R/G", "#ffaa44"),
            ("W/R/G", "yellow"),
        ]
        .into_iter()
        .map(|(token, value)| (token.to_string(), value.to_string()))
        .collect();

        Palette {
            entries,
            fallback: "white".to_string(),
        }
    }
}
