use navlight_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of light-type tokens
///
/// One variant per dispatch key of the sequence compiler. Compound tokens
/// ("Gp Fl", "Al Iso", "Dir F", "Fl F") may be written with or without the
/// internal space; both spellings resolve to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightType {
    Fixed,
    Directional,
    DirectionalFixed,
    Flash,
    GroupFlash,
    LongFlash,
    Quick,
    VeryQuick,
    UltraQuick,
    InterruptedQuick,
    Occulting,
    GroupOcculting,
    Isophase,
    Alternating,
    AlternatingFlash,
    AlternatingOcculting,
    AlternatingIsophase,
    FixedFlashing,
    FlashFixed,
    Morse,
}

impl LightType {
    /// Normalized dispatch token: uppercase, single internal space
    pub fn token(&self) -> &'static str {
        match self {
            LightType::Fixed => "F",
            LightType::Directional => "DIR",
            LightType::DirectionalFixed => "DIR F",
            LightType::Flash => "FL",
            LightType::GroupFlash => "GP FL",
            LightType::LongFlash => "LFL",
            LightType::Quick => "Q",
            LightType::VeryQuick => "VQ",
            LightType::UltraQuick => "UQ",
            LightType::InterruptedQuick => "IQ",
            LightType::Occulting => "OC",
            LightType::GroupOcculting => "GP OC",
            LightType::Isophase => "ISO",
            LightType::Alternating => "AL",
            LightType::AlternatingFlash => "AL FL",
            LightType::AlternatingOcculting => "AL OC",
            LightType::AlternatingIsophase => "AL ISO",
            LightType::FixedFlashing => "FFL",
            LightType::FlashFixed => "FL F",
            LightType::Morse => "MO",
        }
    }

    /// Chart spelling, e.g. "Gp Fl"
    pub fn chart(&self) -> &'static str {
        match self {
            LightType::Fixed => "F",
            LightType::Directional => "Dir",
            LightType::DirectionalFixed => "Dir F",
            LightType::Flash => "Fl",
            LightType::GroupFlash => "Gp Fl",
            LightType::LongFlash => "LFl",
            LightType::Quick => "Q",
            LightType::VeryQuick => "VQ",
            LightType::UltraQuick => "UQ",
            LightType::InterruptedQuick => "IQ",
            LightType::Occulting => "Oc",
            LightType::GroupOcculting => "Gp Oc",
            LightType::Isophase => "Iso",
            LightType::Alternating => "Al",
            LightType::AlternatingFlash => "Al Fl",
            LightType::AlternatingOcculting => "Al Oc",
            LightType::AlternatingIsophase => "Al Iso",
            LightType::FixedFlashing => "FFl",
            LightType::FlashFixed => "Fl F",
            LightType::Morse => "Mo",
        }
    }

    /// Single-word spelling lookup, uppercase input
    ///
    /// Covers the plain single tokens plus the fused compound spellings the
    /// notation also allows ("GPFL", "ALISO", ...).
    pub fn from_token(token: &str) -> Option<LightType> {
        match token {
            "F" => Some(LightType::Fixed),
            "DIR" => Some(LightType::Directional),
            "DIRF" => Some(LightType::DirectionalFixed),
            "FL" => Some(LightType::Flash),
            "GPFL" => Some(LightType::GroupFlash),
            "LFL" => Some(LightType::LongFlash),
            "Q" => Some(LightType::Quick),
            "VQ" => Some(LightType::VeryQuick),
            "UQ" => Some(LightType::UltraQuick),
            "IQ" => Some(LightType::InterruptedQuick),
            "OC" => Some(LightType::Occulting),
            "GPOC" => Some(LightType::GroupOcculting),
            "ISO" => Some(LightType::Isophase),
            "AL" => Some(LightType::Alternating),
            "ALFL" => Some(LightType::AlternatingFlash),
            "ALOC" => Some(LightType::AlternatingOcculting),
            "ALISO" => Some(LightType::AlternatingIsophase),
            "FFL" => Some(LightType::FixedFlashing),
            "FLF" => Some(LightType::FlashFixed),
            "MO" => Some(LightType::Morse),
            _ => None,
        }
    }

    /// Two-word compound lookup, uppercase input
    pub fn from_compound(first: &str, second: &str) -> Option<LightType> {
        match (first, second) {
            ("GP", "FL") => Some(LightType::GroupFlash),
            ("GP", "OC") => Some(LightType::GroupOcculting),
            ("AL", "FL") => Some(LightType::AlternatingFlash),
            ("AL", "OC") => Some(LightType::AlternatingOcculting),
            ("AL", "ISO") => Some(LightType::AlternatingIsophase),
            ("FL", "F") => Some(LightType::FlashFixed),
            ("DIR", "F") => Some(LightType::DirectionalFixed),
            _ => None,
        }
    }

    /// The always-on family: fixed and directional lights
    pub fn is_fixed_family(&self) -> bool {
        matches!(
            self,
            LightType::Fixed | LightType::Directional | LightType::DirectionalFixed
        )
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chart())
    }
}

/// Parsed light characteristic
///
/// A pure value computed from a code string; it carries no timing semantics.
/// `colors` preserves source order (order drives color-to-group assignment in
/// the compiler) and is never empty for parser-produced descriptors. `group`
/// is the verbatim parenthesized parameter; the compiler interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub kind: LightType,
    pub group: Option<String>,
    pub colors: Vec<Color>,
    pub period: Option<f64>,
}

impl Descriptor {
    /// The leading color (white for a degenerate empty list)
    pub fn first_color(&self) -> Color {
        self.colors.first().copied().unwrap_or(Color::White)
    }

    /// Color for a rotation slot, cycling when slots outnumber colors
    pub fn color_at(&self, index: usize) -> Color {
        self.colors
            .get(index % self.colors.len().max(1))
            .copied()
            .unwrap_or(Color::White)
    }
}
