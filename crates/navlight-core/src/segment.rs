use crate::ColorToken;
use serde::{Deserialize, Serialize};

/// Whether the light is showing during a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightState {
    On,
    Off,
}

impl LightState {
    pub fn is_on(&self) -> bool {
        matches!(self, LightState::On)
    }
}

/// One timed step of a compiled light sequence
///
/// Durations are seconds and always positive. Intensity is in (0, 1] and
/// only distinguishes the dim fixed background of a fixed-and-flashing light
/// from its bright flash; ordinary segments carry 1.0. Dark segments keep a
/// color so renderers can tint adjacent chrome consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub state: LightState,
    pub duration: f64,
    pub color: ColorToken,
    pub intensity: f64,
}

impl Segment {
    /// A fully lit segment
    pub fn lit(duration: f64, color: impl Into<ColorToken>) -> Self {
        Segment {
            state: LightState::On,
            duration,
            color: color.into(),
            intensity: 1.0,
        }
    }

    /// A lit segment at reduced intensity
    pub fn dimmed(duration: f64, color: impl Into<ColorToken>, intensity: f64) -> Self {
        Segment {
            state: LightState::On,
            duration,
            color: color.into(),
            intensity,
        }
    }

    /// A dark (eclipse) segment
    pub fn dark(duration: f64, color: impl Into<ColorToken>) -> Self {
        Segment {
            state: LightState::Off,
            duration,
            color: color.into(),
            intensity: 1.0,
        }
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }
}
