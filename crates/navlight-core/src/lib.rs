//! Core types and utilities for navigational light sequences
//!
//! This crate provides the foundational types for working with aid-to-navigation
//! light characteristics in Rust: the chart colors a light can show, the timed
//! on/off segments of a compiled rhythm, and the cyclic sequences a renderer
//! plays back. It also carries the injectable lookup tables (color palette,
//! Morse code) that keep the compiler free of ambient globals.
//!
//! # Examples
//!
//! ```
//! use navlight_core::{Color, Segment, Sequence};
//!
//! // An isophase rhythm: equal light and dark
//! let sequence = Sequence::new(vec![
//!     Segment::lit(3.0, Color::White),
//!     Segment::dark(3.0, Color::White),
//! ]);
//! assert_eq!(sequence.total_duration(), 6.0);
//! ```
//!
//! # Main Components
//!
//! - **Color / ColorToken**: chart colors and simultaneous-color composites
//! - **Segment**: one timed step of a compiled sequence
//! - **Sequence / Playhead**: the cyclic timeline and a cursor over it
//! - **Palette**: color-token to CSS color lookup for renderers
//! - **MorseTable**: single-character dot/dash codes

pub mod color;
pub mod morse;
pub mod palette;
pub mod segment;
pub mod sequence;

pub use color::{Color, ColorToken};
pub use morse::{MorseTable, FALLBACK_CODE};
pub use palette::Palette;
pub use segment::{LightState, Segment};
pub use sequence::{Playhead, Sequence};
