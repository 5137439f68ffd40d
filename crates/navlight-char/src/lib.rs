//! Light-characteristic notation parser and sequence compiler
//!
//! This crate turns the compact shorthand printed beside lights on nautical
//! charts (e.g. `"Fl(2+1) W G 10s"`) into a deterministic, cyclical timeline
//! of on/off/intensity/color segments a renderer can play back.
//!
//! Two strictly layered pieces: the grammar [`parse`]r produces a
//! [`Descriptor`] with no timing knowledge, and the [`SequenceCompiler`]
//! dispatches on the light type to synthesize a
//! [`Sequence`](navlight_core::Sequence) of timed segments.
//!
//! # Examples
//!
//! ```
//! use navlight_char::{parse, SequenceCompiler};
//!
//! let descriptor = parse("Fl(2+1) W G 10s").unwrap();
//! let sequence = SequenceCompiler::default().compile(&descriptor);
//! assert!((sequence.total_duration() - 10.0).abs() < 1e-6);
//! ```
//!
//! # Notation
//!
//! - Type token, longest match first: `F`, `Dir`, `Dir F`, `Fl`, `Gp Fl`,
//!   `LFl`, `Q`, `VQ`, `UQ`, `IQ`, `Oc`, `Gp Oc`, `Iso`, `Al`, `Al Fl`,
//!   `Al Oc`, `Al Iso`, `FFl`, `Fl F`, `Mo` (case-insensitive)
//! - Optional `(…)` group parameter directly after the type, e.g. `(2+1)`
//! - One or more color tokens from `W R G Y Am`
//! - Optional period in seconds, e.g. `10s`
//!
//! # Main Functions
//!
//! - [`parse`]: code string to [`Descriptor`]
//! - [`compile`] / [`SequenceCompiler`]: descriptor to segment sequence
//! - [`extract_color`]: one representative color for marker tinting
//! - [`format()`]: canonical chart spelling of a descriptor

pub mod compiler;
pub mod descriptor;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod span;


pub use compiler::{compile, compile_code, extract_color, SequenceCompiler};
pub use descriptor::{Descriptor, LightType};
pub use error::{ParseError, Result};
pub use formatter::format;
pub use lexer::{Lexer, Token};
pub use parser::{normalize, parse, Parser};
pub use span::Span;
