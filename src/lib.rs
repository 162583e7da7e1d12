//! respcurve — parameterized response curves with a compact text encoding.
//!
//! A [`CurveModel`] picks one of ten [`CurveShape`]s and tunes it with four
//! scalars and two mirror flags. Evaluation always lands in `[0, 1]`.
//! [`codec::parse`] builds a model from a line such as
//! `"Quadratic 0.5 0 0.23 1.3 flipx"`.

pub mod cli;
pub mod codec;
pub mod config;
pub mod curve;
pub mod logging;

pub use codec::{parse, ParseError};
pub use curve::{CurveModel, CurveShape};
