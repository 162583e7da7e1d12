//! Curve text codec — one line of space-separated tokens ↔ [`CurveModel`](crate::curve::CurveModel).

pub mod encode;
pub mod error;
pub mod parser;
pub mod token;

pub use encode::encode;
pub use error::{Field, ParseError};
pub use parser::{parse, parse_document, DocumentLine};
