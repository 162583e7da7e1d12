//! Error types for curve text decoding.

use std::fmt;

/// One of the four numeric fields of the text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Slope,
    Exponent,
}

impl Field {
    /// Fields in the order they appear after the shape token.
    pub const ORDER: [Field; 4] = [Field::X, Field::Y, Field::Slope, Field::Exponent];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::X => "x intercept",
            Field::Y => "y intercept",
            Field::Slope => "slope",
            Field::Exponent => "exponent",
        };
        f.write_str(name)
    }
}

/// Why a line of text could not be decoded into a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input was empty.
    EmptyInput,
    /// Fewer than five tokens were present.
    InsufficientTokens { found: usize },
    /// The first token is not a shape name (names are case-sensitive).
    UnknownShape { token: String },
    /// A numeric token could not be parsed.
    InvalidField { field: Field, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty curve text"),
            ParseError::InsufficientTokens { found } => {
                write!(f, "expected at least 5 tokens, found {found}")
            }
            ParseError::UnknownShape { token } => write!(f, "unknown curve shape {token:?}"),
            ParseError::InvalidField { field, token } => {
                write!(f, "invalid {field}: {token:?} is not a number")
            }
        }
    }
}

impl std::error::Error for ParseError {}
