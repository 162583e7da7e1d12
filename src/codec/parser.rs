//! Decoder from the curve text encoding to a [`CurveModel`].
//!
//! ```text
//! <Shape> <x> <y> <slope> <exponent> [flipx] [flipy] ...
//! ```
//!
//! Checks run in a fixed order and the first failure is returned: empty input,
//! token count, shape name, then each numeric field left to right. Trailing
//! tokens other than `flipx`/`flipy` (any case) are ignored.

use super::error::{Field, ParseError};
use super::token::{tokenize, FlagToken};
use crate::curve::{CurveModel, CurveShape};

const REQUIRED_TOKENS: usize = 5;

/// Decode one line of text into a curve.
pub fn parse(text: &str) -> Result<CurveModel, ParseError> {
    let result = parse_tokens(text);
    if let Err(err) = &result {
        tracing::debug!(%err, text, "curve text rejected");
    }
    result
}

fn parse_tokens(text: &str) -> Result<CurveModel, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = tokenize(text);
    if tokens.len() < REQUIRED_TOKENS {
        return Err(ParseError::InsufficientTokens {
            found: tokens.len(),
        });
    }

    let shape: CurveShape = tokens[0].parse().map_err(|_| ParseError::UnknownShape {
        token: tokens[0].to_string(),
    })?;

    let mut values = [0.0; 4];
    for ((slot, field), token) in values.iter_mut().zip(Field::ORDER).zip(&tokens[1..]) {
        *slot = parse_number(field, token)?;
    }
    let [x_intercept, y_intercept, slope, exponent] = values;

    let mut model = CurveModel {
        shape,
        x_intercept,
        y_intercept,
        slope,
        exponent,
        flip_x: false,
        flip_y: false,
    };

    for token in &tokens[REQUIRED_TOKENS..] {
        match FlagToken::classify(token) {
            FlagToken::FlipX => model.flip_x = true,
            FlagToken::FlipY => model.flip_y = true,
            FlagToken::Other => {}
        }
    }

    Ok(model)
}

fn parse_number(field: Field, token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidField {
        field,
        token: token.to_string(),
    })
}

/// A curve line decoded from a multi-line document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLine {
    /// 1-based line number within the document.
    pub line: usize,
    pub result: Result<CurveModel, ParseError>,
}

/// Decode every curve line of a document.
///
/// Blank lines and lines starting with `#` (after leading spaces) are skipped.
pub fn parse_document(text: &str) -> Vec<DocumentLine> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| DocumentLine {
            line: idx + 1,
            result: parse(line),
        })
        .collect()
}

impl std::str::FromStr for CurveModel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
