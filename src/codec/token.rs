//! Tokenization of a curve line.
//!
//! Tokens are separated by the ASCII space only. Runs of spaces collapse and
//! leading/trailing spaces produce no tokens; tabs stay inside tokens.

/// A trailing option token after the four numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagToken {
    FlipX,
    FlipY,
    /// Anything else; ignored by the decoder.
    Other,
}

impl FlagToken {
    /// Classify a token, ignoring ASCII case.
    pub fn classify(token: &str) -> Self {
        if token.eq_ignore_ascii_case("flipx") {
            FlagToken::FlipX
        } else if token.eq_ignore_ascii_case("flipy") {
            FlagToken::FlipY
        } else {
            FlagToken::Other
        }
    }
}

/// Split a line into its space-separated tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|t| !t.is_empty()).collect()
}
