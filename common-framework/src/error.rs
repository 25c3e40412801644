use crate::Position;
use thiserror::Error;

/// Failure raised while turning characters into tokens.
///
/// Lexical errors are fatal: the parser never retries or recovers from them,
/// it hands them to its caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No lexing rule accepts the character at `position`.
    #[error("invalid character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: Position },

    /// A rule reported a match without consuming any input.
    #[error("lexing rule made no progress at {position}")]
    NoProgress { position: Position },
}

impl LexError {
    /// Source position the error refers to.
    pub fn position(&self) -> Position {
        match self {
            LexError::InvalidCharacter { position, .. } | LexError::NoProgress { position } => {
                *position
            }
        }
    }
}
