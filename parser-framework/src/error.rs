use common_framework::{LexError, Position};
use std::fmt;
use thiserror::Error;

/// Failure of a parse, generic over the grammar's token kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<K> {
    /// Invalid character in the source text. Never recovered.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// The current token is not of the kind a rule requires. Only a
    /// speculative attempt turns this into a failed alternative.
    #[error("expecting {expected}; found {found} {text:?} at token {position} ({location})")]
    Mismatch {
        expected: K,
        found: K,
        text: String,
        /// Absolute token position.
        position: usize,
        location: Position,
    },

    /// No alternative of a decision point matched. Reports the token the
    /// decision was taken on; the furthest mismatch any alternative reached
    /// rides along for diagnostics.
    #[error(
        "no alternative of `{rule}` matches {found} {text:?} at token {position} ({location}){}",
        furthest_suffix(.furthest)
    )]
    SpeculationExhausted {
        rule: &'static str,
        found: K,
        text: String,
        position: usize,
        location: Position,
        furthest: Option<Box<ParseError<K>>>,
    },
}

fn furthest_suffix<K: fmt::Display>(furthest: &Option<Box<ParseError<K>>>) -> String {
    match furthest {
        Some(err) => format!("; furthest failure: {err}"),
        None => String::new(),
    }
}

impl<K> ParseError<K> {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::Mismatch { .. })
    }

    /// The mismatch behind this error: the error itself, or for an exhausted
    /// decision the furthest mismatch reached by any alternative.
    pub fn furthest_mismatch(&self) -> Option<&ParseError<K>> {
        match self {
            ParseError::Mismatch { .. } => Some(self),
            ParseError::SpeculationExhausted { furthest, .. } => {
                furthest.as_deref().and_then(ParseError::furthest_mismatch)
            }
            ParseError::Lexical(_) => None,
        }
    }

    /// Absolute token position of the failure; `None` for lexical errors,
    /// which are located by character instead.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lexical(_) => None,
            ParseError::Mismatch { position, .. }
            | ParseError::SpeculationExhausted { position, .. } => Some(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message() {
        let err = ParseError::Mismatch {
            expected: ']',
            found: ',',
            text: ",".into(),
            position: 4,
            location: Position::at(1, 5, 4),
        };
        assert_eq!(
            err.to_string(),
            "expecting ]; found , \",\" at token 4 (1:5)"
        );
        assert!(err.is_mismatch());
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_exhausted_carries_furthest_mismatch() {
        let mismatch = ParseError::Mismatch {
            expected: '$',
            found: ']',
            text: "]".into(),
            position: 9,
            location: Position::at(1, 10, 9),
        };
        let err = ParseError::SpeculationExhausted {
            rule: "statement",
            found: '[',
            text: "[".into(),
            position: 0,
            location: Position::new(),
            furthest: Some(Box::new(mismatch.clone())),
        };
        assert!(!err.is_mismatch());
        assert_eq!(err.position(), Some(0));
        assert_eq!(err.furthest_mismatch(), Some(&mismatch));
        assert_eq!(
            err.to_string(),
            "no alternative of `statement` matches [ \"[\" at token 0 (1:1); \
             furthest failure: expecting $; found ] \"]\" at token 9 (1:10)"
        );
    }

    #[test]
    fn test_lexical_is_transparent() {
        let lex = LexError::InvalidCharacter {
            ch: '#',
            position: Position::new(),
        };
        let err: ParseError<char> = lex.clone().into();
        assert_eq!(err.to_string(), lex.to_string());
        assert!(!err.is_mismatch());
        assert_eq!(err.position(), None);
    }
}
