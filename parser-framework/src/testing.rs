//! Test doubles shared by the unit tests of this crate.

use crate::traits::ParseToken;
use common_framework::{LexError, Position, TokenSource};

/// One token per character; the kind is the character itself and `$` marks
/// end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct CharToken {
    pub kind: char,
    pub text: String,
    pub position: Position,
}

impl ParseToken for CharToken {
    type Kind = char;

    fn kind(&self) -> char {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_eof(&self) -> bool {
        self.kind == '$'
    }
}

/// Turns every character into a token and rejects `?`. Whitespace is skipped.
pub struct CharSource {
    chars: Vec<char>,
    next: usize,
    position: Position,
    pulls: usize,
}

impl CharSource {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            next: 0,
            position: Position::new(),
            pulls: 0,
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl TokenSource for CharSource {
    type Token = CharToken;

    fn next_token(&mut self) -> Result<CharToken, LexError> {
        self.pulls += 1;
        while let Some(&ch) = self.chars.get(self.next) {
            let position = self.position;
            self.next += 1;
            self.position.step(ch);
            match ch {
                '?' => return Err(LexError::InvalidCharacter { ch, position }),
                c if c.is_whitespace() => continue,
                _ => {
                    return Ok(CharToken {
                        kind: ch,
                        text: ch.to_string(),
                        position,
                    })
                }
            }
        }
        Ok(CharToken {
            kind: '$',
            text: String::new(),
            position: self.position,
        })
    }
}
