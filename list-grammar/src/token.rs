use common_framework::{Position, TextSlice};
use lexer_framework::LexToken;
use parser_framework::ParseToken;
use std::fmt;

/// Token kinds of the list language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Ident,
    Comma,
    LBrack,
    RBrack,
    Equals,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::Ident => "identifier",
            TokenKind::Comma => "','",
            TokenKind::LBrack => "'['",
            TokenKind::RBrack => "']'",
            TokenKind::Equals => "'='",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: TextSlice,
    pub position: Position,
}

impl LexToken for Token {
    fn eof(position: Position, text: TextSlice) -> Self {
        Token {
            kind: TokenKind::Eof,
            text,
            position,
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl ParseToken for Token {
    type Kind = TokenKind;

    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
