use crate::context::LexContext;
use common_framework::{Position, TextSlice};

/// A token produced by the lexer.
pub trait LexToken: Clone + std::fmt::Debug {
    /// Builds the end-of-input token. `text` is empty and anchored at the
    /// end of the source.
    fn eof(position: Position, text: TextSlice) -> Self;

    /// Returns the position of this token in the source.
    fn position(&self) -> Position;

    /// Returns true if this token represents end of input.
    fn is_eof(&self) -> bool;
}

/// What a rule made of the characters it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme<Tok> {
    /// A token for the parser.
    Token(Tok),
    /// Trivia such as whitespace; the lexer moves on to the next rule round.
    Skip,
}

impl<Tok> Lexeme<Tok> {
    pub fn map<U>(self, f: impl FnOnce(Tok) -> U) -> Lexeme<U> {
        match self {
            Lexeme::Token(token) => Lexeme::Token(f(token)),
            Lexeme::Skip => Lexeme::Skip,
        }
    }
}

/// A lexing rule that operates on a context.
pub trait LexingRule<Ctx, Tok>
where
    Ctx: LexContext,
{
    /// Attempts to match characters at the cursor.
    /// Returns `None` if the rule does not apply; the lexer then restores the
    /// cursor, so a rule may leave it anywhere on failure.
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<Tok>>;

    /// Returns the priority of this rule. Higher priority rules are tried first.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check on the first character.
    ///
    /// - `Some(true)`  - This rule might match
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to try full match
    #[inline]
    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        let _ = first_char;
        None
    }
}
