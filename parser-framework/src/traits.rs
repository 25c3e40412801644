use common_framework::Position;
use std::fmt;

/// A token as the parser sees it.
///
/// Rules only ever compare kinds; text and position are carried along for
/// error reports.
pub trait ParseToken: Clone + fmt::Debug {
    /// Closed set of token kinds of the grammar.
    type Kind: Copy + Eq + fmt::Debug + fmt::Display;

    /// Returns the kind of this token.
    fn kind(&self) -> Self::Kind;

    /// Returns the source text of this token.
    fn text(&self) -> &str;

    /// Returns the position of this token in the source.
    fn position(&self) -> Position;

    /// Returns true if this token represents end of input.
    fn is_eof(&self) -> bool;
}
