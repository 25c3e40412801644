use crate::LexError;

/// Produces tokens one at a time for a parser.
///
/// Once the input is exhausted an implementation keeps returning its
/// end-of-input token on every call; it never blocks and never runs dry.
/// Invalid input surfaces as a [`LexError`], which callers propagate instead
/// of retrying.
pub trait TokenSource {
    /// The token type handed to the parser.
    type Token;

    /// Pulls the next token from the input.
    fn next_token(&mut self) -> Result<Self::Token, LexError>;
}

impl<T> TokenSource for &mut T
where
    T: TokenSource + ?Sized,
{
    type Token = T::Token;

    fn next_token(&mut self) -> Result<Self::Token, LexError> {
        (**self).next_token()
    }
}

impl<T> TokenSource for Box<T>
where
    T: TokenSource + ?Sized,
{
    type Token = T::Token;

    fn next_token(&mut self) -> Result<Self::Token, LexError> {
        (**self).next_token()
    }
}
