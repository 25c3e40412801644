//! Common Framework
//!
//! Pieces shared by `lexer-framework` and `parser-framework`: source
//! positions, token text slices, the lexical error type and the
//! [`TokenSource`] contract the parser pulls tokens through.

pub mod error;
pub mod position;
pub mod source;
pub mod text_slice;

pub use error::LexError;
pub use position::Position;
pub use source::TokenSource;
pub use text_slice::TextSlice;
