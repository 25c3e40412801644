//! Recursive-descent parsing support with unlimited speculative lookahead.
//!
//! Grammar rules are plain functions over a [`Parser`]. The parser pulls
//! tokens lazily from a [`TokenSource`] into a [`LookaheadBuffer`], lets
//! rules try alternatives under a mark and rewind on failure, and memoizes
//! successful rule parses by absolute position so re-trying an alternative
//! never re-parses what was already proven.

pub mod buffer;
pub mod config;
pub mod error;
pub mod memo;
pub mod parser;
pub mod speculation;
pub mod traits;

#[cfg(test)]
mod testing;

pub use buffer::LookaheadBuffer;
pub use common_framework::{LexError, Position, TokenSource};
pub use config::ParserConfig;
pub use error::ParseError;
pub use memo::{MemoCache, MemoSpan};
pub use parser::{Alternative, Kind, ParseResult, ParseStats, Parser};
pub use speculation::{Mark, Speculation};
pub use traits::ParseToken;
