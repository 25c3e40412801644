pub mod context;
pub mod cursor;
pub mod lexer;
pub mod traits;

pub use common_framework::{LexError, Position, TextSlice, TokenSource};
pub use context::{DefaultContext, LexContext};
pub use cursor::{Checkpoint, Cursor};
pub use lexer::Lexer;
pub use traits::{LexToken, Lexeme, LexingRule};
