// Declare modules publicly so they are part of the library interface
pub mod lexer;
pub mod parser;
pub mod pretty_print;
pub mod source;
pub mod types;

pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{ParseError, Parser, parse_program_str, parse_str};
pub use source::Span;
pub use types::{Atom, Node, Sexpr};
