pub mod ast;
pub mod lexer;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Cond, Order, Query};
pub use lexer::tokenize;
pub use matcher::{MatchError, Row};
pub use output::{row_to_json, rows_to_json};
pub use parser::{ParseError, Parser};
pub use value::Value;
