//! Lexical front end for Lox: turns source text into a flat token sequence.
//!
//! ```
//! use lox_scanner::{scan, TokenType};
//!
//! let output = scan("print 1 + 2;");
//! assert!(!output.had_error());
//! assert_eq!(output.tokens.last().map(|t| t.token_type), Some(TokenType::Eof));
//! ```

pub mod debug;
pub mod error;
pub mod scanner;
pub mod token;

pub use error::{LoxError, ScanError};
pub use scanner::{ScanOutput, Scanner, scan};
pub use token::{Literal, Token, TokenType};

/// Program scanned by the driver when it is given nothing else to read.
pub const SAMPLE_PROGRAM: &str = r#"
var sum = 1 + 2;
var breakfast = "bagels";
print breakfast; // "bagels".
breakfast = "beignets";
print breakfast; // "beignets".
"#;
