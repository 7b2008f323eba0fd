use crate::{error::ScanError, token::Token};
use std::fmt::Write;

pub fn print_tokens(tokens: &[Token], name: &str) {
    println!("== {} ==", name);
    print!("{}", token_listing(tokens));
}

/// One token per line, with the line number shown only when it changes.
pub fn token_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (offset, token) in tokens.iter().enumerate() {
        if offset > 0 && tokens[offset - 1].line == token.line {
            out.push_str("   | ");
        } else {
            let _ = write!(out, "{:4} ", token.line);
        }
        let _ = writeln!(out, "{}", token);
    }
    out
}

pub fn error_listing(errors: &[ScanError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(out, "{}", error);
    }
    out
}
