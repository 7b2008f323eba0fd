use std::path::PathBuf;

/// A lexical problem found while scanning. The scan keeps going after one.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter { line: usize },
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match *self {
            ScanError::UnexpectedCharacter { line } => line,
            ScanError::UnterminatedString { line } => line,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScanError::UnexpectedCharacter { .. } => "Unexpected character.",
            ScanError::UnterminatedString { .. } => "Unterminated string.",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoxError {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scan reported {count} lexical error(s)")]
    Scan { count: usize },
}

impl LoxError {
    /// Process exit status, sysexits style.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::Scan { .. } => 65,
            LoxError::Io { .. } => 66,
        }
    }
}
