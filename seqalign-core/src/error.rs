use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("alphabet token '{token}' is not a single upper-case letter")]
    InvalidAlphabet { token: String },

    #[error("symbol '{symbol}' declared twice in the alphabet line")]
    DuplicateSymbol { symbol: char },

    #[error("matrix row {row} has {found} values, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix row {row} has unparseable value '{token}'")]
    NumberFormat {
        row: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("matrix has {found} rows, expected {expected} (the gap row counts)")]
    MissingRow { expected: usize, found: usize },

    #[error("'{symbol}' at position {pos} is not an upper-case letter")]
    NotUpperLetter { symbol: char, pos: usize },

    #[error("symbol '{symbol}' is not in the similarity matrix")]
    UnknownSymbol { symbol: char },

    #[error("aligned rows differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

pub type AlignResult<T> = Result<T, AlignError>;
