use std::error::Error;
use std::fmt;

/// Failure kinds of the board core. All of these indicate a caller-side
/// programming error, never a transient condition; nothing here is retryable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Square index outside 0..=63.
    InvalidSquareIndex(u8),
    /// Algebraic notation not matching the two-character `[a-h][1-8]` pattern.
    MalformedNotation(String),
    /// Bit scan invoked on an empty bitboard.
    EmptyBitboardScan,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSquareIndex(sq) => {
                write!(f, "square index {} is outside 0..=63", sq)
            }
            BoardError::MalformedNotation(s) => {
                write!(f, "malformed square notation: {:?}", s)
            }
            BoardError::EmptyBitboardScan => {
                write!(f, "bit scan on an empty bitboard")
            }
        }
    }
}

impl Error for BoardError {}
