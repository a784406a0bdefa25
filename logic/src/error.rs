use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside the Base58 alphabet; `index` is its byte offset in the input.
    InvalidCharacter { character: char, index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => {
                write!(f, "invalid base58 character {:?} at index {}", character, index)
            }
        }
    }
}

impl core::error::Error for Error {}
