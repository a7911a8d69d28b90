use std::fmt;
use std::io;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum ScanError {
    TokenReadError(io::Error),
    NoTokenFound,
    IntParseError(ParseIntError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanError::TokenReadError(error) => write!(f, "Failed to read from input: {}", error),
            ScanError::NoTokenFound => write!(f, "No token found in input"),
            ScanError::IntParseError(error) => write!(f, "Failed to parse integer token: {}", error),
        }
    }
}

impl From<ParseIntError> for ScanError {
    fn from(error: ParseIntError) -> Self {
        ScanError::IntParseError(error)
    }
}
