use std::fmt;
use std::io;

use crate::scanner::ScanError;

#[derive(Debug)]
pub enum AppError {
    ScanFailure(ScanError),
    OutputError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::ScanFailure(error) => write!(f, "Failed to read a dimension: {}", error),
            AppError::OutputError(error) => write!(f, "Failed to write output: {}", error),
        }
    }
}

impl From<ScanError> for AppError {
    fn from(error: ScanError) -> Self {
        AppError::ScanFailure(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::OutputError(error)
    }
}
