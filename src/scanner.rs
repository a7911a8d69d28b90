mod error;
mod tests;

pub use error::ScanError;

use std::io::BufRead;

pub struct Scanner<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
        }
    }

    pub fn next_int(&mut self) -> Result<i32, ScanError> {
        let token = self.next_token()?;
        if token.is_empty() {
            return Err(ScanError::NoTokenFound);
        }
        token.parse().map_err(ScanError::from)
    }

    fn next_token(&mut self) -> Result<String, ScanError> {
        let mut token = String::new();
        loop {
            let buffer = self.reader.fill_buf().map_err(ScanError::TokenReadError)?;
            if buffer.is_empty() {
                return Ok(token);
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buffer {
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    // The delimiter stays in the reader for the next call.
                    complete = true;
                    break;
                }
                token.push(char::from(byte));
                used += 1;
            }
            self.reader.consume(used);
            if complete {
                return Ok(token);
            }
        }
    }
}
