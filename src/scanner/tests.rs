use std::io::Cursor;

use crate::scanner::{ScanError, Scanner};

#[test]
fn test_next_int_reads_tokens_on_separate_lines() {
    let mut scanner = Scanner::new(Cursor::new("5\n3\n"));
    assert_eq!(scanner.next_int().unwrap(), 5);
    assert_eq!(scanner.next_int().unwrap(), 3);
}

#[test]
fn test_next_int_reads_tokens_on_one_line() {
    let mut scanner = Scanner::new(Cursor::new("  -4 6"));
    assert_eq!(scanner.next_int().unwrap(), -4);
    assert_eq!(scanner.next_int().unwrap(), 6);
}

#[test]
fn test_next_int_without_trailing_newline() {
    let mut scanner = Scanner::new(Cursor::new("42"));
    assert_eq!(scanner.next_int().unwrap(), 42);
}

#[test]
fn test_next_int_with_empty_input() {
    let mut scanner = Scanner::new(Cursor::new(""));
    assert!(matches!(scanner.next_int(), Err(ScanError::NoTokenFound)), "Empty input produced an integer");
}

#[test]
fn test_next_int_with_whitespace_only_input() {
    let mut scanner = Scanner::new(Cursor::new(" \n\t \n"));
    assert!(matches!(scanner.next_int(), Err(ScanError::NoTokenFound)), "Whitespace-only input produced an integer");
}

#[test]
fn test_next_int_with_non_integer_token() {
    let mut scanner = Scanner::new(Cursor::new("abc\n"));
    assert!(matches!(scanner.next_int(), Err(ScanError::IntParseError(_))), "Non-integer token was parsed");
}

#[test]
fn test_next_int_after_stream_is_exhausted() {
    let mut scanner = Scanner::new(Cursor::new("5\n"));
    assert_eq!(scanner.next_int().unwrap(), 5);
    assert!(matches!(scanner.next_int(), Err(ScanError::NoTokenFound)), "Exhausted stream produced an integer");
}
