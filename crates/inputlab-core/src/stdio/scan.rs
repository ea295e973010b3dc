//! Single-token line scanning.
//!
//! `scan_word` reads exactly one whitespace-delimited token and then
//! requires the rest of the current line to be blank, consuming the line
//! terminator. It is meant to run on an unbuffered [`Stream`] so that input
//! after the terminator stays in the source for the next reader.
//!
//! Line terminators are `\n` and `\r\n`. Other whitespace (including a lone
//! `\r`) separates tokens but does not end the line.

use std::io::{self, Read};

use thiserror::Error;

use super::stream::Stream;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The line ended before any token character.
    #[error("unexpected newline")]
    UnexpectedNewline,
    /// A second token followed the first on the same line.
    #[error("expected newline, found {found:?}")]
    ExpectedNewline { found: char },
    /// Input ended before any token character.
    #[error("unexpected EOF")]
    UnexpectedEof,
    /// Input ended before the delimiter of a delimited read.
    #[error("EOF")]
    Eof,
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

/// Result of a scan: whatever was read, plus the advisory error if any.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub token: String,
    pub error: Option<ScanError>,
}

enum Class {
    Newline,
    Blank,
    Token,
}

/// Classify `c`, folding `\r\n` into a single newline.
fn classify<R: Read>(stream: &mut Stream<R>, c: char) -> io::Result<Class> {
    match c {
        '\n' => Ok(Class::Newline),
        '\r' => match stream.read_char()? {
            Some('\n') => Ok(Class::Newline),
            Some(other) => {
                stream.unget_char(other);
                Ok(Class::Blank)
            }
            None => Ok(Class::Blank),
        },
        c if c.is_whitespace() => Ok(Class::Blank),
        _ => Ok(Class::Token),
    }
}

/// Read one token from the current line.
///
/// The token read so far is always returned, even alongside an error.
/// On `ExpectedNewline` the offending character has been consumed; the rest
/// of the line after it is left in `stream`.
pub fn scan_word<R: Read>(stream: &mut Stream<R>) -> ScanOutcome {
    let mut token = String::new();
    let error = scan_token(stream, &mut token).err();
    ScanOutcome { token, error }
}

fn scan_token<R: Read>(stream: &mut Stream<R>, token: &mut String) -> Result<(), ScanError> {
    let first = loop {
        let Some(c) = stream.read_char()? else {
            return Err(ScanError::UnexpectedEof);
        };
        match classify(stream, c)? {
            Class::Newline => return Err(ScanError::UnexpectedNewline),
            Class::Blank => continue,
            Class::Token => break c,
        }
    };
    token.push(first);

    loop {
        let Some(c) = stream.read_char()? else {
            return Ok(());
        };
        match classify(stream, c)? {
            Class::Token => token.push(c),
            Class::Newline => return Ok(()),
            Class::Blank => break,
        }
    }

    // Only blanks may follow the token on this line.
    loop {
        let Some(c) = stream.read_char()? else {
            return Ok(());
        };
        match classify(stream, c)? {
            Class::Newline => return Ok(()),
            Class::Blank => continue,
            Class::Token => return Err(ScanError::ExpectedNewline { found: c }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream(input: &str) -> Stream<Cursor<Vec<u8>>> {
        Stream::unbuffered(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_scan_single_word() {
        let mut s = stream("hello\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        assert!(out.error.is_none());
        assert_eq!(s.read_byte().unwrap(), None);
    }

    #[test]
    fn test_scan_stops_after_newline() {
        let mut s = stream("hello\nthe quick fox\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "the quick fox\n");
    }

    #[test]
    fn test_scan_skips_leading_and_trailing_blanks() {
        let mut s = stream(" \t hello  \t\nnext");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        assert!(out.error.is_none());
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "next");
    }

    #[test]
    fn test_scan_crlf_terminator() {
        let mut s = stream("hello\r\nnext\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        assert!(out.error.is_none());
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "next\n");
    }

    #[test]
    fn test_scan_lone_cr_is_blank() {
        let mut s = stream("a\rb\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "a");
        assert!(matches!(
            out.error,
            Some(ScanError::ExpectedNewline { found: 'b' })
        ));
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "\n");
    }

    #[test]
    fn test_scan_empty_line() {
        let mut s = stream("\nsecond\n");
        let out = scan_word(&mut s);
        assert!(out.token.is_empty());
        assert!(matches!(out.error, Some(ScanError::UnexpectedNewline)));
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn test_scan_eof_before_token() {
        let mut s = stream("   ");
        let out = scan_word(&mut s);
        assert!(out.token.is_empty());
        assert!(matches!(out.error, Some(ScanError::UnexpectedEof)));
    }

    #[test]
    fn test_scan_eof_after_token_is_ok() {
        let mut s = stream("hello");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        assert!(out.error.is_none());
    }

    #[test]
    fn test_scan_extra_token_loses_first_char() {
        let mut s = stream("hello world\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "hello");
        assert!(matches!(
            out.error,
            Some(ScanError::ExpectedNewline { found: 'w' })
        ));
        let (rest, _) = s.read_string(b'\n');
        assert_eq!(rest, "orld\n");
    }

    #[test]
    fn test_scan_unicode_token_and_space() {
        // U+3000 IDEOGRAPHIC SPACE separates, U+00E9 is part of the token.
        let mut s = stream("\u{3000}café\u{3000}\n");
        let out = scan_word(&mut s);
        assert_eq!(out.token, "café");
        assert!(out.error.is_none());
    }

    #[test]
    fn test_scan_error_messages() {
        assert_eq!(ScanError::UnexpectedNewline.to_string(), "unexpected newline");
        assert_eq!(
            ScanError::ExpectedNewline { found: 'x' }.to_string(),
            "expected newline, found 'x'"
        );
        assert_eq!(ScanError::Eof.to_string(), "EOF");
    }
}
