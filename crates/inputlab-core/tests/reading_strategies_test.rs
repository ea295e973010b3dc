//! Integration test: word scan followed by a buffered line read.
//!
//! Validates that:
//! 1. An unbuffered word scan leaves everything after its line in the source.
//! 2. Rebuffering carries pushed-back input over to the line reader.
//! 3. Field splitting of the line keeps order and drops empty entries.
//!
//! Run: cargo test -p inputlab-core --test reading_strategies_test

use std::io::{Cursor, Read};

use inputlab_core::stdio::{BUFSIZ, BufMode};
use inputlab_core::{ScanError, Stream, fields, format_tokens, scan_word, trim_space};

fn word_then_line(input: &str) -> (Vec<String>, Vec<String>) {
    let mut stream = Stream::unbuffered(Cursor::new(input.as_bytes().to_vec()));
    let word = scan_word(&mut stream);
    let word_fields = fields(&word.token).into_iter().map(String::from).collect();

    let mut stream = stream.rebuffer(BufMode::Line, BUFSIZ);
    let (line, _) = stream.read_string(b'\n');
    let line_fields = fields(trim_space(&line))
        .into_iter()
        .map(String::from)
        .collect();
    (word_fields, line_fields)
}

#[test]
fn word_and_sentence() {
    let (word, words) = word_then_line("hello\nthe quick fox\n");
    assert_eq!(format_tokens(&word), "[hello]");
    assert_eq!(format_tokens(&words), "[the quick fox]");
}

#[test]
fn unbuffered_scan_leaves_following_lines_in_source() {
    let mut stream = Stream::unbuffered(Cursor::new(b"hello\nsecond line\n".to_vec()));
    let out = scan_word(&mut stream);
    assert_eq!(out.token, "hello");
    assert_eq!(stream.buffered_len(), 0);

    let mut rest = String::new();
    stream.into_inner().read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "second line\n");
}

#[test]
fn sentence_tokens_keep_order_without_empties() {
    let lines = [
        "a b c",
        "   leading and trailing   ",
        "tabs\tand\t\tmore\ttabs",
        "one",
        "",
        "mixed \t whitespace\u{00A0}runs",
    ];
    for line in lines {
        let input = format!("w\n{line}\n");
        let (_, words) = word_then_line(&input);
        let expected: Vec<String> = line.split_whitespace().map(String::from).collect();
        assert_eq!(words, expected, "line {line:?}");
        assert!(words.iter().all(|w| !w.is_empty()));
    }
}

#[test]
fn second_word_on_first_line_loses_its_first_char() {
    // The scan consumes the character it rejected; the line reader gets
    // the remainder of the word line, not the following line.
    let (word, words) = word_then_line("hello world\nignored\n");
    assert_eq!(word, vec!["hello"]);
    assert_eq!(words, vec!["orld"]);
}

#[test]
fn eof_yields_empty_results() {
    let (word, words) = word_then_line("");
    assert!(word.is_empty());
    assert!(words.is_empty());
    assert_eq!(format_tokens(&word), "[]");
}

#[test]
fn missing_final_newline_still_reads_sentence() {
    let mut stream = Stream::unbuffered(Cursor::new(b"hi\nno terminator".to_vec()));
    let _ = scan_word(&mut stream);
    let mut stream = stream.rebuffer(BufMode::Line, BUFSIZ);
    let (line, err) = stream.read_string(b'\n');
    assert_eq!(fields(trim_space(&line)), vec!["no", "terminator"]);
    assert!(matches!(err, Some(ScanError::Eof)));
}
