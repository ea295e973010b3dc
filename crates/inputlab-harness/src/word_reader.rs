//! Word reader: one word unbuffered, then one sentence line-buffered.
//!
//! The word is scanned from an unbuffered stream, so nothing past the end
//! of its line is pulled from the input. The same stream is then rebuffered
//! and the sentence is read a whole line at a time. Read failures are never
//! fatal: whatever was read is printed and the failure is logged.

use std::io::{Read, Write};

use inputlab_core::stdio::{BUFSIZ, BufMode};
use inputlab_core::{ScanError, Stream, fields, format_tokens, scan_word, trim_space};

use crate::error::HarnessError;
use crate::structured_log::{LogEmitter, LogLevel, Outcome};

pub const WORD_PROMPT: &str = "Enter a word: ";
pub const SENTENCE_PROMPT: &str = "Enter a sentence: ";
pub const WORD_LABEL: &str = "Word (using Scanln):";
pub const WORDS_LABEL: &str = "Words (using bufio.Reader):";

/// What one run read, including the advisory read errors.
#[derive(Debug, Default)]
pub struct WordReaderReport {
    pub word: Vec<String>,
    pub words: Vec<String>,
    pub word_error: Option<ScanError>,
    pub line_error: Option<ScanError>,
}

fn owned_fields(s: &str) -> Vec<String> {
    fields(s).into_iter().map(String::from).collect()
}

/// Run the word reader against `input`, writing prompts and results to
/// `output`. Only output and log failures are returned as errors.
pub fn run_word_reader<R: Read, W: Write>(
    input: R,
    output: &mut W,
    log: &mut LogEmitter,
) -> Result<WordReaderReport, HarnessError> {
    log.emit(LogLevel::Debug, "word_reader_start")?;

    write!(output, "{WORD_PROMPT}")?;
    output.flush()?;
    let mut stream = Stream::unbuffered(input);
    let scanned = scan_word(&mut stream);
    let word = owned_fields(&scanned.token);
    writeln!(output, "{WORD_LABEL} {}", format_tokens(&word))?;
    log_read(
        log,
        "word_read",
        stream.buf_mode(),
        &word,
        scanned.error.as_ref(),
    )?;

    write!(output, "{SENTENCE_PROMPT}")?;
    output.flush()?;
    let mut stream = stream.rebuffer(BufMode::Line, BUFSIZ);
    let (line, line_error) = stream.read_string(b'\n');
    let words = owned_fields(trim_space(&line));
    writeln!(output, "{WORDS_LABEL} {}", format_tokens(&words))?;
    output.flush()?;
    log_read(
        log,
        "line_read",
        stream.buf_mode(),
        &words,
        line_error.as_ref(),
    )?;

    let entry = log
        .entry(LogLevel::Info, "word_reader_done")
        .with_exit_code(0)
        .with_details(serde_json::json!({
            "word_count": word.len(),
            "sentence_count": words.len(),
            "line_bytes": line.len(),
        }));
    log.emit_entry(entry)?;
    log.flush()?;

    Ok(WordReaderReport {
        word,
        words,
        word_error: scanned.error,
        line_error,
    })
}

fn log_read(
    log: &mut LogEmitter,
    event: &str,
    mode: BufMode,
    tokens: &[String],
    error: Option<&ScanError>,
) -> Result<(), HarnessError> {
    let entry = match error {
        None => log.entry(LogLevel::Info, event).with_outcome(Outcome::Pass),
        Some(err) => log
            .entry(LogLevel::Warn, event)
            .with_outcome(Outcome::Error)
            .with_error(err),
    };
    log.emit_entry(entry.with_strategy(mode.as_str()).with_tokens(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_log::{Program, validate_log_line};
    use std::io::Cursor;

    fn run(input: &str) -> (String, WordReaderReport) {
        let mut out = Vec::new();
        let mut log = LogEmitter::disabled(Program::WordReader);
        let report =
            run_word_reader(Cursor::new(input.as_bytes().to_vec()), &mut out, &mut log).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn prints_prompts_and_results() {
        let (out, report) = run("hello\nthe quick fox\n");
        assert_eq!(
            out,
            "Enter a word: Word (using Scanln): [hello]\n\
             Enter a sentence: Words (using bufio.Reader): [the quick fox]\n"
        );
        assert_eq!(report.word, vec!["hello"]);
        assert_eq!(report.words, vec!["the", "quick", "fox"]);
        assert!(report.word_error.is_none());
        assert!(report.line_error.is_none());
    }

    #[test]
    fn empty_input_prints_empty_sequences() {
        let (out, report) = run("");
        assert!(out.contains("Word (using Scanln): []\n"));
        assert!(out.contains("Words (using bufio.Reader): []\n"));
        assert!(matches!(report.word_error, Some(ScanError::UnexpectedEof)));
        assert!(matches!(report.line_error, Some(ScanError::Eof)));
    }

    #[test]
    fn blank_word_line_moves_on_to_sentence() {
        let (out, report) = run("\n  spaced   out  \n");
        assert!(out.contains("Word (using Scanln): []\n"));
        assert!(out.contains("Words (using bufio.Reader): [spaced out]\n"));
        assert!(matches!(
            report.word_error,
            Some(ScanError::UnexpectedNewline)
        ));
    }

    #[test]
    fn extra_word_drops_its_first_char_before_sentence() {
        let (out, report) = run("hello world\nnext line\n");
        assert_eq!(
            out,
            "Enter a word: Word (using Scanln): [hello]\n\
             Enter a sentence: Words (using bufio.Reader): [orld]\n"
        );
        assert!(matches!(
            report.word_error,
            Some(ScanError::ExpectedNewline { found: 'w' })
        ));
        assert!(report.line_error.is_none());
    }

    #[test]
    fn read_errors_are_logged_not_returned() {
        let (mut log, sink) = LogEmitter::to_buffer(Program::WordReader, "t");
        let mut out = Vec::new();
        let report = run_word_reader(Cursor::new(b"a b".to_vec()), &mut out, &mut log).unwrap();
        assert_eq!(report.word, vec!["a"]);
        assert!(report.words.is_empty());

        let entries: Vec<_> = sink
            .lines()
            .iter()
            .enumerate()
            .map(|(i, l)| validate_log_line(l, i + 1).unwrap())
            .collect();
        let events: Vec<&str> = entries.iter().map(|e| e.event.as_str()).collect();
        assert_eq!(events, vec!["word_read", "line_read", "word_reader_done"]);

        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].strategy.as_deref(), Some("unbuffered"));
        assert_eq!(
            entries[0].error.as_deref(),
            Some("expected newline, found 'b'")
        );
        assert_eq!(entries[1].strategy.as_deref(), Some("line"));
        assert_eq!(entries[1].tokens, Some(Vec::new()));
        assert_eq!(entries[1].error.as_deref(), Some("EOF"));
        assert_eq!(entries[2].exit_code, Some(0));
    }

    #[test]
    fn debug_level_includes_start_event() {
        let (log, sink) = LogEmitter::to_buffer(Program::WordReader, "t");
        let mut log = log.with_min_level(LogLevel::Debug);
        let mut out = Vec::new();
        run_word_reader(Cursor::new(b"x\ny\n".to_vec()), &mut out, &mut log).unwrap();
        let first = validate_log_line(&sink.lines()[0], 1).unwrap();
        assert_eq!(first.event, "word_reader_start");
        assert_eq!(first.trace_id, "word-reader::t::001");
    }
}
