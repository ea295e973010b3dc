//! Input stream over an arbitrary byte source.
//!
//! `Stream` is the safe Rust model of a readable C `FILE`: a source, a
//! [`StreamBuffer`], EOF/error indicators, and pushback. The buffering mode
//! decides how much input is pulled from the source per refill:
//!
//! - [`BufMode::None`]: one byte per `read` call, so the stream never holds
//!   input the caller has not asked for.
//! - [`BufMode::Line`] / [`BufMode::Full`]: up to `capacity` bytes per
//!   `read` call.
//!
//! Switching strategy mid-stream goes through [`Stream::rebuffer`], which
//! carries every unread byte over to the new stream.

use std::io::{self, Read};

use super::buffer::{BUFSIZ, BufMode, StreamBuffer};
use super::scan::ScanError;

/// Runtime stream state flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamFlags {
    pub eof: bool,
    pub error: bool,
}

#[derive(Debug)]
pub struct Stream<R> {
    source: R,
    buffer: StreamBuffer,
    flags: StreamFlags,
    /// Pushed-back bytes, consumed from the end.
    pushback: Vec<u8>,
}

impl<R: Read> Stream<R> {
    /// Create a stream with the given buffering mode and capacity.
    pub fn with_mode(source: R, mode: BufMode, capacity: usize) -> Self {
        Self {
            source,
            buffer: StreamBuffer::new(mode, capacity),
            flags: StreamFlags::default(),
            pushback: Vec::new(),
        }
    }

    /// Unbuffered stream: one source read per byte.
    pub fn unbuffered(source: R) -> Self {
        Self::with_mode(source, BufMode::None, 0)
    }

    /// Line-buffered stream with default BUFSIZ.
    pub fn line_buffered(source: R) -> Self {
        Self::with_mode(source, BufMode::Line, BUFSIZ)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn buf_mode(&self) -> BufMode {
        self.buffer.mode()
    }

    pub fn is_eof(&self) -> bool {
        self.flags.eof
    }

    pub fn is_error(&self) -> bool {
        self.flags.error
    }

    /// Clear EOF and error indicators.
    pub fn clear_err(&mut self) {
        self.flags = StreamFlags::default();
    }

    /// Bytes available without touching the source.
    pub fn buffered_len(&self) -> usize {
        self.pushback.len() + self.buffer.readable()
    }

    /// Give back the source. Unread buffered bytes are discarded.
    pub fn into_inner(self) -> R {
        self.source
    }

    // -----------------------------------------------------------------------
    // Buffering control
    // -----------------------------------------------------------------------

    /// Convert to another buffering mode without losing unread input.
    ///
    /// Pushed-back and buffered bytes are replayed, in order, before the new
    /// stream reads from the source again: they are loaded into the new
    /// buffer when they fit, and go to its pushback otherwise. Indicators
    /// are cleared.
    pub fn rebuffer(mut self, mode: BufMode, capacity: usize) -> Stream<R> {
        let mut pending: Vec<u8> = self.pushback.drain(..).rev().collect();
        pending.extend(self.buffer.take_pending());
        let mut next = Stream::with_mode(self.source, mode, capacity);
        if pending.len() <= next.buffer.capacity() {
            next.buffer.fill(&pending);
        } else {
            next.pushback = pending.into_iter().rev().collect();
        }
        next
    }

    // -----------------------------------------------------------------------
    // Byte and char reads
    // -----------------------------------------------------------------------

    /// Read one byte. `Ok(None)` means end of input and sets the EOF flag.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pushback.pop() {
            return Ok(Some(b));
        }
        if matches!(self.buffer.mode(), BufMode::None) {
            return self.read_direct();
        }
        if self.buffer.readable() == 0 && !self.refill()? {
            return Ok(None);
        }
        Ok(self.buffer.read(1).first().copied())
    }

    /// Read one UTF-8 encoded scalar value.
    ///
    /// Malformed or truncated sequences decode to U+FFFD; a byte that cannot
    /// continue the current sequence is pushed back and starts the next read.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };

        let mut seq = [lead, 0, 0, 0];
        for slot in seq.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) if (0x80..=0xBF).contains(&b) => *slot = b,
                Some(b) => {
                    self.unget(b);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let decoded = std::str::from_utf8(&seq[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(decoded))
    }

    /// Push a byte back (ungetc). Clears EOF.
    ///
    /// The byte goes into the buffer when it has room in front of the unread
    /// bytes; otherwise, and always for unbuffered streams, onto `pushback`.
    pub fn unget(&mut self, byte: u8) {
        if !self.pushback.is_empty() || !self.buffer.unget(byte) {
            self.pushback.push(byte);
        }
        self.flags.eof = false;
    }

    /// Push back a whole character so the next `read_char` returns it.
    pub fn unget_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        for &b in c.encode_utf8(&mut utf8).as_bytes().iter().rev() {
            self.unget(b);
        }
    }

    // -----------------------------------------------------------------------
    // Delimited reads
    // -----------------------------------------------------------------------

    /// Append bytes to `out` up to and including `delim`.
    ///
    /// Returns `Ok(true)` if the delimiter was found, `Ok(false)` if input
    /// ended first. On error, bytes read before the failure remain in `out`.
    pub fn read_until(&mut self, delim: u8, out: &mut Vec<u8>) -> io::Result<bool> {
        while let Some(b) = self.pushback.pop() {
            out.push(b);
            if b == delim {
                return Ok(true);
            }
        }

        if matches!(self.buffer.mode(), BufMode::None) {
            while let Some(b) = self.read_direct()? {
                out.push(b);
                if b == delim {
                    return Ok(true);
                }
            }
            return Ok(false);
        }

        loop {
            if self.buffer.readable() == 0 && !self.refill()? {
                return Ok(false);
            }
            let chunk = self.buffer.peek();
            match chunk.iter().position(|&b| b == delim) {
                Some(i) => {
                    out.extend_from_slice(self.buffer.read(i + 1));
                    return Ok(true);
                }
                None => {
                    let n = chunk.len();
                    out.extend_from_slice(self.buffer.read(n));
                }
            }
        }
    }

    /// Read a string up to and including `delim`.
    ///
    /// Always returns what was read. The error is `Eof` when input ended
    /// before the delimiter. Invalid UTF-8 is replaced lossily.
    pub fn read_string(&mut self, delim: u8) -> (String, Option<ScanError>) {
        let mut raw = Vec::new();
        let error = match self.read_until(delim, &mut raw) {
            Ok(true) => None,
            Ok(false) => Some(ScanError::Eof),
            Err(e) => Some(ScanError::Io(e)),
        };
        (String::from_utf8_lossy(&raw).into_owned(), error)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn read_direct(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => {
                    self.flags.eof = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.flags.error = true;
                    return Err(e);
                }
            }
        }
    }

    /// Refill the buffer from the source. `Ok(false)` at end of input.
    fn refill(&mut self) -> io::Result<bool> {
        loop {
            match self.source.read(self.buffer.spare_mut()) {
                Ok(0) => {
                    self.flags.eof = true;
                    return Ok(false);
                }
                Ok(n) => {
                    self.buffer.set_filled(n);
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.flags.error = true;
                    return Err(e);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
