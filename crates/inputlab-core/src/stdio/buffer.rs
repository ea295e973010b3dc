//! Read-side buffering engine.
//!
//! Models POSIX stdio input buffering. Three modes: fully-buffered (_IOFBF),
//! line-buffered (_IOLBF), and unbuffered (_IONBF).
//!
//! Reference: POSIX.1-2024 setvbuf, ISO C11 7.21.3
//!
//! Design: the buffer is a fixed-capacity window with explicit read and
//! fill cursors. The mode is fixed at construction; a stream that wants
//! another mode builds a new buffer and moves the unread bytes across.

/// Default buffer size (POSIX BUFSIZ).
pub const BUFSIZ: usize = 8192;

/// Buffering modes, after POSIX `_IOFBF`, `_IOLBF`, `_IONBF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufMode {
    /// Fully buffered: refill in capacity-sized chunks.
    Full,
    /// Line buffered: refill in capacity-sized chunks, lines are the unit
    /// callers consume.
    Line,
    /// Unbuffered: one byte per source read.
    None,
}

impl BufMode {
    /// Short lowercase name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            BufMode::Full => "full",
            BufMode::Line => "line",
            BufMode::None => "unbuffered",
        }
    }
}

/// Input buffer state for a single stream.
///
/// Invariants:
/// - `pos <= filled <= data.len()`
/// - `data.len()` is fixed for the buffer's lifetime (zero when unbuffered)
#[derive(Debug)]
pub struct StreamBuffer {
    data: Vec<u8>,
    /// Next unread byte.
    pos: usize,
    /// Number of valid bytes in the buffer.
    filled: usize,
    mode: BufMode,
}

fn capacity_for(mode: BufMode, requested: usize) -> usize {
    if matches!(mode, BufMode::None) {
        0
    } else {
        requested.max(1)
    }
}

impl StreamBuffer {
    /// Create a new buffer with the given mode and capacity.
    pub fn new(mode: BufMode, capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity_for(mode, capacity)],
            pos: 0,
            filled: 0,
            mode,
        }
    }

    pub fn mode(&self) -> BufMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Take up to `count` buffered bytes.
    ///
    /// An empty slice means the caller should refill from the source.
    pub fn read(&mut self, count: usize) -> &[u8] {
        let take = count.min(self.readable());
        let slice = &self.data[self.pos..self.pos + take];
        self.pos += take;
        slice
    }

    /// Unread bytes, without consuming them.
    pub fn peek(&self) -> &[u8] {
        &self.data[self.pos..self.filled]
    }

    /// Number of buffered bytes available for reading.
    pub fn readable(&self) -> usize {
        self.filled.saturating_sub(self.pos)
    }

    /// Mutable view of the whole backing storage, for reading from a source
    /// directly into the buffer. Follow with [`StreamBuffer::set_filled`].
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }

    /// Record that the first `n` bytes of the storage hold fresh input.
    /// Resets position to 0.
    pub fn set_filled(&mut self, n: usize) {
        self.pos = 0;
        self.filled = n.min(self.data.len());
    }

    /// Fill the buffer from a slice. Excess bytes beyond capacity are dropped;
    /// returns how many were kept.
    pub fn fill(&mut self, data: &[u8]) -> usize {
        let take = data.len().min(self.data.len());
        self.data[..take].copy_from_slice(&data[..take]);
        self.pos = 0;
        self.filled = take;
        take
    }

    /// Push a single byte back in front of the unread bytes (for ungetc).
    ///
    /// Returns `true` on success, `false` if no space available.
    pub fn unget(&mut self, byte: u8) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            self.data[self.pos] = byte;
            true
        } else if self.filled < self.data.len() {
            // Shift right by one to make room at the front.
            if self.filled > 0 {
                self.data.copy_within(0..self.filled, 1);
            }
            self.data[0] = byte;
            self.filled += 1;
            true
        } else {
            false
        }
    }

    /// Drain every unread byte, leaving the buffer empty.
    pub fn take_pending(&mut self) -> Vec<u8> {
        let pending = self.data[self.pos..self.filled].to_vec();
        self.reset();
        pending
    }

    /// Discard all pending data.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.filled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_from_filled_buffer() {
        let mut buf = StreamBuffer::new(BufMode::Full, 64);
        buf.fill(b"hello world");
        assert_eq!(buf.read(5), b"hello");
        assert_eq!(buf.read(6), b" world");
        assert!(buf.read(1).is_empty());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut buf = StreamBuffer::new(BufMode::Full, BUFSIZ);
        buf.fill(b"abc");
        assert_eq!(buf.peek(), b"abc");
        assert_eq!(buf.read(2), b"ab");
        assert_eq!(buf.peek(), b"c");
    }

    #[test]
    fn test_fill_truncates_to_capacity() {
        let mut buf = StreamBuffer::new(BufMode::Line, 4);
        assert_eq!(buf.fill(b"abcdef"), 4);
        assert_eq!(buf.readable(), 4);
        assert_eq!(buf.read(10), b"abcd");
    }

    #[test]
    fn test_unbuffered_has_no_capacity() {
        let mut buf = StreamBuffer::new(BufMode::None, BUFSIZ);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.fill(b"abc"), 0);
        assert!(!buf.unget(b'x'));
    }

    #[test]
    fn test_unget_byte() {
        let mut buf = StreamBuffer::new(BufMode::Full, 64);
        buf.fill(b"ello");
        let _ = buf.read(1);
        assert!(buf.unget(b'e'));
        assert_eq!(buf.read(4), b"ello");
    }

    #[test]
    fn test_unget_into_empty_front() {
        let mut buf = StreamBuffer::new(BufMode::Line, 8);
        buf.fill(b"orld");
        assert!(buf.unget(b'w'));
        assert_eq!(buf.read(8), b"world");
    }

    #[test]
    fn test_take_pending_drains() {
        let mut buf = StreamBuffer::new(BufMode::Line, BUFSIZ);
        buf.fill(b"one two\n");
        let _ = buf.read(4);
        assert_eq!(buf.take_pending(), b"two\n");
        assert_eq!(buf.readable(), 0);
    }

    #[test]
    fn test_set_filled_clamps() {
        let mut buf = StreamBuffer::new(BufMode::Full, 3);
        buf.spare_mut().copy_from_slice(b"xyz");
        buf.set_filled(10);
        assert_eq!(buf.readable(), 3);
    }

    #[test]
    fn test_unget_fails_when_full() {
        let mut buf = StreamBuffer::new(BufMode::Full, 2);
        buf.fill(b"ab");
        assert!(!buf.unget(b'x'));
        assert_eq!(buf.peek(), b"ab");
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(BufMode::Full.as_str(), "full");
        assert_eq!(BufMode::Line.as_str(), "line");
        assert_eq!(BufMode::None.as_str(), "unbuffered");
    }
}
