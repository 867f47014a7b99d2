//! Utilities for measuring and limiting I/O.

use std::io::{self, Read};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::Size;

/// Types with a length in bytes.
pub trait ByteLen {
    /// Length as [`Size`].
    fn byte_len(&self) -> Size;
}

impl ByteLen for [u8] {
    fn byte_len(&self) -> Size {
        Size::from_usize(self.len())
    }
}

impl ByteLen for str {
    fn byte_len(&self) -> Size {
        Size::from_usize(self.len())
    }
}

impl ByteLen for Vec<u8> {
    fn byte_len(&self) -> Size {
        self.as_slice().byte_len()
    }
}

impl ByteLen for String {
    fn byte_len(&self) -> Size {
        self.as_str().byte_len()
    }
}

#[cfg(feature = "bytes")]
impl ByteLen for bytes::Bytes {
    fn byte_len(&self) -> Size {
        Size::from_usize(self.len())
    }
}

/// Reader that stops with end of stream after `size` whole bytes.
///
/// Sizes of zero or less yield a reader returning no data. Partial bytes are ignored.
///
/// ```rust
/// # use std::io::Read;
/// # use mem_units::{io::limit_reader, Size};
/// let mut data = String::new();
/// limit_reader("Hello, World!".as_bytes(), Size::bytes(5))
///     .read_to_string(&mut data)
///     .unwrap();
/// assert_eq!(data, "Hello");
/// ```
pub fn limit_reader<R: Read>(reader: R, size: Size) -> io::Take<R> {
    reader.take(u64::try_from(size.whole_bytes()).unwrap_or(0))
}

/// State of a reading operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reading is still in progress.
    Reading,
    /// The source reached the end of the stream.
    Finished,
    /// Reading from the source failed.
    Failed(io::ErrorKind),
}

/// Progress of a reading operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Bytes read since the last update.
    pub delta: Size,
    /// Bytes read since the start of the operation.
    pub total: Size,
    /// State of the operation.
    pub outcome: Outcome,
}

impl Progress {
    /// Check whether the source has been read completely.
    pub fn is_done(&self) -> bool {
        self.outcome == Outcome::Finished
    }

    /// Kind of the error that aborted the operation, if any.
    pub fn error(&self) -> Option<io::ErrorKind> {
        match self.outcome {
            Outcome::Failed(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Reader reporting its progress to a callback.
///
/// The callback is invoked when a read completes and either
///
/// - [`update_every`][Self::update_every] has elapsed since the last update, or
/// - [`update_after`][Self::update_after] bytes have been read since the last update.
///
/// If both thresholds are disabled, the callback is invoked after every read. With a
/// time threshold, the first read always produces an update. When the source reaches
/// the end of the stream or fails, the callback is invoked exactly once more and never
/// again afterwards.
///
/// The callback runs on the reading thread and delays further reads. Slow consumers
/// should forward the progress via a channel, e.g., [`std::sync::mpsc`].
///
/// ```rust
/// # use std::io::Read;
/// # use std::time::Duration;
/// # use mem_units::{io::ProgressReader, Size};
/// let data = vec![0u8; 1_000_000];
/// let mut updates = Vec::new();
/// let mut reader = ProgressReader::new(data.as_slice(), Duration::from_secs(3600), |p| {
///     updates.push(p.total.to_string());
/// })
/// .with_update_after(Size::KB * 200);
/// let mut buffer = [0u8; 8192];
/// while reader.read(&mut buffer).unwrap() > 0 {}
/// drop(reader);
/// assert_eq!(
///     updates,
///     ["8.192KB", "212.992KB", "417.792KB", "622.592KB", "827.392KB", "1MB"]
/// );
/// ```
pub struct ProgressReader<R, F> {
    reader: R,
    update: F,
    update_every: Duration,
    update_after: Size,
    delta: Size,
    total: Size,
    last_update: Option<Instant>,
    outcome: Outcome,
}

impl<R, F> ProgressReader<R, F>
where
    R: Read,
    F: FnMut(&Progress),
{
    /// Wrap `reader` and report the progress at most every `update_every`.
    ///
    /// A zero duration disables the time threshold.
    pub fn new(reader: R, update_every: Duration, update: F) -> Self {
        Self {
            reader,
            update,
            update_every,
            update_after: Size::ZERO,
            delta: Size::ZERO,
            total: Size::ZERO,
            last_update: None,
            outcome: Outcome::Reading,
        }
    }

    /// Additionally report the progress after `size` bytes.
    ///
    /// Sizes of zero or less disable the size threshold.
    pub fn with_update_after(mut self, size: Size) -> Self {
        self.update_after = size;
        self
    }

    /// Time that has to elapse between two updates.
    pub fn update_every(&self) -> Duration {
        self.update_every
    }

    /// Number of bytes that have to be read between two updates.
    pub fn update_after(&self) -> Size {
        self.update_after
    }

    /// Current progress.
    pub fn progress(&self) -> Progress {
        Progress {
            delta: self.delta,
            total: self.total,
            outcome: self.outcome,
        }
    }

    /// Reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwrap the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn is_due(&self) -> bool {
        let every = !self.update_every.is_zero();
        let after = self.update_after > Size::ZERO;
        if !every && !after {
            return true;
        }
        if after && self.delta >= self.update_after {
            return true;
        }
        match self.last_update {
            _ if !every => false,
            None => true,
            Some(last) => last.elapsed() >= self.update_every,
        }
    }

    fn notify(&mut self) {
        let progress = self.progress();
        trace!(delta = %progress.delta, total = %progress.total, "progress update");
        (self.update)(&progress);
        self.delta = Size::ZERO;
        if !self.update_every.is_zero() {
            self.last_update = Some(Instant::now());
        }
    }
}

impl<R, F> Read for ProgressReader<R, F>
where
    R: Read,
    F: FnMut(&Progress),
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.outcome {
            Outcome::Reading => {}
            Outcome::Finished => return Ok(0),
            Outcome::Failed(kind) => return Err(kind.into()),
        }
        let n = match self.reader.read(buf) {
            Ok(0) if !buf.is_empty() => {
                debug!(total = %self.total, "finished reading");
                self.outcome = Outcome::Finished;
                0
            }
            Ok(n) => {
                let size = Size::from_usize(n);
                self.delta += size;
                self.total += size;
                n
            }
            Err(error) if error.kind() == io::ErrorKind::Interrupted => return Err(error),
            Err(error) => {
                debug!(total = %self.total, %error, "reading failed");
                self.outcome = Outcome::Failed(error.kind());
                self.notify();
                return Err(error);
            }
        };
        if self.outcome != Outcome::Reading || self.is_due() {
            self.notify();
        }
        Ok(n)
    }
}
