// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The skipping stream decorator.
//!
//! ## Example
//! ```
//! use std::io::{Cursor, Read};
//! use skip_forward::{AudioInfo, SkipForwardStream};
//!
//! let header_and_pcm: Vec<u8> = (0..100).collect();
//! let mut cursor = Cursor::new(header_and_pcm);
//!
//! let mut stream = SkipForwardStream::with_stream(&mut cursor);
//! stream.set_skip(10);
//! stream.set_audio_info(AudioInfo::new(44100, 2, 16));
//!
//! /*nothing is read before the stream is started*/
//! let mut buf = [0; 50];
//! assert_eq!(stream.read(&mut buf).unwrap(), 0);
//! assert_eq!(stream.available(), 0);
//!
//! assert!(stream.begin());
//! assert_eq!(stream.available(), 90);
//! assert_eq!(stream.read(&mut buf).unwrap(), 50);
//! assert_eq!(&buf[0..3], &[0x0A, 0x0B, 0x0C]);
//! assert_eq!(stream.read(&mut buf).unwrap(), 40);
//! assert_eq!(buf[39], 0x63);
//! assert_eq!(stream.audio_info(), Some(AudioInfo::new(44100, 2, 16)));
//! ```

use core::fmt;

use super::io;
use super::{Available, AudioInfo};

/// Number of bytes discarded per underlying read
/// unless a different `CHUNK` is chosen.
pub const DEFAULT_CHUNK: usize = 512;

/// Discards the first bytes read from an underlying stream
/// and forwards everything after them unchanged.
///
/// The underlying stream is borrowed, not owned,
/// and is neither initialized nor finalized by this wrapper.
/// A new wrapper is inert: it has no stream, nothing to skip,
/// and stays inactive until [`begin`](Self::begin) is called.
///
/// While skipping, at most `CHUNK` bytes are requested from
/// the underlying stream per read, using a scratch buffer on the stack.
/// `CHUNK` must be non-zero.
///
/// Failure follows the byte-stream convention:
/// a read or write which has nothing to transfer returns `Ok(0)`,
/// whether the underlying stream is drained for now or closed for good.
/// Errors from the underlying stream are passed through unchanged.
pub struct SkipForwardStream<'a, S: ?Sized, const CHUNK: usize = DEFAULT_CHUNK> {
    stream: Option<&'a mut S>,
    skip_remaining: u64,
    active: bool,
    info: Option<AudioInfo>,
    tracing: bool,
}

impl<'a, S: ?Sized> SkipForwardStream<'a, S> {
    /// Builds an inactive wrapper with no stream attached.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inactive wrapper around the given stream.
    ///
    /// The stream should already be initialized by the caller.
    #[inline]
    pub fn with_stream(stream: &'a mut S) -> Self {
        let mut skip = Self::default();
        skip.set_stream(stream);
        skip
    }
}

impl<'a, S: ?Sized, const CHUNK: usize> SkipForwardStream<'a, S, CHUNK> {
    const CHUNK_IS_NONZERO: () = assert!(CHUNK > 0, "CHUNK must be non-zero");

    /// Attaches an already-initialized stream, returning
    /// whichever stream was attached before, if any.
    ///
    /// No I/O is performed on either stream.
    #[inline]
    pub fn set_stream(&mut self, stream: &'a mut S) -> Option<&'a mut S> {
        self.stream.replace(stream)
    }

    /// Detaches and returns the current stream.
    ///
    /// Reads and writes return `Ok(0)` until another is attached.
    #[inline]
    pub fn detach(&mut self) -> Option<&'a mut S> {
        self.stream.take()
    }

    /// Returns true if a stream is attached.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.stream.is_some()
    }

    /// Returns a reference to the attached stream.
    #[inline]
    pub fn get_ref(&self) -> Option<&S> {
        self.stream.as_deref()
    }

    /// Returns a mutable reference to the attached stream.
    ///
    /// Reading from it directly bypasses the skip count.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut S> {
        self.stream.as_deref_mut()
    }

    /// Sets the number of bytes to discard ahead of the next
    /// forwarded read.
    ///
    /// This replaces any count still outstanding rather than adding to it.
    /// Nothing is checked against the length of the stream.
    #[inline]
    pub fn set_skip(&mut self, bytes: u64) {
        self.skip_remaining = bytes;
    }

    /// Returns the number of bytes still to be discarded.
    #[inline]
    pub fn skip_remaining(&self) -> u64 {
        self.skip_remaining
    }

    /// Stores the format of the audio which follows the skipped bytes.
    #[inline]
    pub fn set_audio_info(&mut self, info: AudioInfo) {
        self.info = Some(info);
    }

    /// Returns the stored audio format, if one was provided.
    #[inline]
    pub fn audio_info(&self) -> Option<AudioInfo> {
        self.info
    }

    /// Marks the stream usable for reading.
    ///
    /// This always succeeds and may be repeated.
    /// The underlying stream is not touched and is expected
    /// to have been initialized before it was attached.
    #[inline]
    pub fn begin(&mut self) -> bool {
        self.active = true;
        true
    }

    /// Marks the stream unusable for reading.
    ///
    /// Any outstanding skip count is kept, so a later
    /// [`begin`](Self::begin) resumes discarding where it left off.
    /// Writes are unaffected.
    #[inline]
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Returns true between [`begin`](Self::begin) and [`end`](Self::end).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables per-call trace events.
    ///
    /// Events are only emitted when the `tracing` feature is enabled
    /// and a subscriber has been installed.
    #[inline]
    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    /// Returns true if per-call trace events are enabled.
    #[inline]
    pub fn tracing_enabled(&self) -> bool {
        self.tracing
    }

    /// Estimates how many forwarded bytes are ready to read.
    ///
    /// With `a` bytes available underneath and `p` bytes left to skip:
    ///
    /// - an inactive or detached wrapper reports 0
    /// - `a <= 0` is reported unchanged, as is `a` when `p` is 0
    /// - otherwise `a - p` is reported, or 0 if everything available
    ///   would be skipped
    ///
    /// The estimate is not a promise, since the underlying stream
    /// may change between this call and the next read.
    pub fn available(&self) -> isize
    where
        S: Available,
    {
        let stream = match self.stream.as_deref() {
            Some(stream) if self.active => stream,
            _ => return 0,
        };

        let available = stream.available();
        let estimate = if available <= 0 || self.skip_remaining == 0 {
            available
        } else if (available as u64) <= self.skip_remaining {
            0
        } else {
            available - self.skip_remaining as isize
        };

        trace_event!(
            self.tracing,
            available,
            remaining = self.skip_remaining,
            estimate,
            "skip-forward available"
        );
        estimate
    }

    /// Discards any outstanding skip count, then performs a single
    /// read from the underlying stream into `buf`.
    ///
    /// Returns `Ok(0)` without touching the underlying stream if the
    /// wrapper is inactive or detached, or if `buf` is empty.
    ///
    /// If the underlying stream has no data while bytes are still
    /// being discarded, this returns `Ok(0)` immediately and keeps
    /// the count of what remains, so the call may simply be repeated
    /// once more data arrives.  Skipped bytes never reach `buf`.
    ///
    /// The forwarded read is never retried, so short reads
    /// from the underlying stream are returned as-is.
    ///
    /// # Errors
    ///
    /// Passes along any error other than `Interrupted` from the
    /// underlying stream.  Bytes discarded before the error stay discarded.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize>
    where
        S: io::Read,
    {
        #[allow(clippy::let_unit_value)]
        let () = Self::CHUNK_IS_NONZERO;

        let stream = match self.stream.as_deref_mut() {
            Some(stream) if self.active && !buf.is_empty() => stream,
            _ => return Ok(0),
        };

        if self.skip_remaining > 0 {
            let mut scratch = [0; CHUNK];
            while self.skip_remaining > 0 {
                let to_discard = self.skip_remaining.min(CHUNK as u64) as usize;
                let discarded = match stream.read(&mut scratch[0..to_discard]) {
                    Ok(0) => {
                        trace_event!(
                            self.tracing,
                            remaining = self.skip_remaining,
                            "skip-forward starved while discarding"
                        );
                        return Ok(0);
                    }
                    Ok(discarded) => discarded,
                    Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                };
                self.skip_remaining = self.skip_remaining.saturating_sub(discarded as u64);
                trace_event!(
                    self.tracing,
                    skipped = discarded,
                    remaining = self.skip_remaining,
                    "skip-forward discarded"
                );
            }
        }

        let forwarded = stream.read(buf)?;
        trace_event!(
            self.tracing,
            requested = buf.len(),
            forwarded,
            "skip-forward read"
        );
        Ok(forwarded)
    }

    /// Forwards `buf` to the underlying stream, returning
    /// however many bytes it accepted.
    ///
    /// Writes are forwarded whether or not the wrapper is active
    /// and are never affected by the skip count.
    /// Returns `Ok(0)` if no stream is attached.
    pub fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize>
    where
        S: io::Write,
    {
        match self.stream.as_deref_mut() {
            Some(stream) => stream.write(buf),
            None => Ok(0),
        }
    }

    /// Forwards a single byte to the underlying stream,
    /// as [`write_bytes`](Self::write_bytes) does.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> io::Result<usize>
    where
        S: io::Write,
    {
        self.write_bytes(core::slice::from_ref(&byte))
    }
}

impl<'a, S: ?Sized, const CHUNK: usize> Default for SkipForwardStream<'a, S, CHUNK> {
    fn default() -> Self {
        SkipForwardStream {
            stream: None,
            skip_remaining: 0,
            active: false,
            info: None,
            tracing: false,
        }
    }
}

impl<'a, S: ?Sized, const CHUNK: usize> fmt::Debug for SkipForwardStream<'a, S, CHUNK> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SkipForwardStream")
            .field("attached", &self.stream.is_some())
            .field("skip_remaining", &self.skip_remaining)
            .field("active", &self.active)
            .field("info", &self.info)
            .field("chunk", &CHUNK)
            .finish()
    }
}

impl<'a, S, const CHUNK: usize> io::Read for SkipForwardStream<'a, S, CHUNK>
where
    S: io::Read + ?Sized,
{
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_bytes(buf)
    }
}

impl<'a, S, const CHUNK: usize> io::Write for SkipForwardStream<'a, S, CHUNK>
where
    S: io::Write + ?Sized,
{
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stream.as_deref_mut() {
            Some(stream) => stream.flush(),
            None => Ok(()),
        }
    }
}

impl<'a, S, const CHUNK: usize> Available for SkipForwardStream<'a, S, CHUNK>
where
    S: Available + ?Sized,
{
    #[inline]
    fn available(&self) -> isize {
        SkipForwardStream::available(self)
    }
}
