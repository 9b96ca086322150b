// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::io::{self, Seek, SeekFrom};

/// Moves a seekable stream `bytes` forward from its current position
/// with a single relative seek, returning the new position.
///
/// This is the cheap alternative to discarding through a
/// [`SkipForwardStream`](crate::SkipForwardStream) when the concrete
/// handle is known to be seekable.  Do it before attaching the stream
/// and leave the wrapper's skip count at zero.
///
/// ## Example
/// ```
/// use std::io::{Cursor, Read};
/// use skip_forward::seek_past;
///
/// let mut c = Cursor::new(b"RIFF....data".to_vec());
/// assert_eq!(seek_past(&mut c, 8).unwrap(), 8);
/// let mut tag = [0; 4];
/// c.read_exact(&mut tag).unwrap();
/// assert_eq!(&tag, b"data");
/// ```
///
/// # Errors
///
/// Returns an `InvalidInput` error if `bytes` does not fit
/// in a relative seek offset, and passes along any error
/// from the stream itself.
pub fn seek_past<S>(stream: &mut S, bytes: u64) -> io::Result<u64>
where
    S: Seek + ?Sized,
{
    if bytes > i64::MAX as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "skip too large for a relative seek",
        ));
    }
    stream.seek(SeekFrom::Current(bytes as i64))
}
