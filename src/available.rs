// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The available-byte-count capability of an underlying stream.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, collections::VecDeque};
#[cfg(feature = "std")]
use std::collections::VecDeque;

use super::io::Cursor;

/// A stream which can report how many bytes are ready to be read.
pub trait Available {
    /// Returns the number of bytes which may be read without waiting.
    ///
    /// Zero or a negative value indicates that the stream
    /// is empty for now, closed, or in an error state.
    /// Callers are not told which.
    fn available(&self) -> isize;
}

#[inline]
fn clamp(len: u64) -> isize {
    len.min(isize::MAX as u64) as isize
}

impl Available for [u8] {
    #[inline]
    fn available(&self) -> isize {
        clamp(self.len() as u64)
    }
}

impl<T: AsRef<[u8]>> Available for Cursor<T> {
    fn available(&self) -> isize {
        let len = self.get_ref().as_ref().len() as u64;
        clamp(len.saturating_sub(self.position()))
    }
}

impl Available for VecDeque<u8> {
    #[inline]
    fn available(&self) -> isize {
        clamp(self.len() as u64)
    }
}

impl<A: Available + ?Sized> Available for &A {
    #[inline]
    fn available(&self) -> isize {
        (**self).available()
    }
}

impl<A: Available + ?Sized> Available for &mut A {
    #[inline]
    fn available(&self) -> isize {
        (**self).available()
    }
}

impl<A: Available + ?Sized> Available for Box<A> {
    #[inline]
    fn available(&self) -> isize {
        (**self).available()
    }
}
