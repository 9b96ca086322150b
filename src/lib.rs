// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A stream decorator for skipping a known number of leading bytes,
//! such as a container header, ahead of audio decoding.
//!
//! [`SkipForwardStream`] borrows an underlying stream, discards
//! the configured number of bytes as reads come in, and forwards
//! everything after them unchanged.
//! Writes are always forwarded as-is.
//!
//! ## Example
//! ```
//! use std::io::{Cursor, Read};
//! use skip_forward::SkipForwardStream;
//!
//! let data: Vec<u8> = (0..100).collect();
//! let mut cursor = Cursor::new(data);
//!
//! let mut stream = SkipForwardStream::new();
//! stream.set_stream(&mut cursor);
//! stream.set_skip(10);
//! assert!(stream.begin());
//!
//! let mut buf = [0; 50];
//! assert_eq!(stream.read(&mut buf).unwrap(), 50);
//! assert_eq!(buf[0], 0x0A);
//! assert_eq!(buf[49], 0x3B);
//! assert_eq!(stream.skip_remaining(), 0);
//! ```
//!
//! Underlying streams that cannot report their available byte count
//! still work for reading and writing, only [`SkipForwardStream::available`]
//! requires the [`Available`] trait.
//!
//! ## Features
//!
//! - `std` (default) uses the `std::io` traits.
//! - `alloc` uses the `core2::io` traits for `no_std` targets.
//! - `tracing` emits `trace`-level events from streams which
//!   have opted in with [`SkipForwardStream::set_tracing`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!("at least one of the \"std\" or \"alloc\" features must be enabled");

#[cfg(feature = "std")]
use std::io;

#[cfg(not(feature = "std"))]
use core2::io;

macro_rules! trace_event {
    ($enabled:expr, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            if $enabled {
                tracing::trace!($($arg)+);
            }
        }
    };
}

mod available;
mod info;
mod seek;
mod skip;

pub use available::Available;
pub use info::AudioInfo;
pub use seek::seek_past;
pub use skip::{SkipForwardStream, DEFAULT_CHUNK};
