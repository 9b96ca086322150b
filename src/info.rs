// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Basic PCM format of the audio carried after the skipped bytes.
///
/// This is stored and handed back verbatim;
/// nothing in this crate checks that it is sensible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioInfo {
    /// Samples per second, per channel
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: u16,
    /// Bits in a single sample
    pub bits_per_sample: u8,
}

impl AudioInfo {
    /// Builds a record from its parts.
    #[inline]
    pub const fn new(sample_rate: u32, channels: u16, bits_per_sample: u8) -> Self {
        AudioInfo {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }
}
