// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use skip_forward::Available;

/// An in-memory stream whose reads can be starved or shortened
/// call by call, recording every request made of it.
#[derive(Debug, Default)]
pub struct Script {
    data: Vec<u8>,
    position: usize,
    limits: VecDeque<usize>,
    failures: VecDeque<io::ErrorKind>,
    reported: Option<isize>,
    write_limit: Option<usize>,
    pub requests: Vec<usize>,
    pub written: Vec<u8>,
    pub flushes: usize,
}

impl Script {
    pub fn new(data: Vec<u8>) -> Self {
        Script {
            data,
            ..Script::default()
        }
    }

    /// Bytes 0, 1, 2 ... up to `len`, wrapping at 256
    pub fn counting(len: usize) -> Self {
        Script::new((0..len).map(|i| i as u8).collect())
    }

    /// Caps the next reads at the given sizes, in order.
    /// A cap of 0 makes that read report no data.
    pub fn limit(&mut self, caps: &[usize]) {
        self.limits.extend(caps.iter().copied());
    }

    /// Fails the next read with the given kind.
    pub fn fail(&mut self, kind: io::ErrorKind) {
        self.failures.push_back(kind);
    }

    /// Reports a fixed available count regardless of content.
    pub fn report(&mut self, available: isize) {
        self.reported = Some(available);
    }

    pub fn cap_writes(&mut self, limit: usize) {
        self.write_limit = Some(limit);
    }

    /// Appends more data, as if it had just arrived.
    pub fn supply(&mut self, more: &[u8]) {
        self.data.extend_from_slice(more);
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl io::Read for Script {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.requests.push(buf.len());
        if let Some(kind) = self.failures.pop_front() {
            return Err(io::Error::new(kind, "scripted failure"));
        }
        let cap = self.limits.pop_front().unwrap_or(usize::MAX);
        let remaining = &self.data[self.position..];
        let n = buf.len().min(cap).min(remaining.len());
        buf[0..n].copy_from_slice(&remaining[0..n]);
        self.position += n;
        Ok(n)
    }
}

impl io::Write for Script {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.write_limit.unwrap_or(usize::MAX));
        self.written.extend_from_slice(&buf[0..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

impl Available for Script {
    fn available(&self) -> isize {
        self.reported
            .unwrap_or((self.data.len() - self.position) as isize)
    }
}
