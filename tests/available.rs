// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate skip_forward;

mod common;

use std::collections::VecDeque;
use std::io::{Cursor, Read};

use common::Script;
use skip_forward::{Available, SkipForwardStream};

fn estimate(underlying: isize, skip: u64) -> isize {
    let mut script = Script::counting(0);
    script.report(underlying);
    let mut s = SkipForwardStream::with_stream(&mut script);
    s.set_skip(skip);
    s.begin();
    s.available()
}

#[test]
fn test_estimate_table() {
    /*(underlying, skip, expected)*/
    let table: &[(isize, u64, isize)] = &[
        (-1, 0, -1),
        (-1, 10, -1),
        (0, 0, 0),
        (0, 10, 0),
        (5, 0, 5),
        (5, 10, 0),
        (10, 10, 0),
        (11, 10, 1),
        (100, 10, 90),
        (isize::MAX, u64::MAX, 0),
        (isize::MAX, 1, isize::MAX - 1),
    ];
    for &(underlying, skip, expected) in table {
        assert_eq!(
            estimate(underlying, skip),
            expected,
            "underlying {} skip {}",
            underlying,
            skip
        );
    }
}

#[test]
fn test_inactive_or_detached_is_zero() {
    let mut c = Cursor::new(vec![0u8; 64]);
    let mut s = SkipForwardStream::with_stream(&mut c);
    assert_eq!(s.available(), 0);
    s.begin();
    assert_eq!(s.available(), 64);
    s.end();
    assert_eq!(s.available(), 0);

    let mut detached: SkipForwardStream<Cursor<Vec<u8>>> = SkipForwardStream::new();
    detached.begin();
    assert_eq!(detached.available(), 0);
}

#[test]
fn test_estimate_tracks_reads() {
    let data: Vec<u8> = (0..100).collect();
    let mut c = Cursor::new(data);
    let mut s = SkipForwardStream::with_stream(&mut c);
    s.set_skip(10);
    s.begin();
    assert_eq!(s.available(), 90);

    let mut buf = [0; 30];
    assert_eq!(s.read(&mut buf).unwrap(), 30);
    assert_eq!(s.available(), 60);

    let mut rest = Vec::new();
    s.read_to_end(&mut rest).unwrap();
    assert_eq!(rest.len(), 60);
    assert_eq!(s.available(), 0);
}

#[test]
fn test_estimate_does_not_consume() {
    let mut q: VecDeque<u8> = (0..16).collect();
    let mut s = SkipForwardStream::with_stream(&mut q);
    s.set_skip(4);
    s.begin();
    assert_eq!(s.available(), 12);
    assert_eq!(s.available(), 12);
    assert_eq!(s.skip_remaining(), 4);
    assert_eq!(s.get_ref().unwrap().len(), 16);
}

#[test]
fn test_stacked_estimates() {
    let mut c = Cursor::new(vec![0u8; 100]);
    let mut inner = SkipForwardStream::with_stream(&mut c);
    inner.set_skip(2);
    inner.begin();
    let mut outer = SkipForwardStream::with_stream(&mut inner);
    outer.set_skip(3);
    outer.begin();
    assert_eq!(outer.available(), 95);
    assert_eq!(Available::available(&outer), 95);
}
