// Copyright 2026 The skip-forward Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strips the canonical 44-byte RIFF/WAVE header from a stream
//! which cannot seek, then reads back the PCM which follows it.
//!
//! Run with `cargo run --example wav_header --features tracing`.

use std::collections::VecDeque;
use std::io::{self, Read};

use skip_forward::{AudioInfo, SkipForwardStream};
use tracing_subscriber::filter::LevelFilter;

const WAV_HEADER_LEN: u64 = 44;

fn wav_bytes(info: AudioInfo, pcm: &[u8]) -> Vec<u8> {
    let block_align = info.channels * u16::from(info.bits_per_sample / 8);
    let byte_rate = info.sample_rate * u32::from(block_align);

    let mut out = Vec::with_capacity(WAV_HEADER_LEN as usize + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + pcm.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&info.channels.to_le_bytes());
    out.extend_from_slice(&info.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&u16::from(info.bits_per_sample).to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .init();

    let info = AudioInfo::new(44100, 2, 16);
    let pcm: Vec<u8> = (0..4000u32).map(|i| (i % 256) as u8).collect();

    /*a queue has no notion of position, so the header can only be read past*/
    let mut source: VecDeque<u8> = wav_bytes(info, &pcm).into();

    let mut stream = SkipForwardStream::with_stream(&mut source);
    stream.set_skip(WAV_HEADER_LEN);
    stream.set_audio_info(info);
    stream.set_tracing(true);
    stream.begin();

    println!("{} bytes of audio available", stream.available());

    let mut decoded = Vec::new();
    let mut buf = [0; 1024];
    loop {
        match stream.read(&mut buf)? {
            0 => break,
            n => decoded.extend_from_slice(&buf[0..n]),
        }
    }
    stream.end();

    assert_eq!(decoded, pcm);
    println!(
        "read {} bytes of {:?} audio after the header",
        decoded.len(),
        stream.audio_info()
    );
    Ok(())
}
