//! Builds synthetic modules so the tests don't need binary fixtures.

#![allow(dead_code)]

pub const HEADER_LEN: usize = 1084;
pub const PATTERN_LEN: usize = 1024;

/// A minimal 4-channel module: empty sample descriptors, `positions` written
/// from slot 0 (the rest left at zero), one block per pattern the positions
/// imply, and `sample_bytes` of waveform data at the end.
pub fn build_module(positions: &[u8], song_length: u8, sample_bytes: usize) -> Vec<u8> {
    build_module_with_signature(positions, song_length, sample_bytes, *b"M.K.")
}

pub fn build_module_with_signature(
    positions: &[u8],
    song_length: u8,
    sample_bytes: usize,
    signature: [u8; 4],
) -> Vec<u8> {
    let patterns = usize::from(positions.iter().copied().max().unwrap_or(0)) + 1;
    let mut data = header(positions, song_length, signature);
    data.extend((0..patterns * PATTERN_LEN).map(|i| (i / PATTERN_LEN) as u8));
    data.extend((0..sample_bytes).map(|i| (i % 251) as u8 ^ 0x80));
    data
}

/// Just the 1084 byte header, with "test song" as the name.
pub fn header(positions: &[u8], song_length: u8, signature: [u8; 4]) -> Vec<u8> {
    assert!(positions.len() <= 128);
    let mut data = vec![0u8; HEADER_LEN];
    data[..9].copy_from_slice(b"test song");
    data[950] = song_length;
    data[951] = 127;
    data[952..952 + positions.len()].copy_from_slice(positions);
    data[1080..1084].copy_from_slice(&signature);
    data
}
