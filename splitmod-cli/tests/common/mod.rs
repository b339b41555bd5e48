//! Synthetic modules for the splitter tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A 4-channel module with `positions` in the first song position slots,
/// one block per pattern they imply, and `sample_bytes` of sample data.
pub fn build_module(positions: &[u8], sample_bytes: usize) -> Vec<u8> {
    let mut data = vec![0u8; 1084];
    data[..4].copy_from_slice(b"tune");
    data[950] = positions.len() as u8;
    data[951] = 127;
    data[952..952 + positions.len()].copy_from_slice(positions);
    data[1080..1084].copy_from_slice(b"M.K.");
    let patterns = usize::from(positions.iter().copied().max().unwrap_or(0)) + 1;
    data.extend((0..patterns * 1024).map(|i| (i % 97) as u8));
    data.extend((0..sample_bytes).map(|i| (i % 13) as u8 | 0x40));
    data
}

/// Write `data` as `name` inside `dir` and return the path.
pub fn write_module(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write module");
    path
}

/// Parse the two `NAME = value` lines of an include file.
pub fn parse_include(text: &str) -> (usize, usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "include should have two lines: {:?}", text);
    let song = lines[0]
        .strip_prefix("SPLITMOD_SONG_SIZE = ")
        .expect("song size line");
    let samples = lines[1]
        .strip_prefix("SPLITMOD_SMP_SIZE = ")
        .expect("sample size line");
    (song.parse().unwrap(), samples.parse().unwrap())
}
