//! ProTracker module splitter
//!
//! A ProTracker module is laid out as a 1084 byte header (song name, 31
//! sample descriptors, song length, 128 song positions and a signature),
//! followed by the pattern data and then the raw sample data. Nothing in the
//! header says how many patterns are stored, so the only way to find the
//! start of the sample data is to take the highest pattern number used in the
//! song positions.
//!
//! This crate works out that boundary, so a module can be stored as a "song"
//! part and a "samples" part and loaded into different kinds of memory.
//!
//! Based upon https://www.eblong.com/zarf/blorb/mod-spec.txt.

#![no_std]
#![deny(missing_docs)]

mod signature;

pub use signature::Signature;

/// The ways in which analysis can fail
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The file was not large enough to contain a MOD header and one pattern
    #[error("file is {file_length} bytes but a module needs at least {minimum} bytes", minimum = ProTrackerModule::MINIMUM_LENGTH)]
    FileTooSmall {
        /// Size of the rejected file
        file_length: usize,
    },
    /// The signature belongs to a variant with a different channel count
    #[error("signature {signature} declares {channels} channels, only 4-channel modules are supported")]
    UnsupportedChannels {
        /// The signature found at offset 1080
        signature: Signature,
        /// How many channels the signature declares
        channels: u8,
    },
    /// The song positions refer to more patterns than the file holds
    #[error("pattern data should end at byte {samples_offset} but the file is only {file_length} bytes")]
    Truncated {
        /// Where the sample data would start
        samples_offset: usize,
        /// Size of the rejected file
        file_length: usize,
    },
}

/// A contiguous range of bytes within a module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Region {
    /// Byte offset from the start of the file
    pub offset: usize,
    /// Number of bytes
    pub length: usize,
}

impl Region {
    /// One past the last byte
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// The region as a range, for slicing
    pub const fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.end()
    }

    /// Does this region cover no bytes at all?
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Where a module splits into its song and sample parts.
///
/// The two regions always sit back to back and cover the whole file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    /// How many 1024 byte patterns are stored (1..=256)
    pub pattern_count: u16,
    /// Header, song positions and pattern data
    pub song: Region,
    /// Raw sample data for all 31 samples, back to back
    pub samples: Region,
}

impl Layout {
    /// Size of the file this layout was computed for
    pub const fn file_length(&self) -> usize {
        self.samples.end()
    }
}

/// Work out the layout of a module already in memory.
///
/// Shorthand for `ProTrackerModule::new(data).map(|m| m.layout())`.
pub fn analyze(data: &[u8]) -> Result<Layout, Error> {
    ProTrackerModule::new(data).map(|module| module.layout())
}

/// Represents a Pro Tracker Module.
///
/// Stores no sample or pattern data - just holds a &[u8] containing the raw
/// file contents, plus the layout computed when it was checked.
#[derive(Clone)]
pub struct ProTrackerModule<'a> {
    data: &'a [u8],
    layout: Layout,
}

impl<'a> ProTrackerModule<'a> {
    /// Size of the header that sits in front of the pattern data
    pub const HEADER_LEN: usize = 1084;
    /// Size of a single 64 line, 4 channel pattern
    pub const PATTERN_LEN: usize = 1024;
    /// The smallest file that holds a header and one pattern
    pub const MINIMUM_LENGTH: usize = Self::HEADER_LEN + Self::PATTERN_LEN;

    const SONG_NAME_RANGE: core::ops::Range<usize> = 0..20;
    const SONG_LENGTH_OFFSET: usize = 950;
    const SONG_POSITIONS_RANGE: core::ops::Range<usize> = 952..1080;
    const SIGNATURE_RANGE: core::ops::Range<usize> = 1080..1084;

    /// Create a wrapper around a MOD file already in memory.
    ///
    /// Checks the file is big enough for a header, is not a known 6 or 8
    /// channel variant, and actually contains every pattern the song
    /// positions refer to.
    pub fn new(data: &'a [u8]) -> Result<ProTrackerModule<'a>, Error> {
        if data.len() < Self::MINIMUM_LENGTH {
            return Err(Error::FileTooSmall {
                file_length: data.len(),
            });
        }

        let signature = read_signature(&data[Self::SIGNATURE_RANGE]);
        if let Some(channels) = signature.channels() {
            if channels != 4 {
                return Err(Error::UnsupportedChannels {
                    signature,
                    channels,
                });
            }
        }

        let pattern_count = u16::from(highest_pattern(&data[Self::SONG_POSITIONS_RANGE])) + 1;
        let samples_offset = Self::HEADER_LEN + usize::from(pattern_count) * Self::PATTERN_LEN;
        let samples_length = data
            .len()
            .checked_sub(samples_offset)
            .ok_or(Error::Truncated {
                samples_offset,
                file_length: data.len(),
            })?;

        Ok(ProTrackerModule {
            data,
            layout: Layout {
                pattern_count,
                song: Region {
                    offset: 0,
                    length: samples_offset,
                },
                samples: Region {
                    offset: samples_offset,
                    length: samples_length,
                },
            },
        })
    }

    /// The song name, without any trailing NUL padding.
    pub fn song_name(&self) -> &'a [u8] {
        let name = &self.data[Self::SONG_NAME_RANGE];
        let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
        &name[..end]
    }

    /// Number of song positions that are actually played.
    pub fn song_length(&self) -> u8 {
        self.data[Self::SONG_LENGTH_OFFSET]
    }

    /// The song positions that are played, in order.
    ///
    /// A corrupt song length above 128 is clamped.
    pub fn song_positions(&self) -> &'a [u8] {
        let length = usize::from(self.song_length()).min(Self::SONG_POSITIONS_RANGE.len());
        &self.arrangement()[..length]
    }

    /// All 128 song position slots, including the unplayed ones.
    pub fn arrangement(&self) -> &'a [u8] {
        &self.data[Self::SONG_POSITIONS_RANGE]
    }

    /// The highest pattern number in any of the 128 song position slots.
    pub fn max_pattern(&self) -> u8 {
        highest_pattern(self.arrangement())
    }

    /// Return the number of patterns in the file
    pub fn num_patterns(&self) -> u16 {
        self.layout.pattern_count
    }

    /// The magic value at offset 1080
    pub fn signature(&self) -> Signature {
        read_signature(&self.data[Self::SIGNATURE_RANGE])
    }

    /// Where in the file do the samples start?
    pub fn samples_offset(&self) -> usize {
        self.layout.samples.offset
    }

    /// The computed split point
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Header, song positions and patterns
    pub fn song_bytes(&self) -> &'a [u8] {
        &self.data[self.layout.song.range()]
    }

    /// Raw sample data
    pub fn sample_bytes(&self) -> &'a [u8] {
        &self.data[self.layout.samples.range()]
    }

    /// Both halves at once, song first.
    pub fn split(&self) -> (&'a [u8], &'a [u8]) {
        self.data.split_at(self.layout.samples.offset)
    }
}

/// Every stored pattern is referenced from at least one of the 128 slots,
/// played or not.
fn highest_pattern(positions: &[u8]) -> u8 {
    positions.iter().copied().max().unwrap_or(0)
}

fn read_signature(bytes: &[u8]) -> Signature {
    let mut magic = [0u8; 4];
    magic.copy_from_slice(bytes);
    Signature::new(magic)
}


// End of file
