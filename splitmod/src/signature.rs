//! The four byte dialect tag stored after the song positions.

use core::fmt::{self, Write};

/// The magic value at offset 1080 of a module, e.g. `M.K.`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Signature([u8; 4]);

impl Signature {
    /// Wrap four raw bytes
    pub const fn new(bytes: [u8; 4]) -> Signature {
        Signature(bytes)
    }

    /// The raw bytes
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// How many channels this signature declares, if we recognise it.
    ///
    /// Unrecognised signatures (including the all-zero bytes of very old
    /// modules) return `None` and are treated as 4-channel by the caller.
    pub fn channels(&self) -> Option<u8> {
        match &self.0 {
            b"M.K." | b"M!K!" | b"M&K!" | b"N.T." | b"FLT4" => Some(4),
            b"OCTA" | b"OKTA" | b"CD81" | b"FLT8" => Some(8),
            [b'T', b'D', b'Z', n @ b'1'..=b'9'] => Some(n - b'0'),
            [n @ b'1'..=b'9', b'C', b'H', b'N'] => Some(n - b'0'),
            [hi @ b'0'..=b'9', lo @ b'0'..=b'9', b'C', b'H' | b'N'] => {
                match (hi - b'0') * 10 + (lo - b'0') {
                    0 => None,
                    channels => Some(channels),
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for &b in self.0.iter() {
            if b.is_ascii_graphic() || b == b' ' {
                f.write_char(char::from(b))?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        f.write_char('"')
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}
