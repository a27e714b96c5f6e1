use std::{fmt, str::FromStr};

/// A 256-bit seed that fully determines one draw.
///
/// Displayed and parsed as 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use lotto_generator::DrawSeed;
///
/// let seed = DrawSeed::from([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<DrawSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawSeed([u8; 32]);

impl DrawSeed {
    /// Creates a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for DrawSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for DrawSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a valid [`DrawSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex character at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl FromStr for DrawSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(chunk[0]).ok_or(SeedParseError::InvalidHex { position: i * 2 })?;
            let lo = hex_value(chunk[1]).ok_or(SeedParseError::InvalidHex {
                position: i * 2 + 1,
            })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        let mut bytes = [0; 32];
        bytes[0] = 0x01;
        bytes[31] = 0xfe;
        let text = DrawSeed::from(bytes).to_string();
        assert!(text.starts_with("01"));
        assert!(text.ends_with("fe"));
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: DrawSeed = "AB".repeat(32).parse().unwrap();
        assert_eq!(seed.as_bytes(), &[0xab; 32]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<DrawSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let mut text = "0".repeat(64);
        text.replace_range(9..10, "g");
        assert_eq!(
            text.parse::<DrawSeed>(),
            Err(SeedParseError::InvalidHex { position: 9 })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(DrawSeed::random(), DrawSeed::random());
    }
}
