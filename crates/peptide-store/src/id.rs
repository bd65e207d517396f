//! Store-assigned document identifiers.

use crate::StoreError;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random bytes fixed for the lifetime of the process.
static PROCESS_UNIQUE: Lazy<[u8; 5]> = Lazy::new(rand::random::<[u8; 5]>);

/// Per-process counter, seeded randomly, 24 bits wide.
static COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(rand::random::<u32>() & 0x00ff_ffff));

/// A 12-byte document identifier.
///
/// Layout: 4-byte big-endian seconds since the epoch, 5 bytes unique to the
/// process, 3-byte big-endian counter. Rendered as 24 lowercase hex chars.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// The length of a `DocumentId` in bytes.
    pub const LEN: usize = 12;

    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Creates a `DocumentId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this identifier.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Returns the identifier as a hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses an identifier from its 24-character hex form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidId`] if the string is not exactly 24 hex
    /// characters.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        if s.len() != Self::LEN * 2 {
            return Err(StoreError::InvalidId(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| StoreError::InvalidId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.to_hex())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generate_is_unique() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
        assert_eq!(a.to_hex().len(), 24);
    }

    #[test]
    fn test_parse_display() {
        let id = DocumentId::generate();
        let parsed: DocumentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id = DocumentId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(DocumentId::parse("").is_err());
        assert!(DocumentId::parse("abc").is_err());
        assert!(DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5f").is_err());
        assert!(DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5fz").is_err());
        assert!(DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5f6a").is_err());
    }

    proptest! {
        #[test]
        fn prop_parse_accepts_only_24_hex(s in "[0-9a-fA-F]{0,30}") {
            prop_assert_eq!(DocumentId::parse(&s).is_ok(), s.len() == 24);
        }
    }
}
