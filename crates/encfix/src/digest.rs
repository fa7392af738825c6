//! Content digests of written fixtures
//!
//! Provides [`FixtureDigest`], a 32-byte BLAKE3 hash of the exact bytes put
//! on disk. Two runs that write the same bytes report the same digest.

use crate::error::DigestError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte fixture digest (BLAKE3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixtureDigest([u8; 32]);

impl FixtureDigest {
    /// Compute the digest of `data`
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for FixtureDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for FixtureDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_deterministic() {
        let data = "你好".as_bytes();
        assert_eq!(FixtureDigest::compute(data), FixtureDigest::compute(data));
        assert_ne!(FixtureDigest::compute(data), FixtureDigest::compute(b"hello"));
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        let digest = FixtureDigest::compute(b"test_gbk.txt");
        let parsed: FixtureDigest = digest.to_string().parse().unwrap();
        assert_eq!(parsed, digest);
        assert_eq!(digest.short().len(), 16);
        assert!(digest.to_string().starts_with(&digest.short()));
    }

    #[test]
    fn from_str_rejects_short_input() {
        let result = "abcd".parse::<FixtureDigest>();
        assert!(matches!(
            result,
            Err(DigestError::InvalidLength { expected: 32, actual: 2 })
        ));
        assert!(matches!(
            "zz".parse::<FixtureDigest>(),
            Err(DigestError::HexDecode(_))
        ));
    }
}
