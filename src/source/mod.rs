//! Random sources for password generation.
//!
//! The default source is a small, fast PRNG seeded once from OS entropy. It
//! is not cryptographically secure. `Urandom` draws every value straight from
//! the operating system instead.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Fast,
    Urandom,
}

impl SourceKind {
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Fast => "fast PRNG (non-cryptographic)",
            SourceKind::Urandom => "OS entropy",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Rand {
    Fast(SmallRng),
    Os(OsRng),
}

impl Rand {
    pub fn new(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Fast => Rand::Fast(SmallRng::from_entropy()),
            SourceKind::Urandom => Rand::Os(OsRng),
        }
    }

    /// Reproducible fast source.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Rand::Fast(SmallRng::seed_from_u64(seed))
    }

    #[cfg(test)]
    pub fn kind(&self) -> SourceKind {
        match self {
            Rand::Fast(_) => SourceKind::Fast,
            Rand::Os(_) => SourceKind::Urandom,
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new(SourceKind::default())
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Rand::Fast(r) => r.next_u32(),
            Rand::Os(r) => r.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Rand::Fast(r) => r.next_u64(),
            Rand::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Rand::Fast(r) => r.fill_bytes(dest),
            Rand::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Rand::Fast(r) => r.try_fill_bytes(dest),
            Rand::Os(r) => r.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = Rand::seeded(42);
        let mut b = Rand::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn kind_matches_constructor() {
        assert_eq!(Rand::new(SourceKind::Fast).kind(), SourceKind::Fast);
        assert_eq!(Rand::new(SourceKind::Urandom).kind(), SourceKind::Urandom);
        assert_eq!(Rand::seeded(1).kind(), SourceKind::Fast);
    }

    #[test]
    fn os_source_fills() {
        let mut rng = Rand::new(SourceKind::Urandom);
        let mut buf = [0u8; 32];
        rng.try_fill_bytes(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SourceKind::Urandom).unwrap(),
            "\"urandom\""
        );
    }
}
