//! Password generation.

use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::Zeroizing;

use super::GenerationConfig;
use super::charset::Alphabet;

/// Output of one generation call. The buffer is wiped on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for GeneratedPassword {
    fn from(s: String) -> Self {
        Self(Zeroizing::new(s))
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

/// Generate one password.
///
/// Each of `config.length` positions is drawn uniformly, with replacement,
/// from the config's alphabet. No class is forced to appear. A zero length
/// yields an empty password.
pub fn generate<R: Rng>(config: &GenerationConfig, rng: &mut R) -> GeneratedPassword {
    let alphabet = Alphabet::for_config(config);
    let chars = alphabet.as_bytes();

    debug!(
        "generating {} chars from a {}-char alphabet",
        config.length,
        chars.len()
    );

    let mut pass = String::with_capacity(config.length);
    pass.extend((0..config.length).map(|_| random_char(chars, rng)));
    GeneratedPassword::from(pass)
}

/// Lazily generate `count` independent passwords with the same config.
///
/// Nothing is built up front, so callers can stream arbitrarily large
/// batches one password at a time.
pub fn generate_batch<R: Rng>(
    config: GenerationConfig,
    count: u64,
    rng: &mut R,
) -> impl Iterator<Item = GeneratedPassword> {
    (0..count).map(move |_| generate(&config, &mut *rng))
}

#[inline]
fn random_char<R: Rng>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())] as char
}
