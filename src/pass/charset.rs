//! Alphabet construction for password generation.

use super::GenerationConfig;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+";

/// Ordered candidate characters for one generation call.
///
/// Letters are always present, followed by digits and then symbols when the
/// config enables them. Every byte is ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    pub fn for_config(config: &GenerationConfig) -> Self {
        let mut chars = Vec::with_capacity(size(config));
        chars.extend_from_slice(LOWERCASE);
        chars.extend_from_slice(UPPERCASE);

        if config.include_digits {
            chars.extend_from_slice(DIGITS);
        }

        if config.include_symbols {
            chars.extend_from_slice(SYMBOLS);
        }

        Self(chars)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}

/// Alphabet size for a config without building it.
pub fn size(config: &GenerationConfig) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if config.include_digits {
        size += DIGITS.len();
    }
    if config.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(digits: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            length: 8,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn sizes_follow_enabled_classes() {
        assert_eq!(Alphabet::for_config(&config(false, false)).len(), 52);
        assert_eq!(Alphabet::for_config(&config(true, false)).len(), 62);
        assert_eq!(Alphabet::for_config(&config(false, true)).len(), 64);
        assert_eq!(Alphabet::for_config(&config(true, true)).len(), 74);

        for (d, s) in [(false, false), (true, false), (false, true), (true, true)] {
            let c = config(d, s);
            assert_eq!(size(&c), Alphabet::for_config(&c).len());
        }
    }

    #[test]
    fn letters_then_digits_then_symbols() {
        let alphabet = Alphabet::for_config(&config(true, true));
        let bytes = alphabet.as_bytes();
        assert_eq!(&bytes[..26], LOWERCASE);
        assert_eq!(&bytes[26..52], UPPERCASE);
        assert_eq!(&bytes[52..62], DIGITS);
        assert_eq!(&bytes[62..], b"!@#$%^&*()_+");
    }

    #[test]
    fn symbols_without_digits() {
        let alphabet = Alphabet::for_config(&config(false, true));
        assert!(alphabet.contains('_'));
        assert!(!alphabet.contains('7'));
        assert!(!alphabet.contains('-'));
        assert!(!alphabet.contains('é'));
    }
}
