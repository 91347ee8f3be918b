//! The legacy runtime's built-in string hash.
//!
//! This module reproduces, bit for bit, the arithmetic of the string hash
//! used by the associative container the crate emulates. The function exists
//! in two historical variants: builds of the emulated runtime used either a
//! 32-bit or a 64-bit machine word, and the two variants wrap at different
//! points and therefore disagree on most inputs. Callers pick the variant
//! matching the build whose output they need to reproduce via [`HashWidth`].
//!
//! Every multiply in the mixing loop wraps in the active width, matching the
//! signed-overflow behavior of the original arithmetic. The implementation
//! performs the loop in the width's unsigned domain and reinterprets the bit
//! pattern as signed at the end, which is exactly equivalent under two's
//! complement.

use core::fmt;

/// Multiplier of the legacy mixing loop.
const MULTIPLIER: u64 = 1_000_003;

/// Machine word width of the emulated runtime build.
///
/// The two widths are both historically real and are not interchangeable:
/// the same input can legitimately produce different hashes (and therefore
/// different slot orders) under each. Invalid widths are unrepresentable;
/// fallible conversion from a raw bit count is provided for configuration
/// surfaces and reports [`InvalidWidth`] without ever defaulting.
///
/// # Examples
///
/// ```rust
/// use dict_order::HashWidth;
///
/// assert_eq!(HashWidth::try_from(64), Ok(HashWidth::W64));
/// assert_eq!(HashWidth::try_from(32), Ok(HashWidth::W32));
/// assert!(HashWidth::try_from(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashWidth {
    /// 32-bit machine word; all hash arithmetic wraps modulo 2^32.
    W32,
    /// 64-bit machine word; all hash arithmetic wraps modulo 2^64.
    W64,
}

impl HashWidth {
    /// Returns the width in bits (32 or 64).
    pub const fn bits(self) -> u32 {
        match self {
            HashWidth::W32 => 32,
            HashWidth::W64 => 64,
        }
    }

    /// Reinterprets a signed hash as the unsigned bit pattern of this width,
    /// zero-extended into a `u64`.
    ///
    /// The probe sequence masks and right-shifts this pattern; because those
    /// operations never observe bits above the active width, running them in
    /// `u64` on the zero-extended pattern is identical to running them in
    /// the native word.
    pub(crate) const fn bit_pattern(self, hash: i64) -> u64 {
        match self {
            HashWidth::W32 => hash as u32 as u64,
            HashWidth::W64 => hash as u64,
        }
    }
}

impl TryFrom<u32> for HashWidth {
    type Error = InvalidWidth;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(HashWidth::W32),
            64 => Ok(HashWidth::W64),
            other => Err(InvalidWidth(other)),
        }
    }
}

impl fmt::Display for HashWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Error returned when a configured word width is neither 32 nor 64.
///
/// Carries the rejected bit count. There is deliberately no fallback width:
/// the two variants produce different output and silently picking one would
/// defeat the reproduction guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWidth(pub u32);

impl fmt::Display for InvalidWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported hash width {} (the emulated runtime shipped as 32-bit or 64-bit only)",
            self.0
        )
    }
}

impl core::error::Error for InvalidWidth {}

/// Hashes a string exactly as the emulated runtime's built-in string hash
/// did, under the selected word width.
///
/// The empty string hashes to 0. For a non-empty string the state is seeded
/// with the first byte shifted left by 7, every byte is folded in with a
/// wrapping multiply by 1000003 and an XOR, the byte length is XORed into
/// the result, and a final result of -1 is remapped to -2 (the container
/// reserved -1 as its "no hash computed" sentinel).
///
/// "Characters" are the UTF-8 bytes of the string; the original hashed 8-bit
/// strings and vocabulary identifiers are ASCII, where the two coincide.
///
/// The 32-bit variant is returned sign-extended, so the numeric value equals
/// what a 32-bit build would have reported.
///
/// # Examples
///
/// ```rust
/// use dict_order::HashWidth;
/// use dict_order::string_hash;
///
/// assert_eq!(string_hash("", HashWidth::W64), 0);
/// assert_eq!(string_hash("knows", HashWidth::W64), 2736201778793509189);
/// assert_eq!(string_hash("Person", HashWidth::W32), -667451055);
/// ```
pub fn string_hash(s: &str, width: HashWidth) -> i64 {
    match width {
        HashWidth::W32 => i64::from(hash_w32(s.as_bytes())),
        HashWidth::W64 => hash_w64(s.as_bytes()),
    }
}

fn hash_w32(bytes: &[u8]) -> i32 {
    let Some(&first) = bytes.first() else {
        return 0;
    };
    let mut x = u32::from(first) << 7;
    for &b in bytes {
        x = x.wrapping_mul(MULTIPLIER as u32) ^ u32::from(b);
    }
    x ^= bytes.len() as u32;
    avoid_sentinel32(x as i32)
}

fn hash_w64(bytes: &[u8]) -> i64 {
    let Some(&first) = bytes.first() else {
        return 0;
    };
    let mut x = u64::from(first) << 7;
    for &b in bytes {
        x = x.wrapping_mul(MULTIPLIER) ^ u64::from(b);
    }
    x ^= bytes.len() as u64;
    avoid_sentinel64(x as i64)
}

/// -1 is reserved by the emulated container as "no hash computed yet"; the
/// original remapped genuine -1 results to -2 and so must we.
const fn avoid_sentinel32(x: i32) -> i32 {
    if x == -1 { -2 } else { x }
}

const fn avoid_sentinel64(x: i64) -> i64 {
    if x == -1 { -2 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(string_hash("", HashWidth::W32), 0);
        assert_eq!(string_hash("", HashWidth::W64), 0);
    }

    #[test]
    fn known_vectors_w64() {
        // Captured from a 64-bit build of the emulated runtime.
        for (s, expected) in [
            ("a", 12416037344),
            ("abc", 1453079729188098211),
            ("knows", 2736201778793509189),
            ("Agent", 7531671404747826286),
            ("Person", 3451682339715252561),
            ("Document", 5458310343975435291),
            ("Organization", 2749670516490683481),
            ("name", -4166578487145698715),
            ("mbox", -8321017616992971396),
            ("primaryTopic", -609723119364565841),
            ("Tim Berners-Lee", 2839371222483686253),
        ] {
            assert_eq!(string_hash(s, HashWidth::W64), expected, "key {s:?}");
        }
    }

    #[test]
    fn known_vectors_w32() {
        // Captured from a 32-bit build; note the different wraparound points.
        for (s, expected) in [
            ("a", -468864544),
            ("abc", -1600925533),
            ("knows", 1388802373),
            ("Agent", -185195410),
            ("Person", -667451055),
            ("Document", -1501627365),
            ("depiction", -1583834736),
            ("primaryTopic", -1427204945),
        ] {
            assert_eq!(string_hash(s, HashWidth::W32), expected, "key {s:?}");
        }
    }

    #[test]
    fn multibyte_keys_hash_their_utf8_bytes() {
        assert_eq!(string_hash("é", HashWidth::W64), 24960149699224354);
        assert_eq!(string_hash("é", HashWidth::W32), -1201872094);
    }

    #[test]
    fn widths_are_independent_variants() {
        for s in ["knows", "Agent", "Person", "name"] {
            assert_ne!(
                string_hash(s, HashWidth::W32),
                string_hash(s, HashWidth::W64),
                "key {s:?}"
            );
        }
    }

    #[test]
    fn hash_is_deterministic() {
        for s in ["", "knows", "Organization", "a"] {
            for width in [HashWidth::W32, HashWidth::W64] {
                assert_eq!(string_hash(s, width), string_hash(s, width));
            }
        }
    }

    #[test]
    fn sentinel_result_is_remapped() {
        assert_eq!(avoid_sentinel32(-1), -2);
        assert_eq!(avoid_sentinel64(-1), -2);
        assert_eq!(avoid_sentinel32(-2), -2);
        assert_eq!(avoid_sentinel64(0), 0);
        assert_eq!(avoid_sentinel64(i64::MIN), i64::MIN);
    }

    #[test]
    fn bit_pattern_zero_extends_narrow_hashes() {
        let h = string_hash("Person", HashWidth::W32);
        assert!(h < 0);
        let pattern = HashWidth::W32.bit_pattern(h);
        assert_eq!(pattern >> 32, 0);
        assert_eq!(pattern as u32 as i32, h as i32);

        let h = string_hash("mbox", HashWidth::W64);
        assert_eq!(HashWidth::W64.bit_pattern(h), h as u64);
    }

    #[test]
    fn invalid_widths_are_rejected() {
        for bits in [0, 8, 16, 31, 33, 128] {
            assert_eq!(HashWidth::try_from(bits), Err(InvalidWidth(bits)));
        }
        let message = alloc::format!("{}", InvalidWidth(16));
        assert!(message.contains("16"));
    }
}
