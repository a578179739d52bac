use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::ascii_string::AsciiString;
use crate::charset;
use crate::error::{check_ascii, Error, Result};
use crate::translit;

/// A single character that is guaranteed to be ASCII (0...127).
///
/// Built either exactly, through the `try_from_*` constructors which return
/// `None` for anything outside the 7-bit range, or lossily, through the
/// `*_lossy` constructors which always succeed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiChar(u8);

crate::assert_send_sync!(AsciiChar);

impl AsciiChar {
    /// The character used when nothing better can be produced.
    pub const QUESTION_MARK: AsciiChar = AsciiChar(b'?');

    pub fn try_from_char(c: char) -> Option<Self> {
        charset::is_ascii(c).then_some(Self(c as u8))
    }

    /// Succeeds only if `s` holds exactly one character and it is ASCII.
    pub fn try_from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from_char(c),
            _ => None,
        }
    }

    /// Succeeds only if `bytes` is a single byte in 0...127.
    pub fn try_from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b] if charset::ASCII.contains_byte(*b) => Some(Self(*b)),
            _ => None,
        }
    }

    /// Succeeds only if `value` fits in a `u8` and is not extended ASCII.
    pub fn try_from_int<T: TryInto<u8>>(value: T) -> Option<Self> {
        let b: u8 = value.try_into().ok()?;
        Self::try_from_bytes(&[b])
    }

    /// Wraps `c` if it is ASCII, otherwise transliterates it and keeps the
    /// first resulting character, or `?` if there is none.
    pub fn from_char_lossy(c: char) -> Self {
        match Self::try_from_char(c) {
            Some(ascii) => ascii,
            None => Self::first_of(&translit::transliterate(c.encode_utf8(&mut [0; 4]))),
        }
    }

    /// Same as [`AsciiChar::from_char_lossy`] for text. Multi-character
    /// input is transliterated as a whole and its first character kept.
    pub fn from_str_lossy(s: &str) -> Self {
        match Self::try_from_str(s) {
            Some(ascii) => ascii,
            None => Self::first_of(&translit::transliterate(s)),
        }
    }

    fn first_of(s: &AsciiString) -> Self {
        match s.chars().next() {
            Some(first) => first,
            None => {
                tracing::trace!("empty transliteration, substituting '?'");
                Self::QUESTION_MARK
            }
        }
    }

    /// Crate-internal fast path for bytes already known to be ASCII.
    pub(crate) fn from_ascii_unchecked(b: u8) -> Self {
        debug_assert!(b.is_ascii());
        Self(b)
    }

    /// The ASCII code point.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// The character as raw ASCII data, one byte long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        std::slice::from_ref(&self.0)
    }

    #[inline]
    pub fn is_printable(self) -> bool {
        charset::PRINTABLE.contains_byte(self.0)
    }

    #[inline]
    pub fn is_control(self) -> bool {
        charset::CONTROL.contains_byte(self.0)
    }
}

/// Printable characters are shown as themselves; control characters are
/// never let through and show as `?`.
impl fmt::Display for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_printable() {
            write!(f, "{}", self.as_char())
        } else {
            write!(f, "{}", Self::QUESTION_MARK.as_char())
        }
    }
}

impl fmt::Debug for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiChar(#{}: \"{}\")", self.0, self)
    }
}

impl FromStr for AsciiChar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != 1 {
            return Err(Error::InvalidLength { expected: 1, found });
        }
        check_ascii(s)?;
        Ok(Self(s.as_bytes()[0]))
    }
}

impl PartialEq<char> for AsciiChar {
    fn eq(&self, other: &char) -> bool {
        self.as_char() == *other
    }
}

impl PartialEq<AsciiChar> for char {
    fn eq(&self, other: &AsciiChar) -> bool {
        *self == other.as_char()
    }
}

impl From<AsciiChar> for u8 {
    fn from(value: AsciiChar) -> Self {
        value.0
    }
}

impl From<AsciiChar> for char {
    fn from(value: AsciiChar) -> Self {
        value.as_char()
    }
}

impl Add<AsciiChar> for AsciiChar {
    type Output = AsciiString;

    fn add(self, rhs: AsciiChar) -> Self::Output {
        AsciiString::from_chars([self, rhs])
    }
}

impl Add<AsciiString> for AsciiChar {
    type Output = AsciiString;

    fn add(self, rhs: AsciiString) -> Self::Output {
        AsciiString::from(self) + &rhs
    }
}

impl Add<&AsciiString> for AsciiChar {
    type Output = AsciiString;

    fn add(self, rhs: &AsciiString) -> Self::Output {
        AsciiString::from(self) + rhs
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AsciiChar {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

#[cfg(feature = "serde")]
struct AsciiCharVisitor;

#[cfg(feature = "serde")]
impl AsciiCharVisitor {
    fn reject<E: serde::de::Error>(err: Error) -> E {
        tracing::debug!(%err, "rejecting persisted ASCII character");
        E::custom(err)
    }
}

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for AsciiCharVisitor {
    type Value = AsciiChar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single ASCII character")
    }

    fn visit_char<E>(self, c: char) -> std::result::Result<AsciiChar, E>
    where
        E: serde::de::Error,
    {
        AsciiChar::try_from_char(c).ok_or_else(|| {
            Self::reject(Error::NonAscii {
                position: 0,
                character: c,
            })
        })
    }

    fn visit_str<E>(self, s: &str) -> std::result::Result<AsciiChar, E>
    where
        E: serde::de::Error,
    {
        s.parse::<AsciiChar>().map_err(Self::reject)
    }
}

/// Formats without a native character type hand the payload over as text;
/// both paths apply the same validation.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AsciiChar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_char(AsciiCharVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: char) -> AsciiChar {
        AsciiChar::try_from_char(c).unwrap()
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(AsciiChar::try_from_char('A').unwrap().as_char(), 'A');
        assert_eq!(AsciiChar::try_from_char('\0').unwrap().as_u8(), 0);
        assert!(AsciiChar::try_from_char('😃').is_none());
        assert!(AsciiChar::try_from_char('Ä').is_none());
        assert!(AsciiChar::try_from_char('\u{80}').is_none());
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(AsciiChar::try_from_str("A"), Some(ch('A')));
        assert!(AsciiChar::try_from_str("A string").is_none());
        assert!(AsciiChar::try_from_str("").is_none());
        assert!(AsciiChar::try_from_str("é").is_none());
        // decomposed é is two characters
        assert!(AsciiChar::try_from_str("e\u{301}").is_none());
    }

    #[test]
    fn test_try_from_bytes() {
        let a = AsciiChar::try_from_bytes(&[65]).unwrap();
        assert_eq!(a.as_u8(), 65);
        assert_eq!(a.to_string(), "A");
        assert_eq!(AsciiChar::try_from_bytes(&[0]).unwrap().as_u8(), 0);
        assert!(AsciiChar::try_from_bytes(&[128]).is_none());
        assert!(AsciiChar::try_from_bytes(&[]).is_none());
        assert!(AsciiChar::try_from_bytes(&[65, 66]).is_none());
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(AsciiChar::try_from_int(65), Some(ch('A')));
        assert_eq!(AsciiChar::try_from_int(0u64).unwrap().as_u8(), 0);
        assert_eq!(AsciiChar::try_from_int(127i16).unwrap().as_u8(), 127);
        assert!(AsciiChar::try_from_int(128).is_none());
        assert!(AsciiChar::try_from_int(300).is_none());
        assert!(AsciiChar::try_from_int(-1).is_none());
        assert!(AsciiChar::try_from_int(u64::MAX).is_none());
    }

    #[test]
    fn test_as_bytes() {
        assert_eq!(ch('A').as_bytes(), &[65]);
        assert_eq!(ch('\0').as_bytes(), &[0]);
    }

    #[test]
    fn test_lossy() {
        assert_eq!(AsciiChar::from_char_lossy('😃'), AsciiChar::QUESTION_MARK);
        assert_eq!(AsciiChar::from_char_lossy('😃').as_u8(), 63);
        assert_eq!(AsciiChar::from_char_lossy('A'), 'A');
        assert_eq!(AsciiChar::from_char_lossy('Á'), 'A');
        assert_eq!(AsciiChar::from_char_lossy('Æ'), 'A');
        // leading space of the " 1/2" folding
        assert_eq!(AsciiChar::from_char_lossy('½'), ' ');
        // combining mark folds to nothing
        assert_eq!(AsciiChar::from_char_lossy('\u{301}'), '?');
        // ASCII control characters are kept as-is
        assert_eq!(AsciiChar::from_char_lossy('\n').as_u8(), b'\n');

        assert_eq!(AsciiChar::from_str_lossy("A"), 'A');
        assert_eq!(AsciiChar::from_str_lossy("A string"), 'A');
        assert_eq!(AsciiChar::from_str_lossy("😃"), '?');
        assert_eq!(AsciiChar::from_str_lossy(""), '?');
        assert_eq!(AsciiChar::from_str_lossy("e\u{301}"), 'e');
        assert_eq!(AsciiChar::from_str_lossy("\t"), '\t');
    }

    #[test]
    fn test_display() {
        assert_eq!(ch('A').to_string(), "A");
        assert_eq!(ch(' ').to_string(), " ");
        assert_eq!(ch('~').to_string(), "~");
        assert_eq!(ch('\0').to_string(), "?");
        assert_eq!(ch('\u{7f}').to_string(), "?");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", ch('A')), r#"AsciiChar(#65: "A")"#);
        assert_eq!(format!("{:?}", ch('\0')), r#"AsciiChar(#0: "?")"#);
    }

    #[test]
    fn test_equality() {
        assert_eq!(ch('A'), ch('A'));
        assert_ne!(ch('A'), ch('B'));
        assert!(ch('A') == 'A');
        assert!('A' == ch('A'));
        assert!(ch('A') != 'B');
        assert!('B' != ch('A'));
        assert!(ch('A') < ch('B'));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("A".parse::<AsciiChar>(), Ok(ch('A')));
        assert_eq!(
            "AB".parse::<AsciiChar>(),
            Err(Error::InvalidLength {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            "".parse::<AsciiChar>(),
            Err(Error::InvalidLength {
                expected: 1,
                found: 0
            })
        );
        assert_eq!(
            "😃".parse::<AsciiChar>(),
            Err(Error::NonAscii {
                position: 0,
                character: '😃'
            })
        );
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(ch('A') + ch('B'), "AB");
        let bc = AsciiString::try_from_str("BC").unwrap();
        assert_eq!(ch('A') + &bc, "ABC");
        assert_eq!(ch('A') + bc, "ABC");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(u8::from(ch('A')), 65);
        assert_eq!(char::from(ch('A')), 'A');
        assert_eq!(AsciiString::from(ch('A')), "A");
    }
}
