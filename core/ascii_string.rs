use std::borrow::Borrow;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::ascii_char::AsciiChar;
use crate::charset;
use crate::error::{check_ascii, Error, Result};
use crate::translit;

/// A string that is guaranteed to contain only ASCII characters.
///
/// The raw form returned by [`AsciiString::as_bytes`] holds exactly one byte
/// per character, each the character's code point.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiString {
    text: String,
}

crate::assert_send_sync!(AsciiString);

impl AsciiString {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Succeeds only if every character of `s` is ASCII.
    pub fn try_from_str(s: &str) -> Option<Self> {
        s.is_ascii().then(|| Self::from_ascii_unchecked(s.to_owned()))
    }

    /// Owned variant of [`AsciiString::try_from_str`]; reuses the allocation.
    pub fn try_from_string(s: String) -> Option<Self> {
        s.is_ascii().then(|| Self::from_ascii_unchecked(s))
    }

    /// Succeeds only if every byte is in 0...127. Extended ASCII is rejected.
    pub fn try_from_bytes(bytes: &[u8]) -> Option<Self> {
        if !bytes.iter().all(|&b| charset::ASCII.contains_byte(b)) {
            return None;
        }
        let text = std::str::from_utf8(bytes).ok()?;
        Some(Self::from_ascii_unchecked(text.to_owned()))
    }

    /// Converts `s` into printable ASCII, substituting where necessary.
    /// See [`crate::transliterate`].
    pub fn from_str_lossy(s: &str) -> Self {
        translit::transliterate(s)
    }

    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = AsciiChar>,
    {
        let text: String = chars.into_iter().map(AsciiChar::as_char).collect();
        Self::from_ascii_unchecked(text)
    }

    pub fn concat<I>(strings: I) -> Self
    where
        I: IntoIterator<Item = AsciiString>,
    {
        let mut out = Self::new();
        for s in strings {
            out += &s;
        }
        out
    }

    /// Crate-internal fast path for text already known to be ASCII.
    pub(crate) fn from_ascii_unchecked(text: String) -> Self {
        debug_assert!(text.is_ascii());
        Self { text }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The string as raw ASCII data.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    pub fn chars(&self) -> impl DoubleEndedIterator<Item = AsciiChar> + ExactSizeIterator + '_ {
        self.text.bytes().map(AsciiChar::from_ascii_unchecked)
    }
}

/// Concatenation of a sequence of ASCII values with an optional separator.
pub trait Join {
    fn joined(&self) -> AsciiString {
        self.joined_with(&AsciiString::new())
    }

    /// Inserts `separator` between consecutive elements, never before the
    /// first or after the last.
    fn joined_with(&self, separator: &AsciiString) -> AsciiString;
}

impl Join for [AsciiChar] {
    fn joined_with(&self, separator: &AsciiString) -> AsciiString {
        let gaps = self.len().saturating_sub(1);
        let mut text = String::with_capacity(self.len() + gaps * separator.len());
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                text.push_str(separator.as_str());
            }
            text.push(c.as_char());
        }
        AsciiString::from_ascii_unchecked(text)
    }
}

impl Join for [AsciiString] {
    fn joined_with(&self, separator: &AsciiString) -> AsciiString {
        let gaps = self.len().saturating_sub(1);
        let size = self.iter().map(AsciiString::len).sum::<usize>() + gaps * separator.len();
        let mut text = String::with_capacity(size);
        for (i, s) in self.iter().enumerate() {
            if i > 0 {
                text.push_str(separator.as_str());
            }
            text.push_str(s.as_str());
        }
        AsciiString::from_ascii_unchecked(text)
    }
}

impl fmt::Display for AsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

impl fmt::Debug for AsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiString(\"{}\")", self.text)
    }
}

/// Lossless parse: fails on the first non-ASCII character instead of
/// transliterating.
impl FromStr for AsciiString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        check_ascii(s)?;
        Ok(Self::from_ascii_unchecked(s.to_owned()))
    }
}

impl AsRef<str> for AsciiString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for AsciiString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<str> for AsciiString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<AsciiChar> for AsciiString {
    fn from(value: AsciiChar) -> Self {
        Self::from_ascii_unchecked(value.as_char().to_string())
    }
}

impl From<AsciiString> for String {
    fn from(value: AsciiString) -> Self {
        value.text
    }
}

impl From<AsciiString> for Vec<u8> {
    fn from(value: AsciiString) -> Self {
        value.into_bytes()
    }
}

impl PartialEq<str> for AsciiString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for AsciiString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for AsciiString {
    fn eq(&self, other: &String) -> bool {
        self.text == *other
    }
}

impl PartialEq<AsciiString> for str {
    fn eq(&self, other: &AsciiString) -> bool {
        self == other.text
    }
}

impl PartialEq<AsciiString> for &str {
    fn eq(&self, other: &AsciiString) -> bool {
        *self == other.text
    }
}

impl PartialEq<AsciiString> for String {
    fn eq(&self, other: &AsciiString) -> bool {
        *self == other.text
    }
}

impl Add<&AsciiString> for AsciiString {
    type Output = AsciiString;

    fn add(mut self, rhs: &AsciiString) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<AsciiString> for AsciiString {
    type Output = AsciiString;

    fn add(mut self, rhs: AsciiString) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<AsciiChar> for AsciiString {
    type Output = AsciiString;

    fn add(mut self, rhs: AsciiChar) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<&AsciiString> for AsciiString {
    fn add_assign(&mut self, rhs: &AsciiString) {
        self.text.push_str(&rhs.text);
    }
}

impl AddAssign<AsciiChar> for AsciiString {
    fn add_assign(&mut self, rhs: AsciiChar) {
        self.text.push(rhs.as_char());
    }
}

impl FromIterator<AsciiChar> for AsciiString {
    fn from_iter<I: IntoIterator<Item = AsciiChar>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl FromIterator<AsciiString> for AsciiString {
    fn from_iter<I: IntoIterator<Item = AsciiString>>(iter: I) -> Self {
        Self::concat(iter)
    }
}

impl<'a> FromIterator<&'a AsciiString> for AsciiString {
    fn from_iter<I: IntoIterator<Item = &'a AsciiString>>(iter: I) -> Self {
        let mut out = Self::new();
        for s in iter {
            out += s;
        }
        out
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AsciiString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Persisted text has to still be ASCII; a payload that is not is treated as
/// corrupt and never transliterated.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AsciiString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        if let Err(err) = check_ascii(&s) {
            tracing::debug!(%err, "rejecting persisted ASCII string");
            return Err(serde::de::Error::custom(err));
        }
        Ok(Self::from_ascii_unchecked(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> AsciiString {
        AsciiString::try_from_str(text).unwrap()
    }

    fn ch(c: char) -> AsciiChar {
        AsciiChar::try_from_char(c).unwrap()
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(s("A string").as_str(), "A string");
        assert_eq!(s("").as_str(), "");
        assert_eq!(s("tab\tnul\0").as_bytes(), b"tab\tnul\0");
        assert!(AsciiString::try_from_str("Emöji 😃").is_none());
        assert!(AsciiString::try_from_str("😃").is_none());
    }

    #[test]
    fn test_try_from_bytes() {
        assert_eq!(AsciiString::try_from_bytes(&[]).unwrap(), "");
        assert_eq!(AsciiString::try_from_bytes(&[0x41, 0x30]).unwrap(), "A0");
        // extended ASCII, 'ä' in code page 437
        assert!(AsciiString::try_from_bytes(&[132]).is_none());
        assert!(AsciiString::try_from_bytes(&[0x41, 0xFF]).is_none());
        assert!(AsciiString::try_from_bytes("é".as_bytes()).is_none());
    }

    #[test]
    fn test_lossy() {
        assert_eq!(AsciiString::from_str_lossy(""), "");
        assert_eq!(AsciiString::from_str_lossy("A string"), "A string");
        assert_eq!(AsciiString::from_str_lossy("Emöji 😃"), "Emoji ?");
    }

    #[test]
    fn test_len_matches_raw_bytes() {
        let text = s("An ASCII String.");
        assert_eq!(text.len(), 16);
        assert_eq!(text.len(), text.as_bytes().len());
        assert_eq!(text.chars().len(), 16);
        assert!(AsciiString::new().is_empty());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", AsciiString::new()), "");
        assert_eq!(format!("{}", s("A string")), "A string");
        assert_eq!(format!("{:>4}", s("ab")), "  ab");
        assert_eq!(format!("{:?}", AsciiString::new()), r#"AsciiString("")"#);
        assert_eq!(
            format!("{:?}", AsciiString::from_str_lossy("Emöji 😃")),
            r#"AsciiString("Emoji ?")"#
        );
    }

    #[test]
    fn test_equality_with_text() {
        let text = s("A string");
        assert_eq!(text, s("A string"));
        assert!(text == "A string");
        assert!("A string" == text);
        assert!(text == *"A string");
        assert!(*"A string" == text);
        assert!(text == String::from("A string"));
        assert!(String::from("A string") == text);
        assert!(text != "another string");
        assert!("another string" != text);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("A0".parse::<AsciiString>(), Ok(s("A0")));
        assert_eq!(
            "Emöji".parse::<AsciiString>(),
            Err(Error::NonAscii {
                position: 2,
                character: 'ö'
            })
        );
    }

    #[test]
    fn test_from_chars() {
        assert_eq!(AsciiString::from_chars([ch('A'), ch('B'), ch('C')]), "ABC");
        assert_eq!(AsciiString::from_chars(std::iter::empty()), "");
        let collected: AsciiString = "xyz".chars().map(AsciiChar::from_char_lossy).collect();
        assert_eq!(collected, "xyz");
        let raw = AsciiString::from_chars([ch('\0'), ch('\u{7f}')]);
        assert_eq!(raw.as_bytes(), &[0, 127]);
    }

    #[test]
    fn test_concat() {
        let parts = vec![s("AB"), s(""), s("C")];
        assert_eq!(AsciiString::concat(parts.clone()), "ABC");
        let borrowed: AsciiString = parts.iter().collect();
        assert_eq!(borrowed, "ABC");
        let owned: AsciiString = parts.into_iter().collect();
        assert_eq!(owned, "ABC");
        assert_eq!(AsciiString::concat(Vec::<AsciiString>::new()), "");
    }

    #[test]
    fn test_add() {
        assert_eq!(s("AB") + ch('C'), "ABC");
        assert_eq!(s("AB") + s("CD"), "ABCD");
        assert_eq!(s("AB") + &s("CD"), "ABCD");
        let mut text = s("A");
        text += ch('B');
        text += &s("CD");
        assert_eq!(text, "ABCD");
        assert_eq!(text.as_bytes(), b"ABCD");
    }

    #[test]
    fn test_joined_chars() {
        let chars = [ch('A'), ch('B')];
        assert_eq!(chars.joined(), "AB");
        assert_eq!(chars.joined_with(&s("_")), "A_B");
        assert_eq!(chars.joined_with(&s("123")), "A123B");
        assert_eq!(chars.joined_with(&s("123")).as_bytes(), b"A123B");
    }

    #[test]
    fn test_joined_strings() {
        let parts = vec![s("one"), s("two"), s("three")];
        assert_eq!(parts.joined(), "onetwothree");
        assert_eq!(parts.joined_with(&s(", ")), "one, two, three");
        assert_eq!(parts.joined_with(&s(", ")).as_bytes(), b"one, two, three");
    }

    #[test]
    fn test_joined_zero_and_one_element() {
        let sep = s("--");
        let no_chars: [AsciiChar; 0] = [];
        let no_strings: Vec<AsciiString> = Vec::new();
        assert_eq!(no_chars.joined_with(&sep), "");
        assert_eq!(no_strings.joined_with(&sep), "");
        assert_eq!([ch('x')].joined_with(&sep), "x");
        assert_eq!(vec![s("only")].joined_with(&sep), "only");
    }

    #[test]
    fn test_chars_round_trip() {
        let text = s("Hi!\n");
        let chars: Vec<AsciiChar> = text.chars().collect();
        assert_eq!(chars, vec![ch('H'), ch('i'), ch('!'), ch('\n')]);
        assert_eq!(AsciiString::from_chars(chars), text);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(String::from(s("abc")), "abc");
        assert_eq!(Vec::<u8>::from(s("abc")), b"abc".to_vec());
        let text = s("abc");
        let as_str: &str = text.as_ref();
        assert_eq!(as_str, "abc");
    }

    #[test]
    fn test_borrow_lookup() {
        let mut set = std::collections::HashSet::new();
        set.insert(s("key"));
        assert!(set.contains("key"));
    }
}
