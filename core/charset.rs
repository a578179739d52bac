//! Static ASCII character classes.
//!
//! Each class is a list of inclusive `(start, end)` code point ranges
//! evaluated at compile time, so there is nothing to initialize and no
//! ordering between them.

#[derive(Clone, Copy, Debug)]
pub struct CharClass {
    ranges: &'static [(u32, u32)],
}

impl CharClass {
    const fn new(ranges: &'static [(u32, u32)]) -> Self {
        Self { ranges }
    }

    pub const fn contains(&self, c: char) -> bool {
        let c = c as u32;
        let mut i = 0;
        while i < self.ranges.len() {
            let (start, end) = self.ranges[i];
            if start <= c && c <= end {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Same as [`CharClass::contains`] for a raw byte value.
    pub const fn contains_byte(&self, b: u8) -> bool {
        self.contains(b as char)
    }
}

/// All ASCII characters, printable and non-printable (0...127)
pub const ASCII: CharClass = CharClass::new(&[(0, 127)]);

/// Printable ASCII characters, space through tilde (32...126)
pub const PRINTABLE: CharClass = CharClass::new(&[(32, 126)]);

/// ASCII control characters (0...31 and DEL)
pub const CONTROL: CharClass = CharClass::new(&[(0, 31), (127, 127)]);

/// Extended ASCII (128...255), never accepted by the validating constructors
pub const EXTENDED: CharClass = CharClass::new(&[(128, 255)]);

/// ASCII plus extended ASCII (0...255)
pub const FULL: CharClass = CharClass::new(&[(0, 255)]);

/// Combining diacritical mark blocks, including the extended, supplement,
/// symbol and half mark blocks
pub const COMBINING: CharClass = CharClass::new(&[
    (0x0300, 0x036F),
    (0x1AB0, 0x1AFF),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
]);

#[inline]
pub const fn is_ascii(c: char) -> bool {
    ASCII.contains(c)
}

#[inline]
pub const fn is_printable(c: char) -> bool {
    PRINTABLE.contains(c)
}

#[inline]
pub const fn is_control(c: char) -> bool {
    CONTROL.contains(c)
}

#[inline]
pub const fn is_extended(c: char) -> bool {
    EXTENDED.contains(c)
}

#[inline]
pub const fn is_combining(c: char) -> bool {
    COMBINING.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries() {
        assert!(is_ascii('\0'));
        assert!(is_ascii('\u{7f}'));
        assert!(!is_ascii('\u{80}'));

        assert!(!is_printable('\u{1f}'));
        assert!(is_printable(' '));
        assert!(is_printable('~'));
        assert!(!is_printable('\u{7f}'));

        assert!(is_control('\0'));
        assert!(is_control('\n'));
        assert!(is_control('\u{7f}'));
        assert!(!is_control(' '));

        assert!(!is_extended('\u{7f}'));
        assert!(is_extended('Ä'));
        assert!(is_extended('ÿ'));
        assert!(!is_extended('Ā'));

        assert!(is_combining('\u{301}'));
        assert!(is_combining('\u{1AB0}'));
        assert!(is_combining('\u{1DFF}'));
        assert!(is_combining('\u{20D7}'));
        assert!(is_combining('\u{FE2F}'));
        assert!(!is_combining('\u{2FF}'));
        assert!(!is_combining('\u{370}'));
        assert!(!is_combining('e'));

        assert!(FULL.contains('ÿ'));
        assert!(!FULL.contains('😃'));
    }

    #[test]
    fn test_printable_and_control_partition_ascii() {
        for b in 0..=255u8 {
            let ascii = ASCII.contains_byte(b);
            assert_eq!(
                ascii,
                PRINTABLE.contains_byte(b) ^ CONTROL.contains_byte(b),
                "byte {b}"
            );
            assert_eq!(!ascii, EXTENDED.contains_byte(b), "byte {b}");
        }
    }

    #[test]
    fn test_agrees_with_std() {
        for b in 0..=127u8 {
            let c = b as char;
            assert_eq!(is_control(c), c.is_ascii_control());
            assert_eq!(is_printable(c), c.is_ascii_graphic() || c == ' ');
        }
    }
}
