//! # Validated ASCII text
//!
//! [`AsciiChar`] and [`AsciiString`] carry a guarantee that their content is
//! 7-bit ASCII, so code building fixed-width protocol fields or legacy
//! encodings can take them without validating again.
//!
//! Every type can be built two ways. The `try_from_*` constructors validate
//! and return `None` for anything that is not ASCII:
//!
//! ```rust
//! use strict_ascii::AsciiString;
//!
//! let text = AsciiString::try_from_str("An ASCII String.").unwrap();
//! assert_eq!(text.as_bytes(), b"An ASCII String.");
//! assert!(AsciiString::try_from_str("Emöji 😃").is_none());
//! ```
//!
//! The lossy constructors never fail. They fold Latin letters and common
//! punctuation to ASCII and put a single `?` wherever nothing printable
//! could be produced:
//!
//! ```rust
//! use strict_ascii::{AsciiChar, AsciiString};
//!
//! assert_eq!(AsciiString::from_str_lossy("Ãñ ÂŚÇÏÎ Strïńg."), "An ASCII String.");
//! assert_eq!(AsciiString::from_str_lossy("Emöji 😃"), "Emoji ?");
//! assert_eq!(AsciiChar::from_char_lossy('😃'), '?');
//! ```

pub mod charset;
mod ascii_char;
mod ascii_string;
mod error;
mod translit;

pub use ascii_char::AsciiChar;
pub use ascii_string::{AsciiString, Join};
pub use error::{Error, Result};
pub use translit::{fold, transliterate, SUBSTITUTE};

/// Assert that a type implements both Send and Sync at compile time.
/// Usage: assert_send_sync!(MyType);
/// Usage: assert_send_sync!(Type1, Type2, Type3);
macro_rules! assert_send_sync {
    ($($t:ty),+ $(,)?) => {
        #[cfg(test)]
        $(const _: () = {
            const fn _assert_send<T: ?Sized + Send>() {}
            const fn _assert_sync<T: ?Sized + Sync>() {}
            _assert_send::<$t>();
            _assert_sync::<$t>();
        };)+
    };
}

pub(crate) use assert_send_sync;

/// Conversions from Rust text into [`AsciiString`].
pub trait ToAsciiString {
    /// Converts exactly. Returns `None` if any character is not ASCII.
    fn to_ascii_string(&self) -> Option<AsciiString>;

    /// Converts lossily, transforming characters to printable ASCII
    /// substitutions where necessary.
    ///
    /// Some characters become more than one ASCII character (`½` becomes
    /// `" 1/2"`). Where no reasonable substitution exists a `?` is used.
    fn to_ascii_string_lossy(&self) -> AsciiString;
}

impl ToAsciiString for str {
    fn to_ascii_string(&self) -> Option<AsciiString> {
        AsciiString::try_from_str(self)
    }

    fn to_ascii_string_lossy(&self) -> AsciiString {
        transliterate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_conversions() {
        assert_eq!("A string".to_ascii_string().unwrap(), "A string");
        assert!("zèbre".to_ascii_string().is_none());
        assert_eq!("zèbre".to_ascii_string_lossy(), "zebre");

        let owned = String::from("½");
        assert_eq!(owned.to_ascii_string_lossy(), " 1/2");
        assert!(owned.to_ascii_string().is_none());
    }

    #[test]
    fn test_substitute_is_question_mark() {
        assert_eq!(AsciiChar::QUESTION_MARK, SUBSTITUTE);
    }
}
