/// Errors raised when text claiming to be ASCII turns out not to be.
///
/// Validating constructors (`try_from_*`) report failure as `None`; this type
/// is reserved for parsing and decoding persisted payloads, where a violation
/// means the source is corrupt and the caller has to handle it explicitly.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside the 7-bit range was found.
    #[error("non-ASCII character {character:?} at position {position}")]
    NonAscii {
        /// Character index of the offending character.
        position: usize,
        character: char,
    },
    /// A single-character payload did not hold exactly one character.
    #[error("expected {expected} character(s), found {found}")]
    InvalidLength { expected: usize, found: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns the first non-ASCII character of `s` as an error.
pub(crate) fn check_ascii(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        Some((position, character)) => Err(Error::NonAscii {
            position,
            character,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ascii_reports_char_position() {
        assert_eq!(check_ascii("plain"), Ok(()));
        assert_eq!(check_ascii(""), Ok(()));
        assert_eq!(
            check_ascii("Emöji"),
            Err(Error::NonAscii {
                position: 2,
                character: 'ö'
            })
        );
        // position counts characters, not bytes
        assert_eq!(
            check_ascii("ééx😃"),
            Err(Error::NonAscii {
                position: 0,
                character: 'é'
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::NonAscii {
            position: 3,
            character: '😃',
        };
        assert_eq!(err.to_string(), "non-ASCII character '😃' at position 3");
        let err = Error::InvalidLength {
            expected: 1,
            found: 0,
        };
        assert_eq!(err.to_string(), "expected 1 character(s), found 0");
    }
}
