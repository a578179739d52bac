#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use strict_ascii::{AsciiChar, AsciiString};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    name: AsciiString,
    flag: AsciiChar,
}

fn ascii(s: &str) -> AsciiString {
    AsciiString::try_from_str(s).unwrap()
}

#[test]
fn string_serializes_as_plain_text() {
    let json = serde_json::to_string(&ascii("An ASCII String.")).unwrap();
    assert_eq!(json, r#""An ASCII String.""#);
}

#[test]
fn string_round_trips() {
    for text in ["", "A string", "tab\tnul\u{0}del\u{7f}"] {
        let json = serde_json::to_string(&ascii(text)).unwrap();
        let back: AsciiString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }
}

#[test]
fn non_ascii_payload_is_corrupt() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let err = serde_json::from_str::<AsciiString>(r#""😃""#).unwrap_err();
    assert!(err.is_data(), "{err}");
    assert!(
        err.to_string().contains("non-ASCII character '😃' at position 0"),
        "{err}"
    );

    let err = serde_json::from_str::<AsciiString>(r#""Emöji""#).unwrap_err();
    assert!(err.to_string().contains("at position 2"), "{err}");
}

#[test]
fn payload_of_wrong_type_is_rejected() {
    assert!(serde_json::from_str::<AsciiString>("42").is_err());
    assert!(serde_json::from_str::<AsciiChar>("65").is_err());
}

#[test]
fn char_serializes_as_single_character_text() {
    let a = AsciiChar::try_from_char('A').unwrap();
    assert_eq!(serde_json::to_string(&a).unwrap(), r#""A""#);
    let back: AsciiChar = serde_json::from_str(r#""A""#).unwrap();
    assert_eq!(back, a);
}

#[test]
fn char_payload_is_validated() {
    let err = serde_json::from_str::<AsciiChar>(r#""Ä""#).unwrap_err();
    assert!(err.to_string().contains("non-ASCII character 'Ä'"), "{err}");

    let err = serde_json::from_str::<AsciiChar>(r#""AB""#).unwrap_err();
    assert!(err.to_string().contains("expected 1 character(s), found 2"), "{err}");

    let err = serde_json::from_str::<AsciiChar>(r#""""#).unwrap_err();
    assert!(err.to_string().contains("found 0"), "{err}");
}

#[test]
fn nested_record_round_trips() {
    let record = Record {
        name: AsciiString::from_str_lossy("zèbre"),
        flag: AsciiChar::from_char_lossy('ñ'),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"name":"zebre","flag":"n"}"#);
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);

    assert!(serde_json::from_str::<Record>(r#"{"name":"zèbre","flag":"n"}"#).is_err());
}

#[test]
fn char_round_trips_through_binary_format() {
    for c in ['A', '\0', '\u{7f}', '?'] {
        let ascii = AsciiChar::try_from_char(c).unwrap();
        let encoded = bincode::serialize(&ascii).unwrap();
        assert_eq!(encoded, vec![c as u8]);
        let back: AsciiChar = bincode::deserialize(&encoded).unwrap();
        assert_eq!(back, ascii);
    }
}

#[test]
fn binary_char_payload_is_validated() {
    let encoded = bincode::serialize(&'Ä').unwrap();
    let err = bincode::deserialize::<AsciiChar>(&encoded).unwrap_err();
    assert!(
        err.to_string().contains("non-ASCII character 'Ä' at position 0"),
        "{err}"
    );
}

#[test]
fn record_round_trips_through_binary_format() {
    let record = Record {
        name: AsciiString::from_str_lossy("Ãñ ÂŚÇÏÎ Strïńg."),
        flag: AsciiChar::from_char_lossy('😃'),
    };
    let encoded = bincode::serialize(&record).unwrap();
    let back: Record = bincode::deserialize(&encoded).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.name, "An ASCII String.");
    assert_eq!(back.flag, '?');
}
