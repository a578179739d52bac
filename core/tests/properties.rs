use proptest::prelude::*;
use strict_ascii::{charset, transliterate, AsciiChar, AsciiString, Join, ToAsciiString};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .try_init();
}

fn ascii_string() -> impl Strategy<Value = AsciiString> {
    "[\\x00-\\x7F]{0,32}".prop_map(|s| AsciiString::try_from_str(&s).unwrap())
}

proptest! {
    #[test]
    fn ascii_text_round_trips(s in "[\\x00-\\x7F]{0,64}") {
        let ascii = AsciiString::try_from_str(&s).unwrap();
        prop_assert_eq!(ascii.as_str(), s.as_str());
        prop_assert_eq!(ascii.as_bytes(), s.as_bytes());
        prop_assert_eq!(ascii.len(), s.chars().count());
        prop_assert_eq!(AsciiString::try_from_bytes(s.as_bytes()), Some(ascii));
    }

    #[test]
    fn non_ascii_text_is_rejected(
        prefix in "[\\x00-\\x7F]{0,16}",
        bad in "[^\\x00-\\x7F]",
        suffix in "\\PC{0,16}",
    ) {
        let s = format!("{prefix}{bad}{suffix}");
        prop_assert!(AsciiString::try_from_str(&s).is_none());
        prop_assert!(s.to_ascii_string().is_none());
        prop_assert!(AsciiString::try_from_bytes(s.as_bytes()).is_none());
    }

    #[test]
    fn lossy_never_fails_and_is_printable(s in any::<String>()) {
        init_tracing();
        let ascii = AsciiString::from_str_lossy(&s);
        prop_assert!(ascii.as_str().chars().all(charset::is_printable));
        prop_assert_eq!(ascii.len(), ascii.as_bytes().len());
    }

    #[test]
    fn lossy_keeps_printable_ascii(s in "[ -~]{0,64}") {
        prop_assert_eq!(AsciiString::from_str_lossy(&s), s.as_str());
    }

    #[test]
    fn unmappable_runs_collapse(
        before in "[a-z ]{0,8}",
        after in "[a-z ]{0,8}",
        run in prop::collection::vec(prop::sample::select(vec!['😃', '🐕', '\u{0}', '\n', 'ж', '\u{7f}']), 1..8),
    ) {
        let run: String = run.into_iter().collect();
        let input = format!("{before}{run}{after}");
        prop_assert_eq!(transliterate(&input), format!("{before}?{after}"));
    }

    #[test]
    fn concatenation_is_associative(a in ascii_string(), b in ascii_string(), c in ascii_string()) {
        let left = (a.clone() + &b) + &c;
        let right = a.clone() + &(b.clone() + &c);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.as_str(), format!("{a}{b}{c}"));
    }

    #[test]
    fn joined_single_element_is_unchanged(x in ascii_string(), sep in ascii_string()) {
        prop_assert_eq!(vec![x.clone()].joined_with(&sep), x);
        prop_assert_eq!(Vec::<AsciiString>::new().joined_with(&sep), "");
    }

    #[test]
    fn joined_matches_std_join(parts in prop::collection::vec(ascii_string(), 0..6), sep in ascii_string()) {
        let expected = parts.iter().map(AsciiString::as_str).collect::<Vec<_>>().join(sep.as_str());
        prop_assert_eq!(parts.joined_with(&sep), expected.as_str());
    }

    #[test]
    fn lossy_char_is_always_ascii(c in any::<char>()) {
        let ascii = AsciiChar::from_char_lossy(c);
        prop_assert!(ascii.as_u8() <= 127);
        if c.is_ascii() {
            prop_assert_eq!(ascii, c);
        }
    }

    #[test]
    fn int_accepted_only_in_ascii_range(v in any::<i32>()) {
        let accepted = AsciiChar::try_from_int(v);
        prop_assert_eq!(accepted.is_some(), (0..=127).contains(&v));
        if let Some(ascii) = accepted {
            prop_assert_eq!(i32::from(ascii.as_u8()), v);
        }
    }
}

#[test]
fn concrete_scenarios() {
    init_tracing();

    let a = AsciiChar::try_from_bytes(&[65]).unwrap();
    assert_eq!(a.as_u8(), 65);
    assert_eq!(a.to_string(), "A");

    assert!(AsciiChar::try_from_bytes(&[128]).is_none());
    assert_eq!(AsciiChar::from_str_lossy("😃").as_u8(), 63);
    assert_eq!(transliterate("Á"), "A");
    assert_eq!(transliterate("½"), " 1/2");
    assert_eq!(transliterate("Ãñ ÂŚÇÏÎ Strïńg."), "An ASCII String.");
}

#[test]
fn long_text_keeps_context() {
    assert_eq!(
        "The long brown dog walked lazily around the short xenophobic zebra".to_ascii_string_lossy(),
        "The long brown dog walked lazily around the short xenophobic zebra"
    );
    assert_eq!(
        "Le long 🐕 chien brun se promenait paresseusement autour du petit zèbre xénophobe"
            .to_ascii_string_lossy(),
        "Le long ? chien brun se promenait paresseusement autour du petit zebre xenophobe"
    );
}
