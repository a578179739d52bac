//! Lossy conversion of arbitrary text into printable ASCII.
//!
//! Latin letters and common punctuation are folded to their closest ASCII
//! spelling through a static table. Whatever is left outside the printable
//! range is replaced, one `?` per run.

use std::borrow::Cow;

use crate::ascii_string::AsciiString;
use crate::charset;

/// Character substituted for each run of text that has no printable form.
pub const SUBSTITUTE: char = '?';

#[derive(Copy, Clone, Debug)]
struct Transliteration {
    c_from: u16,
    c_to0: u8,
    c_to1: u8,
    c_to2: u8,
    c_to3: u8,
}

impl Transliteration {
    const fn new(c_from: u16, c_to0: u8, c_to1: u8, c_to2: u8, c_to3: u8) -> Self {
        Self {
            c_from,
            c_to0,
            c_to1,
            c_to2,
            c_to3,
        }
    }

    fn push_to(&self, out: &mut String) {
        for b in [self.c_to0, self.c_to1, self.c_to2, self.c_to3] {
            if b == 0 {
                break;
            }
            out.push(b as char);
        }
    }
}

// Sorted by c_from; looked up with a binary search.
static TRANSLIT: [Transliteration; 879] = [
    Transliteration::new(0x00A0, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x00A1, b'!', 0x00, 0x00, 0x00), /* ¡ to ! */
    Transliteration::new(0x00A6, b'|', 0x00, 0x00, 0x00), /* ¦ to | */
    Transliteration::new(0x00A9, b'(', b'C', b')', 0x00), /* © to (C) */
    Transliteration::new(0x00AB, b'<', b'<', 0x00, 0x00), /* « to << */
    Transliteration::new(0x00AD, b'-', 0x00, 0x00, 0x00), /* SHY to - */
    Transliteration::new(0x00AE, b'(', b'R', b')', 0x00), /* ® to (R) */
    Transliteration::new(0x00B1, b'+', b'/', b'-', 0x00), /* ± to +/- */
    Transliteration::new(0x00B4, b'\'', 0x00, 0x00, 0x00), /* ´ to ' */
    Transliteration::new(0x00B5, b'u', 0x00, 0x00, 0x00), /* µ to u */
    Transliteration::new(0x00B7, b'.', 0x00, 0x00, 0x00), /* · to . */
    Transliteration::new(0x00BB, b'>', b'>', 0x00, 0x00), /* » to >> */
    Transliteration::new(0x00BC, b' ', b'1', b'/', b'4'), /* ¼ to  1/4 */
    Transliteration::new(0x00BD, b' ', b'1', b'/', b'2'), /* ½ to  1/2 */
    Transliteration::new(0x00BE, b' ', b'3', b'/', b'4'), /* ¾ to  3/4 */
    Transliteration::new(0x00BF, b'?', 0x00, 0x00, 0x00), /* ¿ to ? */
    Transliteration::new(0x00C0, b'A', 0x00, 0x00, 0x00), /* À to A */
    Transliteration::new(0x00C1, b'A', 0x00, 0x00, 0x00), /* Á to A */
    Transliteration::new(0x00C2, b'A', 0x00, 0x00, 0x00), /* Â to A */
    Transliteration::new(0x00C3, b'A', 0x00, 0x00, 0x00), /* Ã to A */
    Transliteration::new(0x00C4, b'A', 0x00, 0x00, 0x00), /* Ä to A */
    Transliteration::new(0x00C5, b'A', 0x00, 0x00, 0x00), /* Å to A */
    Transliteration::new(0x00C6, b'A', b'E', 0x00, 0x00), /* Æ to AE */
    Transliteration::new(0x00C7, b'C', 0x00, 0x00, 0x00), /* Ç to C */
    Transliteration::new(0x00C8, b'E', 0x00, 0x00, 0x00), /* È to E */
    Transliteration::new(0x00C9, b'E', 0x00, 0x00, 0x00), /* É to E */
    Transliteration::new(0x00CA, b'E', 0x00, 0x00, 0x00), /* Ê to E */
    Transliteration::new(0x00CB, b'E', 0x00, 0x00, 0x00), /* Ë to E */
    Transliteration::new(0x00CC, b'I', 0x00, 0x00, 0x00), /* Ì to I */
    Transliteration::new(0x00CD, b'I', 0x00, 0x00, 0x00), /* Í to I */
    Transliteration::new(0x00CE, b'I', 0x00, 0x00, 0x00), /* Î to I */
    Transliteration::new(0x00CF, b'I', 0x00, 0x00, 0x00), /* Ï to I */
    Transliteration::new(0x00D0, b'D', 0x00, 0x00, 0x00), /* Ð to D */
    Transliteration::new(0x00D1, b'N', 0x00, 0x00, 0x00), /* Ñ to N */
    Transliteration::new(0x00D2, b'O', 0x00, 0x00, 0x00), /* Ò to O */
    Transliteration::new(0x00D3, b'O', 0x00, 0x00, 0x00), /* Ó to O */
    Transliteration::new(0x00D4, b'O', 0x00, 0x00, 0x00), /* Ô to O */
    Transliteration::new(0x00D5, b'O', 0x00, 0x00, 0x00), /* Õ to O */
    Transliteration::new(0x00D6, b'O', 0x00, 0x00, 0x00), /* Ö to O */
    Transliteration::new(0x00D7, b'x', 0x00, 0x00, 0x00), /* × to x */
    Transliteration::new(0x00D8, b'O', 0x00, 0x00, 0x00), /* Ø to O */
    Transliteration::new(0x00D9, b'U', 0x00, 0x00, 0x00), /* Ù to U */
    Transliteration::new(0x00DA, b'U', 0x00, 0x00, 0x00), /* Ú to U */
    Transliteration::new(0x00DB, b'U', 0x00, 0x00, 0x00), /* Û to U */
    Transliteration::new(0x00DC, b'U', 0x00, 0x00, 0x00), /* Ü to U */
    Transliteration::new(0x00DD, b'Y', 0x00, 0x00, 0x00), /* Ý to Y */
    Transliteration::new(0x00DE, b'T', b'H', 0x00, 0x00), /* Þ to TH */
    Transliteration::new(0x00DF, b's', b's', 0x00, 0x00), /* ß to ss */
    Transliteration::new(0x00E0, b'a', 0x00, 0x00, 0x00), /* à to a */
    Transliteration::new(0x00E1, b'a', 0x00, 0x00, 0x00), /* á to a */
    Transliteration::new(0x00E2, b'a', 0x00, 0x00, 0x00), /* â to a */
    Transliteration::new(0x00E3, b'a', 0x00, 0x00, 0x00), /* ã to a */
    Transliteration::new(0x00E4, b'a', 0x00, 0x00, 0x00), /* ä to a */
    Transliteration::new(0x00E5, b'a', 0x00, 0x00, 0x00), /* å to a */
    Transliteration::new(0x00E6, b'a', b'e', 0x00, 0x00), /* æ to ae */
    Transliteration::new(0x00E7, b'c', 0x00, 0x00, 0x00), /* ç to c */
    Transliteration::new(0x00E8, b'e', 0x00, 0x00, 0x00), /* è to e */
    Transliteration::new(0x00E9, b'e', 0x00, 0x00, 0x00), /* é to e */
    Transliteration::new(0x00EA, b'e', 0x00, 0x00, 0x00), /* ê to e */
    Transliteration::new(0x00EB, b'e', 0x00, 0x00, 0x00), /* ë to e */
    Transliteration::new(0x00EC, b'i', 0x00, 0x00, 0x00), /* ì to i */
    Transliteration::new(0x00ED, b'i', 0x00, 0x00, 0x00), /* í to i */
    Transliteration::new(0x00EE, b'i', 0x00, 0x00, 0x00), /* î to i */
    Transliteration::new(0x00EF, b'i', 0x00, 0x00, 0x00), /* ï to i */
    Transliteration::new(0x00F0, b'd', 0x00, 0x00, 0x00), /* ð to d */
    Transliteration::new(0x00F1, b'n', 0x00, 0x00, 0x00), /* ñ to n */
    Transliteration::new(0x00F2, b'o', 0x00, 0x00, 0x00), /* ò to o */
    Transliteration::new(0x00F3, b'o', 0x00, 0x00, 0x00), /* ó to o */
    Transliteration::new(0x00F4, b'o', 0x00, 0x00, 0x00), /* ô to o */
    Transliteration::new(0x00F5, b'o', 0x00, 0x00, 0x00), /* õ to o */
    Transliteration::new(0x00F6, b'o', 0x00, 0x00, 0x00), /* ö to o */
    Transliteration::new(0x00F7, b'/', 0x00, 0x00, 0x00), /* ÷ to / */
    Transliteration::new(0x00F8, b'o', 0x00, 0x00, 0x00), /* ø to o */
    Transliteration::new(0x00F9, b'u', 0x00, 0x00, 0x00), /* ù to u */
    Transliteration::new(0x00FA, b'u', 0x00, 0x00, 0x00), /* ú to u */
    Transliteration::new(0x00FB, b'u', 0x00, 0x00, 0x00), /* û to u */
    Transliteration::new(0x00FC, b'u', 0x00, 0x00, 0x00), /* ü to u */
    Transliteration::new(0x00FD, b'y', 0x00, 0x00, 0x00), /* ý to y */
    Transliteration::new(0x00FE, b't', b'h', 0x00, 0x00), /* þ to th */
    Transliteration::new(0x00FF, b'y', 0x00, 0x00, 0x00), /* ÿ to y */
    Transliteration::new(0x0100, b'A', 0x00, 0x00, 0x00), /* Ā to A */
    Transliteration::new(0x0101, b'a', 0x00, 0x00, 0x00), /* ā to a */
    Transliteration::new(0x0102, b'A', 0x00, 0x00, 0x00), /* Ă to A */
    Transliteration::new(0x0103, b'a', 0x00, 0x00, 0x00), /* ă to a */
    Transliteration::new(0x0104, b'A', 0x00, 0x00, 0x00), /* Ą to A */
    Transliteration::new(0x0105, b'a', 0x00, 0x00, 0x00), /* ą to a */
    Transliteration::new(0x0106, b'C', 0x00, 0x00, 0x00), /* Ć to C */
    Transliteration::new(0x0107, b'c', 0x00, 0x00, 0x00), /* ć to c */
    Transliteration::new(0x0108, b'C', 0x00, 0x00, 0x00), /* Ĉ to C */
    Transliteration::new(0x0109, b'c', 0x00, 0x00, 0x00), /* ĉ to c */
    Transliteration::new(0x010A, b'C', 0x00, 0x00, 0x00), /* Ċ to C */
    Transliteration::new(0x010B, b'c', 0x00, 0x00, 0x00), /* ċ to c */
    Transliteration::new(0x010C, b'C', 0x00, 0x00, 0x00), /* Č to C */
    Transliteration::new(0x010D, b'c', 0x00, 0x00, 0x00), /* č to c */
    Transliteration::new(0x010E, b'D', 0x00, 0x00, 0x00), /* Ď to D */
    Transliteration::new(0x010F, b'd', 0x00, 0x00, 0x00), /* ď to d */
    Transliteration::new(0x0110, b'D', 0x00, 0x00, 0x00), /* Đ to D */
    Transliteration::new(0x0111, b'd', 0x00, 0x00, 0x00), /* đ to d */
    Transliteration::new(0x0112, b'E', 0x00, 0x00, 0x00), /* Ē to E */
    Transliteration::new(0x0113, b'e', 0x00, 0x00, 0x00), /* ē to e */
    Transliteration::new(0x0114, b'E', 0x00, 0x00, 0x00), /* Ĕ to E */
    Transliteration::new(0x0115, b'e', 0x00, 0x00, 0x00), /* ĕ to e */
    Transliteration::new(0x0116, b'E', 0x00, 0x00, 0x00), /* Ė to E */
    Transliteration::new(0x0117, b'e', 0x00, 0x00, 0x00), /* ė to e */
    Transliteration::new(0x0118, b'E', 0x00, 0x00, 0x00), /* Ę to E */
    Transliteration::new(0x0119, b'e', 0x00, 0x00, 0x00), /* ę to e */
    Transliteration::new(0x011A, b'E', 0x00, 0x00, 0x00), /* Ě to E */
    Transliteration::new(0x011B, b'e', 0x00, 0x00, 0x00), /* ě to e */
    Transliteration::new(0x011C, b'G', 0x00, 0x00, 0x00), /* Ĝ to G */
    Transliteration::new(0x011D, b'g', 0x00, 0x00, 0x00), /* ĝ to g */
    Transliteration::new(0x011E, b'G', 0x00, 0x00, 0x00), /* Ğ to G */
    Transliteration::new(0x011F, b'g', 0x00, 0x00, 0x00), /* ğ to g */
    Transliteration::new(0x0120, b'G', 0x00, 0x00, 0x00), /* Ġ to G */
    Transliteration::new(0x0121, b'g', 0x00, 0x00, 0x00), /* ġ to g */
    Transliteration::new(0x0122, b'G', 0x00, 0x00, 0x00), /* Ģ to G */
    Transliteration::new(0x0123, b'g', 0x00, 0x00, 0x00), /* ģ to g */
    Transliteration::new(0x0124, b'H', 0x00, 0x00, 0x00), /* Ĥ to H */
    Transliteration::new(0x0125, b'h', 0x00, 0x00, 0x00), /* ĥ to h */
    Transliteration::new(0x0126, b'H', 0x00, 0x00, 0x00), /* Ħ to H */
    Transliteration::new(0x0127, b'h', 0x00, 0x00, 0x00), /* ħ to h */
    Transliteration::new(0x0128, b'I', 0x00, 0x00, 0x00), /* Ĩ to I */
    Transliteration::new(0x0129, b'i', 0x00, 0x00, 0x00), /* ĩ to i */
    Transliteration::new(0x012A, b'I', 0x00, 0x00, 0x00), /* Ī to I */
    Transliteration::new(0x012B, b'i', 0x00, 0x00, 0x00), /* ī to i */
    Transliteration::new(0x012C, b'I', 0x00, 0x00, 0x00), /* Ĭ to I */
    Transliteration::new(0x012D, b'i', 0x00, 0x00, 0x00), /* ĭ to i */
    Transliteration::new(0x012E, b'I', 0x00, 0x00, 0x00), /* Į to I */
    Transliteration::new(0x012F, b'i', 0x00, 0x00, 0x00), /* į to i */
    Transliteration::new(0x0130, b'I', 0x00, 0x00, 0x00), /* İ to I */
    Transliteration::new(0x0131, b'i', 0x00, 0x00, 0x00), /* ı to i */
    Transliteration::new(0x0132, b'I', b'J', 0x00, 0x00), /* Ĳ to IJ */
    Transliteration::new(0x0133, b'i', b'j', 0x00, 0x00), /* ĳ to ij */
    Transliteration::new(0x0134, b'J', 0x00, 0x00, 0x00), /* Ĵ to J */
    Transliteration::new(0x0135, b'j', 0x00, 0x00, 0x00), /* ĵ to j */
    Transliteration::new(0x0136, b'K', 0x00, 0x00, 0x00), /* Ķ to K */
    Transliteration::new(0x0137, b'k', 0x00, 0x00, 0x00), /* ķ to k */
    Transliteration::new(0x0138, b'q', 0x00, 0x00, 0x00), /* ĸ to q */
    Transliteration::new(0x0139, b'L', 0x00, 0x00, 0x00), /* Ĺ to L */
    Transliteration::new(0x013A, b'l', 0x00, 0x00, 0x00), /* ĺ to l */
    Transliteration::new(0x013B, b'L', 0x00, 0x00, 0x00), /* Ļ to L */
    Transliteration::new(0x013C, b'l', 0x00, 0x00, 0x00), /* ļ to l */
    Transliteration::new(0x013D, b'L', 0x00, 0x00, 0x00), /* Ľ to L */
    Transliteration::new(0x013E, b'l', 0x00, 0x00, 0x00), /* ľ to l */
    Transliteration::new(0x013F, b'L', 0x00, 0x00, 0x00), /* Ŀ to L */
    Transliteration::new(0x0140, b'l', 0x00, 0x00, 0x00), /* ŀ to l */
    Transliteration::new(0x0141, b'L', 0x00, 0x00, 0x00), /* Ł to L */
    Transliteration::new(0x0142, b'l', 0x00, 0x00, 0x00), /* ł to l */
    Transliteration::new(0x0143, b'N', 0x00, 0x00, 0x00), /* Ń to N */
    Transliteration::new(0x0144, b'n', 0x00, 0x00, 0x00), /* ń to n */
    Transliteration::new(0x0145, b'N', 0x00, 0x00, 0x00), /* Ņ to N */
    Transliteration::new(0x0146, b'n', 0x00, 0x00, 0x00), /* ņ to n */
    Transliteration::new(0x0147, b'N', 0x00, 0x00, 0x00), /* Ň to N */
    Transliteration::new(0x0148, b'n', 0x00, 0x00, 0x00), /* ň to n */
    Transliteration::new(0x0149, b'\'', b'n', 0x00, 0x00), /* ŉ to 'n */
    Transliteration::new(0x014A, b'N', 0x00, 0x00, 0x00), /* Ŋ to N */
    Transliteration::new(0x014B, b'n', 0x00, 0x00, 0x00), /* ŋ to n */
    Transliteration::new(0x014C, b'O', 0x00, 0x00, 0x00), /* Ō to O */
    Transliteration::new(0x014D, b'o', 0x00, 0x00, 0x00), /* ō to o */
    Transliteration::new(0x014E, b'O', 0x00, 0x00, 0x00), /* Ŏ to O */
    Transliteration::new(0x014F, b'o', 0x00, 0x00, 0x00), /* ŏ to o */
    Transliteration::new(0x0150, b'O', 0x00, 0x00, 0x00), /* Ő to O */
    Transliteration::new(0x0151, b'o', 0x00, 0x00, 0x00), /* ő to o */
    Transliteration::new(0x0152, b'O', b'E', 0x00, 0x00), /* Œ to OE */
    Transliteration::new(0x0153, b'o', b'e', 0x00, 0x00), /* œ to oe */
    Transliteration::new(0x0154, b'R', 0x00, 0x00, 0x00), /* Ŕ to R */
    Transliteration::new(0x0155, b'r', 0x00, 0x00, 0x00), /* ŕ to r */
    Transliteration::new(0x0156, b'R', 0x00, 0x00, 0x00), /* Ŗ to R */
    Transliteration::new(0x0157, b'r', 0x00, 0x00, 0x00), /* ŗ to r */
    Transliteration::new(0x0158, b'R', 0x00, 0x00, 0x00), /* Ř to R */
    Transliteration::new(0x0159, b'r', 0x00, 0x00, 0x00), /* ř to r */
    Transliteration::new(0x015A, b'S', 0x00, 0x00, 0x00), /* Ś to S */
    Transliteration::new(0x015B, b's', 0x00, 0x00, 0x00), /* ś to s */
    Transliteration::new(0x015C, b'S', 0x00, 0x00, 0x00), /* Ŝ to S */
    Transliteration::new(0x015D, b's', 0x00, 0x00, 0x00), /* ŝ to s */
    Transliteration::new(0x015E, b'S', 0x00, 0x00, 0x00), /* Ş to S */
    Transliteration::new(0x015F, b's', 0x00, 0x00, 0x00), /* ş to s */
    Transliteration::new(0x0160, b'S', 0x00, 0x00, 0x00), /* Š to S */
    Transliteration::new(0x0161, b's', 0x00, 0x00, 0x00), /* š to s */
    Transliteration::new(0x0162, b'T', 0x00, 0x00, 0x00), /* Ţ to T */
    Transliteration::new(0x0163, b't', 0x00, 0x00, 0x00), /* ţ to t */
    Transliteration::new(0x0164, b'T', 0x00, 0x00, 0x00), /* Ť to T */
    Transliteration::new(0x0165, b't', 0x00, 0x00, 0x00), /* ť to t */
    Transliteration::new(0x0166, b'T', 0x00, 0x00, 0x00), /* Ŧ to T */
    Transliteration::new(0x0167, b't', 0x00, 0x00, 0x00), /* ŧ to t */
    Transliteration::new(0x0168, b'U', 0x00, 0x00, 0x00), /* Ũ to U */
    Transliteration::new(0x0169, b'u', 0x00, 0x00, 0x00), /* ũ to u */
    Transliteration::new(0x016A, b'U', 0x00, 0x00, 0x00), /* Ū to U */
    Transliteration::new(0x016B, b'u', 0x00, 0x00, 0x00), /* ū to u */
    Transliteration::new(0x016C, b'U', 0x00, 0x00, 0x00), /* Ŭ to U */
    Transliteration::new(0x016D, b'u', 0x00, 0x00, 0x00), /* ŭ to u */
    Transliteration::new(0x016E, b'U', 0x00, 0x00, 0x00), /* Ů to U */
    Transliteration::new(0x016F, b'u', 0x00, 0x00, 0x00), /* ů to u */
    Transliteration::new(0x0170, b'U', 0x00, 0x00, 0x00), /* Ű to U */
    Transliteration::new(0x0171, b'u', 0x00, 0x00, 0x00), /* ű to u */
    Transliteration::new(0x0172, b'U', 0x00, 0x00, 0x00), /* Ų to U */
    Transliteration::new(0x0173, b'u', 0x00, 0x00, 0x00), /* ų to u */
    Transliteration::new(0x0174, b'W', 0x00, 0x00, 0x00), /* Ŵ to W */
    Transliteration::new(0x0175, b'w', 0x00, 0x00, 0x00), /* ŵ to w */
    Transliteration::new(0x0176, b'Y', 0x00, 0x00, 0x00), /* Ŷ to Y */
    Transliteration::new(0x0177, b'y', 0x00, 0x00, 0x00), /* ŷ to y */
    Transliteration::new(0x0178, b'Y', 0x00, 0x00, 0x00), /* Ÿ to Y */
    Transliteration::new(0x0179, b'Z', 0x00, 0x00, 0x00), /* Ź to Z */
    Transliteration::new(0x017A, b'z', 0x00, 0x00, 0x00), /* ź to z */
    Transliteration::new(0x017B, b'Z', 0x00, 0x00, 0x00), /* Ż to Z */
    Transliteration::new(0x017C, b'z', 0x00, 0x00, 0x00), /* ż to z */
    Transliteration::new(0x017D, b'Z', 0x00, 0x00, 0x00), /* Ž to Z */
    Transliteration::new(0x017E, b'z', 0x00, 0x00, 0x00), /* ž to z */
    Transliteration::new(0x017F, b's', 0x00, 0x00, 0x00), /* ſ to s */
    Transliteration::new(0x0180, b'b', 0x00, 0x00, 0x00), /* ƀ to b */
    Transliteration::new(0x0181, b'B', 0x00, 0x00, 0x00), /* Ɓ to B */
    Transliteration::new(0x0182, b'B', 0x00, 0x00, 0x00), /* Ƃ to B */
    Transliteration::new(0x0183, b'b', 0x00, 0x00, 0x00), /* ƃ to b */
    Transliteration::new(0x0187, b'C', 0x00, 0x00, 0x00), /* Ƈ to C */
    Transliteration::new(0x0188, b'c', 0x00, 0x00, 0x00), /* ƈ to c */
    Transliteration::new(0x0189, b'D', 0x00, 0x00, 0x00), /* Ɖ to D */
    Transliteration::new(0x018A, b'D', 0x00, 0x00, 0x00), /* Ɗ to D */
    Transliteration::new(0x018B, b'D', 0x00, 0x00, 0x00), /* Ƌ to D */
    Transliteration::new(0x018C, b'd', 0x00, 0x00, 0x00), /* ƌ to d */
    Transliteration::new(0x0190, b'E', 0x00, 0x00, 0x00), /* Ɛ to E */
    Transliteration::new(0x0191, b'F', 0x00, 0x00, 0x00), /* Ƒ to F */
    Transliteration::new(0x0192, b'f', 0x00, 0x00, 0x00), /* ƒ to f */
    Transliteration::new(0x0193, b'G', 0x00, 0x00, 0x00), /* Ɠ to G */
    Transliteration::new(0x0195, b'h', b'v', 0x00, 0x00), /* ƕ to hv */
    Transliteration::new(0x0196, b'I', 0x00, 0x00, 0x00), /* Ɩ to I */
    Transliteration::new(0x0197, b'I', 0x00, 0x00, 0x00), /* Ɨ to I */
    Transliteration::new(0x0198, b'K', 0x00, 0x00, 0x00), /* Ƙ to K */
    Transliteration::new(0x0199, b'k', 0x00, 0x00, 0x00), /* ƙ to k */
    Transliteration::new(0x019A, b'l', 0x00, 0x00, 0x00), /* ƚ to l */
    Transliteration::new(0x019D, b'N', 0x00, 0x00, 0x00), /* Ɲ to N */
    Transliteration::new(0x019E, b'n', 0x00, 0x00, 0x00), /* ƞ to n */
    Transliteration::new(0x01A0, b'O', 0x00, 0x00, 0x00), /* Ơ to O */
    Transliteration::new(0x01A1, b'o', 0x00, 0x00, 0x00), /* ơ to o */
    Transliteration::new(0x01A2, b'O', b'I', 0x00, 0x00), /* Ƣ to OI */
    Transliteration::new(0x01A3, b'o', b'i', 0x00, 0x00), /* ƣ to oi */
    Transliteration::new(0x01A4, b'P', 0x00, 0x00, 0x00), /* Ƥ to P */
    Transliteration::new(0x01A5, b'p', 0x00, 0x00, 0x00), /* ƥ to p */
    Transliteration::new(0x01AB, b't', 0x00, 0x00, 0x00), /* ƫ to t */
    Transliteration::new(0x01AC, b'T', 0x00, 0x00, 0x00), /* Ƭ to T */
    Transliteration::new(0x01AD, b't', 0x00, 0x00, 0x00), /* ƭ to t */
    Transliteration::new(0x01AE, b'T', 0x00, 0x00, 0x00), /* Ʈ to T */
    Transliteration::new(0x01AF, b'U', 0x00, 0x00, 0x00), /* Ư to U */
    Transliteration::new(0x01B0, b'u', 0x00, 0x00, 0x00), /* ư to u */
    Transliteration::new(0x01B2, b'V', 0x00, 0x00, 0x00), /* Ʋ to V */
    Transliteration::new(0x01B3, b'Y', 0x00, 0x00, 0x00), /* Ƴ to Y */
    Transliteration::new(0x01B4, b'y', 0x00, 0x00, 0x00), /* ƴ to y */
    Transliteration::new(0x01B5, b'Z', 0x00, 0x00, 0x00), /* Ƶ to Z */
    Transliteration::new(0x01B6, b'z', 0x00, 0x00, 0x00), /* ƶ to z */
    Transliteration::new(0x01C4, b'D', b'Z', 0x00, 0x00), /* Ǆ to DZ */
    Transliteration::new(0x01C5, b'D', b'z', 0x00, 0x00), /* ǅ to Dz */
    Transliteration::new(0x01C6, b'd', b'z', 0x00, 0x00), /* ǆ to dz */
    Transliteration::new(0x01C7, b'L', b'J', 0x00, 0x00), /* Ǉ to LJ */
    Transliteration::new(0x01C8, b'L', b'j', 0x00, 0x00), /* ǈ to Lj */
    Transliteration::new(0x01C9, b'l', b'j', 0x00, 0x00), /* ǉ to lj */
    Transliteration::new(0x01CA, b'N', b'J', 0x00, 0x00), /* Ǌ to NJ */
    Transliteration::new(0x01CB, b'N', b'j', 0x00, 0x00), /* ǋ to Nj */
    Transliteration::new(0x01CC, b'n', b'j', 0x00, 0x00), /* ǌ to nj */
    Transliteration::new(0x01CD, b'A', 0x00, 0x00, 0x00), /* Ǎ to A */
    Transliteration::new(0x01CE, b'a', 0x00, 0x00, 0x00), /* ǎ to a */
    Transliteration::new(0x01CF, b'I', 0x00, 0x00, 0x00), /* Ǐ to I */
    Transliteration::new(0x01D0, b'i', 0x00, 0x00, 0x00), /* ǐ to i */
    Transliteration::new(0x01D1, b'O', 0x00, 0x00, 0x00), /* Ǒ to O */
    Transliteration::new(0x01D2, b'o', 0x00, 0x00, 0x00), /* ǒ to o */
    Transliteration::new(0x01D3, b'U', 0x00, 0x00, 0x00), /* Ǔ to U */
    Transliteration::new(0x01D4, b'u', 0x00, 0x00, 0x00), /* ǔ to u */
    Transliteration::new(0x01D5, b'U', 0x00, 0x00, 0x00), /* Ǖ to U */
    Transliteration::new(0x01D6, b'u', 0x00, 0x00, 0x00), /* ǖ to u */
    Transliteration::new(0x01D7, b'U', 0x00, 0x00, 0x00), /* Ǘ to U */
    Transliteration::new(0x01D8, b'u', 0x00, 0x00, 0x00), /* ǘ to u */
    Transliteration::new(0x01D9, b'U', 0x00, 0x00, 0x00), /* Ǚ to U */
    Transliteration::new(0x01DA, b'u', 0x00, 0x00, 0x00), /* ǚ to u */
    Transliteration::new(0x01DB, b'U', 0x00, 0x00, 0x00), /* Ǜ to U */
    Transliteration::new(0x01DC, b'u', 0x00, 0x00, 0x00), /* ǜ to u */
    Transliteration::new(0x01DE, b'A', 0x00, 0x00, 0x00), /* Ǟ to A */
    Transliteration::new(0x01DF, b'a', 0x00, 0x00, 0x00), /* ǟ to a */
    Transliteration::new(0x01E0, b'A', 0x00, 0x00, 0x00), /* Ǡ to A */
    Transliteration::new(0x01E1, b'a', 0x00, 0x00, 0x00), /* ǡ to a */
    Transliteration::new(0x01E4, b'G', 0x00, 0x00, 0x00), /* Ǥ to G */
    Transliteration::new(0x01E5, b'g', 0x00, 0x00, 0x00), /* ǥ to g */
    Transliteration::new(0x01E6, b'G', 0x00, 0x00, 0x00), /* Ǧ to G */
    Transliteration::new(0x01E7, b'g', 0x00, 0x00, 0x00), /* ǧ to g */
    Transliteration::new(0x01E8, b'K', 0x00, 0x00, 0x00), /* Ǩ to K */
    Transliteration::new(0x01E9, b'k', 0x00, 0x00, 0x00), /* ǩ to k */
    Transliteration::new(0x01EA, b'O', 0x00, 0x00, 0x00), /* Ǫ to O */
    Transliteration::new(0x01EB, b'o', 0x00, 0x00, 0x00), /* ǫ to o */
    Transliteration::new(0x01EC, b'O', 0x00, 0x00, 0x00), /* Ǭ to O */
    Transliteration::new(0x01ED, b'o', 0x00, 0x00, 0x00), /* ǭ to o */
    Transliteration::new(0x01F0, b'j', 0x00, 0x00, 0x00), /* ǰ to j */
    Transliteration::new(0x01F1, b'D', b'Z', 0x00, 0x00), /* Ǳ to DZ */
    Transliteration::new(0x01F2, b'D', b'z', 0x00, 0x00), /* ǲ to Dz */
    Transliteration::new(0x01F3, b'd', b'z', 0x00, 0x00), /* ǳ to dz */
    Transliteration::new(0x01F4, b'G', 0x00, 0x00, 0x00), /* Ǵ to G */
    Transliteration::new(0x01F5, b'g', 0x00, 0x00, 0x00), /* ǵ to g */
    Transliteration::new(0x01F8, b'N', 0x00, 0x00, 0x00), /* Ǹ to N */
    Transliteration::new(0x01F9, b'n', 0x00, 0x00, 0x00), /* ǹ to n */
    Transliteration::new(0x01FA, b'A', 0x00, 0x00, 0x00), /* Ǻ to A */
    Transliteration::new(0x01FB, b'a', 0x00, 0x00, 0x00), /* ǻ to a */
    Transliteration::new(0x0200, b'A', 0x00, 0x00, 0x00), /* Ȁ to A */
    Transliteration::new(0x0201, b'a', 0x00, 0x00, 0x00), /* ȁ to a */
    Transliteration::new(0x0202, b'A', 0x00, 0x00, 0x00), /* Ȃ to A */
    Transliteration::new(0x0203, b'a', 0x00, 0x00, 0x00), /* ȃ to a */
    Transliteration::new(0x0204, b'E', 0x00, 0x00, 0x00), /* Ȅ to E */
    Transliteration::new(0x0205, b'e', 0x00, 0x00, 0x00), /* ȅ to e */
    Transliteration::new(0x0206, b'E', 0x00, 0x00, 0x00), /* Ȇ to E */
    Transliteration::new(0x0207, b'e', 0x00, 0x00, 0x00), /* ȇ to e */
    Transliteration::new(0x0208, b'I', 0x00, 0x00, 0x00), /* Ȉ to I */
    Transliteration::new(0x0209, b'i', 0x00, 0x00, 0x00), /* ȉ to i */
    Transliteration::new(0x020A, b'I', 0x00, 0x00, 0x00), /* Ȋ to I */
    Transliteration::new(0x020B, b'i', 0x00, 0x00, 0x00), /* ȋ to i */
    Transliteration::new(0x020C, b'O', 0x00, 0x00, 0x00), /* Ȍ to O */
    Transliteration::new(0x020D, b'o', 0x00, 0x00, 0x00), /* ȍ to o */
    Transliteration::new(0x020E, b'O', 0x00, 0x00, 0x00), /* Ȏ to O */
    Transliteration::new(0x020F, b'o', 0x00, 0x00, 0x00), /* ȏ to o */
    Transliteration::new(0x0210, b'R', 0x00, 0x00, 0x00), /* Ȑ to R */
    Transliteration::new(0x0211, b'r', 0x00, 0x00, 0x00), /* ȑ to r */
    Transliteration::new(0x0212, b'R', 0x00, 0x00, 0x00), /* Ȓ to R */
    Transliteration::new(0x0213, b'r', 0x00, 0x00, 0x00), /* ȓ to r */
    Transliteration::new(0x0214, b'U', 0x00, 0x00, 0x00), /* Ȕ to U */
    Transliteration::new(0x0215, b'u', 0x00, 0x00, 0x00), /* ȕ to u */
    Transliteration::new(0x0216, b'U', 0x00, 0x00, 0x00), /* Ȗ to U */
    Transliteration::new(0x0217, b'u', 0x00, 0x00, 0x00), /* ȗ to u */
    Transliteration::new(0x0218, b'S', 0x00, 0x00, 0x00), /* Ș to S */
    Transliteration::new(0x0219, b's', 0x00, 0x00, 0x00), /* ș to s */
    Transliteration::new(0x021A, b'T', 0x00, 0x00, 0x00), /* Ț to T */
    Transliteration::new(0x021B, b't', 0x00, 0x00, 0x00), /* ț to t */
    Transliteration::new(0x021E, b'H', 0x00, 0x00, 0x00), /* Ȟ to H */
    Transliteration::new(0x021F, b'h', 0x00, 0x00, 0x00), /* ȟ to h */
    Transliteration::new(0x0221, b'd', 0x00, 0x00, 0x00), /* ȡ to d */
    Transliteration::new(0x0224, b'Z', 0x00, 0x00, 0x00), /* Ȥ to Z */
    Transliteration::new(0x0225, b'z', 0x00, 0x00, 0x00), /* ȥ to z */
    Transliteration::new(0x0226, b'A', 0x00, 0x00, 0x00), /* Ȧ to A */
    Transliteration::new(0x0227, b'a', 0x00, 0x00, 0x00), /* ȧ to a */
    Transliteration::new(0x0228, b'E', 0x00, 0x00, 0x00), /* Ȩ to E */
    Transliteration::new(0x0229, b'e', 0x00, 0x00, 0x00), /* ȩ to e */
    Transliteration::new(0x022A, b'O', 0x00, 0x00, 0x00), /* Ȫ to O */
    Transliteration::new(0x022B, b'o', 0x00, 0x00, 0x00), /* ȫ to o */
    Transliteration::new(0x022C, b'O', 0x00, 0x00, 0x00), /* Ȭ to O */
    Transliteration::new(0x022D, b'o', 0x00, 0x00, 0x00), /* ȭ to o */
    Transliteration::new(0x022E, b'O', 0x00, 0x00, 0x00), /* Ȯ to O */
    Transliteration::new(0x022F, b'o', 0x00, 0x00, 0x00), /* ȯ to o */
    Transliteration::new(0x0230, b'O', 0x00, 0x00, 0x00), /* Ȱ to O */
    Transliteration::new(0x0231, b'o', 0x00, 0x00, 0x00), /* ȱ to o */
    Transliteration::new(0x0232, b'Y', 0x00, 0x00, 0x00), /* Ȳ to Y */
    Transliteration::new(0x0233, b'y', 0x00, 0x00, 0x00), /* ȳ to y */
    Transliteration::new(0x0234, b'l', 0x00, 0x00, 0x00), /* ȴ to l */
    Transliteration::new(0x0235, b'n', 0x00, 0x00, 0x00), /* ȵ to n */
    Transliteration::new(0x0236, b't', 0x00, 0x00, 0x00), /* ȶ to t */
    Transliteration::new(0x0237, b'j', 0x00, 0x00, 0x00), /* ȷ to j */
    Transliteration::new(0x0238, b'd', b'b', 0x00, 0x00), /* ȸ to db */
    Transliteration::new(0x0239, b'q', b'p', 0x00, 0x00), /* ȹ to qp */
    Transliteration::new(0x023A, b'A', 0x00, 0x00, 0x00), /* Ⱥ to A */
    Transliteration::new(0x023B, b'C', 0x00, 0x00, 0x00), /* Ȼ to C */
    Transliteration::new(0x023C, b'c', 0x00, 0x00, 0x00), /* ȼ to c */
    Transliteration::new(0x023D, b'L', 0x00, 0x00, 0x00), /* Ƚ to L */
    Transliteration::new(0x023E, b'T', 0x00, 0x00, 0x00), /* Ⱦ to T */
    Transliteration::new(0x023F, b's', 0x00, 0x00, 0x00), /* ȿ to s */
    Transliteration::new(0x0240, b'z', 0x00, 0x00, 0x00), /* ɀ to z */
    Transliteration::new(0x0243, b'B', 0x00, 0x00, 0x00), /* Ƀ to B */
    Transliteration::new(0x0244, b'U', 0x00, 0x00, 0x00), /* Ʉ to U */
    Transliteration::new(0x0246, b'E', 0x00, 0x00, 0x00), /* Ɇ to E */
    Transliteration::new(0x0247, b'e', 0x00, 0x00, 0x00), /* ɇ to e */
    Transliteration::new(0x0248, b'J', 0x00, 0x00, 0x00), /* Ɉ to J */
    Transliteration::new(0x0249, b'j', 0x00, 0x00, 0x00), /* ɉ to j */
    Transliteration::new(0x024C, b'R', 0x00, 0x00, 0x00), /* Ɍ to R */
    Transliteration::new(0x024D, b'r', 0x00, 0x00, 0x00), /* ɍ to r */
    Transliteration::new(0x024E, b'Y', 0x00, 0x00, 0x00), /* Ɏ to Y */
    Transliteration::new(0x024F, b'y', 0x00, 0x00, 0x00), /* ɏ to y */
    Transliteration::new(0x02B9, b'\'', 0x00, 0x00, 0x00), /* ʹ to ' */
    Transliteration::new(0x02BA, b'"', 0x00, 0x00, 0x00), /* ʺ to " */
    Transliteration::new(0x02BB, b'\'', 0x00, 0x00, 0x00), /* ʻ to ' */
    Transliteration::new(0x02BC, b'\'', 0x00, 0x00, 0x00), /* ʼ to ' */
    Transliteration::new(0x02C6, b'^', 0x00, 0x00, 0x00), /* ˆ to ^ */
    Transliteration::new(0x02C8, b'\'', 0x00, 0x00, 0x00), /* ˈ to ' */
    Transliteration::new(0x02CB, b'`', 0x00, 0x00, 0x00), /* ˋ to ` */
    Transliteration::new(0x02CC, b',', 0x00, 0x00, 0x00), /* ˌ to , */
    Transliteration::new(0x02D0, b':', 0x00, 0x00, 0x00), /* ː to : */
    Transliteration::new(0x02DC, b'~', 0x00, 0x00, 0x00), /* ˜ to ~ */
    Transliteration::new(0x1E00, b'A', 0x00, 0x00, 0x00), /* Ḁ to A */
    Transliteration::new(0x1E01, b'a', 0x00, 0x00, 0x00), /* ḁ to a */
    Transliteration::new(0x1E02, b'B', 0x00, 0x00, 0x00), /* Ḃ to B */
    Transliteration::new(0x1E03, b'b', 0x00, 0x00, 0x00), /* ḃ to b */
    Transliteration::new(0x1E04, b'B', 0x00, 0x00, 0x00), /* Ḅ to B */
    Transliteration::new(0x1E05, b'b', 0x00, 0x00, 0x00), /* ḅ to b */
    Transliteration::new(0x1E06, b'B', 0x00, 0x00, 0x00), /* Ḇ to B */
    Transliteration::new(0x1E07, b'b', 0x00, 0x00, 0x00), /* ḇ to b */
    Transliteration::new(0x1E08, b'C', 0x00, 0x00, 0x00), /* Ḉ to C */
    Transliteration::new(0x1E09, b'c', 0x00, 0x00, 0x00), /* ḉ to c */
    Transliteration::new(0x1E0A, b'D', 0x00, 0x00, 0x00), /* Ḋ to D */
    Transliteration::new(0x1E0B, b'd', 0x00, 0x00, 0x00), /* ḋ to d */
    Transliteration::new(0x1E0C, b'D', 0x00, 0x00, 0x00), /* Ḍ to D */
    Transliteration::new(0x1E0D, b'd', 0x00, 0x00, 0x00), /* ḍ to d */
    Transliteration::new(0x1E0E, b'D', 0x00, 0x00, 0x00), /* Ḏ to D */
    Transliteration::new(0x1E0F, b'd', 0x00, 0x00, 0x00), /* ḏ to d */
    Transliteration::new(0x1E10, b'D', 0x00, 0x00, 0x00), /* Ḑ to D */
    Transliteration::new(0x1E11, b'd', 0x00, 0x00, 0x00), /* ḑ to d */
    Transliteration::new(0x1E12, b'D', 0x00, 0x00, 0x00), /* Ḓ to D */
    Transliteration::new(0x1E13, b'd', 0x00, 0x00, 0x00), /* ḓ to d */
    Transliteration::new(0x1E14, b'E', 0x00, 0x00, 0x00), /* Ḕ to E */
    Transliteration::new(0x1E15, b'e', 0x00, 0x00, 0x00), /* ḕ to e */
    Transliteration::new(0x1E16, b'E', 0x00, 0x00, 0x00), /* Ḗ to E */
    Transliteration::new(0x1E17, b'e', 0x00, 0x00, 0x00), /* ḗ to e */
    Transliteration::new(0x1E18, b'E', 0x00, 0x00, 0x00), /* Ḙ to E */
    Transliteration::new(0x1E19, b'e', 0x00, 0x00, 0x00), /* ḙ to e */
    Transliteration::new(0x1E1A, b'E', 0x00, 0x00, 0x00), /* Ḛ to E */
    Transliteration::new(0x1E1B, b'e', 0x00, 0x00, 0x00), /* ḛ to e */
    Transliteration::new(0x1E1C, b'E', 0x00, 0x00, 0x00), /* Ḝ to E */
    Transliteration::new(0x1E1D, b'e', 0x00, 0x00, 0x00), /* ḝ to e */
    Transliteration::new(0x1E1E, b'F', 0x00, 0x00, 0x00), /* Ḟ to F */
    Transliteration::new(0x1E1F, b'f', 0x00, 0x00, 0x00), /* ḟ to f */
    Transliteration::new(0x1E20, b'G', 0x00, 0x00, 0x00), /* Ḡ to G */
    Transliteration::new(0x1E21, b'g', 0x00, 0x00, 0x00), /* ḡ to g */
    Transliteration::new(0x1E22, b'H', 0x00, 0x00, 0x00), /* Ḣ to H */
    Transliteration::new(0x1E23, b'h', 0x00, 0x00, 0x00), /* ḣ to h */
    Transliteration::new(0x1E24, b'H', 0x00, 0x00, 0x00), /* Ḥ to H */
    Transliteration::new(0x1E25, b'h', 0x00, 0x00, 0x00), /* ḥ to h */
    Transliteration::new(0x1E26, b'H', 0x00, 0x00, 0x00), /* Ḧ to H */
    Transliteration::new(0x1E27, b'h', 0x00, 0x00, 0x00), /* ḧ to h */
    Transliteration::new(0x1E28, b'H', 0x00, 0x00, 0x00), /* Ḩ to H */
    Transliteration::new(0x1E29, b'h', 0x00, 0x00, 0x00), /* ḩ to h */
    Transliteration::new(0x1E2A, b'H', 0x00, 0x00, 0x00), /* Ḫ to H */
    Transliteration::new(0x1E2B, b'h', 0x00, 0x00, 0x00), /* ḫ to h */
    Transliteration::new(0x1E2C, b'I', 0x00, 0x00, 0x00), /* Ḭ to I */
    Transliteration::new(0x1E2D, b'i', 0x00, 0x00, 0x00), /* ḭ to i */
    Transliteration::new(0x1E2E, b'I', 0x00, 0x00, 0x00), /* Ḯ to I */
    Transliteration::new(0x1E2F, b'i', 0x00, 0x00, 0x00), /* ḯ to i */
    Transliteration::new(0x1E30, b'K', 0x00, 0x00, 0x00), /* Ḱ to K */
    Transliteration::new(0x1E31, b'k', 0x00, 0x00, 0x00), /* ḱ to k */
    Transliteration::new(0x1E32, b'K', 0x00, 0x00, 0x00), /* Ḳ to K */
    Transliteration::new(0x1E33, b'k', 0x00, 0x00, 0x00), /* ḳ to k */
    Transliteration::new(0x1E34, b'K', 0x00, 0x00, 0x00), /* Ḵ to K */
    Transliteration::new(0x1E35, b'k', 0x00, 0x00, 0x00), /* ḵ to k */
    Transliteration::new(0x1E36, b'L', 0x00, 0x00, 0x00), /* Ḷ to L */
    Transliteration::new(0x1E37, b'l', 0x00, 0x00, 0x00), /* ḷ to l */
    Transliteration::new(0x1E38, b'L', 0x00, 0x00, 0x00), /* Ḹ to L */
    Transliteration::new(0x1E39, b'l', 0x00, 0x00, 0x00), /* ḹ to l */
    Transliteration::new(0x1E3A, b'L', 0x00, 0x00, 0x00), /* Ḻ to L */
    Transliteration::new(0x1E3B, b'l', 0x00, 0x00, 0x00), /* ḻ to l */
    Transliteration::new(0x1E3C, b'L', 0x00, 0x00, 0x00), /* Ḽ to L */
    Transliteration::new(0x1E3D, b'l', 0x00, 0x00, 0x00), /* ḽ to l */
    Transliteration::new(0x1E3E, b'M', 0x00, 0x00, 0x00), /* Ḿ to M */
    Transliteration::new(0x1E3F, b'm', 0x00, 0x00, 0x00), /* ḿ to m */
    Transliteration::new(0x1E40, b'M', 0x00, 0x00, 0x00), /* Ṁ to M */
    Transliteration::new(0x1E41, b'm', 0x00, 0x00, 0x00), /* ṁ to m */
    Transliteration::new(0x1E42, b'M', 0x00, 0x00, 0x00), /* Ṃ to M */
    Transliteration::new(0x1E43, b'm', 0x00, 0x00, 0x00), /* ṃ to m */
    Transliteration::new(0x1E44, b'N', 0x00, 0x00, 0x00), /* Ṅ to N */
    Transliteration::new(0x1E45, b'n', 0x00, 0x00, 0x00), /* ṅ to n */
    Transliteration::new(0x1E46, b'N', 0x00, 0x00, 0x00), /* Ṇ to N */
    Transliteration::new(0x1E47, b'n', 0x00, 0x00, 0x00), /* ṇ to n */
    Transliteration::new(0x1E48, b'N', 0x00, 0x00, 0x00), /* Ṉ to N */
    Transliteration::new(0x1E49, b'n', 0x00, 0x00, 0x00), /* ṉ to n */
    Transliteration::new(0x1E4A, b'N', 0x00, 0x00, 0x00), /* Ṋ to N */
    Transliteration::new(0x1E4B, b'n', 0x00, 0x00, 0x00), /* ṋ to n */
    Transliteration::new(0x1E4C, b'O', 0x00, 0x00, 0x00), /* Ṍ to O */
    Transliteration::new(0x1E4D, b'o', 0x00, 0x00, 0x00), /* ṍ to o */
    Transliteration::new(0x1E4E, b'O', 0x00, 0x00, 0x00), /* Ṏ to O */
    Transliteration::new(0x1E4F, b'o', 0x00, 0x00, 0x00), /* ṏ to o */
    Transliteration::new(0x1E50, b'O', 0x00, 0x00, 0x00), /* Ṑ to O */
    Transliteration::new(0x1E51, b'o', 0x00, 0x00, 0x00), /* ṑ to o */
    Transliteration::new(0x1E52, b'O', 0x00, 0x00, 0x00), /* Ṓ to O */
    Transliteration::new(0x1E53, b'o', 0x00, 0x00, 0x00), /* ṓ to o */
    Transliteration::new(0x1E54, b'P', 0x00, 0x00, 0x00), /* Ṕ to P */
    Transliteration::new(0x1E55, b'p', 0x00, 0x00, 0x00), /* ṕ to p */
    Transliteration::new(0x1E56, b'P', 0x00, 0x00, 0x00), /* Ṗ to P */
    Transliteration::new(0x1E57, b'p', 0x00, 0x00, 0x00), /* ṗ to p */
    Transliteration::new(0x1E58, b'R', 0x00, 0x00, 0x00), /* Ṙ to R */
    Transliteration::new(0x1E59, b'r', 0x00, 0x00, 0x00), /* ṙ to r */
    Transliteration::new(0x1E5A, b'R', 0x00, 0x00, 0x00), /* Ṛ to R */
    Transliteration::new(0x1E5B, b'r', 0x00, 0x00, 0x00), /* ṛ to r */
    Transliteration::new(0x1E5C, b'R', 0x00, 0x00, 0x00), /* Ṝ to R */
    Transliteration::new(0x1E5D, b'r', 0x00, 0x00, 0x00), /* ṝ to r */
    Transliteration::new(0x1E5E, b'R', 0x00, 0x00, 0x00), /* Ṟ to R */
    Transliteration::new(0x1E5F, b'r', 0x00, 0x00, 0x00), /* ṟ to r */
    Transliteration::new(0x1E60, b'S', 0x00, 0x00, 0x00), /* Ṡ to S */
    Transliteration::new(0x1E61, b's', 0x00, 0x00, 0x00), /* ṡ to s */
    Transliteration::new(0x1E62, b'S', 0x00, 0x00, 0x00), /* Ṣ to S */
    Transliteration::new(0x1E63, b's', 0x00, 0x00, 0x00), /* ṣ to s */
    Transliteration::new(0x1E64, b'S', 0x00, 0x00, 0x00), /* Ṥ to S */
    Transliteration::new(0x1E65, b's', 0x00, 0x00, 0x00), /* ṥ to s */
    Transliteration::new(0x1E66, b'S', 0x00, 0x00, 0x00), /* Ṧ to S */
    Transliteration::new(0x1E67, b's', 0x00, 0x00, 0x00), /* ṧ to s */
    Transliteration::new(0x1E68, b'S', 0x00, 0x00, 0x00), /* Ṩ to S */
    Transliteration::new(0x1E69, b's', 0x00, 0x00, 0x00), /* ṩ to s */
    Transliteration::new(0x1E6A, b'T', 0x00, 0x00, 0x00), /* Ṫ to T */
    Transliteration::new(0x1E6B, b't', 0x00, 0x00, 0x00), /* ṫ to t */
    Transliteration::new(0x1E6C, b'T', 0x00, 0x00, 0x00), /* Ṭ to T */
    Transliteration::new(0x1E6D, b't', 0x00, 0x00, 0x00), /* ṭ to t */
    Transliteration::new(0x1E6E, b'T', 0x00, 0x00, 0x00), /* Ṯ to T */
    Transliteration::new(0x1E6F, b't', 0x00, 0x00, 0x00), /* ṯ to t */
    Transliteration::new(0x1E70, b'T', 0x00, 0x00, 0x00), /* Ṱ to T */
    Transliteration::new(0x1E71, b't', 0x00, 0x00, 0x00), /* ṱ to t */
    Transliteration::new(0x1E72, b'U', 0x00, 0x00, 0x00), /* Ṳ to U */
    Transliteration::new(0x1E73, b'u', 0x00, 0x00, 0x00), /* ṳ to u */
    Transliteration::new(0x1E74, b'U', 0x00, 0x00, 0x00), /* Ṵ to U */
    Transliteration::new(0x1E75, b'u', 0x00, 0x00, 0x00), /* ṵ to u */
    Transliteration::new(0x1E76, b'U', 0x00, 0x00, 0x00), /* Ṷ to U */
    Transliteration::new(0x1E77, b'u', 0x00, 0x00, 0x00), /* ṷ to u */
    Transliteration::new(0x1E78, b'U', 0x00, 0x00, 0x00), /* Ṹ to U */
    Transliteration::new(0x1E79, b'u', 0x00, 0x00, 0x00), /* ṹ to u */
    Transliteration::new(0x1E7A, b'U', 0x00, 0x00, 0x00), /* Ṻ to U */
    Transliteration::new(0x1E7B, b'u', 0x00, 0x00, 0x00), /* ṻ to u */
    Transliteration::new(0x1E7C, b'V', 0x00, 0x00, 0x00), /* Ṽ to V */
    Transliteration::new(0x1E7D, b'v', 0x00, 0x00, 0x00), /* ṽ to v */
    Transliteration::new(0x1E7E, b'V', 0x00, 0x00, 0x00), /* Ṿ to V */
    Transliteration::new(0x1E7F, b'v', 0x00, 0x00, 0x00), /* ṿ to v */
    Transliteration::new(0x1E80, b'W', 0x00, 0x00, 0x00), /* Ẁ to W */
    Transliteration::new(0x1E81, b'w', 0x00, 0x00, 0x00), /* ẁ to w */
    Transliteration::new(0x1E82, b'W', 0x00, 0x00, 0x00), /* Ẃ to W */
    Transliteration::new(0x1E83, b'w', 0x00, 0x00, 0x00), /* ẃ to w */
    Transliteration::new(0x1E84, b'W', 0x00, 0x00, 0x00), /* Ẅ to W */
    Transliteration::new(0x1E85, b'w', 0x00, 0x00, 0x00), /* ẅ to w */
    Transliteration::new(0x1E86, b'W', 0x00, 0x00, 0x00), /* Ẇ to W */
    Transliteration::new(0x1E87, b'w', 0x00, 0x00, 0x00), /* ẇ to w */
    Transliteration::new(0x1E88, b'W', 0x00, 0x00, 0x00), /* Ẉ to W */
    Transliteration::new(0x1E89, b'w', 0x00, 0x00, 0x00), /* ẉ to w */
    Transliteration::new(0x1E8A, b'X', 0x00, 0x00, 0x00), /* Ẋ to X */
    Transliteration::new(0x1E8B, b'x', 0x00, 0x00, 0x00), /* ẋ to x */
    Transliteration::new(0x1E8C, b'X', 0x00, 0x00, 0x00), /* Ẍ to X */
    Transliteration::new(0x1E8D, b'x', 0x00, 0x00, 0x00), /* ẍ to x */
    Transliteration::new(0x1E8E, b'Y', 0x00, 0x00, 0x00), /* Ẏ to Y */
    Transliteration::new(0x1E8F, b'y', 0x00, 0x00, 0x00), /* ẏ to y */
    Transliteration::new(0x1E90, b'Z', 0x00, 0x00, 0x00), /* Ẑ to Z */
    Transliteration::new(0x1E91, b'z', 0x00, 0x00, 0x00), /* ẑ to z */
    Transliteration::new(0x1E92, b'Z', 0x00, 0x00, 0x00), /* Ẓ to Z */
    Transliteration::new(0x1E93, b'z', 0x00, 0x00, 0x00), /* ẓ to z */
    Transliteration::new(0x1E94, b'Z', 0x00, 0x00, 0x00), /* Ẕ to Z */
    Transliteration::new(0x1E95, b'z', 0x00, 0x00, 0x00), /* ẕ to z */
    Transliteration::new(0x1E96, b'h', 0x00, 0x00, 0x00), /* ẖ to h */
    Transliteration::new(0x1E97, b't', 0x00, 0x00, 0x00), /* ẗ to t */
    Transliteration::new(0x1E98, b'w', 0x00, 0x00, 0x00), /* ẘ to w */
    Transliteration::new(0x1E99, b'y', 0x00, 0x00, 0x00), /* ẙ to y */
    Transliteration::new(0x1E9B, b's', 0x00, 0x00, 0x00), /* ẛ to s */
    Transliteration::new(0x1E9E, b'S', b'S', 0x00, 0x00), /* ẞ to SS */
    Transliteration::new(0x1EA0, b'A', 0x00, 0x00, 0x00), /* Ạ to A */
    Transliteration::new(0x1EA1, b'a', 0x00, 0x00, 0x00), /* ạ to a */
    Transliteration::new(0x1EA2, b'A', 0x00, 0x00, 0x00), /* Ả to A */
    Transliteration::new(0x1EA3, b'a', 0x00, 0x00, 0x00), /* ả to a */
    Transliteration::new(0x1EA4, b'A', 0x00, 0x00, 0x00), /* Ấ to A */
    Transliteration::new(0x1EA5, b'a', 0x00, 0x00, 0x00), /* ấ to a */
    Transliteration::new(0x1EA6, b'A', 0x00, 0x00, 0x00), /* Ầ to A */
    Transliteration::new(0x1EA7, b'a', 0x00, 0x00, 0x00), /* ầ to a */
    Transliteration::new(0x1EA8, b'A', 0x00, 0x00, 0x00), /* Ẩ to A */
    Transliteration::new(0x1EA9, b'a', 0x00, 0x00, 0x00), /* ẩ to a */
    Transliteration::new(0x1EAA, b'A', 0x00, 0x00, 0x00), /* Ẫ to A */
    Transliteration::new(0x1EAB, b'a', 0x00, 0x00, 0x00), /* ẫ to a */
    Transliteration::new(0x1EAC, b'A', 0x00, 0x00, 0x00), /* Ậ to A */
    Transliteration::new(0x1EAD, b'a', 0x00, 0x00, 0x00), /* ậ to a */
    Transliteration::new(0x1EAE, b'A', 0x00, 0x00, 0x00), /* Ắ to A */
    Transliteration::new(0x1EAF, b'a', 0x00, 0x00, 0x00), /* ắ to a */
    Transliteration::new(0x1EB0, b'A', 0x00, 0x00, 0x00), /* Ằ to A */
    Transliteration::new(0x1EB1, b'a', 0x00, 0x00, 0x00), /* ằ to a */
    Transliteration::new(0x1EB2, b'A', 0x00, 0x00, 0x00), /* Ẳ to A */
    Transliteration::new(0x1EB3, b'a', 0x00, 0x00, 0x00), /* ẳ to a */
    Transliteration::new(0x1EB4, b'A', 0x00, 0x00, 0x00), /* Ẵ to A */
    Transliteration::new(0x1EB5, b'a', 0x00, 0x00, 0x00), /* ẵ to a */
    Transliteration::new(0x1EB6, b'A', 0x00, 0x00, 0x00), /* Ặ to A */
    Transliteration::new(0x1EB7, b'a', 0x00, 0x00, 0x00), /* ặ to a */
    Transliteration::new(0x1EB8, b'E', 0x00, 0x00, 0x00), /* Ẹ to E */
    Transliteration::new(0x1EB9, b'e', 0x00, 0x00, 0x00), /* ẹ to e */
    Transliteration::new(0x1EBA, b'E', 0x00, 0x00, 0x00), /* Ẻ to E */
    Transliteration::new(0x1EBB, b'e', 0x00, 0x00, 0x00), /* ẻ to e */
    Transliteration::new(0x1EBC, b'E', 0x00, 0x00, 0x00), /* Ẽ to E */
    Transliteration::new(0x1EBD, b'e', 0x00, 0x00, 0x00), /* ẽ to e */
    Transliteration::new(0x1EBE, b'E', 0x00, 0x00, 0x00), /* Ế to E */
    Transliteration::new(0x1EBF, b'e', 0x00, 0x00, 0x00), /* ế to e */
    Transliteration::new(0x1EC0, b'E', 0x00, 0x00, 0x00), /* Ề to E */
    Transliteration::new(0x1EC1, b'e', 0x00, 0x00, 0x00), /* ề to e */
    Transliteration::new(0x1EC2, b'E', 0x00, 0x00, 0x00), /* Ể to E */
    Transliteration::new(0x1EC3, b'e', 0x00, 0x00, 0x00), /* ể to e */
    Transliteration::new(0x1EC4, b'E', 0x00, 0x00, 0x00), /* Ễ to E */
    Transliteration::new(0x1EC5, b'e', 0x00, 0x00, 0x00), /* ễ to e */
    Transliteration::new(0x1EC6, b'E', 0x00, 0x00, 0x00), /* Ệ to E */
    Transliteration::new(0x1EC7, b'e', 0x00, 0x00, 0x00), /* ệ to e */
    Transliteration::new(0x1EC8, b'I', 0x00, 0x00, 0x00), /* Ỉ to I */
    Transliteration::new(0x1EC9, b'i', 0x00, 0x00, 0x00), /* ỉ to i */
    Transliteration::new(0x1ECA, b'I', 0x00, 0x00, 0x00), /* Ị to I */
    Transliteration::new(0x1ECB, b'i', 0x00, 0x00, 0x00), /* ị to i */
    Transliteration::new(0x1ECC, b'O', 0x00, 0x00, 0x00), /* Ọ to O */
    Transliteration::new(0x1ECD, b'o', 0x00, 0x00, 0x00), /* ọ to o */
    Transliteration::new(0x1ECE, b'O', 0x00, 0x00, 0x00), /* Ỏ to O */
    Transliteration::new(0x1ECF, b'o', 0x00, 0x00, 0x00), /* ỏ to o */
    Transliteration::new(0x1ED0, b'O', 0x00, 0x00, 0x00), /* Ố to O */
    Transliteration::new(0x1ED1, b'o', 0x00, 0x00, 0x00), /* ố to o */
    Transliteration::new(0x1ED2, b'O', 0x00, 0x00, 0x00), /* Ồ to O */
    Transliteration::new(0x1ED3, b'o', 0x00, 0x00, 0x00), /* ồ to o */
    Transliteration::new(0x1ED4, b'O', 0x00, 0x00, 0x00), /* Ổ to O */
    Transliteration::new(0x1ED5, b'o', 0x00, 0x00, 0x00), /* ổ to o */
    Transliteration::new(0x1ED6, b'O', 0x00, 0x00, 0x00), /* Ỗ to O */
    Transliteration::new(0x1ED7, b'o', 0x00, 0x00, 0x00), /* ỗ to o */
    Transliteration::new(0x1ED8, b'O', 0x00, 0x00, 0x00), /* Ộ to O */
    Transliteration::new(0x1ED9, b'o', 0x00, 0x00, 0x00), /* ộ to o */
    Transliteration::new(0x1EDA, b'O', 0x00, 0x00, 0x00), /* Ớ to O */
    Transliteration::new(0x1EDB, b'o', 0x00, 0x00, 0x00), /* ớ to o */
    Transliteration::new(0x1EDC, b'O', 0x00, 0x00, 0x00), /* Ờ to O */
    Transliteration::new(0x1EDD, b'o', 0x00, 0x00, 0x00), /* ờ to o */
    Transliteration::new(0x1EDE, b'O', 0x00, 0x00, 0x00), /* Ở to O */
    Transliteration::new(0x1EDF, b'o', 0x00, 0x00, 0x00), /* ở to o */
    Transliteration::new(0x1EE0, b'O', 0x00, 0x00, 0x00), /* Ỡ to O */
    Transliteration::new(0x1EE1, b'o', 0x00, 0x00, 0x00), /* ỡ to o */
    Transliteration::new(0x1EE2, b'O', 0x00, 0x00, 0x00), /* Ợ to O */
    Transliteration::new(0x1EE3, b'o', 0x00, 0x00, 0x00), /* ợ to o */
    Transliteration::new(0x1EE4, b'U', 0x00, 0x00, 0x00), /* Ụ to U */
    Transliteration::new(0x1EE5, b'u', 0x00, 0x00, 0x00), /* ụ to u */
    Transliteration::new(0x1EE6, b'U', 0x00, 0x00, 0x00), /* Ủ to U */
    Transliteration::new(0x1EE7, b'u', 0x00, 0x00, 0x00), /* ủ to u */
    Transliteration::new(0x1EE8, b'U', 0x00, 0x00, 0x00), /* Ứ to U */
    Transliteration::new(0x1EE9, b'u', 0x00, 0x00, 0x00), /* ứ to u */
    Transliteration::new(0x1EEA, b'U', 0x00, 0x00, 0x00), /* Ừ to U */
    Transliteration::new(0x1EEB, b'u', 0x00, 0x00, 0x00), /* ừ to u */
    Transliteration::new(0x1EEC, b'U', 0x00, 0x00, 0x00), /* Ử to U */
    Transliteration::new(0x1EED, b'u', 0x00, 0x00, 0x00), /* ử to u */
    Transliteration::new(0x1EEE, b'U', 0x00, 0x00, 0x00), /* Ữ to U */
    Transliteration::new(0x1EEF, b'u', 0x00, 0x00, 0x00), /* ữ to u */
    Transliteration::new(0x1EF0, b'U', 0x00, 0x00, 0x00), /* Ự to U */
    Transliteration::new(0x1EF1, b'u', 0x00, 0x00, 0x00), /* ự to u */
    Transliteration::new(0x1EF2, b'Y', 0x00, 0x00, 0x00), /* Ỳ to Y */
    Transliteration::new(0x1EF3, b'y', 0x00, 0x00, 0x00), /* ỳ to y */
    Transliteration::new(0x1EF4, b'Y', 0x00, 0x00, 0x00), /* Ỵ to Y */
    Transliteration::new(0x1EF5, b'y', 0x00, 0x00, 0x00), /* ỵ to y */
    Transliteration::new(0x1EF6, b'Y', 0x00, 0x00, 0x00), /* Ỷ to Y */
    Transliteration::new(0x1EF7, b'y', 0x00, 0x00, 0x00), /* ỷ to y */
    Transliteration::new(0x1EF8, b'Y', 0x00, 0x00, 0x00), /* Ỹ to Y */
    Transliteration::new(0x1EF9, b'y', 0x00, 0x00, 0x00), /* ỹ to y */
    Transliteration::new(0x2000, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2001, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2002, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2003, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2004, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2005, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2006, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2007, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2008, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2009, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x200A, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2010, b'-', 0x00, 0x00, 0x00), /* ‐ to - */
    Transliteration::new(0x2011, b'-', 0x00, 0x00, 0x00), /* ‑ to - */
    Transliteration::new(0x2012, b'-', 0x00, 0x00, 0x00), /* ‒ to - */
    Transliteration::new(0x2013, b'-', 0x00, 0x00, 0x00), /* – to - */
    Transliteration::new(0x2014, b'-', 0x00, 0x00, 0x00), /* — to - */
    Transliteration::new(0x2015, b'-', 0x00, 0x00, 0x00), /* ― to - */
    Transliteration::new(0x2018, b'\'', 0x00, 0x00, 0x00), /* ‘ to ' */
    Transliteration::new(0x2019, b'\'', 0x00, 0x00, 0x00), /* ’ to ' */
    Transliteration::new(0x201A, b',', 0x00, 0x00, 0x00), /* ‚ to , */
    Transliteration::new(0x201B, b'\'', 0x00, 0x00, 0x00), /* ‛ to ' */
    Transliteration::new(0x201C, b'"', 0x00, 0x00, 0x00), /* “ to " */
    Transliteration::new(0x201D, b'"', 0x00, 0x00, 0x00), /* ” to " */
    Transliteration::new(0x201E, b',', b',', 0x00, 0x00), /* „ to ,, */
    Transliteration::new(0x201F, b'"', 0x00, 0x00, 0x00), /* ‟ to " */
    Transliteration::new(0x2020, b'+', 0x00, 0x00, 0x00), /* † to + */
    Transliteration::new(0x2022, b'*', 0x00, 0x00, 0x00), /* • to * */
    Transliteration::new(0x2024, b'.', 0x00, 0x00, 0x00), /* ․ to . */
    Transliteration::new(0x2025, b'.', b'.', 0x00, 0x00), /* ‥ to .. */
    Transliteration::new(0x2026, b'.', b'.', b'.', 0x00), /* … to ... */
    Transliteration::new(0x202F, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2032, b'\'', 0x00, 0x00, 0x00), /* ′ to ' */
    Transliteration::new(0x2033, b'"', 0x00, 0x00, 0x00), /* ″ to " */
    Transliteration::new(0x2039, b'<', 0x00, 0x00, 0x00), /* ‹ to < */
    Transliteration::new(0x203A, b'>', 0x00, 0x00, 0x00), /* › to > */
    Transliteration::new(0x2044, b'/', 0x00, 0x00, 0x00), /* ⁄ to / */
    Transliteration::new(0x205F, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0x2070, b'0', 0x00, 0x00, 0x00), /* ⁰ to 0 */
    Transliteration::new(0x2071, b'i', 0x00, 0x00, 0x00), /* ⁱ to i */
    Transliteration::new(0x2074, b'4', 0x00, 0x00, 0x00), /* ⁴ to 4 */
    Transliteration::new(0x2075, b'5', 0x00, 0x00, 0x00), /* ⁵ to 5 */
    Transliteration::new(0x2076, b'6', 0x00, 0x00, 0x00), /* ⁶ to 6 */
    Transliteration::new(0x2077, b'7', 0x00, 0x00, 0x00), /* ⁷ to 7 */
    Transliteration::new(0x2078, b'8', 0x00, 0x00, 0x00), /* ⁸ to 8 */
    Transliteration::new(0x2079, b'9', 0x00, 0x00, 0x00), /* ⁹ to 9 */
    Transliteration::new(0x207F, b'n', 0x00, 0x00, 0x00), /* ⁿ to n */
    Transliteration::new(0x2080, b'0', 0x00, 0x00, 0x00), /* ₀ to 0 */
    Transliteration::new(0x2081, b'1', 0x00, 0x00, 0x00), /* ₁ to 1 */
    Transliteration::new(0x2082, b'2', 0x00, 0x00, 0x00), /* ₂ to 2 */
    Transliteration::new(0x2083, b'3', 0x00, 0x00, 0x00), /* ₃ to 3 */
    Transliteration::new(0x2084, b'4', 0x00, 0x00, 0x00), /* ₄ to 4 */
    Transliteration::new(0x2085, b'5', 0x00, 0x00, 0x00), /* ₅ to 5 */
    Transliteration::new(0x2086, b'6', 0x00, 0x00, 0x00), /* ₆ to 6 */
    Transliteration::new(0x2087, b'7', 0x00, 0x00, 0x00), /* ₇ to 7 */
    Transliteration::new(0x2088, b'8', 0x00, 0x00, 0x00), /* ₈ to 8 */
    Transliteration::new(0x2089, b'9', 0x00, 0x00, 0x00), /* ₉ to 9 */
    Transliteration::new(0x2090, b'a', 0x00, 0x00, 0x00), /* ₐ to a */
    Transliteration::new(0x2091, b'e', 0x00, 0x00, 0x00), /* ₑ to e */
    Transliteration::new(0x2092, b'o', 0x00, 0x00, 0x00), /* ₒ to o */
    Transliteration::new(0x2093, b'x', 0x00, 0x00, 0x00), /* ₓ to x */
    Transliteration::new(0x2095, b'h', 0x00, 0x00, 0x00), /* ₕ to h */
    Transliteration::new(0x2096, b'k', 0x00, 0x00, 0x00), /* ₖ to k */
    Transliteration::new(0x2097, b'l', 0x00, 0x00, 0x00), /* ₗ to l */
    Transliteration::new(0x2098, b'm', 0x00, 0x00, 0x00), /* ₘ to m */
    Transliteration::new(0x2099, b'n', 0x00, 0x00, 0x00), /* ₙ to n */
    Transliteration::new(0x209A, b'p', 0x00, 0x00, 0x00), /* ₚ to p */
    Transliteration::new(0x209B, b's', 0x00, 0x00, 0x00), /* ₛ to s */
    Transliteration::new(0x209C, b't', 0x00, 0x00, 0x00), /* ₜ to t */
    Transliteration::new(0x2102, b'C', 0x00, 0x00, 0x00), /* ℂ to C */
    Transliteration::new(0x210A, b'g', 0x00, 0x00, 0x00), /* ℊ to g */
    Transliteration::new(0x210B, b'H', 0x00, 0x00, 0x00), /* ℋ to H */
    Transliteration::new(0x210C, b'H', 0x00, 0x00, 0x00), /* ℌ to H */
    Transliteration::new(0x210D, b'H', 0x00, 0x00, 0x00), /* ℍ to H */
    Transliteration::new(0x210E, b'h', 0x00, 0x00, 0x00), /* ℎ to h */
    Transliteration::new(0x2110, b'I', 0x00, 0x00, 0x00), /* ℐ to I */
    Transliteration::new(0x2111, b'I', 0x00, 0x00, 0x00), /* ℑ to I */
    Transliteration::new(0x2112, b'L', 0x00, 0x00, 0x00), /* ℒ to L */
    Transliteration::new(0x2113, b'l', 0x00, 0x00, 0x00), /* ℓ to l */
    Transliteration::new(0x2115, b'N', 0x00, 0x00, 0x00), /* ℕ to N */
    Transliteration::new(0x2116, b'N', b'o', 0x00, 0x00), /* № to No */
    Transliteration::new(0x2119, b'P', 0x00, 0x00, 0x00), /* ℙ to P */
    Transliteration::new(0x211A, b'Q', 0x00, 0x00, 0x00), /* ℚ to Q */
    Transliteration::new(0x211B, b'R', 0x00, 0x00, 0x00), /* ℛ to R */
    Transliteration::new(0x211C, b'R', 0x00, 0x00, 0x00), /* ℜ to R */
    Transliteration::new(0x211D, b'R', 0x00, 0x00, 0x00), /* ℝ to R */
    Transliteration::new(0x2120, b'S', b'M', 0x00, 0x00), /* ℠ to SM */
    Transliteration::new(0x2122, b'T', b'M', 0x00, 0x00), /* ™ to TM */
    Transliteration::new(0x2124, b'Z', 0x00, 0x00, 0x00), /* ℤ to Z */
    Transliteration::new(0x2128, b'Z', 0x00, 0x00, 0x00), /* ℨ to Z */
    Transliteration::new(0x212A, b'K', 0x00, 0x00, 0x00), /* K to K */
    Transliteration::new(0x212B, b'A', 0x00, 0x00, 0x00), /* Å to A */
    Transliteration::new(0x212C, b'B', 0x00, 0x00, 0x00), /* ℬ to B */
    Transliteration::new(0x212D, b'C', 0x00, 0x00, 0x00), /* ℭ to C */
    Transliteration::new(0x212F, b'e', 0x00, 0x00, 0x00), /* ℯ to e */
    Transliteration::new(0x2130, b'E', 0x00, 0x00, 0x00), /* ℰ to E */
    Transliteration::new(0x2131, b'F', 0x00, 0x00, 0x00), /* ℱ to F */
    Transliteration::new(0x2133, b'M', 0x00, 0x00, 0x00), /* ℳ to M */
    Transliteration::new(0x2134, b'o', 0x00, 0x00, 0x00), /* ℴ to o */
    Transliteration::new(0x2139, b'i', 0x00, 0x00, 0x00), /* ℹ to i */
    Transliteration::new(0x2145, b'D', 0x00, 0x00, 0x00), /* ⅅ to D */
    Transliteration::new(0x2146, b'd', 0x00, 0x00, 0x00), /* ⅆ to d */
    Transliteration::new(0x2147, b'e', 0x00, 0x00, 0x00), /* ⅇ to e */
    Transliteration::new(0x2148, b'i', 0x00, 0x00, 0x00), /* ⅈ to i */
    Transliteration::new(0x2149, b'j', 0x00, 0x00, 0x00), /* ⅉ to j */
    Transliteration::new(0x2150, b' ', b'1', b'/', b'7'), /* ⅐ to  1/7 */
    Transliteration::new(0x2151, b' ', b'1', b'/', b'9'), /* ⅑ to  1/9 */
    Transliteration::new(0x2153, b' ', b'1', b'/', b'3'), /* ⅓ to  1/3 */
    Transliteration::new(0x2154, b' ', b'2', b'/', b'3'), /* ⅔ to  2/3 */
    Transliteration::new(0x2155, b' ', b'1', b'/', b'5'), /* ⅕ to  1/5 */
    Transliteration::new(0x2156, b' ', b'2', b'/', b'5'), /* ⅖ to  2/5 */
    Transliteration::new(0x2157, b' ', b'3', b'/', b'5'), /* ⅗ to  3/5 */
    Transliteration::new(0x2158, b' ', b'4', b'/', b'5'), /* ⅘ to  4/5 */
    Transliteration::new(0x2159, b' ', b'1', b'/', b'6'), /* ⅙ to  1/6 */
    Transliteration::new(0x215A, b' ', b'5', b'/', b'6'), /* ⅚ to  5/6 */
    Transliteration::new(0x215B, b' ', b'1', b'/', b'8'), /* ⅛ to  1/8 */
    Transliteration::new(0x215C, b' ', b'3', b'/', b'8'), /* ⅜ to  3/8 */
    Transliteration::new(0x215D, b' ', b'5', b'/', b'8'), /* ⅝ to  5/8 */
    Transliteration::new(0x215E, b' ', b'7', b'/', b'8'), /* ⅞ to  7/8 */
    Transliteration::new(0x215F, b' ', b'1', b'/', 0x00), /* ⅟ to  1/ */
    Transliteration::new(0x2160, b'I', 0x00, 0x00, 0x00), /* Ⅰ to I */
    Transliteration::new(0x2161, b'I', b'I', 0x00, 0x00), /* Ⅱ to II */
    Transliteration::new(0x2162, b'I', b'I', b'I', 0x00), /* Ⅲ to III */
    Transliteration::new(0x2163, b'I', b'V', 0x00, 0x00), /* Ⅳ to IV */
    Transliteration::new(0x2164, b'V', 0x00, 0x00, 0x00), /* Ⅴ to V */
    Transliteration::new(0x2165, b'V', b'I', 0x00, 0x00), /* Ⅵ to VI */
    Transliteration::new(0x2166, b'V', b'I', b'I', 0x00), /* Ⅶ to VII */
    Transliteration::new(0x2167, b'V', b'I', b'I', b'I'), /* Ⅷ to VIII */
    Transliteration::new(0x2168, b'I', b'X', 0x00, 0x00), /* Ⅸ to IX */
    Transliteration::new(0x2169, b'X', 0x00, 0x00, 0x00), /* Ⅹ to X */
    Transliteration::new(0x216A, b'X', b'I', 0x00, 0x00), /* Ⅺ to XI */
    Transliteration::new(0x216B, b'X', b'I', b'I', 0x00), /* Ⅻ to XII */
    Transliteration::new(0x216C, b'L', 0x00, 0x00, 0x00), /* Ⅼ to L */
    Transliteration::new(0x216D, b'C', 0x00, 0x00, 0x00), /* Ⅽ to C */
    Transliteration::new(0x216E, b'D', 0x00, 0x00, 0x00), /* Ⅾ to D */
    Transliteration::new(0x216F, b'M', 0x00, 0x00, 0x00), /* Ⅿ to M */
    Transliteration::new(0x2170, b'i', 0x00, 0x00, 0x00), /* ⅰ to i */
    Transliteration::new(0x2171, b'i', b'i', 0x00, 0x00), /* ⅱ to ii */
    Transliteration::new(0x2172, b'i', b'i', b'i', 0x00), /* ⅲ to iii */
    Transliteration::new(0x2173, b'i', b'v', 0x00, 0x00), /* ⅳ to iv */
    Transliteration::new(0x2174, b'v', 0x00, 0x00, 0x00), /* ⅴ to v */
    Transliteration::new(0x2175, b'v', b'i', 0x00, 0x00), /* ⅵ to vi */
    Transliteration::new(0x2176, b'v', b'i', b'i', 0x00), /* ⅶ to vii */
    Transliteration::new(0x2177, b'v', b'i', b'i', b'i'), /* ⅷ to viii */
    Transliteration::new(0x2178, b'i', b'x', 0x00, 0x00), /* ⅸ to ix */
    Transliteration::new(0x2179, b'x', 0x00, 0x00, 0x00), /* ⅹ to x */
    Transliteration::new(0x217A, b'x', b'i', 0x00, 0x00), /* ⅺ to xi */
    Transliteration::new(0x217B, b'x', b'i', b'i', 0x00), /* ⅻ to xii */
    Transliteration::new(0x217C, b'l', 0x00, 0x00, 0x00), /* ⅼ to l */
    Transliteration::new(0x217D, b'c', 0x00, 0x00, 0x00), /* ⅽ to c */
    Transliteration::new(0x217E, b'd', 0x00, 0x00, 0x00), /* ⅾ to d */
    Transliteration::new(0x217F, b'm', 0x00, 0x00, 0x00), /* ⅿ to m */
    Transliteration::new(0x2189, b'0', b'/', b'3', 0x00), /* ↉ to 0/3 */
    Transliteration::new(0x2190, b'<', b'-', 0x00, 0x00), /* ← to <- */
    Transliteration::new(0x2192, b'-', b'>', 0x00, 0x00), /* → to -> */
    Transliteration::new(0x2194, b'<', b'-', b'>', 0x00), /* ↔ to <-> */
    Transliteration::new(0x3000, b' ', 0x00, 0x00, 0x00), /*   to   */
    Transliteration::new(0xFB00, b'f', b'f', 0x00, 0x00), /* ﬀ to ff */
    Transliteration::new(0xFB01, b'f', b'i', 0x00, 0x00), /* ﬁ to fi */
    Transliteration::new(0xFB02, b'f', b'l', 0x00, 0x00), /* ﬂ to fl */
    Transliteration::new(0xFB03, b'f', b'f', b'i', 0x00), /* ﬃ to ffi */
    Transliteration::new(0xFB04, b'f', b'f', b'l', 0x00), /* ﬄ to ffl */
    Transliteration::new(0xFB05, b's', b't', 0x00, 0x00), /* ﬅ to st */
    Transliteration::new(0xFB06, b's', b't', 0x00, 0x00), /* ﬆ to st */
    Transliteration::new(0xFF01, b'!', 0x00, 0x00, 0x00), /* ！ to ! */
    Transliteration::new(0xFF02, b'"', 0x00, 0x00, 0x00), /* ＂ to " */
    Transliteration::new(0xFF03, b'#', 0x00, 0x00, 0x00), /* ＃ to # */
    Transliteration::new(0xFF04, b'$', 0x00, 0x00, 0x00), /* ＄ to $ */
    Transliteration::new(0xFF05, b'%', 0x00, 0x00, 0x00), /* ％ to % */
    Transliteration::new(0xFF06, b'&', 0x00, 0x00, 0x00), /* ＆ to & */
    Transliteration::new(0xFF07, b'\'', 0x00, 0x00, 0x00), /* ＇ to ' */
    Transliteration::new(0xFF08, b'(', 0x00, 0x00, 0x00), /* （ to ( */
    Transliteration::new(0xFF09, b')', 0x00, 0x00, 0x00), /* ） to ) */
    Transliteration::new(0xFF0A, b'*', 0x00, 0x00, 0x00), /* ＊ to * */
    Transliteration::new(0xFF0B, b'+', 0x00, 0x00, 0x00), /* ＋ to + */
    Transliteration::new(0xFF0C, b',', 0x00, 0x00, 0x00), /* ， to , */
    Transliteration::new(0xFF0D, b'-', 0x00, 0x00, 0x00), /* － to - */
    Transliteration::new(0xFF0E, b'.', 0x00, 0x00, 0x00), /* ． to . */
    Transliteration::new(0xFF0F, b'/', 0x00, 0x00, 0x00), /* ／ to / */
    Transliteration::new(0xFF10, b'0', 0x00, 0x00, 0x00), /* ０ to 0 */
    Transliteration::new(0xFF11, b'1', 0x00, 0x00, 0x00), /* １ to 1 */
    Transliteration::new(0xFF12, b'2', 0x00, 0x00, 0x00), /* ２ to 2 */
    Transliteration::new(0xFF13, b'3', 0x00, 0x00, 0x00), /* ３ to 3 */
    Transliteration::new(0xFF14, b'4', 0x00, 0x00, 0x00), /* ４ to 4 */
    Transliteration::new(0xFF15, b'5', 0x00, 0x00, 0x00), /* ５ to 5 */
    Transliteration::new(0xFF16, b'6', 0x00, 0x00, 0x00), /* ６ to 6 */
    Transliteration::new(0xFF17, b'7', 0x00, 0x00, 0x00), /* ７ to 7 */
    Transliteration::new(0xFF18, b'8', 0x00, 0x00, 0x00), /* ８ to 8 */
    Transliteration::new(0xFF19, b'9', 0x00, 0x00, 0x00), /* ９ to 9 */
    Transliteration::new(0xFF1A, b':', 0x00, 0x00, 0x00), /* ： to : */
    Transliteration::new(0xFF1B, b';', 0x00, 0x00, 0x00), /* ； to ; */
    Transliteration::new(0xFF1C, b'<', 0x00, 0x00, 0x00), /* ＜ to < */
    Transliteration::new(0xFF1D, b'=', 0x00, 0x00, 0x00), /* ＝ to = */
    Transliteration::new(0xFF1E, b'>', 0x00, 0x00, 0x00), /* ＞ to > */
    Transliteration::new(0xFF1F, b'?', 0x00, 0x00, 0x00), /* ？ to ? */
    Transliteration::new(0xFF20, b'@', 0x00, 0x00, 0x00), /* ＠ to @ */
    Transliteration::new(0xFF21, b'A', 0x00, 0x00, 0x00), /* Ａ to A */
    Transliteration::new(0xFF22, b'B', 0x00, 0x00, 0x00), /* Ｂ to B */
    Transliteration::new(0xFF23, b'C', 0x00, 0x00, 0x00), /* Ｃ to C */
    Transliteration::new(0xFF24, b'D', 0x00, 0x00, 0x00), /* Ｄ to D */
    Transliteration::new(0xFF25, b'E', 0x00, 0x00, 0x00), /* Ｅ to E */
    Transliteration::new(0xFF26, b'F', 0x00, 0x00, 0x00), /* Ｆ to F */
    Transliteration::new(0xFF27, b'G', 0x00, 0x00, 0x00), /* Ｇ to G */
    Transliteration::new(0xFF28, b'H', 0x00, 0x00, 0x00), /* Ｈ to H */
    Transliteration::new(0xFF29, b'I', 0x00, 0x00, 0x00), /* Ｉ to I */
    Transliteration::new(0xFF2A, b'J', 0x00, 0x00, 0x00), /* Ｊ to J */
    Transliteration::new(0xFF2B, b'K', 0x00, 0x00, 0x00), /* Ｋ to K */
    Transliteration::new(0xFF2C, b'L', 0x00, 0x00, 0x00), /* Ｌ to L */
    Transliteration::new(0xFF2D, b'M', 0x00, 0x00, 0x00), /* Ｍ to M */
    Transliteration::new(0xFF2E, b'N', 0x00, 0x00, 0x00), /* Ｎ to N */
    Transliteration::new(0xFF2F, b'O', 0x00, 0x00, 0x00), /* Ｏ to O */
    Transliteration::new(0xFF30, b'P', 0x00, 0x00, 0x00), /* Ｐ to P */
    Transliteration::new(0xFF31, b'Q', 0x00, 0x00, 0x00), /* Ｑ to Q */
    Transliteration::new(0xFF32, b'R', 0x00, 0x00, 0x00), /* Ｒ to R */
    Transliteration::new(0xFF33, b'S', 0x00, 0x00, 0x00), /* Ｓ to S */
    Transliteration::new(0xFF34, b'T', 0x00, 0x00, 0x00), /* Ｔ to T */
    Transliteration::new(0xFF35, b'U', 0x00, 0x00, 0x00), /* Ｕ to U */
    Transliteration::new(0xFF36, b'V', 0x00, 0x00, 0x00), /* Ｖ to V */
    Transliteration::new(0xFF37, b'W', 0x00, 0x00, 0x00), /* Ｗ to W */
    Transliteration::new(0xFF38, b'X', 0x00, 0x00, 0x00), /* Ｘ to X */
    Transliteration::new(0xFF39, b'Y', 0x00, 0x00, 0x00), /* Ｙ to Y */
    Transliteration::new(0xFF3A, b'Z', 0x00, 0x00, 0x00), /* Ｚ to Z */
    Transliteration::new(0xFF3B, b'[', 0x00, 0x00, 0x00), /* ［ to [ */
    Transliteration::new(0xFF3C, b'\\', 0x00, 0x00, 0x00), /* ＼ to \ */
    Transliteration::new(0xFF3D, b']', 0x00, 0x00, 0x00), /* ］ to ] */
    Transliteration::new(0xFF3E, b'^', 0x00, 0x00, 0x00), /* ＾ to ^ */
    Transliteration::new(0xFF3F, b'_', 0x00, 0x00, 0x00), /* ＿ to _ */
    Transliteration::new(0xFF40, b'`', 0x00, 0x00, 0x00), /* ｀ to ` */
    Transliteration::new(0xFF41, b'a', 0x00, 0x00, 0x00), /* ａ to a */
    Transliteration::new(0xFF42, b'b', 0x00, 0x00, 0x00), /* ｂ to b */
    Transliteration::new(0xFF43, b'c', 0x00, 0x00, 0x00), /* ｃ to c */
    Transliteration::new(0xFF44, b'd', 0x00, 0x00, 0x00), /* ｄ to d */
    Transliteration::new(0xFF45, b'e', 0x00, 0x00, 0x00), /* ｅ to e */
    Transliteration::new(0xFF46, b'f', 0x00, 0x00, 0x00), /* ｆ to f */
    Transliteration::new(0xFF47, b'g', 0x00, 0x00, 0x00), /* ｇ to g */
    Transliteration::new(0xFF48, b'h', 0x00, 0x00, 0x00), /* ｈ to h */
    Transliteration::new(0xFF49, b'i', 0x00, 0x00, 0x00), /* ｉ to i */
    Transliteration::new(0xFF4A, b'j', 0x00, 0x00, 0x00), /* ｊ to j */
    Transliteration::new(0xFF4B, b'k', 0x00, 0x00, 0x00), /* ｋ to k */
    Transliteration::new(0xFF4C, b'l', 0x00, 0x00, 0x00), /* ｌ to l */
    Transliteration::new(0xFF4D, b'm', 0x00, 0x00, 0x00), /* ｍ to m */
    Transliteration::new(0xFF4E, b'n', 0x00, 0x00, 0x00), /* ｎ to n */
    Transliteration::new(0xFF4F, b'o', 0x00, 0x00, 0x00), /* ｏ to o */
    Transliteration::new(0xFF50, b'p', 0x00, 0x00, 0x00), /* ｐ to p */
    Transliteration::new(0xFF51, b'q', 0x00, 0x00, 0x00), /* ｑ to q */
    Transliteration::new(0xFF52, b'r', 0x00, 0x00, 0x00), /* ｒ to r */
    Transliteration::new(0xFF53, b's', 0x00, 0x00, 0x00), /* ｓ to s */
    Transliteration::new(0xFF54, b't', 0x00, 0x00, 0x00), /* ｔ to t */
    Transliteration::new(0xFF55, b'u', 0x00, 0x00, 0x00), /* ｕ to u */
    Transliteration::new(0xFF56, b'v', 0x00, 0x00, 0x00), /* ｖ to v */
    Transliteration::new(0xFF57, b'w', 0x00, 0x00, 0x00), /* ｗ to w */
    Transliteration::new(0xFF58, b'x', 0x00, 0x00, 0x00), /* ｘ to x */
    Transliteration::new(0xFF59, b'y', 0x00, 0x00, 0x00), /* ｙ to y */
    Transliteration::new(0xFF5A, b'z', 0x00, 0x00, 0x00), /* ｚ to z */
    Transliteration::new(0xFF5B, b'{', 0x00, 0x00, 0x00), /* ｛ to { */
    Transliteration::new(0xFF5C, b'|', 0x00, 0x00, 0x00), /* ｜ to | */
    Transliteration::new(0xFF5D, b'}', 0x00, 0x00, 0x00), /* ｝ to } */
    Transliteration::new(0xFF5E, b'~', 0x00, 0x00, 0x00), /* ～ to ~ */
];

/// Find transliteration entry for a given Unicode character using binary search
fn find_translit(c: char) -> Option<&'static Transliteration> {
    let c = u16::try_from(u32::from(c)).ok()?;
    TRANSLIT
        .binary_search_by_key(&c, |t| t.c_from)
        .ok()
        .map(|idx| &TRANSLIT[idx])
}

/// Folds Latin letters and punctuation to their ASCII spelling.
///
/// A single character may expand to several (`½` becomes `" 1/2"`).
/// Characters without a folding are kept as they are, so the result is not
/// necessarily ASCII.
pub fn fold(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            output.push(c);
        } else if charset::is_combining(c) {
            // the base letter before the mark carries the ASCII spelling
            continue;
        } else if let Some(translit) = find_translit(c) {
            translit.push_to(&mut output);
        } else {
            output.push(c);
        }
    }
    Cow::Owned(output)
}

/// Replaces every maximal run of characters outside the printable ASCII
/// range with a single [`SUBSTITUTE`]. Printable text on either side of a
/// run, whitespace included, is left untouched.
fn substitute_unprintable(folded: &str) -> String {
    let mut output = String::with_capacity(folded.len());
    let mut in_run = false;
    let mut substitutions = 0usize;

    for c in folded.chars() {
        if charset::is_printable(c) {
            output.push(c);
            in_run = false;
        } else if !in_run {
            output.push(SUBSTITUTE);
            in_run = true;
            substitutions += 1;
        }
    }

    if substitutions > 0 {
        tracing::trace!(substitutions, "replaced unprintable runs");
    }
    output
}

/// Converts arbitrary text into printable ASCII. Never fails.
///
/// Note that some characters turn into more than one ASCII character, and
/// that control characters are replaced even though they are valid ASCII.
pub fn transliterate(input: &str) -> AsciiString {
    let folded = fold(input);
    let printable = substitute_unprintable(&folded);
    match AsciiString::try_from_string(printable) {
        Some(ascii) => ascii,
        None => {
            tracing::debug!(input, "transliteration produced non-ASCII output");
            AsciiString::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translit(s: &str) -> String {
        transliterate(s).into_string()
    }

    #[test]
    fn test_table_sorted_and_printable() {
        for pair in TRANSLIT.windows(2) {
            assert!(
                pair[0].c_from < pair[1].c_from,
                "table out of order at {:#06X}",
                pair[1].c_from
            );
        }
        for entry in TRANSLIT.iter() {
            let mut out = String::new();
            entry.push_to(&mut out);
            assert!(!out.is_empty(), "{:#06X} maps to nothing", entry.c_from);
            assert!(
                out.chars().all(charset::is_printable),
                "{:#06X} maps to {out:?}",
                entry.c_from
            );
            assert!(entry.c_from > 0x7F);
        }
    }

    #[test]
    fn test_printable_ascii_kept_intact() {
        for b in 32..=126u8 {
            let s = (b as char).to_string();
            assert_eq!(translit(&s), s);
        }
    }

    #[test]
    fn test_transliterate_latin() {
        assert_eq!(translit("Á"), "A");
        assert_eq!(translit("½"), " 1/2");
        assert_eq!(translit("Ãñ ÂŚÇÏÎ Strïńg."), "An ASCII String.");
        assert_eq!(translit("Café"), "Cafe");
        assert_eq!(translit("Naïve"), "Naive");
        assert_eq!(translit("Müller"), "Muller");
        assert_eq!(translit("Größe"), "Grosse");
        assert_eq!(translit("Œuvre Æther Łódź"), "OEuvre AEther Lodz");
        assert_eq!(translit("ﬁn"), "fin");
        assert_eq!(translit("© 2021 «quoted» ™"), "(C) 2021 <<quoted>> TM");
        assert_eq!(translit("“smart” ‘quotes’ – and…"), "\"smart\" 'quotes' - and...");
    }

    #[test]
    fn test_combining_marks_dropped() {
        assert_eq!(translit("e\u{301}te\u{301}"), "ete");
        assert_eq!(translit("\u{301}"), "");
        assert_eq!(translit("e\u{20D7}"), "e");
        assert_eq!(translit("a\u{1AB0}b\u{1DC0}c\u{FE20}"), "abc");
    }

    #[test]
    fn test_unmappable_substituted() {
        assert_eq!(translit("😃"), "?");
        assert_eq!(translit("Emöji 😃"), "Emoji ?");
        assert_eq!(translit("привет"), "?");
        assert_eq!(
            translit("Le long 🐕 chien brun se promenait paresseusement autour du petit zèbre xénophobe"),
            "Le long ? chien brun se promenait paresseusement autour du petit zebre xenophobe"
        );
    }

    #[test]
    fn test_runs_collapse_to_one_substitute() {
        assert_eq!(translit("a😃😃😃b"), "a?b");
        assert_eq!(translit("a\u{1}\u{2}\u{7f}b"), "a?b");
        assert_eq!(translit("a\n😃\tb"), "a?b");
        assert_eq!(translit("a😃 😃b"), "a? ?b");
        // a dropped combining mark does not split a run
        assert_eq!(translit("😃\u{301}😃"), "?");
    }

    #[test]
    fn test_control_characters_replaced() {
        assert_eq!(translit("line one\nline two"), "line one?line two");
        assert_eq!(translit("\0"), "?");
    }

    #[test]
    fn test_astral_code_points_do_not_alias_table() {
        // U+100C1 truncated to 16 bits would collide with U+00C1
        assert_eq!(translit("\u{100C1}"), "?");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(translit(""), "");
    }

    #[test]
    fn test_fold_borrows_ascii_input() {
        assert!(matches!(fold("plain ascii\n"), Cow::Borrowed(_)));
        assert_eq!(fold("zèbre 😃"), "zebre 😃");
    }
}
