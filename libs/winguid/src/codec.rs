//! Textual codec for GUIDs.
//!
//! Parsing is a single left-to-right pass over five fields with no
//! backtracking. Braces and hyphens are optional on input; output is always
//! the braced, hyphenated, lowercase form.

use crate::error::{Field, ParseError};
use crate::Guid;

/// Length of the canonical textual form.
pub const CANONICAL_LEN: usize = 38;

/// Decodes one hex digit, case-insensitively.
///
/// `offset` is only used to report where the bad byte was found.
pub fn decode_hex_digit(byte: u8, offset: usize) -> Result<u8, ParseError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        _ => Err(ParseError::BadCharacter { byte, offset }),
    }
}

/// Read position over the input bytes.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_if(&mut self, byte: u8) {
        if self.peek() == Some(byte) {
            self.pos += 1;
        }
    }

    /// Checks that `digits` bytes are available for `field`.
    ///
    /// Every field but the last must also leave at least one byte after it.
    fn require(&self, digits: usize, field: Field) -> Result<(), ParseError> {
        let end = self.pos + digits;
        let fits = match field {
            Field::V4Tail => end <= self.input.len(),
            _ => end < self.input.len(),
        };
        if fits {
            Ok(())
        } else {
            Err(ParseError::Incomplete { field })
        }
    }

    /// Accumulates `digits` nibbles, most significant first.
    ///
    /// Callers must have checked the length with [`Cursor::require`].
    fn read_hex(&mut self, digits: usize) -> Result<u64, ParseError> {
        let mut value = 0u64;
        for _ in 0..digits {
            let nibble = decode_hex_digit(self.input[self.pos], self.pos)?;
            value = value << 4 | u64::from(nibble);
            self.pos += 1;
        }
        Ok(value)
    }

    fn field(&mut self, digits: usize, field: Field) -> Result<u64, ParseError> {
        self.require(digits, field)?;
        self.read_hex(digits)
    }
}

/// Parses a GUID from text.
///
/// Accepted forms include:
///
/// ```text
/// XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX
/// {XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}
/// XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX
/// {XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX}
/// ```
///
/// Each hyphen position is checked and skipped when present, never required.
/// After the last field, the only byte allowed to follow is `}`; whatever
/// comes after it is not examined, and a closing brace is not required.
pub fn parse(s: &str) -> Result<Guid, ParseError> {
    let mut cursor = Cursor::new(s.as_bytes());
    let mut part4 = [0u8; 8];

    cursor.skip_if(b'{');

    let part1 = cursor.field(8, Field::V1)? as u32;
    cursor.skip_if(b'-');

    let part2 = cursor.field(4, Field::V2)? as u16;
    cursor.skip_if(b'-');

    let part3 = cursor.field(4, Field::V3)? as u16;
    cursor.skip_if(b'-');

    part4[0] = cursor.field(2, Field::V4Low)? as u8;
    part4[1] = cursor.field(2, Field::V4Next)? as u8;
    cursor.skip_if(b'-');

    cursor.require(12, Field::V4Tail)?;
    for byte in &mut part4[2..] {
        *byte = cursor.read_hex(2)? as u8;
    }

    if let Some(byte) = cursor.peek() {
        if byte != b'}' {
            return Err(ParseError::BadCharacter {
                byte,
                offset: cursor.pos,
            });
        }
    }

    Ok(Guid::from_fields(part1, part2, part3, part4))
}

/// Parses a GUID, panicking if the text is malformed.
///
/// Only for well-known constants whose text is fixed in source. Never call
/// this on untrusted input.
#[track_caller]
pub fn must_parse(s: &str) -> Guid {
    match parse(s) {
        Ok(guid) => guid,
        Err(err) => panic!("invalid GUID literal {s:?}: {err}"),
    }
}

/// Writes `bytes` as lowercase hex at `at`, returning the end offset.
fn put_hex(buf: &mut [u8; CANONICAL_LEN], at: usize, bytes: &[u8]) -> usize {
    let end = at + bytes.len() * 2;
    hex::encode_to_slice(bytes, &mut buf[at..end])
        .expect("output slice is twice the input length");
    end
}

/// Encodes a GUID into its canonical 38-byte ASCII form.
pub fn encode(guid: &Guid) -> [u8; CANONICAL_LEN] {
    let (part1, part2, part3, part4) = guid.as_fields();
    let mut buf = *b"{00000000-0000-0000-0000-000000000000}";

    let pos = put_hex(&mut buf, 1, &part1.to_be_bytes());
    let pos = put_hex(&mut buf, pos + 1, &part2.to_be_bytes());
    let pos = put_hex(&mut buf, pos + 1, &part3.to_be_bytes());
    let pos = put_hex(&mut buf, pos + 1, &part4[..2]);
    let pos = put_hex(&mut buf, pos + 1, &part4[2..]);

    debug_assert_eq!(pos + 1, CANONICAL_LEN);
    buf
}

/// Formats a GUID as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
pub fn format(guid: &Guid) -> String {
    encode(guid).iter().copied().map(char::from).collect()
}
