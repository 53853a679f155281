//! Java Object Serialization stream reading
//!
//! Item payloads are `java.io.ObjectOutputStream` output: a serialized
//! `java.lang.String` whose text is the item's YAML rendering. Only the
//! string forms of the stream grammar matter here:
//!
//! 1. Streams start with magic `0xACED` and version `0x0005`
//! 2. `TC_STRING` / `TC_LONGSTRING` carry length-prefixed text
//! 3. Block data ahead of the string is skipped; object graphs, arrays,
//!    and class descriptors are rejected
//!
//! String bytes are Java's modified UTF-8: NUL is the overlong pair
//! `0xC0 0x80`, and characters outside the BMP are CESU-8 surrogate
//! pairs rather than 4-byte sequences.

/// Stream header magic
const STREAM_MAGIC: u16 = 0xACED;
/// Stream protocol version
const STREAM_VERSION: u16 = 0x0005;

/// Short string, u16 byte length
const TC_STRING: u8 = 0x74;
/// Long string, u64 byte length
const TC_LONGSTRING: u8 = 0x7C;
/// Block data, u8 byte length
const TC_BLOCKDATA: u8 = 0x77;
/// Block data, u32 byte length
const TC_BLOCKDATALONG: u8 = 0x7A;
/// Handle-table reset marker, no payload
const TC_RESET: u8 = 0x79;

/// Errors that can occur while reading an object stream
#[derive(Debug, thiserror::Error)]
pub enum ObjStreamError {
    #[error("Bad stream magic {0:#06x}")]
    BadMagic(u16),

    #[error("Unsupported stream version {0}")]
    BadVersion(u16),

    #[error("Unsupported content tag {tag:#04x} at offset {offset}")]
    UnsupportedTag { tag: u8, offset: usize },

    #[error("Stream ended without a string value")]
    MissingString,

    #[error("Unexpected end of stream at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("Invalid modified UTF-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Cursor over the raw stream bytes
struct StreamReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> StreamReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn read_u8(&mut self) -> Result<u8, ObjStreamError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(ObjStreamError::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_u16(&mut self) -> Result<u16, ObjStreamError> {
        let hi = self.read_u8()?;
        let lo = self.read_u8()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    fn read_u32(&mut self) -> Result<u32, ObjStreamError> {
        let hi = self.read_u16()?;
        let lo = self.read_u16()?;
        Ok((u32::from(hi) << 16) | u32::from(lo))
    }

    fn read_u64(&mut self) -> Result<u64, ObjStreamError> {
        let hi = self.read_u32()?;
        let lo = self.read_u32()?;
        Ok((u64::from(hi) << 32) | u64::from(lo))
    }

    fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], ObjStreamError> {
        let end = self
            .pos
            .checked_add(length)
            .ok_or(ObjStreamError::UnexpectedEof { offset: self.pos })?;
        if end > self.data.len() {
            return Err(ObjStreamError::UnexpectedEof { offset: self.pos });
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

/// Read the first serialized string out of an object stream.
///
/// Validates the header, skips block data, and returns the decoded text
/// of the first `TC_STRING` / `TC_LONGSTRING` element. Any other content
/// element fails with `UnsupportedTag`.
pub fn read_string(payload: &[u8]) -> Result<String, ObjStreamError> {
    let mut reader = StreamReader::new(payload);

    let magic = reader.read_u16()?;
    if magic != STREAM_MAGIC {
        return Err(ObjStreamError::BadMagic(magic));
    }
    let version = reader.read_u16()?;
    if version != STREAM_VERSION {
        return Err(ObjStreamError::BadVersion(version));
    }

    loop {
        if reader.is_empty() {
            return Err(ObjStreamError::MissingString);
        }

        let tag_offset = reader.offset();
        let tag = reader.read_u8()?;
        match tag {
            TC_STRING => {
                let length = reader.read_u16()? as usize;
                let text_offset = reader.offset();
                let bytes = reader.read_bytes(length)?;
                return decode_modified_utf8(bytes, text_offset);
            }
            TC_LONGSTRING => {
                let length = reader.read_u64()?;
                let length = usize::try_from(length)
                    .map_err(|_| ObjStreamError::UnexpectedEof { offset: tag_offset })?;
                let text_offset = reader.offset();
                let bytes = reader.read_bytes(length)?;
                return decode_modified_utf8(bytes, text_offset);
            }
            TC_BLOCKDATA => {
                let length = reader.read_u8()? as usize;
                reader.read_bytes(length)?;
            }
            TC_BLOCKDATALONG => {
                let length = reader.read_u32()? as usize;
                reader.read_bytes(length)?;
            }
            TC_RESET => {}
            tag => {
                return Err(ObjStreamError::UnsupportedTag {
                    tag,
                    offset: tag_offset,
                });
            }
        }
    }
}

/// Decode Java modified UTF-8 into a String.
///
/// `base` is the absolute stream offset of `bytes`, used in error
/// positions.
fn decode_modified_utf8(bytes: &[u8], base: usize) -> Result<String, ObjStreamError> {
    let mut text = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b0 = bytes[i];
        if b0 & 0x80 == 0 {
            text.push(b0 as char);
            i += 1;
        } else if b0 & 0xE0 == 0xC0 {
            // Two-byte form; also covers the overlong NUL pair 0xC0 0x80
            let b1 = continuation(bytes, i + 1, base)?;
            let code = (u32::from(b0 & 0x1F) << 6) | u32::from(b1);
            text.push(char::from_u32(code).ok_or(ObjStreamError::InvalidUtf8 { offset: base + i })?);
            i += 2;
        } else if b0 & 0xF0 == 0xE0 {
            let b1 = continuation(bytes, i + 1, base)?;
            let b2 = continuation(bytes, i + 2, base)?;
            let unit = (u32::from(b0 & 0x0F) << 12) | (u32::from(b1) << 6) | u32::from(b2);
            if (0xD800..=0xDBFF).contains(&unit) {
                // High surrogate: a second 3-byte low surrogate must follow
                let low = read_low_surrogate(bytes, i + 3, base)?;
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                text.push(
                    char::from_u32(code).ok_or(ObjStreamError::InvalidUtf8 { offset: base + i })?,
                );
                i += 6;
            } else if (0xDC00..=0xDFFF).contains(&unit) {
                // Unpaired low surrogate
                return Err(ObjStreamError::InvalidUtf8 { offset: base + i });
            } else {
                text.push(
                    char::from_u32(unit).ok_or(ObjStreamError::InvalidUtf8 { offset: base + i })?,
                );
                i += 3;
            }
        } else {
            // 4-byte sequences never appear in modified UTF-8
            return Err(ObjStreamError::InvalidUtf8 { offset: base + i });
        }
    }

    Ok(text)
}

/// Read one continuation byte (10xxxxxx) and return its payload bits
fn continuation(bytes: &[u8], index: usize, base: usize) -> Result<u8, ObjStreamError> {
    match bytes.get(index) {
        Some(&b) if b & 0xC0 == 0x80 => Ok(b & 0x3F),
        _ => Err(ObjStreamError::InvalidUtf8 {
            offset: base + index,
        }),
    }
}

/// Read a 3-byte low surrogate (0xDC00-0xDFFF) and return its code unit
fn read_low_surrogate(bytes: &[u8], index: usize, base: usize) -> Result<u32, ObjStreamError> {
    let b0 = *bytes.get(index).ok_or(ObjStreamError::InvalidUtf8 {
        offset: base + index,
    })?;
    if b0 & 0xF0 != 0xE0 {
        return Err(ObjStreamError::InvalidUtf8 {
            offset: base + index,
        });
    }
    let b1 = continuation(bytes, index + 1, base)?;
    let b2 = continuation(bytes, index + 2, base)?;
    let unit = (u32::from(b0 & 0x0F) << 12) | (u32::from(b1) << 6) | u32::from(b2);
    if !(0xDC00..=0xDFFF).contains(&unit) {
        return Err(ObjStreamError::InvalidUtf8 {
            offset: base + index,
        });
    }
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(content: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0xAC, 0xED, 0x00, 0x05];
        bytes.extend_from_slice(content);
        bytes
    }

    fn string_stream(utf: &[u8]) -> Vec<u8> {
        let mut content = vec![TC_STRING];
        content.extend_from_slice(&(utf.len() as u16).to_be_bytes());
        content.extend_from_slice(utf);
        stream(&content)
    }

    #[test]
    fn test_read_short_string() {
        let payload = string_stream(b"meta:\n  display-name: Apple\n");
        assert_eq!(
            read_string(&payload).unwrap(),
            "meta:\n  display-name: Apple\n"
        );
    }

    #[test]
    fn test_read_empty_string() {
        let payload = string_stream(b"");
        assert_eq!(read_string(&payload).unwrap(), "");
    }

    #[test]
    fn test_read_long_string() {
        let text = "x".repeat(300);
        let mut content = vec![TC_LONGSTRING];
        content.extend_from_slice(&(text.len() as u64).to_be_bytes());
        content.extend_from_slice(text.as_bytes());
        let payload = stream(&content);
        assert_eq!(read_string(&payload).unwrap(), text);
    }

    #[test]
    fn test_block_data_is_skipped() {
        let mut content = vec![TC_BLOCKDATA, 3, 0xDE, 0xAD, 0xBE];
        content.push(TC_STRING);
        content.extend_from_slice(&5u16.to_be_bytes());
        content.extend_from_slice(b"hello");
        let payload = stream(&content);
        assert_eq!(read_string(&payload).unwrap(), "hello");
    }

    #[test]
    fn test_reset_is_ignored() {
        let mut content = vec![TC_RESET];
        content.push(TC_STRING);
        content.extend_from_slice(&2u16.to_be_bytes());
        content.extend_from_slice(b"ok");
        let payload = stream(&content);
        assert_eq!(read_string(&payload).unwrap(), "ok");
    }

    #[test]
    fn test_bad_magic() {
        let payload = [0xCA, 0xFE, 0x00, 0x05, TC_STRING, 0, 0];
        assert!(matches!(
            read_string(&payload),
            Err(ObjStreamError::BadMagic(0xCAFE))
        ));
    }

    #[test]
    fn test_bad_version() {
        let payload = [0xAC, 0xED, 0x00, 0x09, TC_STRING, 0, 0];
        assert!(matches!(
            read_string(&payload),
            Err(ObjStreamError::BadVersion(9))
        ));
    }

    #[test]
    fn test_object_graph_rejected() {
        // TC_OBJECT (0x73) is outside the supported subset
        let payload = stream(&[0x73, 0x72]);
        assert!(matches!(
            read_string(&payload),
            Err(ObjStreamError::UnsupportedTag { tag: 0x73, .. })
        ));
    }

    #[test]
    fn test_missing_string() {
        let payload = stream(&[]);
        assert!(matches!(
            read_string(&payload),
            Err(ObjStreamError::MissingString)
        ));
    }

    #[test]
    fn test_truncated_string() {
        let mut content = vec![TC_STRING];
        content.extend_from_slice(&10u16.to_be_bytes());
        content.extend_from_slice(b"abc");
        let payload = stream(&content);
        assert!(matches!(
            read_string(&payload),
            Err(ObjStreamError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            read_string(&[0xAC]),
            Err(ObjStreamError::UnexpectedEof { .. })
        ));
    }

    // Modified UTF-8 specifics
    mod utf8_tests {
        use super::*;

        #[test]
        fn test_overlong_nul() {
            let payload = string_stream(&[b'a', 0xC0, 0x80, b'b']);
            assert_eq!(read_string(&payload).unwrap(), "a\0b");
        }

        #[test]
        fn test_two_and_three_byte_forms() {
            // "é" = C3 A9, "€" = E2 82 AC
            let payload = string_stream(&[0xC3, 0xA9, 0xE2, 0x82, 0xAC]);
            assert_eq!(read_string(&payload).unwrap(), "é€");
        }

        #[test]
        fn test_surrogate_pair() {
            // U+1D11E (musical G clef) as a CESU-8 pair
            let payload = string_stream(&[0xED, 0xA0, 0xB4, 0xED, 0xB4, 0x9E]);
            assert_eq!(read_string(&payload).unwrap(), "\u{1D11E}");
        }

        #[test]
        fn test_unpaired_low_surrogate() {
            let payload = string_stream(&[0xED, 0xB4, 0x9E]);
            assert!(matches!(
                read_string(&payload),
                Err(ObjStreamError::InvalidUtf8 { .. })
            ));
        }

        #[test]
        fn test_high_surrogate_without_low() {
            let payload = string_stream(&[0xED, 0xA0, 0xB4, b'x']);
            assert!(matches!(
                read_string(&payload),
                Err(ObjStreamError::InvalidUtf8 { .. })
            ));
        }

        #[test]
        fn test_four_byte_sequence_rejected() {
            // Standard UTF-8 for U+1D11E; modified UTF-8 never emits this
            let payload = string_stream(&[0xF0, 0x9D, 0x84, 0x9E]);
            assert!(matches!(
                read_string(&payload),
                Err(ObjStreamError::InvalidUtf8 { .. })
            ));
        }

        #[test]
        fn test_truncated_continuation() {
            let payload = string_stream(&[0xC3]);
            assert!(matches!(
                read_string(&payload),
                Err(ObjStreamError::InvalidUtf8 { .. })
            ));
        }
    }
}
