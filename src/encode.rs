use byteorder::{ByteOrder, LittleEndian};

use crate::Encoding;
use crate::decode::BOM_UTF16_LE;

/// Encodes `text` as `encoding`.
///
/// utf-16 output is little endian and always starts with a byte order mark.
/// utf-8 output carries no mark.
pub fn encode_lossy(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Utf16 => encode_utf16(text),
    }
}

fn encode_utf16(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();

    let mut buffer = vec![0u8; BOM_UTF16_LE.len() + units.len() * 2];
    let (bom, body) = buffer.split_at_mut(BOM_UTF16_LE.len());
    bom.copy_from_slice(&BOM_UTF16_LE);
    LittleEndian::write_u16_into(&units, body);

    buffer
}
