use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::Encoding;

pub const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
pub const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Returns the endianness announced by a leading utf-16 byte order mark.
pub fn detect_bom(bytes: &[u8]) -> Option<Endian> {
    if bytes.starts_with(&BOM_UTF16_BE) {
        Some(Endian::Big)
    } else if bytes.starts_with(&BOM_UTF16_LE) {
        Some(Endian::Little)
    } else {
        None
    }
}

pub fn has_utf16_bom(bytes: &[u8]) -> bool {
    detect_bom(bytes).is_some()
}

/// Decodes `bytes` as `encoding`, silently dropping anything invalid.
pub fn decode_lossy(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => decode_utf8_lossy(bytes),
        Encoding::Utf16 => decode_utf16_lossy(bytes),
    }
}

fn decode_utf8_lossy(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len());
    let mut dropped = 0usize;

    for chunk in bytes.utf8_chunks() {
        result.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} invalid utf-8 bytes");
    }

    result
}

fn decode_utf16_lossy(bytes: &[u8]) -> String {
    // The BOM picks the byte order and is not part of the text.
    // Without one, fall back to little endian.
    let (units, payload_len) = match detect_bom(bytes) {
        Some(Endian::Big) => (read_units::<BigEndian>(&bytes[2..]), bytes.len() - 2),
        Some(Endian::Little) => (read_units::<LittleEndian>(&bytes[2..]), bytes.len() - 2),
        None => (read_units::<LittleEndian>(bytes), bytes.len()),
    };

    if payload_len % 2 != 0 {
        log::debug!("dropped trailing odd byte from utf-16 data");
    }

    let mut result = String::with_capacity(units.len());
    let mut dropped = 0usize;

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => result.push(ch),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} unpaired utf-16 surrogates");
    }

    result
}

fn read_units<E: ByteOrder>(bytes: &[u8]) -> Vec<u16> {
    let mut cursor = Cursor::new(bytes);
    let mut units = Vec::with_capacity(bytes.len() / 2);

    // Stops at end of data, which also discards a trailing odd byte
    while let Ok(unit) = cursor.read_u16::<E>() {
        units.push(unit);
    }

    units
}
