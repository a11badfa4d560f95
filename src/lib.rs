pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;

pub use convert::{Outcome, SourceReport, convert_file, convert_source, convert_sources};
pub use decode::{Endian, decode_lossy, detect_bom, has_utf16_bom};
pub use encode::encode_lossy;
pub use error::ConvertError;

// Define common types used across modules
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf-8"),
            Encoding::Utf16 => f.write_str("utf-16"),
        }
    }
}

/// Which way files are converted. Fixed for the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// utf-16 to utf-8
    #[default]
    ToUtf8,
    /// utf-8 to utf-16
    ToUtf16,
}

impl Direction {
    pub fn target_is_utf8(self) -> bool {
        self == Direction::ToUtf8
    }

    pub fn source_encoding(self) -> Encoding {
        match self {
            Direction::ToUtf8 => Encoding::Utf16,
            Direction::ToUtf16 => Encoding::Utf8,
        }
    }

    pub fn target_encoding(self) -> Encoding {
        match self {
            Direction::ToUtf8 => Encoding::Utf8,
            Direction::ToUtf16 => Encoding::Utf16,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub direction: Direction,
    pub verbose: u8,
}
