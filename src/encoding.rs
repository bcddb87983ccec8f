//! Text encodings for template sources and rendered output.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::SUPPORTED_ENCODINGS;
use crate::error::{Error, Result};

/// Encoding applied when reading templates and writing rendered files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl Encoding {
    /// Canonical label of the encoding.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decodes raw template bytes into text.
    ///
    /// # Errors
    /// * `Error::EncodingError` if the bytes are not valid in this encoding
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
                Error::EncodingError(format!(
                    "invalid utf-8 at byte {}",
                    e.utf8_error().valid_up_to()
                ))
            }),
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(Error::EncodingError(format!(
                    "non-ascii byte 0x{:02x} at byte {}",
                    bytes[pos], pos
                ))),
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
            },
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encodes rendered text into bytes.
    ///
    /// # Errors
    /// * `Error::EncodingError` if a character has no representation in this encoding
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let limit = match self {
            Encoding::Utf8 => return Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => 0x7f,
            Encoding::Latin1 => 0xff,
        };
        text.chars()
            .map(|c| {
                u8::try_from(c as u32)
                    .ok()
                    .filter(|&b| u32::from(b) <= limit)
                    .ok_or_else(|| {
                        Error::EncodingError(format!(
                            "character {:?} cannot be encoded as {}",
                            c,
                            self.label()
                        ))
                    })
            })
            .collect()
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            other => Err(Error::ConfigError(format!(
                "unknown encoding '{}' (supported: {})",
                other,
                SUPPORTED_ENCODINGS.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

