// SPDX-License-Identifier: MPL-2.0
//! Reading resolved media URIs back into bytes for the native renderer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Borrowed view of a `data:<type>;base64,<payload>` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub content_type: &'a str,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Splits a base64 data URI. Returns `None` for any other URI shape.
    #[must_use]
    pub fn parse(uri: &'a str) -> Option<Self> {
        let rest = uri.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;
        let content_type = header.strip_suffix(";base64")?;
        Some(Self {
            content_type,
            payload,
        })
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/")
    }

    /// Decodes the payload. Whitespace from line-wrapped encoders is tolerated.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.payload.bytes().any(|b| b.is_ascii_whitespace()) {
            let compact: String = self
                .payload
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            STANDARD.decode(compact)
        } else {
            STANDARD.decode(self.payload)
        }
    }
}
