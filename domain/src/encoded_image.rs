use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use std::fmt;

use crate::error::{DomainError, DomainResult};

pub const PNG_MIME_TYPE: &str = "image/png";

/// Base64 text of a PNG file, owned by the request in flight.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    #[must_use]
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self(BASE64.encode(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{PNG_MIME_TYPE};base64,{}", self.0)
    }

    pub fn decode_bytes(&self) -> DomainResult<Vec<u8>> {
        BASE64
            .decode(&self.0)
            .map_err(|e| DomainError::InvalidEncodedImage(e.to_string()))
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedImage({} base64 chars)", self.0.len())
    }
}
