use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use bytes::BytesMut;

/// Presentation of key/body bytes. Payloads are never interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Format {
    String,
    Hex,
    Base64,
}

impl Format {
    pub fn render(&self, bytes: &[u8]) -> String {
        match self {
            Format::String => String::from_utf8_lossy(bytes).to_string(),
            Format::Hex => format!("{:02X}", BytesMut::from(bytes)),
            Format::Base64 => BASE64_STANDARD.encode(bytes),
        }
    }
}
