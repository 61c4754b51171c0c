//! Base64 payload validation.
//!
//! Every raw symbol is classified as [`Validation::Validated`] or
//! [`Validation::Invalid`]. Invalid symbols never reach the output, but the
//! reason is kept so callers (and the diagnose tool) can see why.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::models::RawDecodeResult;

/// Why a raw payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPayload {
    /// Raw bytes are not text, so they cannot be base64
    #[error("payload is not UTF-8 text")]
    NotText,
    /// Text is not standard padded base64
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Base64 decoded to bytes that are not UTF-8 text
    #[error("decoded payload is not UTF-8 text")]
    DecodedNotText,
}

/// A payload whose raw text is standard base64 encoding UTF-8 text
///
/// Only [`validate`] can build one, so holding a value proves the raw text
/// decoded successfully to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayload {
    encoded: String,
    decoded: String,
}

impl ValidatedPayload {
    /// Base64 text exactly as read from the symbol
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decoded payload bytes
    pub fn decoded(&self) -> &[u8] {
        self.decoded.as_bytes()
    }

    /// Decoded payload text
    pub fn text(&self) -> &str {
        &self.decoded
    }
}

/// Result of validating one detected symbol
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Payload decoded as base64
    Validated(ValidatedPayload),
    /// Payload rejected; carries the original symbol and the cause
    Invalid {
        /// The symbol as reported by the detector
        raw: RawDecodeResult,
        /// Reason for rejection
        cause: InvalidPayload,
    },
}

impl Validation {
    /// The validated payload, if any
    pub fn payload(&self) -> Option<&ValidatedPayload> {
        match self {
            Validation::Validated(p) => Some(p),
            Validation::Invalid { .. } => None,
        }
    }

    /// True for [`Validation::Validated`]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Validated(_))
    }
}

/// Check that a symbol's bytes are standard base64 and decode them
pub fn validate(raw: RawDecodeResult) -> Validation {
    let text = match std::str::from_utf8(&raw.data) {
        Ok(text) => text,
        Err(_) => {
            log::debug!("discarding {}-byte payload: not UTF-8", raw.data.len());
            return Validation::Invalid {
                raw,
                cause: InvalidPayload::NotText,
            };
        }
    };

    let decoded = match STANDARD.decode(text) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::debug!("discarding payload {:?}: {}", text, err);
            return Validation::Invalid {
                raw,
                cause: err.into(),
            };
        }
    };

    match String::from_utf8(decoded) {
        Ok(decoded) => Validation::Validated(ValidatedPayload {
            encoded: text.to_owned(),
            decoded,
        }),
        Err(_) => {
            log::debug!("discarding payload {:?}: decodes to non-UTF-8 bytes", text);
            Validation::Invalid {
                raw,
                cause: InvalidPayload::DecodedNotText,
            }
        }
    }
}

/// Validate every symbol, keeping detector order
pub fn validate_all(raws: Vec<RawDecodeResult>) -> Vec<Validation> {
    raws.into_iter().map(validate).collect()
}
