use alloc::string::String;
use core::fmt;

use crate::info::ImageDimensions;

/// Status code reported by the codec, passed through verbatim.
///
/// The code space belongs to libwebp (`VP8StatusCode`); this crate never
/// reinterprets it beyond looking up a name for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeStatus(pub i32);

impl DecodeStatus {
    /// The raw status value.
    pub fn code(self) -> i32 {
        self.0
    }

    /// libwebp's symbolic name for this status, if it is one it defines.
    pub fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "VP8_STATUS_OK",
            1 => "VP8_STATUS_OUT_OF_MEMORY",
            2 => "VP8_STATUS_INVALID_PARAM",
            3 => "VP8_STATUS_BITSTREAM_ERROR",
            4 => "VP8_STATUS_UNSUPPORTED_FEATURE",
            5 => "VP8_STATUS_SUSPENDED",
            6 => "VP8_STATUS_USER_ABORT",
            7 => "VP8_STATUS_NOT_ENOUGH_DATA",
            _ => return None,
        })
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "unknown status {}", self.0),
        }
    }
}

/// Errors from probing and decoding WebP data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WebpError {
    #[error("invalid WebP header")]
    MalformedHeader,

    #[error("decoder config initialization failed (libwebp ABI mismatch?)")]
    ConfigInitFailed,

    #[error("reading bitstream features failed: {status}")]
    UnsupportedFeatures { status: DecodeStatus },

    #[error("bitstream is {actual:?} but {probed:?} was requested")]
    DimensionsMismatch {
        probed: ImageDimensions,
        actual: ImageDimensions,
    },

    #[error("decode failed: {status}")]
    DecodeFailed { status: DecodeStatus },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn status_names() {
        assert_eq!(DecodeStatus(3).name(), Some("VP8_STATUS_BITSTREAM_ERROR"));
        assert_eq!(DecodeStatus(42).name(), None);
        assert_eq!(
            DecodeStatus(7).to_string(),
            "VP8_STATUS_NOT_ENOUGH_DATA (7)"
        );
        assert_eq!(DecodeStatus(-1).to_string(), "unknown status -1");
    }

    #[test]
    fn decode_failed_keeps_status() {
        let err = WebpError::DecodeFailed {
            status: DecodeStatus(4),
        };
        assert!(err.to_string().contains("VP8_STATUS_UNSUPPORTED_FEATURE"));
        match err {
            WebpError::DecodeFailed { status } => assert_eq!(status.code(), 4),
            other => panic!("unexpected {other:?}"),
        }
    }
}
