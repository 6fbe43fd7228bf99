//! Custom error

/// Errors raised while reading or writing through a view
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The format code is not one of the codes accepted by the view
    #[error("Invalid format code 0x{0:02x}")]
    InvalidFormatCode(u8),

    /// The value does not fit in the width already selected by the format code
    #[error("Magnitude {0} is not supported by the selected width")]
    UnsupportedMagnitude(u32),

    /// The view reaches past the end of the buffer
    #[error("Out of bounds: {len} byte(s) at offset {offset}")]
    OutOfBounds {
        /// Absolute index of the first byte accessed
        offset: usize,

        /// Number of bytes accessed
        len: usize,
    },

    /// Found invalid UTF-8 encoding
    #[error("Invalid UTF-8 encoding")]
    InvalidUtf8Encoding,

    /// Invalid value
    #[error("Invalid value")]
    InvalidValue,

    /// Length is invalid
    #[error("Invalid length")]
    InvalidLength,
}

impl Error {
    pub(crate) fn out_of_bounds(offset: usize, len: usize) -> Self {
        Self::OutOfBounds { offset, len }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(_: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8Encoding
    }
}
