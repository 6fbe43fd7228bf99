//! Custom error

use std::io;

/// Errors raised while handling protocol headers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a view failed
    #[error("Codec error: {0}")]
    Codec(#[from] amqp_codec::Error),

    /// IO error
    #[error("IO Error {0:?}")]
    Io(#[from] io::Error),

    /// The bytes are not an AMQP protocol header
    #[error("Protocol header mismatch {0:?}")]
    ProtocolHeaderMismatch([u8; 8]),
}
