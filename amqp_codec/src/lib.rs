#![warn(missing_docs, missing_debug_implementations)]

//! Zero-copy views over AMQP 1.0 encoded values
//!
//! Every AMQP type has a view in [`types`] that reads and writes the value at an
//! offset of a caller owned buffer without copying it. [`dynamic::DynamicType`]
//! finds out which type is present at an offset and where it ends.
//!
//! ```rust
//! use amqp_codec::{dynamic::DynamicType, format_code::Kind, types::ULongType};
//!
//! let mut buffer = [0u8; 16];
//! ULongType::wrap(&mut buffer[..], 0).set(12345678).unwrap();
//!
//! let value = DynamicType::wrap(&buffer[..], 0);
//! assert_eq!(value.kind(), Ok(Kind::ULong));
//! assert_eq!(value.limit(), Ok(9));
//! ```

// Public mods
pub mod buffer;
pub mod dynamic;
pub mod error;
pub mod format;
pub mod format_code;
pub mod primitives;
pub mod types;

// Private mods
pub(crate) mod fixed_width;

pub use error::Error;

/// Commonly used items
pub mod prelude {
    pub use super::buffer::{Change, NoWatch, Watcher};
    pub use super::dynamic::DynamicType;
    pub use super::format_code::{EncodingCodes, Kind};
    pub use super::types::*;
    pub use super::Error;
}
