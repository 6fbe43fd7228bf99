//! Flyweight views, one per AMQP type
//!
//! Every view follows the same contract:
//!
//! - `wrap(buffer, offset)` binds the view without looking at the bytes
//! - `set(value)` picks the smallest encoding, writes format code and payload and
//!   notifies the watcher
//! - `get()` validates the format code and decodes the payload
//! - `limit()` returns the index right after the encoded value, computed from the
//!   format code that is actually present in the buffer

use crate::{
    buffer::Flyweight, error::Error, fixed_width::FORMAT_CODE_WIDTH, format_code::EncodingCodes,
};

mod array;
mod boolean;
mod character;
mod fixed;
mod header;
mod int;
mod list;
mod map;
mod null;
mod uint;
mod variable;

pub use self::array::*;
pub use self::boolean::*;
pub use self::character::*;
pub use self::fixed::*;
pub use self::int::*;
pub use self::list::*;
pub use self::map::*;
pub use self::null::*;
pub use self::uint::*;
pub use self::variable::*;

/// Returns the index of the first payload byte if the view starts with `code`
pub(crate) fn expect_code<B, W>(fw: &Flyweight<B, W>, code: EncodingCodes) -> Result<usize, Error>
where
    B: AsRef<[u8]>,
{
    let found = fw.format_code()?;
    if found == code as u8 {
        Ok(fw.offset() + FORMAT_CODE_WIDTH)
    } else {
        Err(Error::InvalidFormatCode(found))
    }
}
