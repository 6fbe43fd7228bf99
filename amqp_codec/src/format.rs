//! Encoding categories of the format codes

use std::convert::TryFrom;

use crate::{
    error::Error,
    fixed_width::{NARROW_WIDTH, WIDE_WIDTH},
    format_code::EncodingCodes,
};

/// How the payload after a format code is laid out
///
/// For compound and array encodings `size` counts the `count` field and the body,
/// but not the `size` field itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Fixed width payload of the given number of bytes
    Fixed(usize),

    /// Length prefixed payload, the length field has the given width
    Variable(usize),

    /// List or map, `size` and `count` have the given width
    Compound(usize),

    /// Array, `size` and `count` have the given width
    Array(usize),
}

impl Category {
    /// Number of bytes taken by the payload that directly follows the format code
    ///
    /// `payload` must start right after the format code.
    pub fn payload_len(&self, payload: &[u8]) -> Result<usize, Error> {
        match *self {
            Category::Fixed(width) => Ok(width),
            Category::Variable(width) | Category::Compound(width) | Category::Array(width) => {
                let len = read_len(payload, width)?;
                Ok(width + len)
            }
        }
    }
}

fn read_len(payload: &[u8], width: usize) -> Result<usize, Error> {
    let bytes = payload
        .get(..width)
        .ok_or_else(|| Error::out_of_bounds(0, width))?;
    match width {
        NARROW_WIDTH => Ok(bytes[0] as usize),
        WIDE_WIDTH => {
            let mut buf = [0u8; WIDE_WIDTH];
            buf.copy_from_slice(bytes);
            Ok(u32::from_be_bytes(buf) as usize)
        }
        _ => Err(Error::InvalidLength),
    }
}

impl From<EncodingCodes> for Category {
    fn from(value: EncodingCodes) -> Self {
        match value {
            EncodingCodes::Null => Category::Fixed(0),

            EncodingCodes::Boolean => Category::Fixed(1),
            EncodingCodes::BooleanTrue => Category::Fixed(0),
            EncodingCodes::BooleanFalse => Category::Fixed(0),

            // u8
            EncodingCodes::Ubyte => Category::Fixed(1),

            // u16
            EncodingCodes::Ushort => Category::Fixed(2),

            // u32
            EncodingCodes::Uint => Category::Fixed(4),
            EncodingCodes::SmallUint => Category::Fixed(1),
            EncodingCodes::Uint0 => Category::Fixed(0),

            // u64
            EncodingCodes::Ulong => Category::Fixed(8),
            EncodingCodes::SmallUlong => Category::Fixed(1),
            EncodingCodes::Ulong0 => Category::Fixed(0),

            // i8
            EncodingCodes::Byte => Category::Fixed(1),

            // i16
            EncodingCodes::Short => Category::Fixed(2),

            // i32
            EncodingCodes::Int => Category::Fixed(4),
            EncodingCodes::SmallInt => Category::Fixed(1),

            // i64
            EncodingCodes::Long => Category::Fixed(8),
            EncodingCodes::SmallLong => Category::Fixed(1),

            // f32
            EncodingCodes::Float => Category::Fixed(4),

            // f64
            EncodingCodes::Double => Category::Fixed(8),

            EncodingCodes::Decimal32 => Category::Fixed(4),
            EncodingCodes::Decimal64 => Category::Fixed(8),
            EncodingCodes::Decimal128 => Category::Fixed(16),

            EncodingCodes::Char => Category::Fixed(4),

            EncodingCodes::Timestamp => Category::Fixed(8),

            EncodingCodes::Uuid => Category::Fixed(16),

            EncodingCodes::Vbin8 => Category::Variable(1),
            EncodingCodes::Vbin32 => Category::Variable(4),

            EncodingCodes::Str8 => Category::Variable(1),
            EncodingCodes::Str32 => Category::Variable(4),

            EncodingCodes::Sym8 => Category::Variable(1),
            EncodingCodes::Sym32 => Category::Variable(4),

            EncodingCodes::List0 => Category::Fixed(0),
            EncodingCodes::List8 => Category::Compound(1),
            EncodingCodes::List32 => Category::Compound(4),

            EncodingCodes::Map8 => Category::Compound(1),
            EncodingCodes::Map32 => Category::Compound(4),

            EncodingCodes::Array8 => Category::Array(1),
            EncodingCodes::Array32 => Category::Array(4),
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EncodingCodes::try_from(value).map(Category::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_payload_ignores_bytes() {
        let category = Category::from(EncodingCodes::Uuid);
        assert_eq!(category.payload_len(&[]), Ok(16));
    }

    #[test]
    fn variable_payload_reads_length() {
        let category = Category::from(EncodingCodes::Str8);
        assert_eq!(category.payload_len(&[3, b'a', b'b', b'c']), Ok(4));

        let category = Category::from(EncodingCodes::Vbin32);
        assert_eq!(category.payload_len(&[0, 0, 1, 0]), Ok(4 + 256));
    }

    #[test]
    fn truncated_length_field() {
        let category = Category::from(EncodingCodes::List32);
        assert!(category.payload_len(&[0, 0]).is_err());
    }
}
