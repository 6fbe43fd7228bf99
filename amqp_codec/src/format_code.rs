//! Encoding codes of AMQP types

use std::{convert::TryFrom, fmt::Display};

use crate::error::Error;

/// Encoding code for different types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum EncodingCodes {
    Null = 0x40,

    Boolean = 0x56,
    BooleanTrue = 0x41,
    BooleanFalse = 0x42,

    /// u8
    Ubyte = 0x50,

    /// u16
    Ushort = 0x60,

    /// u32
    Uint = 0x70,
    SmallUint = 0x52,
    Uint0 = 0x43,

    /// u64
    Ulong = 0x80,
    SmallUlong = 0x53,
    Ulong0 = 0x44,

    /// i8
    Byte = 0x51,

    /// i16
    Short = 0x61,

    ///i32
    Int = 0x71,
    SmallInt = 0x54,

    /// i64
    Long = 0x81,
    SmallLong = 0x55,

    /// f32
    Float = 0x72,

    /// f64
    Double = 0x82,

    Decimal32 = 0x74,

    Decimal64 = 0x84,

    Decimal128 = 0x94,

    Char = 0x73,

    Timestamp = 0x83,

    Uuid = 0x98,

    // Binary
    Vbin8 = 0xa0,
    Vbin32 = 0xb0,

    // String
    Str8 = 0xa1,
    Str32 = 0xb1,

    // A special version of String
    Sym8 = 0xa3,
    Sym32 = 0xb3,

    List0 = 0x45,
    List8 = 0xc0,
    List32 = 0xd0,

    Map8 = 0xc1,
    Map32 = 0xd1,

    Array8 = 0xe0,
    Array32 = 0xf0,
}

impl Display for EncodingCodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}:0x{:x}", self, *self as u8)
    }
}

impl From<EncodingCodes> for u8 {
    fn from(code: EncodingCodes) -> Self {
        code as u8
    }
}

impl TryFrom<u8> for EncodingCodes {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let code = match value {
            0x40 => EncodingCodes::Null,

            0x56 => EncodingCodes::Boolean,
            0x41 => EncodingCodes::BooleanTrue,
            0x42 => EncodingCodes::BooleanFalse,

            // u8
            0x50 => EncodingCodes::Ubyte,

            // u16
            0x60 => EncodingCodes::Ushort,

            // u32
            0x70 => EncodingCodes::Uint,
            0x52 => EncodingCodes::SmallUint,
            0x43 => EncodingCodes::Uint0,

            // u64
            0x80 => EncodingCodes::Ulong,
            0x53 => EncodingCodes::SmallUlong,
            0x44 => EncodingCodes::Ulong0,

            // i8
            0x51 => EncodingCodes::Byte,

            // i16
            0x61 => EncodingCodes::Short,

            // i32
            0x71 => EncodingCodes::Int,
            0x54 => EncodingCodes::SmallInt,

            // i64
            0x81 => EncodingCodes::Long,
            0x55 => EncodingCodes::SmallLong,

            // f32
            0x72 => EncodingCodes::Float,

            // f64
            0x82 => EncodingCodes::Double,

            0x74 => EncodingCodes::Decimal32,
            0x84 => EncodingCodes::Decimal64,
            0x94 => EncodingCodes::Decimal128,

            0x73 => EncodingCodes::Char,

            0x83 => EncodingCodes::Timestamp,

            0x98 => EncodingCodes::Uuid,

            0xa0 => EncodingCodes::Vbin8,
            0xb0 => EncodingCodes::Vbin32,

            0xa1 => EncodingCodes::Str8,
            0xb1 => EncodingCodes::Str32,

            0xa3 => EncodingCodes::Sym8,
            0xb3 => EncodingCodes::Sym32,

            0x45 => EncodingCodes::List0,
            0xc0 => EncodingCodes::List8,
            0xd0 => EncodingCodes::List32,

            0xc1 => EncodingCodes::Map8,
            0xd1 => EncodingCodes::Map32,

            0xe0 => EncodingCodes::Array8,
            0xf0 => EncodingCodes::Array32,

            _ => return Err(Error::InvalidFormatCode(value)),
        };

        Ok(code)
    }
}

/// The AMQP type a format code belongs to
///
/// Every [`EncodingCodes`] maps to exactly one kind. Several codes (the different
/// widths of the same type) may map to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Kind {
    Array,
    Binary,
    Boolean,
    Byte,
    Char,
    Decimal32,
    Decimal64,
    Decimal128,
    Double,
    Float,
    Int,
    List,
    Long,
    Map,
    Null,
    Short,
    String,
    Symbol,
    Timestamp,
    UByte,
    UInt,
    ULong,
    UShort,
    Uuid,
}

impl From<EncodingCodes> for Kind {
    fn from(code: EncodingCodes) -> Self {
        match code {
            EncodingCodes::Null => Kind::Null,

            EncodingCodes::Boolean | EncodingCodes::BooleanTrue | EncodingCodes::BooleanFalse => {
                Kind::Boolean
            }

            EncodingCodes::Ubyte => Kind::UByte,
            EncodingCodes::Ushort => Kind::UShort,
            EncodingCodes::Uint | EncodingCodes::SmallUint | EncodingCodes::Uint0 => Kind::UInt,
            EncodingCodes::Ulong | EncodingCodes::SmallUlong | EncodingCodes::Ulong0 => {
                Kind::ULong
            }

            EncodingCodes::Byte => Kind::Byte,
            EncodingCodes::Short => Kind::Short,
            EncodingCodes::Int | EncodingCodes::SmallInt => Kind::Int,
            EncodingCodes::Long | EncodingCodes::SmallLong => Kind::Long,

            EncodingCodes::Float => Kind::Float,
            EncodingCodes::Double => Kind::Double,

            EncodingCodes::Decimal32 => Kind::Decimal32,
            EncodingCodes::Decimal64 => Kind::Decimal64,
            EncodingCodes::Decimal128 => Kind::Decimal128,

            EncodingCodes::Char => Kind::Char,
            EncodingCodes::Timestamp => Kind::Timestamp,
            EncodingCodes::Uuid => Kind::Uuid,

            EncodingCodes::Vbin8 | EncodingCodes::Vbin32 => Kind::Binary,
            EncodingCodes::Str8 | EncodingCodes::Str32 => Kind::String,
            EncodingCodes::Sym8 | EncodingCodes::Sym32 => Kind::Symbol,

            EncodingCodes::List0 | EncodingCodes::List8 | EncodingCodes::List32 => Kind::List,
            EncodingCodes::Map8 | EncodingCodes::Map32 => Kind::Map,
            EncodingCodes::Array8 | EncodingCodes::Array32 => Kind::Array,
        }
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EncodingCodes::try_from(value).map(Kind::from)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{EncodingCodes, Kind};
    use crate::error::Error;

    #[test]
    fn debug_encoding_codes() {
        let code = EncodingCodes::Null;
        assert_eq!(code as u8, 0x40);
    }

    #[test]
    fn print_encoding_codes() {
        let code = EncodingCodes::Boolean;
        assert_eq!(code.to_string(), "Boolean:0x56");
    }

    #[test]
    fn every_code_survives_try_from() {
        for byte in 0..=u8::MAX {
            if let Ok(code) = EncodingCodes::try_from(byte) {
                assert_eq!(code as u8, byte);
            }
        }
    }

    #[test]
    fn described_constructor_is_rejected() {
        assert_eq!(
            EncodingCodes::try_from(0x00),
            Err(Error::InvalidFormatCode(0x00))
        );
        assert_eq!(Kind::try_from(0x00), Err(Error::InvalidFormatCode(0x00)));
    }

    #[test]
    fn widths_of_same_type_share_a_kind() {
        assert_eq!(Kind::try_from(0x44), Ok(Kind::ULong));
        assert_eq!(Kind::try_from(0x53), Ok(Kind::ULong));
        assert_eq!(Kind::try_from(0x80), Ok(Kind::ULong));
        assert_eq!(Kind::try_from(0x45), Ok(Kind::List));
        assert_eq!(Kind::try_from(0xc0), Ok(Kind::List));
        assert_eq!(Kind::try_from(0xd0), Ok(Kind::List));
        assert_eq!(Kind::try_from(0xe0), Ok(Kind::Array));
        assert_eq!(Kind::try_from(0xf0), Ok(Kind::Array));
    }
}
