//! Types that have exactly one fixed width encoding

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::{
        BYTE_WIDTH, DECIMAL128_WIDTH, DECIMAL32_WIDTH, DECIMAL64_WIDTH, DOUBLE_WIDTH, FLOAT_WIDTH,
        SHORT_WIDTH, TIMESTAMP_WIDTH, UBYTE_WIDTH, USHORT_WIDTH, UUID_WIDTH,
    },
    format_code::{EncodingCodes, Kind},
    primitives::{Dec128, Dec32, Dec64, Timestamp, Uuid},
};

use super::expect_code;

macro_rules! fixed {
    (
        $(#[$meta:meta])*
        $name:ident: $value:ty => $kind:ident, $code:ident, $width:ident,
        encode = |$v:ident| $encode:expr,
        decode = $decode:expr
    ) => {
        flyweight! {
            $(#[$meta])*
            $name => Kind::$kind
        }

        impl<B, W> $name<B, W>
        where
            B: AsRef<[u8]>,
        {
            /// Decodes the value
            pub fn get(&self) -> Result<$value, Error> {
                let index = expect_code(&self.0, EncodingCodes::$code)?;
                let bytes = self.0.read::<$width>(index)?;
                Ok($decode(bytes))
            }

            /// Index right after the encoded value
            pub fn limit(&self) -> Result<usize, Error> {
                expect_code(&self.0, EncodingCodes::$code).map(|index| index + $width)
            }
        }

        impl<B, W> $name<B, W>
        where
            B: AsRef<[u8]> + AsMut<[u8]>,
            W: Watcher,
        {
            /// Encodes `value`
            pub fn set(&mut self, $v: $value) -> Result<&mut Self, Error> {
                let bytes: [u8; $width] = $encode;
                self.0.put_value(EncodingCodes::$code, &bytes)?;
                self.0.notify_changed(Kind::$kind);
                Ok(self)
            }
        }
    };
}

fixed! {
    /// View of an AMQP `ubyte`
    ///
    /// encoding code = 0x50, category = fixed, width = 1
    UByteType: u8 => UByte, Ubyte, UBYTE_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = u8::from_be_bytes
}

fixed! {
    /// View of an AMQP `byte`
    ///
    /// encoding code = 0x51, category = fixed, width = 1
    ByteType: i8 => Byte, Byte, BYTE_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = i8::from_be_bytes
}

fixed! {
    /// View of an AMQP `ushort`
    ///
    /// encoding code = 0x60, category = fixed, width = 2
    UShortType: u16 => UShort, Ushort, USHORT_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = u16::from_be_bytes
}

fixed! {
    /// View of an AMQP `short`
    ///
    /// encoding code = 0x61, category = fixed, width = 2
    ShortType: i16 => Short, Short, SHORT_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = i16::from_be_bytes
}

fixed! {
    /// View of an AMQP `float`, IEEE 754-2008 binary32
    ///
    /// encoding code = 0x72, category = fixed, width = 4
    FloatType: f32 => Float, Float, FLOAT_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = f32::from_be_bytes
}

fixed! {
    /// View of an AMQP `double`, IEEE 754-2008 binary64
    ///
    /// encoding code = 0x82, category = fixed, width = 8
    DoubleType: f64 => Double, Double, DOUBLE_WIDTH,
    encode = |value| value.to_be_bytes(),
    decode = f64::from_be_bytes
}

fixed! {
    /// View of an AMQP `timestamp`, milliseconds since the unix epoch
    ///
    /// encoding code = 0x83, category = fixed, width = 8
    TimestampType: Timestamp => Timestamp, Timestamp, TIMESTAMP_WIDTH,
    encode = |value| value.milliseconds().to_be_bytes(),
    decode = |bytes| Timestamp::from(i64::from_be_bytes(bytes))
}

fixed! {
    /// View of an AMQP `uuid`
    ///
    /// encoding code = 0x98, category = fixed, width = 16
    UuidType: Uuid => Uuid, Uuid, UUID_WIDTH,
    encode = |value| value.into_inner(),
    decode = Uuid::from
}

fixed! {
    /// View of an AMQP `decimal32`, the bytes are kept as they are
    ///
    /// encoding code = 0x74, category = fixed, width = 4
    Decimal32Type: Dec32 => Decimal32, Decimal32, DECIMAL32_WIDTH,
    encode = |value| value.into_inner(),
    decode = Dec32::from
}

fixed! {
    /// View of an AMQP `decimal64`, the bytes are kept as they are
    ///
    /// encoding code = 0x84, category = fixed, width = 8
    Decimal64Type: Dec64 => Decimal64, Decimal64, DECIMAL64_WIDTH,
    encode = |value| value.into_inner(),
    decode = Dec64::from
}

fixed! {
    /// View of an AMQP `decimal128`, the bytes are kept as they are
    ///
    /// encoding code = 0x94, category = fixed, width = 16
    Decimal128Type: Dec128 => Decimal128, Decimal128, DECIMAL128_WIDTH,
    encode = |value| value.into_inner(),
    decode = Dec128::from
}
