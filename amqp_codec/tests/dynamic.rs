use amqp_codec::{
    dynamic::DynamicType,
    format_code::{EncodingCodes, Kind},
    primitives::{Dec128, Dec32, Dec64, Timestamp, Uuid},
    types::*,
    Error,
};
use rand::Rng;

const BUFFER_CAPACITY: usize = 512;

fn offsets() -> [usize; 2] {
    [0, rand::thread_rng().gen_range(1..64)]
}

/// Encodes with a concrete view, then checks that the dynamic view finds the same
/// kind and the same limit
macro_rules! dispatch_test {
    ($name:ident, $view:ident, $kind:expr, |$v:ident| $encode:expr) => {
        #[test]
        fn $name() {
            for offset in offsets() {
                let mut buffer = vec![0u8; BUFFER_CAPACITY];
                let mut $v = $view::wrap(&mut buffer[..], offset);
                $encode;
                let expected = $v.limit().unwrap();
                drop($v);

                let dynamic = DynamicType::wrap(&buffer[..], offset);
                assert_eq!(dynamic.kind(), Ok($kind));
                assert_eq!(dynamic.limit(), Ok(expected));
                assert!(expected > offset);
            }
        }
    };
}

dispatch_test!(binary_1, BinaryType, Kind::Binary, |v| v.set(b"Hello, world").unwrap());
dispatch_test!(binary_4, BinaryType, Kind::Binary, |v| v.set(&[b'a'; 256]).unwrap());
dispatch_test!(boolean_true, BooleanType, Kind::Boolean, |v| v.set(true).unwrap());
dispatch_test!(boolean_false, BooleanType, Kind::Boolean, |v| v.set(false).unwrap());
dispatch_test!(byte, ByteType, Kind::Byte, |v| v.set(0x12).unwrap());
dispatch_test!(character, CharType, Kind::Char, |v| v.set('\u{12}').unwrap());
dispatch_test!(decimal32, Decimal32Type, Kind::Decimal32, |v| v
    .set(Dec32::from([0x22, 0x01, 0xe2, 0x40]))
    .unwrap());
dispatch_test!(decimal64, Decimal64Type, Kind::Decimal64, |v| v
    .set(Dec64::from([0x22; 8]))
    .unwrap());
dispatch_test!(decimal128, Decimal128Type, Kind::Decimal128, |v| v
    .set(Dec128::from([0x22; 16]))
    .unwrap());
dispatch_test!(double, DoubleType, Kind::Double, |v| v.set(12345678f64).unwrap());
dispatch_test!(float, FloatType, Kind::Float, |v| v.set(12345678f32).unwrap());
dispatch_test!(int_1, IntType, Kind::Int, |v| v.set(1).unwrap());
dispatch_test!(int_4, IntType, Kind::Int, |v| v.set(0x12345678).unwrap());
dispatch_test!(list_0, ListType, Kind::List, |v| v
    .max_length(0x00)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(list_1, ListType, Kind::List, |v| v
    .max_length(0xff)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(list_8, ListType, Kind::List, |v| v
    .max_length(0x100)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(long_1, LongType, Kind::Long, |v| v.set(1).unwrap());
dispatch_test!(long_8, LongType, Kind::Long, |v| v.set(12345678).unwrap());
dispatch_test!(map_0, MapType, Kind::Map, |v| v
    .max_length(0x00)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(map_1, MapType, Kind::Map, |v| v
    .max_length(0xff)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(map_8, MapType, Kind::Map, |v| v
    .max_length(0x100)
    .unwrap()
    .clear()
    .unwrap());
dispatch_test!(null, NullType, Kind::Null, |v| v.set().unwrap());
dispatch_test!(short, ShortType, Kind::Short, |v| v.set(0x1234).unwrap());
dispatch_test!(string_1, StringType, Kind::String, |v| v
    .set("Hello, world")
    .unwrap());
dispatch_test!(string_4, StringType, Kind::String, |v| v
    .set(&"a".repeat(256))
    .unwrap());
dispatch_test!(symbol_1, SymbolType, Kind::Symbol, |v| v.set("a").unwrap());
dispatch_test!(symbol_4, SymbolType, Kind::Symbol, |v| v
    .set(&"a".repeat(256))
    .unwrap());
dispatch_test!(timestamp, TimestampType, Kind::Timestamp, |v| v
    .set(Timestamp::from(1_600_000_000_000i64))
    .unwrap());
dispatch_test!(ubyte, UByteType, Kind::UByte, |v| v.set(0x12).unwrap());
dispatch_test!(uint_0, UIntType, Kind::UInt, |v| v.set(0).unwrap());
dispatch_test!(uint_1, UIntType, Kind::UInt, |v| v.set(1).unwrap());
dispatch_test!(uint_4, UIntType, Kind::UInt, |v| v.set(0x12345678).unwrap());
dispatch_test!(ulong_0, ULongType, Kind::ULong, |v| v.set(0).unwrap());
dispatch_test!(ulong_1, ULongType, Kind::ULong, |v| v.set(1).unwrap());
dispatch_test!(ulong_8, ULongType, Kind::ULong, |v| v.set(12345678).unwrap());
dispatch_test!(ushort, UShortType, Kind::UShort, |v| v.set(0x1234).unwrap());
dispatch_test!(uuid_v4, UuidType, Kind::Uuid, |v| v
    .set(Uuid::from(*uuid::Uuid::new_v4().as_bytes()))
    .unwrap());
dispatch_test!(array_1, ArrayType, Kind::Array, |v| {
    v.max_length(0xff).unwrap();
    v.set_element_kind(EncodingCodes::Uint).unwrap();
    v.clear().unwrap()
});
dispatch_test!(array_4, ArrayType, Kind::Array, |v| {
    v.max_length(0x100).unwrap();
    v.set_element_kind(EncodingCodes::Ulong).unwrap();
    v.clear().unwrap()
});

#[test]
fn list0_limit() {
    for offset in offsets() {
        let mut buffer = vec![0u8; BUFFER_CAPACITY];
        buffer[offset] = 0x45;
        let dynamic = DynamicType::wrap(&buffer[..], offset);
        assert_eq!(dynamic.kind(), Ok(Kind::List));
        assert_eq!(dynamic.limit(), Ok(offset + 1));
    }
}

#[test]
fn zero_format_code_is_rejected() {
    for offset in offsets() {
        let buffer = vec![0u8; BUFFER_CAPACITY];
        let dynamic = DynamicType::wrap(&buffer[..], offset);
        assert_eq!(dynamic.kind(), Err(Error::InvalidFormatCode(0x00)));
        assert_eq!(dynamic.limit(), Err(Error::InvalidFormatCode(0x00)));
    }
}

/// Reads every listed view over `0x00` and expects the format code to be rejected
macro_rules! assert_zero_code_rejected {
    ($buffer:expr, $offset:expr; $($view:ident => $read:ident),* $(,)?) => {
        $(
            let view = $view::wrap(&$buffer[..], $offset);
            assert_eq!(
                view.$read().err(),
                Some(Error::InvalidFormatCode(0x00)),
                "{}::{}",
                stringify!($view),
                stringify!($read)
            );
            assert_eq!(
                view.limit(),
                Err(Error::InvalidFormatCode(0x00)),
                "{}::limit",
                stringify!($view)
            );
        )*
    };
}

#[test]
fn zero_format_code_is_rejected_by_every_view() {
    for offset in offsets() {
        let buffer = vec![0u8; BUFFER_CAPACITY];
        assert_zero_code_rejected! {
            buffer, offset;
            ArrayType => count,
            BinaryType => get,
            BooleanType => get,
            ByteType => get,
            CharType => get,
            Decimal32Type => get,
            Decimal64Type => get,
            Decimal128Type => get,
            DoubleType => get,
            FloatType => get,
            IntType => get,
            ListType => count,
            LongType => get,
            MapType => count,
            NullType => get,
            ShortType => get,
            StringType => get,
            SymbolType => get,
            TimestampType => get,
            UByteType => get,
            UIntType => get,
            ULongType => get,
            UShortType => get,
            UuidType => get,
        }
    }
}

#[test]
fn walk_mixed_values() {
    let mut buffer = vec![0u8; BUFFER_CAPACITY];
    let mut offset = 0;

    let mut ulong = ULongType::wrap(&mut buffer[..], offset);
    ulong.set(0x10).unwrap();
    offset = ulong.limit().unwrap();

    let mut symbol = SymbolType::wrap(&mut buffer[..], offset);
    symbol.set("amqp:open:list").unwrap();
    offset = symbol.limit().unwrap();

    let mut null = NullType::wrap(&mut buffer[..], offset);
    null.set().unwrap();
    let end = null.limit().unwrap();

    let mut kinds = Vec::new();
    let mut index = 0;
    while index < end {
        let value = DynamicType::wrap(&buffer[..], index);
        kinds.push(value.kind().unwrap());
        index = value.limit().unwrap();
    }
    assert_eq!(index, end);
    assert_eq!(kinds, vec![Kind::ULong, Kind::Symbol, Kind::Null]);
}
