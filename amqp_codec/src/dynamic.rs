//! Views of values whose type is only known at runtime

use std::convert::TryFrom;

use crate::{
    buffer::Flyweight,
    error::Error,
    format_code::Kind,
    types::{
        ArrayType, BinaryType, BooleanType, ByteType, CharType, Decimal128Type, Decimal32Type,
        Decimal64Type, DoubleType, FloatType, IntType, ListType, LongType, MapType, NullType,
        ShortType, StringType, SymbolType, TimestampType, UByteType, UIntType, ULongType,
        UShortType, UuidType,
    },
};

/// A view that classifies the value at its offset from the format code
///
/// [`limit`](Self::limit) delegates to the view of the detected type, so walking
/// a buffer with a `DynamicType` gives the same boundaries as the concrete views.
#[derive(Debug, Clone)]
pub struct DynamicType<B>(Flyweight<B>);

impl<B> DynamicType<B> {
    /// Binds a view to `offset` in `buffer` without looking at the bytes
    pub fn wrap(buffer: B, offset: usize) -> Self {
        Self(Flyweight::wrap(buffer, offset))
    }

    /// Start of the encoded value in the buffer
    pub fn offset(&self) -> usize {
        self.0.offset()
    }

    /// Get a reference to the underlying buffer
    pub fn buffer(&self) -> &B {
        self.0.buffer()
    }

    /// Consumes the view and returns the underlying buffer
    pub fn into_inner(self) -> B {
        self.0.into_inner()
    }
}

impl<B> DynamicType<B>
where
    B: AsRef<[u8]>,
{
    /// The raw format code at the start of the view
    pub fn format_code(&self) -> Result<u8, Error> {
        self.0.format_code()
    }

    /// The type of the value, [`Error::InvalidFormatCode`] for unknown codes
    /// and for the described type constructor `0x00`
    pub fn kind(&self) -> Result<Kind, Error> {
        self.0.format_code().and_then(Kind::try_from)
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let buf = self.0.bytes();
        let offset = self.0.offset();
        match self.kind()? {
            Kind::Array => ArrayType::wrap(buf, offset).limit(),
            Kind::Binary => BinaryType::wrap(buf, offset).limit(),
            Kind::Boolean => BooleanType::wrap(buf, offset).limit(),
            Kind::Byte => ByteType::wrap(buf, offset).limit(),
            Kind::Char => CharType::wrap(buf, offset).limit(),
            Kind::Decimal32 => Decimal32Type::wrap(buf, offset).limit(),
            Kind::Decimal64 => Decimal64Type::wrap(buf, offset).limit(),
            Kind::Decimal128 => Decimal128Type::wrap(buf, offset).limit(),
            Kind::Double => DoubleType::wrap(buf, offset).limit(),
            Kind::Float => FloatType::wrap(buf, offset).limit(),
            Kind::Int => IntType::wrap(buf, offset).limit(),
            Kind::List => ListType::wrap(buf, offset).limit(),
            Kind::Long => LongType::wrap(buf, offset).limit(),
            Kind::Map => MapType::wrap(buf, offset).limit(),
            Kind::Null => NullType::wrap(buf, offset).limit(),
            Kind::Short => ShortType::wrap(buf, offset).limit(),
            Kind::String => StringType::wrap(buf, offset).limit(),
            Kind::Symbol => SymbolType::wrap(buf, offset).limit(),
            Kind::Timestamp => TimestampType::wrap(buf, offset).limit(),
            Kind::UByte => UByteType::wrap(buf, offset).limit(),
            Kind::UInt => UIntType::wrap(buf, offset).limit(),
            Kind::ULong => ULongType::wrap(buf, offset).limit(),
            Kind::UShort => UShortType::wrap(buf, offset).limit(),
            Kind::Uuid => UuidType::wrap(buf, offset).limit(),
        }
    }

    /// Borrows the whole encoded value, format code included
    pub fn encoded(&self) -> Result<&[u8], Error> {
        let offset = self.0.offset();
        let limit = self.limit()?;
        self.0.slice(offset, limit - offset)
    }
}

/// Iterator over the elements of a list or of a map
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    buffer: &'a [u8],
    index: usize,
    remaining: u32,
    limit: usize,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(buffer: &'a [u8], index: usize, count: u32, limit: usize) -> Self {
        Self {
            buffer,
            index,
            remaining: count,
            limit,
        }
    }

    fn next_element(&mut self) -> Result<DynamicType<&'a [u8]>, Error> {
        let element = DynamicType::wrap(self.buffer, self.index);
        let end = element.limit()?;
        if end > self.limit {
            return Err(Error::InvalidLength);
        }
        self.index = end;
        Ok(element)
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = Result<DynamicType<&'a [u8]>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.next_element();
        if item.is_err() {
            self.remaining = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}

/// Iterator over the `(key, value)` entries of a map
#[derive(Debug, Clone)]
pub struct Pairs<'a>(Elements<'a>);

impl<'a> Pairs<'a> {
    pub(crate) fn new(elements: Elements<'a>) -> Self {
        Self(elements)
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Result<(DynamicType<&'a [u8]>, DynamicType<&'a [u8]>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = match self.0.next()? {
            Ok(key) => key,
            Err(err) => return Some(Err(err)),
        };
        let value = match self.0.next() {
            Some(Ok(value)) => value,
            Some(Err(err)) => return Some(Err(err)),
            None => return Some(Err(Error::InvalidLength)),
        };
        Some(Ok((key, value)))
    }
}
