//! Positional views over caller-owned buffers
//!
//! A [`Flyweight`] never owns or copies the bytes it interprets. It only remembers
//! where an encoded value starts. Read access needs `B: AsRef<[u8]>` and write access
//! additionally needs `B: AsMut<[u8]>`, so a view can be backed by `&[u8]`,
//! `&mut [u8]`, `Vec<u8>` or `bytes::BytesMut` alike.
//!
//! Any number of views over a shared `&[u8]` may alias the same bytes. Writing
//! requires an exclusive handle, so a write can never interleave with a read.

use crate::{
    error::Error,
    fixed_width::FORMAT_CODE_WIDTH,
    format_code::{EncodingCodes, Kind},
};

/// Describes a write performed through a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Kind of the view that performed the write
    pub kind: Kind,

    /// Offset of the view that performed the write
    pub offset: usize,
}

/// Receives a [`Change`] every time a view writes to its buffer
pub trait Watcher {
    /// Called once per mutating operation, after the bytes are written
    fn changed(&mut self, change: Change);
}

/// A watcher that ignores every change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoWatch;

impl Watcher for NoWatch {
    fn changed(&mut self, _: Change) {}
}

impl<F> Watcher for F
where
    F: FnMut(Change),
{
    fn changed(&mut self, change: Change) {
        self(change)
    }
}

/// A view of the bytes starting at `offset` in `buffer`
#[derive(Debug, Clone)]
pub struct Flyweight<B, W = NoWatch> {
    buffer: B,
    offset: usize,
    watcher: W,
}

impl<B> Flyweight<B> {
    /// Binds a view to `offset` in `buffer`
    pub fn wrap(buffer: B, offset: usize) -> Self {
        Self {
            buffer,
            offset,
            watcher: NoWatch,
        }
    }
}

impl<B, W> Flyweight<B, W> {
    /// Replaces the watcher of the view
    pub fn watch<W2: Watcher>(self, watcher: W2) -> Flyweight<B, W2> {
        Flyweight {
            buffer: self.buffer,
            offset: self.offset,
            watcher,
        }
    }

    /// Start of the view in the buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get a reference to the underlying buffer
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Consumes the view and returns the underlying buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B, W> Flyweight<B, W>
where
    B: AsRef<[u8]>,
{
    pub(crate) fn bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    pub(crate) fn slice(&self, index: usize, len: usize) -> Result<&[u8], Error> {
        let end = index
            .checked_add(len)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        self.bytes()
            .get(index..end)
            .ok_or_else(|| Error::out_of_bounds(index, len))
    }

    /// Fails unless `[index, index + len)` lies inside the buffer
    pub(crate) fn check_bounds(&self, index: usize, len: usize) -> Result<(), Error> {
        self.slice(index, len).map(|_| ())
    }

    pub(crate) fn read<const N: usize>(&self, index: usize) -> Result<[u8; N], Error> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.slice(index, N)?);
        Ok(buf)
    }

    pub(crate) fn uint8_get(&self, index: usize) -> Result<u8, Error> {
        self.bytes()
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(index, 1))
    }

    pub(crate) fn uint32_get(&self, index: usize) -> Result<u32, Error> {
        self.read(index).map(u32::from_be_bytes)
    }

    /// The raw format code at the start of the view
    pub fn format_code(&self) -> Result<u8, Error> {
        self.uint8_get(self.offset)
    }

    /// The format code at the start of the view if it is a known AMQP code
    pub fn encoding_code(&self) -> Result<EncodingCodes, Error> {
        self.format_code().and_then(EncodingCodes::try_from)
    }
}

impl<B, W> Flyweight<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    pub(crate) fn write(&mut self, index: usize, bytes: &[u8]) -> Result<(), Error> {
        let len = bytes.len();
        let end = index
            .checked_add(len)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        self.buffer
            .as_mut()
            .get_mut(index..end)
            .ok_or_else(|| Error::out_of_bounds(index, len))?
            .copy_from_slice(bytes);
        Ok(())
    }

    pub(crate) fn uint8_put(&mut self, index: usize, value: u8) -> Result<(), Error> {
        let slot = self
            .buffer
            .as_mut()
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, 1))?;
        *slot = value;
        Ok(())
    }

    pub(crate) fn uint32_put(&mut self, index: usize, value: u32) -> Result<(), Error> {
        self.write(index, &value.to_be_bytes())
    }

    /// Writes the format code at the start of the view
    pub(crate) fn put_code(&mut self, code: EncodingCodes) -> Result<(), Error> {
        self.uint8_put(self.offset, code as u8)
    }

    /// Writes the format code followed by `payload`
    ///
    /// Nothing is written unless the whole value fits in the buffer.
    pub(crate) fn put_value(&mut self, code: EncodingCodes, payload: &[u8]) -> Result<(), Error> {
        let offset = self.offset;
        self.check_bounds(offset, FORMAT_CODE_WIDTH + payload.len())?;
        self.uint8_put(offset, code as u8)?;
        self.write(offset + FORMAT_CODE_WIDTH, payload)
    }

    pub(crate) fn notify_changed(&mut self, kind: Kind) {
        let change = Change {
            kind,
            offset: self.offset,
        };
        self.watcher.changed(change);
    }
}

/// Declares a view type wrapping a [`Flyweight`] together with the accessors shared
/// by every view
macro_rules! flyweight {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<B, W = $crate::buffer::NoWatch>($crate::buffer::Flyweight<B, W>);

        impl<B> $name<B> {
            /// Binds a view to `offset` in `buffer` without looking at the bytes
            pub fn wrap(buffer: B, offset: usize) -> Self {
                Self($crate::buffer::Flyweight::wrap(buffer, offset))
            }
        }

        impl<B, W> $name<B, W> {
            /// Attaches a watcher that is notified after each write
            pub fn watch<W2: $crate::buffer::Watcher>(self, watcher: W2) -> $name<B, W2> {
                $name(self.0.watch(watcher))
            }

            /// Start of the encoded value in the buffer
            pub fn offset(&self) -> usize {
                self.0.offset()
            }

            /// The AMQP type this view reads and writes
            pub fn kind(&self) -> $crate::format_code::Kind {
                $kind
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

        impl<B: AsRef<[u8]>, W> $name<B, W> {
            /// The raw format code at the start of the view
            pub fn format_code(&self) -> Result<u8, $crate::error::Error> {
                self.0.format_code()
            }
        }
    };
}

pub(crate) use flyweight;
