//! Callbacks invoked by the connection state machine

use crate::{header::Header, state_machine::Connection};

/// Side effects of connection state transitions
///
/// Every method is called once, after the state of `connection` has been updated.
/// The default implementations do nothing. The frame, open and close payloads are
/// passed through untouched.
pub trait ConnectionHooks {
    /// Frame that carried an open or a close
    type Frame;

    /// Open performative
    type Open;

    /// Close performative
    type Close;

    /// The connection entered the START state
    fn when_initialized(&mut self, _connection: &Connection) {}

    /// A protocol header was received
    fn when_header_received(&mut self, _connection: &Connection, _header: &Header<&[u8]>) {}

    /// A protocol header was received that differs from the one sent
    fn when_header_received_not_equal_sent(
        &mut self,
        _connection: &Connection,
        _header: &Header<&[u8]>,
    ) {
    }

    /// A protocol header was sent
    fn when_header_sent(&mut self, _connection: &Connection, _header: &Header<&[u8]>) {}

    /// A protocol header was sent that differs from the one received
    fn when_header_sent_not_equal_received(
        &mut self,
        _connection: &Connection,
        _header: &Header<&[u8]>,
    ) {
    }

    /// An open frame was received
    fn when_open_received(
        &mut self,
        _connection: &Connection,
        _frame: &Self::Frame,
        _open: &Self::Open,
    ) {
    }

    /// An open frame was sent
    fn when_open_sent(
        &mut self,
        _connection: &Connection,
        _frame: &Self::Frame,
        _open: &Self::Open,
    ) {
    }

    /// A close frame was received
    fn when_close_received(
        &mut self,
        _connection: &Connection,
        _frame: &Self::Frame,
        _close: &Self::Close,
    ) {
    }

    /// A close frame was sent
    fn when_close_sent(
        &mut self,
        _connection: &Connection,
        _frame: &Self::Frame,
        _close: &Self::Close,
    ) {
    }

    /// An error occurred
    fn when_error(&mut self, _connection: &Connection) {}
}

/// Hooks that do nothing, for connections whose payloads are not inspected
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl ConnectionHooks for NoHooks {
    type Frame = ();
    type Open = ();
    type Close = ();
}
