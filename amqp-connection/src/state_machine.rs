//! Drives a connection through the AMQP 1.0 connection state diagram

use crate::{
    error::Error,
    header::Header,
    hooks::ConnectionHooks,
    protocol_header::PROTOCOL_HEADER_LEN,
    state::{ConnectionEvent, ConnectionState},
};

/// State of one connection
///
/// Only a [`ConnectionStateMachine`] changes the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    state: ConnectionState,
    header_sent: Option<[u8; PROTOCOL_HEADER_LEN]>,
    header_received: Option<[u8; PROTOCOL_HEADER_LEN]>,
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection {
    /// Creates a connection in the START state
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Start,
            header_sent: None,
            header_received: None,
        }
    }

    /// Current state
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The last protocol header sent
    pub fn header_sent(&self) -> Option<&[u8; PROTOCOL_HEADER_LEN]> {
        self.header_sent.as_ref()
    }

    /// The last protocol header received
    pub fn header_received(&self) -> Option<&[u8; PROTOCOL_HEADER_LEN]> {
        self.header_received.as_ref()
    }

    fn headers_match(&self) -> bool {
        self.header_sent == self.header_received
    }

    fn transition(&mut self, event: ConnectionEvent) -> ConnectionState {
        let from = self.state;
        self.state = from.on(event);

        #[cfg(feature = "tracing")]
        tracing::trace!("{:?} --{:?}--> {:?}", from, event, self.state);
        #[cfg(feature = "log")]
        log::trace!("{:?} --{:?}--> {:?}", from, event, self.state);

        self.state
    }
}

/// Applies events to connections and runs the hooks
#[derive(Debug, Clone, Default)]
pub struct ConnectionStateMachine<H> {
    hooks: H,
}

impl<H> ConnectionStateMachine<H>
where
    H: ConnectionHooks,
{
    /// Creates a state machine that calls `hooks`
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    /// Get a reference to the hooks
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Get a mutable reference to the hooks
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Consumes the state machine and returns the hooks
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    /// Moves `connection` to START
    pub fn start(&mut self, connection: &mut Connection) -> ConnectionState {
        connection.state = ConnectionState::Start;
        self.hooks.when_initialized(connection);
        connection.state
    }

    /// Records a protocol header received from the peer
    ///
    /// Outside of START the header must equal the one already sent, otherwise the
    /// connection ends.
    pub fn received_header<B>(
        &mut self,
        connection: &mut Connection,
        header: &Header<B>,
    ) -> Result<ConnectionState, Error>
    where
        B: AsRef<[u8]>,
    {
        connection.header_received = Some(header.get()?);
        let header = header.as_slice();

        if connection.state == ConnectionState::Start || connection.headers_match() {
            connection.transition(ConnectionEvent::ReceivedHeader);
            self.hooks.when_header_received(connection, &header);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Received header {:?} does not match sent header {:?}",
                connection.header_received,
                connection.header_sent
            );
            #[cfg(feature = "log")]
            log::debug!(
                "Received header {:?} does not match sent header {:?}",
                connection.header_received,
                connection.header_sent
            );
            connection.transition(ConnectionEvent::ReceivedHeaderNotEqualSent);
            self.hooks
                .when_header_received_not_equal_sent(connection, &header);
        }
        Ok(connection.state)
    }

    /// Records a protocol header sent to the peer
    ///
    /// Outside of START the header must equal the one already received, otherwise
    /// the connection ends.
    pub fn sent_header<B>(
        &mut self,
        connection: &mut Connection,
        header: &Header<B>,
    ) -> Result<ConnectionState, Error>
    where
        B: AsRef<[u8]>,
    {
        connection.header_sent = Some(header.get()?);
        let header = header.as_slice();

        if connection.state == ConnectionState::Start || connection.headers_match() {
            connection.transition(ConnectionEvent::SentHeader);
            self.hooks.when_header_sent(connection, &header);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Sent header {:?} does not match received header {:?}",
                connection.header_sent,
                connection.header_received
            );
            #[cfg(feature = "log")]
            log::debug!(
                "Sent header {:?} does not match received header {:?}",
                connection.header_sent,
                connection.header_received
            );
            connection.transition(ConnectionEvent::SentHeaderNotEqualReceived);
            self.hooks
                .when_header_sent_not_equal_received(connection, &header);
        }
        Ok(connection.state)
    }

    /// An open frame was received
    pub fn received_open(
        &mut self,
        connection: &mut Connection,
        frame: &H::Frame,
        open: &H::Open,
    ) -> ConnectionState {
        connection.transition(ConnectionEvent::ReceivedOpen);
        self.hooks.when_open_received(connection, frame, open);
        connection.state
    }

    /// An open frame was sent
    pub fn sent_open(
        &mut self,
        connection: &mut Connection,
        frame: &H::Frame,
        open: &H::Open,
    ) -> ConnectionState {
        connection.transition(ConnectionEvent::SentOpen);
        self.hooks.when_open_sent(connection, frame, open);
        connection.state
    }

    /// A close frame was received
    pub fn received_close(
        &mut self,
        connection: &mut Connection,
        frame: &H::Frame,
        close: &H::Close,
    ) -> ConnectionState {
        connection.transition(ConnectionEvent::ReceivedClose);
        self.hooks.when_close_received(connection, frame, close);
        connection.state
    }

    /// A close frame was sent
    pub fn sent_close(
        &mut self,
        connection: &mut Connection,
        frame: &H::Frame,
        close: &H::Close,
    ) -> ConnectionState {
        connection.transition(ConnectionEvent::SentClose);
        self.hooks.when_close_sent(connection, frame, close);
        connection.state
    }

    /// An error occurred on the connection
    pub fn error(&mut self, connection: &mut Connection) -> ConnectionState {
        connection.transition(ConnectionEvent::Error);
        self.hooks.when_error(connection);
        connection.state
    }

    /// Forces `connection` to END, for example when the transport is closed
    ///
    /// No hook is called and the transition table is not consulted.
    pub fn end(&mut self, connection: &mut Connection) -> ConnectionState {
        // TODO: check whether a transport close should go through the table instead
        #[cfg(feature = "tracing")]
        tracing::debug!("{:?} forced to End", connection.state);
        #[cfg(feature = "log")]
        log::debug!("{:?} forced to End", connection.state);

        connection.state = ConnectionState::End;
        connection.state
    }
}
