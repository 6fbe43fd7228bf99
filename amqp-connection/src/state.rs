//! Connection states and the transition table of the AMQP 1.0 connection state diagram
//!
//! | From | Event | To |
//! |------|-------|----|
//! | START | sent header | HDR_SENT |
//! | START | received header | HDR_RCVD |
//! | HDR_SENT | received header | HDR_EXCH |
//! | HDR_SENT | sent open | OPEN_PIPE |
//! | HDR_RCVD | sent header | HDR_EXCH |
//! | HDR_EXCH | sent open | OPEN_SENT |
//! | HDR_EXCH | received open | OPEN_RCVD |
//! | OPEN_PIPE | received header | OPEN_SENT |
//! | OPEN_PIPE | sent close | OC_PIPE |
//! | OC_PIPE | received header | CLOSE_PIPE |
//! | OPEN_SENT | received open | OPENED |
//! | OPEN_RCVD | sent open | OPENED |
//! | CLOSE_PIPE | received open | CLOSE_SENT |
//! | OPENED | received close | CLOSE_RCVD |
//! | OPENED | sent close | CLOSE_SENT |
//! | CLOSE_RCVD | sent close | END |
//! | CLOSE_SENT | received close | END |
//! | DISCARDING | received close | END |
//!
//! Any other event moves the connection to [`ConnectionState::End`], except
//! [`ConnectionEvent::Error`] which moves it to [`ConnectionState::Discarding`].

/// Connection states as defined in the AMQP 1.0 Protocol Part 2.4.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// In this state a connection exists, but nothing has been sent or received. This is the state
    /// an implementation would be in immediately after performing a socket connect or socket
    /// accept
    Start,

    /// In this state the connection header has been received from the peer but a connection header
    /// has not been sent.
    HeaderReceived,

    /// In this state the connection header has been sent to the peer but no connection header has
    /// been received.
    HeaderSent,

    /// In this state the connection header has been sent to the peer and a connection header has
    /// been received from the peer.
    HeaderExchanged,

    /// In this state both the connection header and the open frame have been sent but nothing has
    /// been received.
    OpenPipe,

    /// In this state, the connection header, the open frame, any pipelined connection traffic, and
    /// the close frame have been sent but nothing has been received.
    OpenClosePipe,

    /// In this state the connection headers have been exchanged. An open frame has been received
    /// from the peer but an open frame has not been sent.
    OpenReceived,

    /// In this state the connection headers have been exchanged. An open frame has been sent
    /// to the peer but no open frame has yet been received.
    OpenSent,

    /// In this state the connection header and the open frame have been both sent and received.
    Opened,

    /// In this state the connection headers have been exchanged. An open frame, any pipelined
    /// connection traffic, and the close frame have been sent but no open frame has yet been
    /// received from the peer.
    ClosePipe,

    /// In this state a close frame has been received indicating that the peer has initiated an AMQP
    /// close. No further frames are expected to arrive on the connection; however, frames can still
    /// be sent.
    CloseReceived,

    /// In this state a close frame has been sent to the peer. It is illegal to write anything more
    /// onto the connection, however there could potentially still be incoming frames.
    CloseSent,

    /// The DISCARDING state is a variant of the CLOSE SENT state where the close is triggered
    /// by an error. In this case any incoming frames on the connection MUST be silently discarded
    /// until the peer's close frame is received.
    Discarding,

    /// In this state it is illegal for either endpoint to write anything more onto the connection.
    /// The connection can be safely closed and discarded.
    End,
}

/// Events that drive a connection from one state to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionEvent {
    /// A protocol header was received
    ReceivedHeader,

    /// A protocol header was received that differs from the one sent
    ReceivedHeaderNotEqualSent,

    /// A protocol header was sent
    SentHeader,

    /// A protocol header was sent that differs from the one received
    SentHeaderNotEqualReceived,

    /// An open frame was received
    ReceivedOpen,

    /// An open frame was sent
    SentOpen,

    /// A close frame was received
    ReceivedClose,

    /// A close frame was sent
    SentClose,

    /// An error occurred
    Error,
}

impl ConnectionState {
    /// Every state, in declaration order
    pub const ALL: [ConnectionState; STATE_COUNT] = [
        ConnectionState::Start,
        ConnectionState::HeaderReceived,
        ConnectionState::HeaderSent,
        ConnectionState::HeaderExchanged,
        ConnectionState::OpenPipe,
        ConnectionState::OpenClosePipe,
        ConnectionState::OpenReceived,
        ConnectionState::OpenSent,
        ConnectionState::Opened,
        ConnectionState::ClosePipe,
        ConnectionState::CloseReceived,
        ConnectionState::CloseSent,
        ConnectionState::Discarding,
        ConnectionState::End,
    ];

    /// The state reached from `self` on `event`
    pub const fn on(self, event: ConnectionEvent) -> ConnectionState {
        TRANSITIONS[self as usize][event as usize]
    }
}

impl ConnectionEvent {
    /// Every event, in declaration order
    pub const ALL: [ConnectionEvent; EVENT_COUNT] = [
        ConnectionEvent::ReceivedHeader,
        ConnectionEvent::ReceivedHeaderNotEqualSent,
        ConnectionEvent::SentHeader,
        ConnectionEvent::SentHeaderNotEqualReceived,
        ConnectionEvent::ReceivedOpen,
        ConnectionEvent::SentOpen,
        ConnectionEvent::ReceivedClose,
        ConnectionEvent::SentClose,
        ConnectionEvent::Error,
    ];
}

const STATE_COUNT: usize = ConnectionState::End as usize + 1;
const EVENT_COUNT: usize = ConnectionEvent::Error as usize + 1;

type Table = [[ConnectionState; EVENT_COUNT]; STATE_COUNT];

const TRANSITIONS: Table = transitions();

const fn transitions() -> Table {
    use ConnectionEvent as E;
    use ConnectionState as S;

    let mut table = [[S::End; EVENT_COUNT]; STATE_COUNT];
    let mut state = 0;
    while state < STATE_COUNT {
        table[state][E::Error as usize] = S::Discarding;
        state += 1;
    }

    let overrides = [
        (S::Start, E::SentHeader, S::HeaderSent),
        (S::Start, E::ReceivedHeader, S::HeaderReceived),
        (S::HeaderSent, E::ReceivedHeader, S::HeaderExchanged),
        (S::HeaderSent, E::SentOpen, S::OpenPipe),
        (S::HeaderReceived, E::SentHeader, S::HeaderExchanged),
        (S::HeaderExchanged, E::SentOpen, S::OpenSent),
        (S::HeaderExchanged, E::ReceivedOpen, S::OpenReceived),
        (S::OpenPipe, E::ReceivedHeader, S::OpenSent),
        (S::OpenPipe, E::SentClose, S::OpenClosePipe),
        (S::OpenClosePipe, E::ReceivedHeader, S::ClosePipe),
        (S::OpenSent, E::ReceivedOpen, S::Opened),
        (S::OpenReceived, E::SentOpen, S::Opened),
        (S::ClosePipe, E::ReceivedOpen, S::CloseSent),
        (S::Opened, E::ReceivedClose, S::CloseReceived),
        (S::Opened, E::SentClose, S::CloseSent),
        (S::CloseReceived, E::SentClose, S::End),
        (S::CloseSent, E::ReceivedClose, S::End),
        (S::Discarding, E::ReceivedClose, S::End),
    ];
    let mut i = 0;
    while i < overrides.len() {
        let (from, event, to) = overrides[i];
        table[from as usize][event as usize] = to;
        i += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_always_discards() {
        for state in ConnectionState::ALL {
            assert_eq!(
                state.on(ConnectionEvent::Error),
                ConnectionState::Discarding
            );
        }
    }

    #[test]
    fn start_transitions() {
        use ConnectionEvent as E;
        use ConnectionState as S;

        assert_eq!(S::Start.on(E::SentHeader), S::HeaderSent);
        assert_eq!(S::Start.on(E::ReceivedHeader), S::HeaderReceived);
        assert_eq!(S::Start.on(E::SentOpen), S::End);
        assert_eq!(S::Start.on(E::ReceivedHeaderNotEqualSent), S::End);
    }

    #[test]
    fn end_is_terminal() {
        for event in ConnectionEvent::ALL {
            let expected = match event {
                ConnectionEvent::Error => ConnectionState::Discarding,
                _ => ConnectionState::End,
            };
            assert_eq!(ConnectionState::End.on(event), expected);
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (i, state) in ConnectionState::ALL.iter().enumerate() {
            assert_eq!(*state as usize, i);
        }
        for (i, event) in ConnectionEvent::ALL.iter().enumerate() {
            assert_eq!(*event as usize, i);
        }
    }
}
