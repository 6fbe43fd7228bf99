#![warn(missing_docs, missing_debug_implementations)]

//! AMQP 1.0 protocol header exchange and connection state machine
//!
//! The state machine does no IO. The transport tells it what was sent and what was
//! received, and [`ConnectionHooks`](hooks::ConnectionHooks) are called after each
//! transition.
//!
//! ```rust
//! use amqp_connection::{
//!     header::Header, hooks::NoHooks, protocol_header::ProtocolHeader, state::ConnectionState,
//!     Connection, ConnectionStateMachine,
//! };
//!
//! let mut buffer = [0u8; 8];
//! Header::wrap(&mut buffer[..], 0).set(ProtocolHeader::amqp()).unwrap();
//! let header = Header::wrap(&buffer[..], 0);
//!
//! let mut machine = ConnectionStateMachine::new(NoHooks);
//! let mut connection = Connection::new();
//! machine.start(&mut connection);
//! machine.sent_header(&mut connection, &header).unwrap();
//! machine.sent_open(&mut connection, &(), &());
//! assert_eq!(connection.state(), ConnectionState::OpenPipe);
//!
//! machine.received_header(&mut connection, &header).unwrap();
//! assert_eq!(connection.state(), ConnectionState::OpenSent);
//! ```

// Public mods
pub mod error;
pub mod header;
pub mod hooks;
pub mod protocol_header;
pub mod state;
pub mod state_machine;

pub use error::Error;
pub use state_machine::{Connection, ConnectionStateMachine};
