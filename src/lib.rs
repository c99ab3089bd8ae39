//! Binary RS232 Terminal Library
//!
//! An interactive terminal for sending and receiving raw bytes over a serial
//! (RS232) connection. Typed decimal or hexadecimal tokens are transmitted
//! byte-by-byte; incoming bytes are printed in hex, char, decimal, and binary
//! form as they arrive.
//!
//! # Modules
//!
//! - `port`: Port abstraction layer for serial communication
//! - `parse`: Byte-token parsing (`$`/`0x` hex prefix, decimal otherwise)
//! - `select`: Port selection and connection opening prompts
//! - `terminal`: The interactive console loop (transmit side)
//! - `rx`: Reader and printer threads (receive side)
//! - `error`: Unified error handling

pub mod error;
pub mod parse;
pub mod port;
pub mod rx;
pub mod select;
pub mod terminal;

// Re-export commonly used types for convenience
pub use error::AppError;
pub use parse::{parse_byte, TokenError};
pub use port::{MockConnection, PortError, SerialConnection, SerialLink};
pub use rx::{format_read, RxEvent, RxPump};
