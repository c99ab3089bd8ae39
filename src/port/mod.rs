//! Port abstraction layer for serial communication.
//!
//! Provides the `SerialConnection` trait plus a real implementation over the
//! `serialport` crate and a mock for testing.

pub mod error;
pub mod mock;
pub mod sync_port;
pub mod traits;

pub use error::PortError;
pub use mock::MockConnection;
pub use sync_port::SerialLink;
pub use traits::SerialConnection;
