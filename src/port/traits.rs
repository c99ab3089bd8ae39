//! Core trait for serial connection abstraction.
//!
//! Defines the `SerialConnection` trait that allows both real serial ports
//! and mock implementations to be used interchangeably. The terminal only
//! ever moves single bytes, so the trait is byte-oriented.

use super::error::PortError;

/// Trait for byte-level serial I/O.
///
/// Implementors must support cloning into an independent handle so that the
/// receive thread can drain the port while the terminal loop keeps writing.
pub trait SerialConnection: Send + std::fmt::Debug {
    /// Write a single byte to the serial port.
    fn write_byte(&mut self, byte: u8) -> Result<(), PortError>;

    /// Read a single byte from the serial port.
    ///
    /// Callers should check `bytes_to_read` first; reading an idle port
    /// blocks until the port's timeout elapses.
    fn read_byte(&mut self) -> Result<u8, PortError>;

    /// Number of bytes currently buffered for reading.
    ///
    /// Returns 0 when the count cannot be determined.
    fn bytes_to_read(&self) -> usize;

    /// The name/path of this serial port.
    fn name(&self) -> &str;

    /// The configured baud rate.
    fn baud_rate(&self) -> u32;

    /// Clone this connection into an independent handle on the same port.
    fn try_clone(&self) -> Result<Box<dyn SerialConnection>, PortError>;
}
