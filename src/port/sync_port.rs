//! Real serial port implementation.
//!
//! Wraps the `serialport` crate's `SerialPort` trait with our own
//! `SerialConnection` trait so the terminal loop and receive thread can be
//! tested against a mock.

use super::error::PortError;
use super::traits::SerialConnection;
use std::io::{Read, Write};
use std::time::Duration;

/// Read timeout for the underlying port. The receive thread polls
/// `bytes_to_read` before reading, so this only bounds the rare race where
/// the buffered byte disappears between the poll and the read.
const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// An open serial connection backed by real hardware.
pub struct SerialLink {
    /// The underlying serial port implementation.
    port: Box<dyn serialport::SerialPort>,
    /// The port name/path for identification.
    name: String,
    baud_rate: u32,
}

impl SerialLink {
    /// Open a serial port at the given baud rate (8N1, no flow control).
    ///
    /// # Example
    /// ```no_run
    /// use binary_rs232_term::port::SerialLink;
    ///
    /// let link = SerialLink::open("/dev/ttyUSB0", 9600)?;
    /// # Ok::<(), binary_rs232_term::port::PortError>(())
    /// ```
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self, PortError> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|e| match e.kind() {
                serialport::ErrorKind::NoDevice => PortError::not_found(port_name),
                serialport::ErrorKind::Io(std::io::ErrorKind::PermissionDenied) => {
                    PortError::permission_denied(e.to_string())
                }
                _ => PortError::Serial(e),
            })?;

        Ok(Self {
            port,
            name: port_name.to_string(),
            baud_rate,
        })
    }
}

impl SerialConnection for SerialLink {
    fn write_byte(&mut self, byte: u8) -> Result<(), PortError> {
        self.port.write_all(&[byte]).map_err(PortError::Io)
    }

    fn read_byte(&mut self) -> Result<u8, PortError> {
        let mut buffer = [0u8; 1];
        self.port.read_exact(&mut buffer).map_err(PortError::Io)?;
        Ok(buffer[0])
    }

    fn bytes_to_read(&self) -> usize {
        self.port.bytes_to_read().map(|n| n as usize).unwrap_or(0)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    fn try_clone(&self) -> Result<Box<dyn SerialConnection>, PortError> {
        let port = self.port.try_clone().map_err(PortError::Serial)?;
        Ok(Box::new(Self {
            port,
            name: self.name.clone(),
            baud_rate: self.baud_rate,
        }))
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("name", &self.name)
            .field("baud_rate", &self.baud_rate)
            .finish()
    }
}
