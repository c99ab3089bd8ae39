//! Mock serial connection for testing.
//!
//! Provides a `MockConnection` that simulates serial port behavior without
//! requiring actual hardware. Supports a configurable read queue, a write
//! log, and one-shot read/write failure injection.

use super::error::PortError;
use super::traits::SerialConnection;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Inner state of the mock connection, protected by a mutex for interior
/// mutability. Shared between clones, mirroring how `try_clone` on a real
/// port yields two handles on the same device.
#[derive(Debug, Default)]
struct MockState {
    /// Queue of bytes to be returned by read operations.
    read_queue: VecDeque<u8>,
    /// Log of all bytes written to the port, in order.
    write_log: Vec<u8>,
    /// Whether the next read should fail.
    fail_next_read: bool,
    /// Whether the next write should fail.
    fail_next_write: bool,
}

/// Mock serial connection implementation for testing.
///
/// # Example
/// ```
/// use binary_rs232_term::port::{MockConnection, SerialConnection};
///
/// let mut conn = MockConnection::new("MOCK0");
/// conn.enqueue_read(&[0x41]);
///
/// assert_eq!(conn.bytes_to_read(), 1);
/// assert_eq!(conn.read_byte().unwrap(), 0x41);
///
/// conn.write_byte(0xFF).unwrap();
/// assert_eq!(conn.written(), vec![0xFF]);
/// ```
#[derive(Clone)]
pub struct MockConnection {
    name: String,
    state: Arc<Mutex<MockState>>,
}

impl MockConnection {
    /// Create a new mock connection with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Enqueue bytes to be returned by subsequent read operations.
    pub fn enqueue_read(&mut self, data: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state.read_queue.extend(data);
    }

    /// Get a copy of every byte written to the port so far.
    pub fn written(&self) -> Vec<u8> {
        let state = self.state.lock().unwrap();
        state.write_log.clone()
    }

    /// Make the next read fail with an I/O error (the queue is untouched).
    pub fn fail_next_read(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.fail_next_read = true;
    }

    /// Make the next write fail with an I/O error.
    pub fn fail_next_write(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.fail_next_write = true;
    }
}

impl SerialConnection for MockConnection {
    fn write_byte(&mut self, byte: u8) -> Result<(), PortError> {
        let mut state = self.state.lock().unwrap();

        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(PortError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "injected write failure",
            )));
        }

        state.write_log.push(byte);
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, PortError> {
        let mut state = self.state.lock().unwrap();

        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(PortError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "injected read failure",
            )));
        }

        state.read_queue.pop_front().ok_or_else(|| {
            PortError::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                "no data available",
            ))
        })
    }

    fn bytes_to_read(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.read_queue.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn baud_rate(&self) -> u32 {
        9600
    }

    fn try_clone(&self) -> Result<Box<dyn SerialConnection>, PortError> {
        Ok(Box::new(self.clone()))
    }
}

impl std::fmt::Debug for MockConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockConnection")
            .field("name", &self.name)
            .field("bytes_to_read", &self.bytes_to_read())
            .finish()
    }
}
