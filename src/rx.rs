//! Receive side of the terminal.
//!
//! A dedicated reader thread drains the port one byte at a time and publishes
//! events over a channel; a printer thread is the single consumer that writes
//! the `Read:` lines, so received-byte output never interleaves partially
//! with itself.

use crate::port::SerialConnection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// How long the reader thread sleeps between polls of an idle port.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Events published by the reader thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RxEvent {
    /// A byte arrived on the port.
    Byte(u8),
    /// A read failed; the drain continued with the next byte.
    ReadError(String),
}

/// Format a received byte the way the terminal prints it: uppercase two-digit
/// hex, the raw decoded character, right-justified width-3 decimal, and
/// zero-padded 8-bit binary.
pub fn format_read(value: u8) -> String {
    format!("Read: {value:02X}  {}  {value:3}  {value:08b}", value as char)
}

/// Drain every byte currently buffered by the port into the channel.
///
/// Returns `false` when the receiver is gone and the reader should stop.
pub fn drain(port: &mut dyn SerialConnection, events: &Sender<RxEvent>) -> bool {
    while port.bytes_to_read() > 0 {
        let event = match port.read_byte() {
            Ok(byte) => RxEvent::Byte(byte),
            Err(e) => {
                warn!(port = port.name(), error = %e, "read failed");
                RxEvent::ReadError(e.to_string())
            }
        };
        if events.send(event).is_err() {
            return false;
        }
    }
    true
}

/// The running receive pump: reader thread + printer thread.
pub struct RxPump {
    reader: thread::JoinHandle<()>,
    printer: thread::JoinHandle<()>,
    stop: Arc<AtomicBool>,
}

impl RxPump {
    /// Spawn the reader and printer threads over an independent port handle.
    pub fn spawn(mut port: Box<dyn SerialConnection>) -> Self {
        debug!(
            port = port.name(),
            baud = port.baud_rate(),
            "receive pump started"
        );

        let stop = Arc::new(AtomicBool::new(false));
        let (events, inbox) = mpsc::channel();

        let reader_stop = Arc::clone(&stop);
        let reader = thread::spawn(move || {
            while !reader_stop.load(Ordering::Relaxed) {
                if !drain(port.as_mut(), &events) {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
            // `events` drops here, which ends the printer thread.
        });

        let printer = thread::spawn(move || {
            for event in inbox {
                match event {
                    RxEvent::Byte(value) => println!("{}", format_read(value)),
                    RxEvent::ReadError(message) => println!("Failed to read byte: {message}"),
                }
            }
        });

        Self {
            reader,
            printer,
            stop,
        }
    }

    /// Stop the reader, let the channel close, and join both threads.
    pub fn shutdown(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.reader.join();
        let _ = self.printer.join();
    }
}
