//! Port selection and connection opening.
//!
//! Prompts for a port number (an index into the system's enumerated port
//! list) and a baud rate, re-prompting iteratively on invalid input, then
//! opens the port. An open failure restarts the whole selection sequence.

use crate::error::AppError;
use crate::port::{PortError, SerialLink};
use std::io::{BufRead, Write};
use tracing::info;

/// Enumerate the names of the serial ports present on this machine, sorted.
pub fn available_port_names() -> Result<Vec<String>, PortError> {
    let mut names: Vec<String> = serialport::available_ports()?
        .into_iter()
        .map(|info| info.port_name)
        .collect();
    names.sort();
    Ok(names)
}

/// Prompt until the user picks a port present in `names` (1-based index).
pub fn prompt_port_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    names: &[String],
) -> std::io::Result<String> {
    loop {
        let line = prompt_line(input, out, "Port Number? ")?;
        match line.trim().parse::<usize>() {
            Ok(number) if number > 0 => {
                if let Some(name) = names.get(number - 1) {
                    return Ok(name.clone());
                }
                writeln!(out, "There is no such serial port on this computer.")?;
            }
            _ => writeln!(out, "Please enter a positive integer")?,
        }
    }
}

/// Prompt until the user enters a positive integer baud rate.
///
/// Rates the hardware rejects surface when the port is opened, which
/// restarts the whole selection sequence.
pub fn prompt_baud_rate<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> std::io::Result<u32> {
    loop {
        let line = prompt_line(input, out, "Baud Rate? ")?;
        match line.trim().parse::<u32>() {
            Ok(rate) if rate > 0 => return Ok(rate),
            _ => writeln!(out, "Please enter a positive integer")?,
        }
    }
}

/// Run the full selection sequence until a port opens: list ports, prompt
/// for port and baud rate, open. On an open failure the diagnostic is
/// printed and the sequence restarts with a fresh enumeration.
pub fn select_and_open<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<SerialLink, AppError> {
    loop {
        let names = available_port_names()?;
        if names.is_empty() {
            writeln!(out, "No serial ports were found on this computer.")?;
        }
        for (index, name) in names.iter().enumerate() {
            writeln!(out, "  {}: {}", index + 1, name)?;
        }

        let name = prompt_port_number(input, out, &names)?;
        let baud_rate = prompt_baud_rate(input, out)?;

        match SerialLink::open(&name, baud_rate) {
            Ok(link) => {
                info!(port = %name, baud = baud_rate, "serial port opened");
                return Ok(link);
            }
            Err(e @ PortError::PermissionDenied(_)) => writeln!(out, "{e}")?,
            Err(e) => writeln!(out, "Failed to open serial port: {e}")?,
        }
    }
}

/// Write a prompt, flush, and read one line. EOF on the console is an error
/// here; there is nothing sensible to select without a user.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> std::io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "console input closed during prompt",
        ));
    }
    Ok(line)
}
