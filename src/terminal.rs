//! The interactive terminal loop.
//!
//! Reads console lines, classifies them as quit/clear/data, and transmits
//! each valid byte token individually. Diagnostics for bad tokens and failed
//! writes are printed inline; neither aborts the loop.

use crate::parse::parse_byte;
use crate::port::SerialConnection;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What a single console line asks the terminal to do.
#[derive(Debug, PartialEq, Eq)]
pub enum LineCommand<'a> {
    /// End the session.
    Quit,
    /// Clear the visible console buffer.
    Clear,
    /// Whitespace-separated byte tokens to transmit.
    Data(&'a str),
}

/// Classify a console line (newline already stripped).
pub fn classify(line: &str) -> LineCommand<'_> {
    match line {
        "q" => LineCommand::Quit,
        "c" => LineCommand::Clear,
        data => LineCommand::Data(data),
    }
}

/// Run the terminal loop until the user quits or console input ends.
///
/// `input` and `out` are generic so the loop can run against in-memory
/// consoles in tests; the real program passes locked stdin and stdout.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    port: &mut dyn SerialConnection,
) -> std::io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like quit.
            return Ok(());
        }

        match classify(line.trim_end_matches(['\r', '\n'])) {
            LineCommand::Quit => return Ok(()),
            LineCommand::Clear => execute!(out, Clear(ClearType::All), MoveTo(0, 0))?,
            LineCommand::Data(data) => send_tokens(data, out, port)?,
        }
    }
}

/// Parse and transmit each token of a data line independently.
///
/// A bad token or a failed write is reported and processing continues with
/// the next token.
fn send_tokens<W: Write>(
    data: &str,
    out: &mut W,
    port: &mut dyn SerialConnection,
) -> std::io::Result<()> {
    for token in data.split_whitespace() {
        match parse_byte(token) {
            Ok(byte) => match port.write_byte(byte) {
                Ok(()) => debug!(byte, port = port.name(), "byte transmitted"),
                Err(e) => {
                    warn!(byte, error = %e, "write failed");
                    writeln!(out, "Failed to write byte: {e}")?;
                }
            },
            Err(e) => writeln!(out, "{token}: {e}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::MockConnection;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_commands() {
        assert_eq!(classify("q"), LineCommand::Quit);
        assert_eq!(classify("c"), LineCommand::Clear);
        assert_eq!(classify("10 20"), LineCommand::Data("10 20"));
        // A quit letter with surrounding whitespace is data, not a command.
        assert_eq!(classify(" q"), LineCommand::Data(" q"));
        assert_eq!(classify(""), LineCommand::Data(""));
    }

    #[test]
    fn send_tokens_transmits_valid_bytes_only() {
        let mut conn = MockConnection::new("MOCK0");
        let mut out = Vec::new();

        send_tokens("10 $1F 0xFF 300 abc", &mut out, &mut conn).unwrap();

        assert_eq!(conn.written(), vec![10, 31, 255]);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "300: Number must be between 0 and 255\nabc: Not a number.\n"
        );
    }

    #[test]
    fn send_tokens_reports_write_failure_and_continues() {
        let mut conn = MockConnection::new("MOCK0");
        conn.fail_next_write();
        let mut out = Vec::new();

        send_tokens("10 20", &mut out, &mut conn).unwrap();

        assert_eq!(conn.written(), vec![20]);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Failed to write byte:"));
    }

    #[test]
    fn blank_data_line_is_a_no_op() {
        let mut conn = MockConnection::new("MOCK0");
        let mut out = Vec::new();

        send_tokens("   \t ", &mut out, &mut conn).unwrap();

        assert!(conn.written().is_empty());
        assert!(out.is_empty());
    }
}
