//! End-to-end tests for the terminal loop, driven through in-memory consoles
//! and the mock serial connection.

use binary_rs232_term::port::{MockConnection, SerialConnection};
use binary_rs232_term::{format_read, terminal};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn run_session(console_input: &str, conn: &mut MockConnection) -> String {
    let mut input = Cursor::new(console_input.to_string());
    let mut out = Vec::new();
    terminal::run(&mut input, &mut out, conn).expect("terminal loop failed");
    String::from_utf8(out).expect("console output was not UTF-8")
}

mod transmit {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mixed_line_processes_every_token_independently() {
        let mut conn = MockConnection::new("MOCK0");

        let printed = run_session("10 $1F 0xFF 300 abc\nq\n", &mut conn);

        assert_eq!(conn.written(), vec![10, 31, 255]);
        assert!(printed.contains("300: Number must be between 0 and 255"));
        assert!(printed.contains("abc: Not a number."));
    }

    #[test]
    fn quit_ends_the_session_before_later_lines() {
        let mut conn = MockConnection::new("MOCK0");

        run_session("q\n10\n", &mut conn);

        assert!(conn.written().is_empty());
    }

    #[test]
    fn eof_ends_the_session_like_quit() {
        let mut conn = MockConnection::new("MOCK0");

        run_session("10\n", &mut conn);

        assert_eq!(conn.written(), vec![10]);
    }

    #[test]
    fn write_failure_does_not_abort_the_line_or_the_loop() {
        let mut conn = MockConnection::new("MOCK0");
        conn.fail_next_write();

        let printed = run_session("1 2\n3\nq\n", &mut conn);

        // Byte 1 fails, bytes 2 and 3 go through.
        assert_eq!(conn.written(), vec![2, 3]);
        assert!(printed.contains("Failed to write byte:"));
    }

    #[test]
    fn bytes_are_written_one_at_a_time_in_token_order() {
        let mut conn = MockConnection::new("MOCK0");

        run_session("255 0 $A\nq\n", &mut conn);

        assert_eq!(conn.written(), vec![255, 0, 10]);
    }

    #[test]
    fn empty_lines_transmit_nothing() {
        let mut conn = MockConnection::new("MOCK0");

        let printed = run_session("\n   \nq\n", &mut conn);

        assert!(conn.written().is_empty());
        assert!(printed.is_empty());
    }
}

mod clear_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_emits_control_sequences_and_nothing_is_transmitted() {
        let mut conn = MockConnection::new("MOCK0");

        let printed = run_session("c\nq\n", &mut conn);

        assert!(conn.written().is_empty());
        // crossterm's clear writes ANSI escapes to the console.
        assert!(printed.contains('\u{1b}'));
    }
}

mod receive_format {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn byte_0x41_prints_the_documented_line() {
        assert_eq!(format_read(0x41), "Read: 41  A   65  01000001");
    }

    #[test]
    fn every_byte_formats_with_fixed_field_widths() {
        for value in 0..=255u8 {
            let line = format_read(value);
            assert!(line.starts_with(&format!("Read: {value:02X}  ")));
            assert!(line.ends_with(&format!("{value:3}  {value:08b}")));
        }
    }
}

mod shared_handles {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn terminal_writes_are_visible_through_a_cloned_handle() {
        let mut conn = MockConnection::new("MOCK0");
        let rx_handle = conn.try_clone().expect("clone failed");

        run_session("10\nq\n", &mut conn);

        // The receive side's handle observes the same device state.
        assert_eq!(rx_handle.bytes_to_read(), 0);
        assert_eq!(conn.written(), vec![10]);
    }
}
