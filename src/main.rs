use binary_rs232_term::error::AppError;
use binary_rs232_term::port::SerialConnection;
use binary_rs232_term::rx::RxPump;
use binary_rs232_term::{select, terminal};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never interleave with the terminal on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        println!("Unhandled error occurred: {e}");
        wait_for_key();
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mut stdout = io::stdout();
    // The title is cosmetic; some terminals refuse to set it.
    let _ = execute!(stdout, SetTitle("Binary RS232 terminal"));
    println!("Binary RS232 terminal");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut link = select::select_and_open(&mut input, &mut stdout)?;
    println!(
        "Opened port, enter numbers to send bytes; enter \"q\" to quit or \"c\" to clear the window."
    );

    let pump = RxPump::spawn(link.try_clone()?);
    let result = terminal::run(&mut input, &mut stdout, &mut link);
    pump.shutdown();

    result?;
    Ok(())
}

/// Pause until the user presses Enter, so the diagnostic stays visible when
/// the terminal window closes with the process.
fn wait_for_key() {
    println!("Press Enter to exit.");
    let mut scratch = String::new();
    let _ = io::stdin().lock().read_line(&mut scratch);
}
