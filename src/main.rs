use std::io;
use std::process::ExitCode;

use tracing::{error, info, Level};

use sigtop::app::App;
use sigtop::config::Config;
use sigtop::input;
use sigtop::system::{KillSender, ProcessScanner, SignalSender};
use sigtop::terminal::TerminalController;
use sigtop::{ui, Error, Result};

/// Command-line arguments (parsed with lightweight lexopt)
#[derive(Debug, Default)]
struct Args {
    help: bool,
    version: bool,
}

fn parse_args() -> std::result::Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut args = Args::default();
    let mut parser = lexopt::Parser::from_env();

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                args.help = true;
            }
            Short('V') | Long("version") => {
                args.version = true;
            }
            _ => return Err(arg.unexpected()),
        }
    }
    Ok(args)
}

fn print_help() {
    println!("sigtop {}", env!("CARGO_PKG_VERSION"));
    println!("Full-screen process list that sends signals to processes\n");
    println!("USAGE: sigtop [OPTIONS]\n");
    println!("OPTIONS:");
    println!("  -h, --help       Print help");
    println!("  -V, --version    Print version\n");
    println!("KEYS:");
    println!("  K/J       Select up/down");
    println!("  H         Toggle the help text");
    println!("  Q/CTRL+C  Quit");
    println!("  T         Send SIGTERM to the selected process");
    println!("  S         Open the signal menu for the selected process");
    println!("  ESC       Close the signal menu");
    println!("  ENTER     Send the highlighted signal");
}

/// Log to stderr. Nothing at INFO or above is emitted while the screen is in raw mode.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        println!("sigtop {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging();

    match run(&Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_environment() => {
            error!("cannot start: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    // Fails before any terminal mode is changed
    let mut terminal = TerminalController::enter()?;

    let mut app = App::new(config);
    let scanner = ProcessScanner::new(&config.proc_root);
    let mut sender = KillSender;

    let result = run_app(&mut terminal, &mut app, &scanner, &mut sender, config);

    // Restore terminal whatever ended the loop
    match terminal.restore() {
        Ok(()) => info!("restored terminal"),
        Err(e) => error!("failed to restore terminal: {e}"),
    }

    result
}

fn run_app(
    terminal: &mut TerminalController,
    app: &mut App,
    scanner: &ProcessScanner,
    sender: &mut dyn SignalSender,
    config: &Config,
) -> Result<()> {
    loop {
        let key = input::next_key(config.poll_interval).map_err(Error::InputRead)?;

        // No key is a normal outcome and still gets a full rescan and redraw
        app.refresh_processes(scanner);

        let budget = terminal.window_size()?;
        let echo = key.as_ref().filter(|k| input::is_interrupt(k)).map(|_| "^C");
        terminal.draw(|f| ui::draw(f, app, budget, echo))?;

        if let Some(key) = key
            && input::handle_key_event(app, key, sender)
        {
            return Ok(());
        }
    }
}
