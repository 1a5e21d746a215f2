use anyhow::{bail, Context, Result};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;

use termpong::config::{self, Config};
use termpong::debug;
use termpong::session::Session;
use termpong::ui::{KeyMap, TerminalPort};

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    debug: bool,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    print_config: bool,
    help: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage(args.first().map(String::as_str).unwrap_or("termpong"));
        return Ok(());
    }

    if options.print_config {
        print!("{}", config::default_config_toml()?);
        return Ok(());
    }

    // Initialize file-based debug logging (only if --debug flag is set)
    // This runs BEFORE the TUI starts so nothing ever reaches stderr mid-game
    debug::init(options.debug).context("starting debug log")?;
    info!("termpong starting");

    // Load and validate configuration before the terminal is touched
    let config = config::load_config(options.config_path.as_deref())?;
    KeyMap::from_bindings(&config.keybindings)?;

    let rng = match options.seed {
        Some(seed) => {
            info!(seed, "seeded serves");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let result = run(terminal, config, rng);

    // Restore terminal
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableFocusChange)?;

    result
}

fn run(
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    rng: StdRng,
) -> Result<()> {
    let mut port = TerminalPort::new(terminal, &config)?;
    port.terminal_mut().hide_cursor()?;

    let mut session = Session::new(port, config, rng);
    let result = session.run();

    let mut port = session.into_port();
    port.terminal_mut().show_cursor()?;

    result.context("game loop failed")
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--config" | "-c" => {
                let Some(path) = rest.next() else {
                    bail!("--config requires a file path");
                };
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let Some(value) = rest.next() else {
                    bail!("--seed requires a number");
                };
                let seed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed {:?}", value))?;
                options.seed = Some(seed);
            }
            "--print-config" => options.print_config = true,
            "--help" | "-h" => options.help = true,
            other => bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(options)
}

fn print_usage(program: &str) {
    println!("termpong - Terminal Pong");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  -d, --debug           Write a debug log to {}", debug::log_file_path().display());
    println!("  -c, --config <path>   Read settings from <path> instead of the default location");
    println!("      --seed <n>        Use a fixed seed for ball serves");
    println!("      --print-config    Print the default configuration and exit");
    println!("  -h, --help            Show this help");
    println!();
    println!("Default config file: {}", config::get_config_path().display());
    println!();
    println!("Controls:");
    println!("  Title screen: SPACE multiplayer, 1-4 single player difficulty, ESC quit");
    println!("  In game: W/S player 1, UP/DOWN player 2, SPACE start, P pause, ESC menu");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("termpong")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_arguments_means_defaults() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Options::default());
    }

    #[test]
    fn test_all_flags() {
        let options = parse_args(&args(&[
            "--debug",
            "--config",
            "/tmp/pong.toml",
            "--seed",
            "42",
        ]))
        .unwrap();
        assert!(options.debug);
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/pong.toml")));
        assert_eq!(options.seed, Some(42));
        assert!(!options.print_config);
    }

    #[test]
    fn test_bad_arguments_are_errors() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--listen"])).is_err());
    }
}
