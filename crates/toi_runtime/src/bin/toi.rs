//! Toi CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use toi_flow::FlowController;
use toi_runtime::stages::{Startup, check_all};
use toi_runtime::{GameConfig, GameContext, GameIo, RustylineEditor, ScriptedEditor};
use tracing_subscriber::EnvFilter;

/// CLI options parsed from arguments.
#[derive(Default)]
struct CliOptions {
    config: GameConfig,
    show_help: bool,
    show_version: bool,
    check: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, Box<dyn std::error::Error>> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => options.show_help = true,
            "-V" | "--version" => options.show_version = true,
            "--check" => options.check = true,
            "--no-paging" => options.config = options.config.with_page_lines(None),
            "--no-banner" => options.config = options.config.without_banner(),
            "--data-dir" => {
                let dir = value_of(&args, &mut i, "--data-dir")?;
                options.config = options.config.with_data_dir(dir);
            }
            "--page-lines" => {
                let raw = value_of(&args, &mut i, "--page-lines")?;
                let lines: usize = raw
                    .parse()
                    .map_err(|_| format!("invalid --page-lines value: {raw}"))?;
                options.config = options.config.with_page_lines(Some(lines));
            }
            "--log" => {
                let filter = value_of(&args, &mut i, "--log")?;
                options.config = options.config.with_log_filter(filter);
            }
            "--script" => {
                let path = value_of(&args, &mut i, "--script")?;
                options.config = options.config.with_script(path);
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(options)
}

fn value_of(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn init_logging(fallback: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("TOI_LOG").or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let CliOptions {
        config,
        show_help,
        show_version,
        check,
    } = parse_args(args)?;

    if show_help {
        print_help();
        return Ok(());
    }

    if show_version {
        println!("toi {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&config.log_filter)?;
    let data = Rc::new(config.load_data()?);

    let game_io = match &config.script {
        Some(path) => GameIo::new(ScriptedEditor::from_file(path)?, io::stdout()).with_echo(true),
        None => GameIo::new(RustylineEditor::new()?, io::stdout()),
    };
    let ctx = GameContext::new(game_io.with_page_lines(config.page_lines), data);

    if check {
        check_all(&ctx)?;
        println!("All stage grammars compile.");
        return Ok(());
    }

    if config.show_banner {
        print_banner();
    }

    let mut controller = FlowController::new(ctx);
    match controller.run(Startup, "start") {
        Err(e) if e.is_input_closed() => {
            controller.context_mut().io.flush()?;
            Ok(())
        }
        result => Ok(result?),
    }
}

fn print_banner() {
    println!("\x1b[1;36mToi\x1b[0m {} - gather a party", env!("CARGO_PKG_VERSION"));
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mToi\x1b[0m - Text-driven party builder

\x1b[1mUSAGE:\x1b[0m
    toi [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    --data-dir DIR       Load data files from DIR instead of the built-in set
    --page-lines N       Pause after N lines of output (default 20)
    --no-paging          Never pause output
    --no-banner          Do not print the title banner
    --log LEVEL          Log filter when TOI_LOG is unset (default warn)
    --script FILE        Read input lines from FILE instead of the terminal
    --check              Compile every stage's command grammars and exit

\x1b[1mEXAMPLES:\x1b[0m
    toi                          Start a new game
    toi --data-dir ./data        Play with edited data files
    toi --check --data-dir ./data
                                 Validate edited control files
    toi --script session.txt     Replay a session
    TOI_LOG=debug toi            Log command dispatch to stderr

In the game, type 'help' at any prompt."
    );
}
