const DEFAULT_COMPAT_FILE: &str = "compatibility.json";
const DEFAULT_ROMS_DIR: &str = "roms";
const DEFAULT_EMULATOR: &str = "../build/n64";

use std::path::Path;

use clap::{Parser, Subcommand};

use n64_compat::commands;
use n64_compat::error::Error;
use n64_compat::games::load_compatibility_list;

#[derive(Parser)]
struct Args {
    /// Compatibility list to load
    #[clap(long, default_value = DEFAULT_COMPAT_FILE)]
    compat_file: String,
    /// Directory the ROM files are stored in
    #[clap(long, default_value = DEFAULT_ROMS_DIR)]
    roms: String,
    /// Emulator binary used by the test command
    #[clap(long, default_value = DEFAULT_EMULATOR)]
    emulator: String,
    /// Set the type of log messages to print
    #[clap(short = 'l', long)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of games under each compatibility label
    #[clap(name = "analyze")]
    Analyze,
    /// Report games with no ROM path set, or whose ROM file is not on disk
    #[clap(name = "missing_roms")]
    MissingRoms,
    /// Launch the emulator against the first untested game with a ROM on disk
    #[clap(name = "test")]
    Test,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let log_level = match args.log_level.as_deref() {
        Some("trace") => log::Level::Trace,
        Some("debug") => log::Level::Debug,
        Some("info") => log::Level::Info,
        Some("warn") => log::Level::Warn,
        Some("error") => log::Level::Error,
        _ => log::Level::Info,
    };

    simple_logger::SimpleLogger::new()
        .with_level(log_level.to_level_filter())
        .without_timestamps()
        .init()
        .unwrap();

    let games = load_compatibility_list(Path::new(&args.compat_file))?;

    match args.command {
        Command::Analyze => commands::analyze(&games),
        Command::MissingRoms => {
            commands::missing_roms(&games, Path::new(&args.roms));
        },
        Command::Test => commands::test(&games, Path::new(&args.roms), Path::new(&args.emulator))?,
    }

    Ok(())
}
