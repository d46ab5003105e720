//! Cycle-accurate RV32I pipeline simulator CLI.
//!
//! This binary loads a statically linked 32-bit RISC-V ELF executable into
//! the modeled memories and simulates it on the 5-stage pipeline, with
//! verbosity-controlled tracing and an end-of-run statistics report.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snurisc_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "snurisc",
    author,
    version,
    about = "Cycle-accurate 5-stage pipelined RV32I processor simulator",
    long_about = "Simulates a statically linked RV32 ELF executable on a classical \
5-stage pipeline (IF/ID/EX/MM/WB) with full forwarding, load-use stalls, and \
predict-not-taken branches.\n\nLog levels:\n  0  silent\n  1  dump registers at \
end of run\n  2  + dump data memory at end of run\n  3  + trace retired \
instructions\n  4  + trace every stage every cycle\n  5  + ALU and forwarding \
detail\n  6  + dump registers each cycle\n  7  + dump data memory each cycle"
)]
struct Cli {
    /// Log verbosity (0-7); overrides the config file
    #[arg(short = 'l', long = "log-level", value_parser = clap::value_parser!(u8).range(0..=7))]
    log_level: Option<u8>,

    /// Suppress trace output for cycles below this; overrides the config file
    #[arg(short = 'c', long = "log-start")]
    log_start: Option<u64>,

    /// JSON configuration file overriding the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Statically linked RV32 ELF executable to simulate
    filename: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("snurisc: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if let Some(level) = cli.log_level {
        config.general.log_level = level;
    }
    if let Some(start) = cli.log_start {
        config.general.log_start = start;
    }

    let mut sim = Simulator::new(&config);
    let entry = match sim.load(&cli.filename) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("snurisc: {e}");
            process::exit(1);
        }
    };

    println!(
        "Loaded '{}' (entry point {entry:#010x})",
        cli.filename.display()
    );

    let halt = sim.run();
    sim.report(&halt);
}
