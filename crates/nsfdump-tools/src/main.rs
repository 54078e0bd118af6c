use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod info;
mod input;
mod mml;
mod preview;

/// nsfdump command line tools
#[derive(Parser)]
#[command(
    name = "nsfdump",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the decoded header of one or more NSF files (use '-' for stdin)
    Info {
        /// Input files to read (use '-' for stdin)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Also print a hex dump of the 128 header bytes
        #[arg(long)]
        raw: bool,
    },
    /// Write the simulated MML report for one song
    Mml {
        /// Input file to read (use '-' for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Song number, starting at 1 (defaults to the file's starting song)
        #[arg(long, short = 's')]
        song: Option<usize>,
        /// Output path ('-' for stdout, a directory to use the suggested file name)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Render the square-wave preview phrase to a WAV file
    Preview {
        /// Input file to read (use '-' for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// WAV file to write
        #[arg(long, short = 'o', value_name = "WAV")]
        output: PathBuf,
        /// Output sample rate in Hz
        #[arg(long, default_value_t = 44_100)]
        sample_rate: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { files, raw } => {
            for (i, file) in files.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let bytes = input::read_nsf_as_vec(file)?;
                info::info(file, &bytes, raw)?;
            }
        }
        Commands::Mml { file, song, output } => {
            let bytes = input::read_nsf_as_vec(&file)?;
            mml::write_mml(&file, &bytes, song, output.as_deref())?;
        }
        Commands::Preview {
            file,
            output,
            sample_rate,
        } => {
            let bytes = input::read_nsf_as_vec(&file)?;
            preview::write_preview(&file, &bytes, &output, sample_rate)?;
        }
    }

    Ok(())
}
