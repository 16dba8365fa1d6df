//! CLI argument definitions for the bandtable command-line interface.
//!
//! The `#[derive(Parser)]` type is defined here, keeping `main.rs` focused on
//! dispatch logic.

use bandtable_cli::commands::GenerateRequest;
use bandtable_cli::emit::OutputFormat;
use clap::Parser;

/// Bandtable - band-limited wavetable generator
///
/// Writes the generated tables to stdout (or --output) and status to stderr.
#[derive(Parser, Debug)]
#[command(name = "bandtable")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub(crate) struct Cli {
    /// Sample rate in Hz
    pub sample_rate: i64,

    /// Number of tables to request (duplicates collapse, so fewer may be emitted)
    pub slot_count: i64,

    /// Waveform: Saw, Square, Triangle, or Gauss (case-insensitive)
    pub waveform: String,

    /// Numeric precision (single, double)
    #[arg(long, default_value = "single")]
    pub precision: String,

    /// Output language
    #[arg(long, value_enum, default_value_t = OutputFormat::C)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output a machine-readable JSON summary on stderr (no colored output)
    #[arg(long)]
    pub json: bool,

    /// Compare single- and double-precision output instead of emitting source
    #[arg(long)]
    pub check_stability: bool,
}

impl Cli {
    /// Converts the parsed arguments into a command request.
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            sample_rate: self.sample_rate,
            slot_count: self.slot_count,
            waveform: self.waveform.clone(),
            precision: self.precision.clone(),
            format: self.format,
            output: self.output.clone(),
            json: self.json,
        }
    }
}
