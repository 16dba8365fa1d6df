//! Source emitters
//!
//! Formats a finished [`WavetableSet`] as source text that can be compiled
//! straight into a synthesizer. Both emitters write the same sections in the
//! same order:
//!
//! 1. a header comment listing every slot, the sample rate, and the footprint
//! 2. one array literal per slot
//! 3. the frequency table, the sample-length table, and the table of tables
//! 4. the slot-count constant

mod c_source;
mod rust_source;

pub use c_source::CEmitter;
pub use rust_source::RustEmitter;

use bandtable_backend::WavetableSet;
use bandtable_spec::{Precision, Waveform};
use std::fmt;

/// Name of the slot-count constant in every emitted file.
pub const NUM_TABLES_CONST: &str = "BL_NUM_TABLES";

/// Output language for the generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// C/C++ header with `static const` arrays
    #[default]
    C,
    /// Rust module with `pub static` arrays
    Rust,
}

impl OutputFormat {
    /// Returns the emitter for this format.
    pub fn emitter(self) -> Box<dyn SourceEmitter> {
        match self {
            OutputFormat::C => Box::new(CEmitter),
            OutputFormat::Rust => Box::new(RustEmitter),
        }
    }

    /// Lowercase name, as accepted by `--format`.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Rust => "rust",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a wavetable set as embeddable source text.
pub trait SourceEmitter {
    /// Writes the full source file for `set`.
    fn emit(&self, set: &WavetableSet, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Renders the source file into a string.
    fn render(&self, set: &WavetableSet) -> String {
        let mut source = String::new();
        // Writing into a String cannot fail.
        let _ = self.emit(set, &mut source);
        source
    }
}

/// Renders `set` in the given format.
pub fn render_source(set: &WavetableSet, format: OutputFormat) -> String {
    format.emitter().render(set)
}

/// Identifier prefix for a waveform's tables, e.g. `BLSaw`.
pub fn table_prefix(waveform: Waveform) -> &'static str {
    match waveform {
        Waveform::Saw => "BLSaw",
        Waveform::Square => "BLSquare",
        Waveform::Triangle => "BLTriangle",
        Waveform::Gauss => "BLGauss",
    }
}

/// Formats one value with the precision's fixed number of decimals.
pub(crate) fn fixed(value: f64, precision: Precision) -> String {
    format!("{:.*}", precision.literal_digits(), value)
}

/// Lines of the header comment, without comment markers.
pub(crate) fn header_lines(set: &WavetableSet) -> Vec<String> {
    let precision = set.config.precision;
    let mut lines = vec!["Frequency listing for each wavetable:".to_string()];
    for slot in &set.slots {
        lines.push(format!(
            "{:.3}Hz         Sample Count: {}",
            slot.canonical_frequency, slot.sample_length
        ));
    }
    lines.push(format!("Sample rate: {}", set.config.sample_rate));
    lines.push(String::new());
    lines.push(format!(
        "Total number of {}s: {}",
        precision.c_type(),
        set.total_samples
    ));
    lines.push(format!("Memory taken: {} bytes.", set.total_bytes));
    lines
}

/// Comment line introducing one slot's array.
pub(crate) fn slot_comment(frequency: f64, sample_length: usize) -> String {
    format!("fundamental at {:.3}Hz, {} samples", frequency, sample_length)
}

/// Joins formatted values with `", "`.
pub(crate) fn join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(", ");
        }
        joined.push_str(value.as_ref());
    }
    joined
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_digits_follow_precision() {
        assert_eq!(fixed(0.5, Precision::Single), "0.5000000000");
        assert_eq!(fixed(-0.25, Precision::Double), "-0.25000000000000000");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["a", "b", "c"]), "a, b, c");
        assert_eq!(join(Vec::<String>::new()), "");
    }

    #[test]
    fn test_header_lines() {
        let set = test_support::set(Waveform::Saw, 1, Precision::Single);
        let lines = header_lines(&set);
        assert_eq!(lines[0], "Frequency listing for each wavetable:");
        assert_eq!(lines[1], "103.896Hz         Sample Count: 462");
        assert_eq!(lines[2], "Sample rate: 48000");
        assert_eq!(lines[4], "Total number of floats: 462");
        assert_eq!(lines[5], "Memory taken: 1848 bytes.");
    }

    #[test]
    fn test_prefixes() {
        let prefixes: Vec<&str> = Waveform::ALL.iter().map(|&w| table_prefix(w)).collect();
        assert_eq!(prefixes, vec!["BLSaw", "BLSquare", "BLTriangle", "BLGauss"]);
    }

    #[test]
    fn test_format_selects_emitter() {
        let set = test_support::set(Waveform::Square, 2, Precision::Single);
        assert!(render_source(&set, OutputFormat::C).contains("static const float BLSquareTable0["));
        assert!(render_source(&set, OutputFormat::Rust).contains("pub static BL_SQUARE_TABLE_0: [f32; "));
        assert_eq!(OutputFormat::default(), OutputFormat::C);
    }
}
