//! Rust module emitter.

use bandtable_backend::WavetableSet;
use bandtable_spec::{Precision, Waveform};
use std::fmt::{self, Write};

use super::{fixed, header_lines, join, slot_comment, SourceEmitter, NUM_TABLES_CONST};

/// Emits `pub static` arrays for inclusion with `include!` or as a module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

/// Identifier prefix in SCREAMING_SNAKE_CASE, e.g. `BL_SAW`.
fn const_prefix(waveform: Waveform) -> String {
    format!("BL_{}", waveform.as_str().to_ascii_uppercase())
}

/// Float literal with the element type as suffix, e.g. `0.5000000000f32`.
fn literal(value: f64, precision: Precision) -> String {
    format!("{}{}", fixed(value, precision), precision.rust_type())
}

impl SourceEmitter for RustEmitter {
    fn emit(&self, set: &WavetableSet, out: &mut dyn Write) -> fmt::Result {
        let precision = set.config.precision;
        let ty = precision.rust_type();
        let prefix = const_prefix(set.config.waveform);
        let count = set.len();

        for line in header_lines(set) {
            if line.is_empty() {
                writeln!(out, "//")?;
            } else {
                writeln!(out, "// {}", line)?;
            }
        }
        writeln!(out)?;

        for (i, slot) in set.slots.iter().enumerate() {
            writeln!(
                out,
                "/// {}",
                slot_comment(slot.canonical_frequency, slot.sample_length)
            )?;
            writeln!(out, "#[allow(clippy::excessive_precision)]")?;
            let values = slot.buffer.iter().map(|&s| literal(s, precision));
            writeln!(
                out,
                "pub static {}_TABLE_{}: [{}; {}] = [{}];",
                prefix,
                i,
                ty,
                slot.sample_length,
                join(values)
            )?;
            writeln!(out)?;
        }

        writeln!(out, "/// Fundamental frequency for each table.")?;
        writeln!(out, "#[allow(clippy::excessive_precision)]")?;
        let freqs = set
            .slots
            .iter()
            .map(|s| literal(s.canonical_frequency, precision));
        writeln!(
            out,
            "pub static {}_FREQ_TABLE: [{}; {}] = [{}];",
            prefix,
            ty,
            count,
            join(freqs)
        )?;
        writeln!(out)?;

        writeln!(out, "/// Number of samples in each table.")?;
        let lengths = set.slots.iter().map(|s| s.sample_length.to_string());
        writeln!(
            out,
            "pub static {}_SAMPLES_TABLE: [usize; {}] = [{}];",
            prefix,
            count,
            join(lengths)
        )?;
        writeln!(out)?;

        writeln!(out, "/// Every table, in slot order.")?;
        let refs = (0..count).map(|i| format!("&{}_TABLE_{}", prefix, i));
        writeln!(
            out,
            "pub static {}_WAVETABLE: [&[{}]; {}] = [{}];",
            prefix,
            ty,
            count,
            join(refs)
        )?;
        writeln!(out)?;

        writeln!(out, "pub const {}: usize = {};", NUM_TABLES_CONST, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_const_prefix() {
        assert_eq!(const_prefix(Waveform::Saw), "BL_SAW");
        assert_eq!(const_prefix(Waveform::Triangle), "BL_TRIANGLE");
    }

    #[test]
    fn test_layout() {
        let set = test_support::set(Waveform::Gauss, 3, Precision::Single);
        let source = RustEmitter.render(&set);

        assert!(source.starts_with("// Frequency listing for each wavetable:\n"));
        assert!(source.contains("pub static BL_GAUSS_TABLE_0: [f32; "));
        assert!(source.contains(&format!(
            "pub static BL_GAUSS_FREQ_TABLE: [f32; {}] = [",
            set.len()
        )));
        assert!(source.contains(&format!(
            "pub static BL_GAUSS_SAMPLES_TABLE: [usize; {}] = [",
            set.len()
        )));
        assert!(source.contains("&BL_GAUSS_TABLE_0"));
        assert!(source.ends_with(&format!("pub const BL_NUM_TABLES: usize = {};\n", set.len())));
    }

    #[test]
    fn test_literals_carry_type_suffix() {
        assert_eq!(literal(0.5, Precision::Single), "0.5000000000f32");
        assert_eq!(literal(-0.25, Precision::Double), "-0.25000000000000000f64");

        let set = test_support::set(Waveform::Saw, 2, Precision::Single);
        let source = RustEmitter.render(&set);
        let decl = format!(
            "pub static BL_SAW_TABLE_0: [f32; {}] = [0.0000000000f32, ",
            set.slots[0].sample_length
        );
        assert!(source.contains(&decl), "missing {}", decl);
        let freq_line = source
            .lines()
            .find(|l| l.starts_with("pub static BL_SAW_FREQ_TABLE"))
            .unwrap();
        assert!(freq_line.trim_end_matches("];").ends_with("f32"));
    }

    #[test]
    fn test_double_precision_type() {
        let set = test_support::set(Waveform::Saw, 2, Precision::Double);
        let source = RustEmitter.render(&set);
        assert!(source.contains("pub static BL_SAW_TABLE_1: [f64; "));
        assert!(source.contains("// Total number of doubles: "));
    }
}
