//! C header emitter.

use bandtable_backend::WavetableSet;
use std::fmt::{self, Write};

use super::{fixed, header_lines, join, slot_comment, table_prefix, SourceEmitter, NUM_TABLES_CONST};

/// Emits `static const` arrays for inclusion from C or C++.
#[derive(Debug, Clone, Copy, Default)]
pub struct CEmitter;

impl SourceEmitter for CEmitter {
    fn emit(&self, set: &WavetableSet, out: &mut dyn Write) -> fmt::Result {
        let precision = set.config.precision;
        let ty = precision.c_type();
        let suffix = precision.c_literal_suffix();
        let prefix = table_prefix(set.config.waveform);
        let count = set.len();

        let mut header = header_lines(set).into_iter();
        if let Some(first) = header.next() {
            writeln!(out, "/* {}", first)?;
        }
        let rest: Vec<String> = header.collect();
        for (i, line) in rest.iter().enumerate() {
            if i + 1 == rest.len() {
                writeln!(out, "{} */", line)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out)?;

        for (i, slot) in set.slots.iter().enumerate() {
            writeln!(
                out,
                "// {}",
                slot_comment(slot.canonical_frequency, slot.sample_length)
            )?;
            let values = slot
                .buffer
                .iter()
                .map(|&s| format!("{}{}", fixed(s, precision), suffix));
            writeln!(
                out,
                "static const {} {}Table{}[{}] = {{{}}};",
                ty,
                prefix,
                i,
                slot.sample_length,
                join(values)
            )?;
            writeln!(out)?;
        }

        writeln!(out, "// fundamental frequency for each table")?;
        let freqs = set
            .slots
            .iter()
            .map(|s| format!("{}{}", fixed(s.canonical_frequency, precision), suffix));
        writeln!(
            out,
            "static const {} {}FreqTable[{}] = {{{}}};",
            ty,
            prefix,
            count,
            join(freqs)
        )?;
        writeln!(out)?;

        writeln!(out, "// number of samples in each table")?;
        let lengths = set.slots.iter().map(|s| s.sample_length.to_string());
        writeln!(
            out,
            "static const int {}SamplesTable[{}] = {{{}}};",
            prefix,
            count,
            join(lengths)
        )?;
        writeln!(out)?;

        writeln!(out, "// link everything in one array")?;
        let names = (0..count).map(|i| format!("{}Table{}", prefix, i));
        writeln!(
            out,
            "static const {}* {}Wavetable[{}] = {{{}}};",
            ty,
            prefix,
            count,
            join(names)
        )?;
        writeln!(out)?;

        writeln!(out, "#ifndef {}", NUM_TABLES_CONST)?;
        writeln!(out, "#define {} {}", NUM_TABLES_CONST, count)?;
        writeln!(out, "#endif")
    }
}
