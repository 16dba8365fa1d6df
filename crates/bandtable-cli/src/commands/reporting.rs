//! Human-readable status output.
//!
//! Everything here goes to stderr; stdout is reserved for generated source.

use bandtable_backend::{StabilityReport, WavetableSet};
use bandtable_spec::{BackendError, GenerationConfig, ValidationError};
use colored::Colorize;

/// Prints the config banner before a run.
pub(crate) fn print_config(config: &GenerationConfig, config_hash: Option<&str>) {
    eprintln!("{} {}", "Waveform:".cyan().bold(), config.waveform);
    eprintln!("{} {} Hz", "Sample rate:".cyan().bold(), config.sample_rate);
    eprintln!("{} {}", "Requested slots:".cyan().bold(), config.slot_count);
    eprintln!("{} {}", "Precision:".cyan().bold(), config.precision);
    if let Some(hash) = config_hash {
        eprintln!("{} {}", "Config hash:".dimmed(), &hash[..hash.len().min(16)]);
    }
}

/// Prints the slot listing and totals of a finished set.
pub(crate) fn print_set_summary(set: &WavetableSet) {
    eprintln!("\n{}", "Slots:".cyan().bold());
    for (i, slot) in set.slots.iter().enumerate() {
        eprintln!(
            "  {:>3}  {:>10.3} Hz  {:>6} samples  {}",
            i,
            slot.canonical_frequency,
            slot.sample_length,
            format!("{} harmonics", slot.harmonic_count).dimmed()
        );
    }

    if (set.len() as u32) < set.config.slot_count {
        eprintln!(
            "  {} {} of {} requested slots collapsed onto duplicate lengths",
            "!".yellow(),
            set.config.slot_count as usize - set.len(),
            set.config.slot_count
        );
    }

    if let Some(range) = set.shaped_range() {
        eprintln!(
            "{} [{:.6}, {:.6}]",
            "Gauss range:".dimmed(),
            range.min,
            range.max
        );
    }
    eprintln!(
        "{} {} samples, {} bytes",
        "Total:".dimmed(),
        set.total_samples,
        set.total_bytes
    );
    eprintln!("{} {}", "Table hash:".dimmed(), &set.table_hash[..16]);
}

/// Prints config validation errors.
pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    eprintln!("\n{}", "Invalid configuration:".red().bold());
    for error in errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        eprintln!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

/// Prints a backend failure.
pub(crate) fn print_backend_error<E: BackendError>(err: &E) {
    eprintln!(
        "\n{} [{}] {}: {}",
        "FAILED".red().bold(),
        err.code().red(),
        err.category().dimmed(),
        err.message()
    );
}

/// Prints a stability report.
pub(crate) fn print_stability_report(report: &StabilityReport) {
    eprintln!("\n{}", "Single vs. double precision:".cyan().bold());
    for slot in &report.slots {
        eprintln!(
            "  {:>3}  {:>6} samples  max deviation {:.3e}",
            slot.index, slot.sample_length, slot.max_abs_deviation
        );
    }

    if report.plans_match {
        eprintln!("{} {} slots in both widths", "Plans:".dimmed(), report.single_slots);
    } else {
        eprintln!(
            "  {} slot plans differ: {} single vs. {} double",
            "!".yellow(),
            report.single_slots,
            report.double_slots
        );
    }
    eprintln!(
        "{} {:.3e}",
        "Max deviation:".dimmed(),
        report.max_abs_deviation
    );
}
