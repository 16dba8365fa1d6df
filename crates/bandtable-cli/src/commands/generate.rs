//! Generate command implementation
//!
//! Builds the config, generates the wavetables, and emits them as source.

use anyhow::Result;
use bandtable_backend::{generate, WavetableSet};
use bandtable_spec::canonical_config_hash;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use super::json_output::{
    backend_error_to_json, error_codes, to_json_string, validation_error_to_json, GenerateOutput,
    JsonError,
};
use super::{reporting, GenerateRequest, Status};
use crate::emit::render_source;

/// Run the generate command
///
/// # Returns
/// Exit status: 0 success, 1 invalid config, 2 generation error, 3 output error
pub fn run(request: &GenerateRequest) -> Result<Status> {
    if request.json {
        run_json(request)
    } else {
        run_human(request)
    }
}

/// Run generate with human-readable (colored) output on stderr
fn run_human(request: &GenerateRequest) -> Result<Status> {
    let start = Instant::now();

    let config = match request.config() {
        Ok(config) => config,
        Err(errors) => {
            reporting::print_validation_errors(&errors);
            return Ok(Status::InvalidConfig);
        }
    };

    let config_hash = canonical_config_hash(&config).ok();
    reporting::print_config(&config, config_hash.as_deref());

    let set = match generate(&config) {
        Ok(set) => set,
        Err(e) => {
            reporting::print_backend_error(&e);
            return Ok(if e.is_configuration_error() {
                Status::InvalidConfig
            } else {
                Status::GenerationFailed
            });
        }
    };

    reporting::print_set_summary(&set);

    if let Err(e) = write_source(&set, request) {
        eprintln!(
            "\n{} [{}] could not write output: {}",
            "FAILED".red().bold(),
            error_codes::OUTPUT_WRITE.red(),
            e
        );
        return Ok(Status::OutputFailed);
    }

    let destination = request.output.as_deref().unwrap_or("stdout");
    eprintln!(
        "\n{} {} {} source to {} in {:.2?}",
        "SUCCESS".green().bold(),
        set.len(),
        request.format,
        destination,
        start.elapsed()
    );

    Ok(Status::Success)
}

/// Run generate with a JSON summary on stderr
fn run_json(request: &GenerateRequest) -> Result<Status> {
    let config = match request.config() {
        Ok(config) => config,
        Err(errors) => {
            let errors = errors.iter().map(validation_error_to_json).collect();
            eprintln!("{}", to_json_string(&GenerateOutput::failure(None, errors)));
            return Ok(Status::InvalidConfig);
        }
    };

    let set = match generate(&config) {
        Ok(set) => set,
        Err(e) => {
            let output = GenerateOutput::failure(Some(config), vec![backend_error_to_json(&e)]);
            eprintln!("{}", to_json_string(&output));
            return Ok(if e.is_configuration_error() {
                Status::InvalidConfig
            } else {
                Status::GenerationFailed
            });
        }
    };

    if let Err(e) = write_source(&set, request) {
        let error = JsonError::new(error_codes::OUTPUT_WRITE, e.to_string());
        let output = GenerateOutput::failure(Some(config), vec![error]);
        eprintln!("{}", to_json_string(&output));
        return Ok(Status::OutputFailed);
    }

    let config_hash = canonical_config_hash(&config).ok();
    let output = GenerateOutput::success(&set, config_hash, request.output.clone());
    eprintln!("{}", to_json_string(&output));

    Ok(Status::Success)
}

/// Writes the emitted source to the requested file or stdout.
fn write_source(set: &WavetableSet, request: &GenerateRequest) -> io::Result<()> {
    let source = render_source(set, request.format);
    match request.output.as_deref() {
        Some(path) => write_file(Path::new(path), &source),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(source.as_bytes())?;
            lock.flush()
        }
    }
}

fn write_file(path: &Path, source: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::OutputFormat;

    fn request_to(dir: &tempfile::TempDir, name: &str) -> GenerateRequest {
        let mut request = GenerateRequest::new(48000, 4, "saw");
        request.output = Some(dir.path().join(name).to_string_lossy().into_owned());
        request
    }

    #[test]
    fn test_writes_c_header() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_to(&dir, "saw.h");
        assert_eq!(run(&request).unwrap(), Status::Success);

        let source = std::fs::read_to_string(dir.path().join("saw.h")).unwrap();
        assert!(source.contains("static const float BLSawTable0["));
        assert!(source.contains("#define BL_NUM_TABLES"));
    }

    #[test]
    fn test_writes_rust_module_in_json_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = request_to(&dir, "nested/tables.rs");
        request.format = OutputFormat::Rust;
        request.json = true;
        assert_eq!(run(&request).unwrap(), Status::Success);

        let source = std::fs::read_to_string(dir.path().join("nested/tables.rs")).unwrap();
        assert!(source.contains("pub const BL_NUM_TABLES: usize"));
    }

    #[test]
    fn test_invalid_config_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = request_to(&dir, "never.h");
        request.sample_rate = 0;
        assert_eq!(run(&request).unwrap(), Status::InvalidConfig);
        request.json = true;
        assert_eq!(run(&request).unwrap(), Status::InvalidConfig);
        assert!(!dir.path().join("never.h").exists());
    }

    #[test]
    fn test_unwritable_output_status() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let mut request = GenerateRequest::new(48000, 2, "square");
        request.output = Some(dir.path().to_string_lossy().into_owned());
        assert_eq!(run(&request).unwrap(), Status::OutputFailed);
    }
}
