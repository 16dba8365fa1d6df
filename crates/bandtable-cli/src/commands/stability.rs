//! Stability command implementation
//!
//! Generates the config in single and double precision and reports how far
//! the single-precision tables drift.

use anyhow::Result;
use bandtable_backend::check_stability;
use colored::Colorize;

use super::json_output::{
    backend_error_to_json, to_json_string, validation_error_to_json, StabilityOutput,
};
use super::{reporting, GenerateRequest, Status};

/// Run the stability check
///
/// # Returns
/// Exit status: 0 when both widths agree on the slot plan, 1 invalid config,
/// 2 when generation fails or the plans diverge
pub fn run(request: &GenerateRequest) -> Result<Status> {
    let config = match request.config() {
        Ok(config) => config,
        Err(errors) => {
            if request.json {
                let errors = errors.iter().map(validation_error_to_json).collect();
                eprintln!("{}", to_json_string(&StabilityOutput::failure(None, errors)));
            } else {
                reporting::print_validation_errors(&errors);
            }
            return Ok(Status::InvalidConfig);
        }
    };

    if !request.json {
        reporting::print_config(&config, None);
    }

    let report = match check_stability(&config) {
        Ok(report) => report,
        Err(e) => {
            if request.json {
                let output = StabilityOutput::failure(Some(config), vec![backend_error_to_json(&e)]);
                eprintln!("{}", to_json_string(&output));
            } else {
                reporting::print_backend_error(&e);
            }
            return Ok(if e.is_configuration_error() {
                Status::InvalidConfig
            } else {
                Status::GenerationFailed
            });
        }
    };

    if request.json {
        eprintln!("{}", to_json_string(&StabilityOutput::from_report(config, &report)));
    } else {
        reporting::print_stability_report(&report);
        if report.plans_match {
            eprintln!("\n{}", "STABLE".green().bold());
        } else {
            eprintln!("\n{}", "UNSTABLE".red().bold());
        }
    }

    Ok(if report.plans_match {
        Status::Success
    } else {
        Status::GenerationFailed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_config() {
        let request = GenerateRequest::new(48000, 8, "Triangle");
        assert_eq!(run(&request).unwrap(), Status::Success);
    }

    #[test]
    fn test_json_mode() {
        let mut request = GenerateRequest::new(44100, 4, "gauss");
        request.json = true;
        assert_eq!(run(&request).unwrap(), Status::Success);
    }

    #[test]
    fn test_invalid_config() {
        let request = GenerateRequest::new(48000, 8, "noise");
        assert_eq!(run(&request).unwrap(), Status::InvalidConfig);
    }
}
