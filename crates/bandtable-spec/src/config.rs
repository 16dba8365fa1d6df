//! Generation config types: waveform shapes, numeric precision, and harmonic blend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError};

/// Band-limited waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sawtooth wave.
    Saw,
    /// Square wave (odd harmonics).
    Square,
    /// Triangle wave (odd harmonics, alternating sign).
    Triangle,
    /// Gauss-like pulse train.
    Gauss,
}

impl Waveform {
    /// All supported waveforms, in CLI listing order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Saw,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Gauss,
    ];

    /// Canonical display name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Saw => "Saw",
            Waveform::Square => "Square",
            Waveform::Triangle => "Triangle",
            Waveform::Gauss => "Gauss",
        }
    }

    /// Offset in Hz added to every partitioned target frequency.
    ///
    /// Keeps the lowest table above the sub-audible range. Shapes with a
    /// steeper harmonic roll-off can start lower.
    pub fn min_frequency_offset(&self) -> f64 {
        match self {
            Waveform::Saw => 80.0,
            Waveform::Square => 80.0,
            Waveform::Triangle => 50.0,
            Waveform::Gauss => 25.0,
        }
    }

    /// Whether only odd harmonics contribute to this shape.
    pub fn odd_harmonics_only(&self) -> bool {
        matches!(self, Waveform::Square | Waveform::Triangle)
    }

    /// Whether the near-Nyquist aliasing filter applies to this shape.
    pub fn uses_aliasing_filter(&self) -> bool {
        !matches!(self, Waveform::Gauss)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Waveform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Waveform::ALL
            .iter()
            .copied()
            .find(|w| w.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::with_path(
                    ErrorCode::UnknownWaveform,
                    format!(
                        "unknown waveform '{}' (expected Saw, Square, Triangle, or Gauss)",
                        s
                    ),
                    "waveform",
                )
            })
    }
}

/// Floating-point width used for partitioning, synthesis, and emitted literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// 32-bit floats. Production output.
    #[default]
    Single,
    /// 64-bit floats. Extended width used to validate numerical stability.
    Double,
}

impl Precision {
    /// Size in bytes of one stored sample.
    pub fn byte_width(&self) -> usize {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }

    /// Number of fractional digits printed for sample literals.
    pub fn literal_digits(&self) -> usize {
        match self {
            Precision::Single => 10,
            Precision::Double => 17,
        }
    }

    /// Suffix appended to C floating-point literals.
    pub fn c_literal_suffix(&self) -> &'static str {
        match self {
            Precision::Single => "f",
            Precision::Double => "",
        }
    }

    /// C element type name.
    pub fn c_type(&self) -> &'static str {
        match self {
            Precision::Single => "float",
            Precision::Double => "double",
        }
    }

    /// Rust element type name, also used as a literal suffix.
    pub fn rust_type(&self) -> &'static str {
        match self {
            Precision::Single => "f32",
            Precision::Double => "f64",
        }
    }

    /// Name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "f32" | "float" => Ok(Precision::Single),
            "double" | "f64" => Ok(Precision::Double),
            _ => Err(ValidationError::with_path(
                ErrorCode::InvalidPrecision,
                format!("unknown precision '{}' (expected single or double)", s),
                "precision",
            )),
        }
    }
}

/// Mix between the two Saw/Square harmonic weightings.
///
/// Saw: `clean` scales `0.1 / sqrt(h)`, `ugly` scales `1 / h`.
/// Square: `clean` scales `1 / h`, `ugly` scales `1 / sqrt(h)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarmonicBlend {
    /// Coefficient of the primary weighting.
    pub clean: f64,
    /// Coefficient of the alternative weighting.
    pub ugly: f64,
}

impl Default for HarmonicBlend {
    fn default() -> Self {
        Self {
            clean: 1.0,
            ugly: 0.0,
        }
    }
}

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Requested number of slots; the partitioner may emit fewer.
    pub slot_count: u32,
    /// Waveform shape.
    pub waveform: Waveform,
    /// Numeric width.
    #[serde(default)]
    pub precision: Precision,
    /// Saw/Square weighting blend.
    #[serde(default)]
    pub blend: HarmonicBlend,
}

impl GenerationConfig {
    /// Creates a config with default precision and blend.
    pub fn new(sample_rate: u32, slot_count: u32, waveform: Waveform) -> Self {
        Self {
            sample_rate,
            slot_count,
            waveform,
            precision: Precision::default(),
            blend: HarmonicBlend::default(),
        }
    }

    /// Builds a config from raw command-line values.
    ///
    /// Signed inputs are accepted so non-positive values are reported as
    /// configuration errors rather than parse failures. All problems are
    /// collected; the returned config is not yet range-checked, see
    /// [`crate::validation::validate_config`].
    pub fn from_raw(
        sample_rate: i64,
        slot_count: i64,
        waveform: &str,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let sample_rate = match u32::try_from(sample_rate) {
            Ok(rate) if rate > 0 => Some(rate),
            _ => {
                errors.push(ValidationError::with_path(
                    ErrorCode::InvalidSampleRate,
                    format!("sample rate must be a positive integer, got {}", sample_rate),
                    "sample_rate",
                ));
                None
            }
        };

        let slot_count = match u32::try_from(slot_count) {
            Ok(count) if count > 0 => Some(count),
            _ => {
                errors.push(ValidationError::with_path(
                    ErrorCode::InvalidSlotCount,
                    format!("slot count must be at least 1, got {}", slot_count),
                    "slot_count",
                ));
                None
            }
        };

        let waveform = waveform.parse::<Waveform>().map_err(|e| errors.push(e)).ok();

        match (sample_rate, slot_count, waveform) {
            (Some(sample_rate), Some(slot_count), Some(waveform)) if errors.is_empty() => {
                Ok(Self::new(sample_rate, slot_count, waveform))
            }
            _ => Err(errors),
        }
    }

    /// Sets the numeric precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the Saw/Square harmonic blend.
    pub fn with_blend(mut self, blend: HarmonicBlend) -> Self {
        self.blend = blend;
        self
    }

    /// Serializes the config to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
