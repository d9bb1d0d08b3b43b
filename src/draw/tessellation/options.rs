//! Tessellation configuration

use crate::error::TessellationError;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Samples per Bezier segment used when nothing else is configured
pub const DEFAULT_CURVE_RESOLUTION: u32 = 8;

/// Caller-tunable tessellation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationOptions {
    /// Number of segments each quadratic/cubic curve is flattened into.
    /// Higher is smoother at the cost of vertex count.
    pub curve_resolution: u32,

    /// Douglas-Peucker tolerance applied to each closed contour before
    /// triangulation. `0.0` disables simplification.
    pub simplify_tolerance: f64,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        TessellationOptions {
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            simplify_tolerance: 0.0,
        }
    }
}

impl TessellationOptions {
    pub fn with_resolution(curve_resolution: u32) -> Self {
        TessellationOptions {
            curve_resolution,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TessellationError> {
        if self.curve_resolution == 0 {
            return Err(TessellationError::InvalidOptions(
                "curve_resolution must be at least 1".to_string(),
            ));
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(TessellationError::InvalidOptions(format!(
                "simplify_tolerance must be a finite non-negative number, got {}",
                self.simplify_tolerance
            )));
        }
        Ok(())
    }

    /// Load options from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read options file {}", path.as_ref().display()))?;
        let options: TessellationOptions = serde_json::from_str(&text)
            .with_context(|| format!("Invalid options file {}", path.as_ref().display()))?;
        options.validate()?;
        Ok(options)
    }
}
