// ============================================================================
// Arithmetic Configuration
// Tunables for the iterative power and square root algorithms
// ============================================================================

use crate::operations::float::{FRACTIONAL_POWER_ITERATIONS, SQRT_TOLERANCE};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Calculator`](crate::Calculator).
///
/// The defaults are the constants used by the free functions, so a
/// calculator built from `ArithmeticConfig::default()` gives the same
/// results as `math_operations::power` and `math_operations::square_root`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    /// Absolute tolerance between successive square root guesses
    pub sqrt_tolerance: f64,

    /// Refinement steps applied to a fractional exponent remainder
    pub fractional_power_iterations: u32,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            sqrt_tolerance: SQRT_TOLERANCE,
            fractional_power_iterations: FRACTIONAL_POWER_ITERATIONS,
        }
    }
}

impl ArithmeticConfig {
    /// Create a configuration with the default tunables
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the square root convergence tolerance
    pub fn with_sqrt_tolerance(mut self, tolerance: f64) -> Self {
        self.sqrt_tolerance = tolerance;
        self
    }

    /// Builder method: Set the number of fractional power refinement steps
    pub fn with_fractional_power_iterations(mut self, iterations: u32) -> Self {
        self.fractional_power_iterations = iterations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sqrt_tolerance.is_finite() || self.sqrt_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.sqrt_tolerance));
        }
        if self.fractional_power_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Tolerance must be finite and strictly positive
    InvalidTolerance(f64),
    /// At least one fractional refinement step is required
    ZeroIterations,
    /// Configuration text could not be deserialized
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(t) => {
                write!(f, "square root tolerance must be finite and positive, got {}", t)
            },
            ConfigError::ZeroIterations => {
                write!(f, "fractional power iterations must be at least 1")
            },
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
