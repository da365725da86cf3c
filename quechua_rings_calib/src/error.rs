// Error type for calibration, configuration, and ring decoding.

use quechua_rings_lang::LangError;

/// Failures while building, loading, or applying ring calibrations.
#[derive(Debug, thiserror::Error)]
pub enum CalibError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A calibration file line was not two floating-point numbers.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The calibration file had fewer rings than there are suffix slots.
    #[error("calibration covers {found} rings, need {needed}")]
    NotEnoughRings { needed: usize, found: usize },

    /// A statistic was asked of too few samples.
    #[error("need at least {needed} samples, got {got}")]
    NotEnoughSamples { needed: usize, got: usize },

    /// Spacing between adjacent ring positions must be finite and positive.
    #[error("ring spacing must be positive, got {0}")]
    InvalidSpacing(f32),

    /// Position 0 must sit at a finite distance.
    #[error("ring zero distance must be finite, got {0}")]
    InvalidZeroDistance(f32),

    /// Recorded samples did not cover one set per ring position.
    #[error("ring {ring}: expected {expected} positions, got {found}")]
    PositionCount {
        ring: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Lang(#[from] LangError),
}

pub type CalibResult<T> = Result<T, CalibError>;
