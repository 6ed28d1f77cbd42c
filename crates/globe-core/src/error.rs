use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("dense glyph probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("unknown preset {0:?} (expected \"point-cloud\" or \"wireframe\")")]
    UnknownPreset(String),
}
