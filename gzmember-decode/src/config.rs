//! Decoder configuration.

use std::fmt;

/// Which gzip primitive a [`BodyDecoder`](crate::BodyDecoder) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InflateStrategy {
    /// `flate2`'s gzip decoder when compiled in (feature `native`), else the
    /// member decoder.
    #[default]
    Native,
    /// Always the member decoder.
    Fallback,
}

impl fmt::Display for InflateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Body decoding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Gzip primitive to use.
    pub strategy: InflateStrategy,
    /// Largest decoded payload accepted, if any.
    pub max_output_size: Option<usize>,
}

impl DecodeConfig {
    /// Native primitive, no size cap.
    pub const DEFAULT: Self = Self {
        strategy: InflateStrategy::Native,
        max_output_size: None,
    };

    /// Member decoder, no size cap.
    pub const FALLBACK: Self = Self {
        strategy: InflateStrategy::Fallback,
        max_output_size: None,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Select the gzip primitive.
    pub fn with_strategy(mut self, strategy: InflateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Cap the decoded payload size.
    pub fn with_max_output_size(mut self, limit: usize) -> Self {
        self.max_output_size = Some(limit);
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
