//! Pipeline orchestration.

use tracing::debug;

use super::transforms::{
    InlineRewriter, NormalizeWhitespace, StructuralEliminator, Transform, UnicodeFilter,
};
use super::{ConfigError, PatternSet, StripperConfig};
use crate::decode::{Decoder, Utf8Decoder};

/// Strips wiki markup from article text.
///
/// Build one per configuration and reuse it: all patterns are compiled up
/// front and nothing is mutated while stripping, so a single instance can be
/// shared across threads.
pub struct WikiStripper {
    config: StripperConfig,
    stages: Vec<Box<dyn Transform>>,
    decoder: Box<dyn Decoder>,
}

impl WikiStripper {
    /// Compile the pattern set for `config`.
    ///
    /// Fails on malformed unicode ranges or a zero pass limit; stripping
    /// itself never fails.
    pub fn new(config: StripperConfig) -> Result<Self, ConfigError> {
        if config.max_iterations == Some(0) {
            return Err(ConfigError::ZeroPassLimit);
        }

        let PatternSet {
            structural,
            extraction,
            deletion,
            unicode,
        } = PatternSet::build(&config)?;

        let stages: Vec<Box<dyn Transform>> = vec![
            Box::new(StructuralEliminator::new(structural, config.max_iterations)),
            Box::new(InlineRewriter::new(extraction, deletion, config.max_iterations)),
            Box::new(UnicodeFilter::new(unicode)),
            Box::new(NormalizeWhitespace::new()?),
        ];

        Ok(Self {
            config,
            stages,
            decoder: Box::new(Utf8Decoder),
        })
    }

    /// Replace the decoder used by [`strip_bytes`](Self::strip_bytes).
    pub fn with_decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    pub fn config(&self) -> &StripperConfig {
        &self.config
    }

    /// Strip already-decoded text.
    pub fn strip(&self, text: &str) -> String {
        let mut text = text.to_string();
        let input_len = text.len();
        for stage in &self.stages {
            stage.transform(&mut text);
        }
        debug!(input_len, output_len = text.len(), "stripped document");
        text
    }

    /// Decode raw bytes, resolve HTML entities, then strip.
    pub fn strip_bytes(&self, bytes: &[u8]) -> String {
        let text = self.decoder.decode(bytes);
        let text = self.decoder.resolve_entities(&text);
        self.strip(&text)
    }
}

impl std::fmt::Debug for WikiStripper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiStripper")
            .field("config", &self.config)
            .field("stages", &self.stages.len())
            .finish()
    }
}
