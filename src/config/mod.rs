//! Configuration for schema declaration and projection.

/// What to do when one declaration lists the same key twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Fail the declaration with `DeclarationError::DuplicateKey`
    #[default]
    Reject,
    /// Keep the later entry in the earlier entry's position
    LastWins,
}

/// What a second `declare` call on the same builder does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedeclarationPolicy {
    /// Append new keys; keys already declared are overridden in place
    #[default]
    Accumulate,
    /// Discard everything declared so far
    Replace,
}

/// Configuration for the schema builder and the projector
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Handling of duplicate keys inside one declaration
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Handling of repeated declarations
    pub redeclaration: RedeclarationPolicy,
    /// Trace every field evaluation at `trace` level
    pub log_projections: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeyPolicy::Reject,
            redeclaration: RedeclarationPolicy::Accumulate,
            log_projections: false,
        }
    }
}

impl ProjectionConfig {
    /// Set the duplicate key policy
    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Set the redeclaration policy
    #[must_use]
    pub fn with_redeclaration(mut self, policy: RedeclarationPolicy) -> Self {
        self.redeclaration = policy;
        self
    }

    /// Enable or disable per-field trace logging
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_projections = enabled;
        self
    }
}
