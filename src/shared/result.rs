use super::error::ValidationError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by adapters and the CLI, where errors are reported rather than matched on.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a validation pipeline stage.
/// Callers match on [`ValidationError`] to tell failure kinds apart.
pub type PipelineResult<T> = std::result::Result<T, ValidationError>;
