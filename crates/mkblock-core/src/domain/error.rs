// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported from independent tasks)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error(
        "An incorrect block name '{name}'. A block name must include only letters, numbers, '_' & '-'"
    )]
    InvalidBlockName { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlockName { name } => vec![
                format!("'{name}' cannot be used as a block name"),
                "Use letters, digits, underscores and hyphens only".into(),
                "Separate several block names with spaces".into(),
                "Examples: header, main-nav, card_list".into(),
            ],
        }
    }
}
