// In: src/errors.rs

use thiserror::Error;

/// Main error type for the battle engine.
///
/// Every fallible engine path resolves to one of three categories: a
/// referenced entity was absent, the battle was in a state that forbids the
/// operation, or input data failed an invariant check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A referenced entity does not exist in the store
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The battle is in a state that does not permit the operation
    #[error("invalid battle state: {0}")]
    InvalidState(String),

    /// Input data violated an entity invariant
    #[error("validation failed: {0}")]
    Validation(String),
}

impl BattleError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        BattleError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        BattleError::InvalidState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        BattleError::Validation(msg.into())
    }
}

/// Convenience result type for battle engine operations
pub type BattleResult<T> = Result<T, BattleError>;
