/// Engine-wide `Result` type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error taxonomy for the installment-plan engine.
///
/// Every variant is terminal: the engine never recovers from one of these
/// internally and never emits a partial [`crate::modules::plan::models::PlanResponses`]
/// alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed input: zero installments, non-positive principal, a
    /// `first_payment_date` before `requested_date`, or a rate that must be
    /// non-negative and isn't.
    #[error("validation error: {0}")]
    Validation(String),

    /// The rate solver failed to converge within its iteration budget, or
    /// an intermediate value went non-finite.
    #[error("numeric error: {0}")]
    Numeric(String),

    /// Every candidate installment count was filtered out by
    /// `min_installment_amount` / `max_total_amount`.
    #[error("empty grid error: {0}")]
    EmptyGrid(String),

    /// Malformed request or response payload. Nothing inside this crate
    /// currently produces this variant (wire framing is out of scope) but
    /// it is kept so a dispatcher built on top of this crate has somewhere
    /// to map its own decode failures.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Anything else: an invariant this crate itself is responsible for
    /// was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn numeric(msg: impl Into<String>) -> Self {
        AppError::Numeric(msg.into())
    }

    pub fn empty_grid(msg: impl Into<String>) -> Self {
        AppError::EmptyGrid(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Process exit code a CLI dispatcher built on this crate should use.
    /// All variants are failures (§7: "Reported via non-zero exit"); the
    /// taxonomy only changes which non-zero code is returned.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 1,
            AppError::Numeric(_) => 2,
            AppError::EmptyGrid(_) => 3,
            AppError::Serialization(_) => 4,
            AppError::Internal(_) => 70,
        }
    }
}
