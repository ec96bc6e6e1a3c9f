//! Failures reported by the persistence layer.
//!
//! Every store operation returns [`StoreResult`]. The variants form a closed
//! set so callers match on the kind of failure instead of inspecting messages.

/// Column name of the unique identifying field on users.
pub const EMAIL_FIELD: &str = "email_address";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// One or more field rules were violated, messages in store order.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A unique constraint rejected the write.
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },

    /// Connectivity problems, unmapped constraints, programming errors.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn unique(field: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field: field.into(),
        }
    }
}
