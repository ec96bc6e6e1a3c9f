use anyhow::anyhow;
use courseware_core::{StoreError, StoreResult};
use courseware_models::ValidatedInput;

/// Maps a SQLx failure onto the store's failure kinds.
pub(crate) fn classify(err: sqlx::Error, context: &'static str) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        let message = db_err.message();

        if db_err.is_unique_violation() || message.starts_with("UNIQUE constraint failed") {
            let field = db_err
                .constraint()
                .map(str::to_string)
                .or_else(|| violated_column(message))
                .unwrap_or_else(|| "unknown".to_string());

            return StoreError::unique(field);
        }
    }

    StoreError::Unexpected(anyhow!(err).context(context))
}

/// Column named in a SQLite constraint message, e.g.
/// `UNIQUE constraint failed: users.email_address` -> `email_address`.
fn violated_column(message: &str) -> Option<String> {
    let (_, columns) = message.split_once("failed:")?;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit('.').next()?.trim();

    (!column.is_empty()).then(|| column.to_string())
}

pub(crate) fn validate<T: ValidatedInput>(input: &T) -> StoreResult<()> {
    let messages = input.validation_messages();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(messages))
    }
}
