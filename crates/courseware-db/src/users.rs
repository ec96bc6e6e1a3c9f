use courseware_core::StoreResult;
use courseware_core::password::hash_password_blocking;
use courseware_models::{Identity, NewUser, UserId};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::error::{classify, validate};

const SELECT_IDENTITY: &str =
    "SELECT id, first_name, last_name, email_address, password FROM users";

pub struct UserStore;

impl UserStore {
    /// Exact, case-sensitive match on the unique email column.
    #[instrument(skip(db))]
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> StoreResult<Option<Identity>> {
        sqlx::query_as::<_, Identity>(&format!("{SELECT_IDENTITY} WHERE email_address = ?"))
            .bind(email)
            .fetch_optional(db)
            .await
            .map_err(|e| classify(e, "Failed to fetch user by email"))
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &SqlitePool, id: UserId) -> StoreResult<Option<Identity>> {
        sqlx::query_as::<_, Identity>(&format!("{SELECT_IDENTITY} WHERE id = ?"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| classify(e, "Failed to fetch user by ID"))
    }

    /// Validates, hashes the password with `bcrypt_cost`, and inserts.
    #[instrument(skip(db, input), fields(email = ?input.email_address))]
    pub async fn create(
        db: &SqlitePool,
        input: NewUser,
        bcrypt_cost: u32,
    ) -> StoreResult<Identity> {
        let input = input.normalized();
        validate(&input)?;

        let password = input.password.clone().unwrap_or_default();
        let password_hash = hash_password_blocking(password, bcrypt_cost).await?;

        Self::insert_with_hash(db, &input, &password_hash).await
    }

    /// Inserts a user whose password is already hashed.
    #[instrument(skip(db, input, password_hash), fields(email = ?input.email_address))]
    pub async fn insert_with_hash(
        db: &SqlitePool,
        input: &NewUser,
        password_hash: &str,
    ) -> StoreResult<Identity> {
        validate(input)?;

        sqlx::query_as::<_, Identity>(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, first_name, last_name, email_address, password
            "#,
        )
        .bind(input.first_name.as_deref().unwrap_or_default())
        .bind(input.last_name.as_deref().unwrap_or_default())
        .bind(input.email_address.as_deref().unwrap_or_default())
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| classify(e, "Failed to insert user"))
    }

    #[instrument(skip(db))]
    pub async fn count(db: &SqlitePool) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .map_err(|e| classify(e, "Failed to count users"))
    }
}
