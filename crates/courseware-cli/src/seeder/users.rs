//! User seeding functionality.
//!
//! Every seeded email address ends in [`SEED_EMAIL_DOMAIN`], which is how
//! [`clear_users`] tells seeded rows apart from real accounts.

use anyhow::{Context, Result};
use courseware_models::UserId;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::SEED_EMAIL_DOMAIN;
use super::models::UserSeed;

/// Generates user rows in parallel using Rayon.
///
/// `run_tag` keeps addresses unique across repeated seeding runs.
pub fn generate_users(count: usize, run_tag: &str, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_user(idx, run_tag, password_hash))
        .collect()
}

fn generate_user(idx: usize, run_tag: &str, password_hash: &str) -> UserSeed {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let email_address = format!(
        "{}.{}+{}{}@{}",
        email_slug(&first_name),
        email_slug(&last_name),
        run_tag,
        idx,
        SEED_EMAIL_DOMAIN
    );

    UserSeed {
        first_name,
        last_name,
        email_address,
        password_hash: password_hash.to_string(),
    }
}

// Names like "O'Keefe" would otherwise produce unusual local parts.
fn email_slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// Seeds users into the database.
pub async fn seed_users(
    db: &SqlitePool,
    count: usize,
    run_tag: &str,
    password_hash: &str,
) -> Result<Vec<UserId>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let users = generate_users(count, run_tag, password_hash);
    let user_ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        user_ids.len(),
        start_time.elapsed()
    );

    Ok(user_ids)
}

/// Inserts users in batches inside one transaction.
pub async fn insert_users_batch(db: &SqlitePool, users: &[UserSeed]) -> Result<Vec<UserId>> {
    let mut tx = db.begin().await.context("Failed to begin transaction")?;

    // 4 params per user
    const BATCH_SIZE: usize = 500;

    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let ids = insert_users_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await.context("Failed to commit seeded users")?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    users: &[UserSeed],
) -> Result<Vec<UserId>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["(?, ?, ?, ?)"; users.len()].join(", ");
    let query = format!(
        "INSERT INTO users (first_name, last_name, email_address, password) VALUES {placeholders} RETURNING id"
    );

    let mut q = sqlx::query_scalar::<_, UserId>(&query);
    for user in users {
        q = q
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email_address)
            .bind(&user.password_hash);
    }

    q.fetch_all(&mut **tx)
        .await
        .context("Failed to insert seeded users")
}

/// Clears all seeded users. Their courses go with them by cascade.
pub async fn clear_users(db: &SqlitePool) -> Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded users...");

    let result = sqlx::query("DELETE FROM users WHERE email_address LIKE ?")
        .bind(format!("%@{SEED_EMAIL_DOMAIN}"))
        .execute(db)
        .await
        .context("Failed to clear seeded users")?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
