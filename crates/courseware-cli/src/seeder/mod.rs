//! Fake users and courses for development databases.
//!
//! Data is generated in parallel with Rayon and written with multi-row
//! `INSERT` statements. The password is hashed once at the minimum bcrypt
//! cost and shared by every seeded user.

pub mod courses;
pub mod models;
pub mod users;

pub use models::{CourseSeed, SeedConfig, SeedReport, UserSeed};

use anyhow::Result;
use courseware_config::security::MIN_BCRYPT_COST;
use courseware_core::hash_password;
use sqlx::SqlitePool;
use std::time::Instant;
use uuid::Uuid;

/// Domain of every seeded email address.
pub const SEED_EMAIL_DOMAIN: &str = "seed.courseware.test";

/// Password shared by every seeded user.
pub const SEED_PASSWORD: &str = "password";

pub async fn seed_all(db: &SqlitePool, config: SeedConfig) -> Result<SeedReport> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Users: {}", config.num_users);
    println!("   - Courses per user: {}", config.courses_per_user);

    let hash_start = Instant::now();
    let password_hash = hash_password(SEED_PASSWORD, MIN_BCRYPT_COST)?;
    println!("🔐 Hashed password in {:?}", hash_start.elapsed());

    let run_tag = Uuid::new_v4().simple().to_string()[..8].to_string();

    let user_ids = users::seed_users(db, config.num_users, &run_tag, &password_hash).await?;
    let course_count = courses::seed_courses(db, &user_ids, config.courses_per_user).await?;

    println!(
        "\n✅ Seeding complete! Created {} users and {} courses in {:?}",
        user_ids.len(),
        course_count,
        start_time.elapsed()
    );
    println!("\n📝 Password for all seeded users: {}", SEED_PASSWORD);

    Ok(SeedReport {
        users: user_ids.len(),
        courses: course_count,
    })
}

/// Removes every seeded user and, by cascade, their courses.
pub async fn clear_all(db: &SqlitePool) -> Result<u64> {
    let deleted = users::clear_users(db).await?;
    println!("\n✅ Seeded data cleared");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseware_core::verify_password;
    use courseware_db::{CourseStore, UserStore, init_memory_pool};
    use courseware_models::NewUser;

    #[tokio::test]
    async fn test_seed_all_writes_users_and_courses() {
        let pool = init_memory_pool().await.unwrap();

        let report = seed_all(&pool, SeedConfig::new(3).with_courses_per_user(2))
            .await
            .unwrap();

        assert_eq!(report, SeedReport { users: 3, courses: 6 });
        assert_eq!(UserStore::count(&pool).await.unwrap(), 3);

        let courses = CourseStore::list(&pool).await.unwrap();
        assert_eq!(courses.len(), 6);

        let owner = UserStore::find_by_email(&pool, &courses[0].owner.email_address)
            .await
            .unwrap()
            .unwrap();
        assert!(verify_password(SEED_PASSWORD, &owner.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_seeding_twice_does_not_collide() {
        let pool = init_memory_pool().await.unwrap();

        seed_all(&pool, SeedConfig::new(2)).await.unwrap();
        seed_all(&pool, SeedConfig::new(2)).await.unwrap();

        assert_eq!(UserStore::count(&pool).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_clear_all_keeps_real_users() {
        let pool = init_memory_pool().await.unwrap();
        let real = NewUser {
            first_name: Some("Joe".to_string()),
            last_name: Some("Smith".to_string()),
            email_address: Some("joe@smith.com".to_string()),
            password: Some("password".to_string()),
        };
        UserStore::create(&pool, real, MIN_BCRYPT_COST).await.unwrap();
        seed_all(&pool, SeedConfig::new(4)).await.unwrap();

        let deleted = clear_all(&pool).await.unwrap();

        assert_eq!(deleted, 4);
        assert_eq!(UserStore::count(&pool).await.unwrap(), 1);
        assert!(CourseStore::list(&pool).await.unwrap().is_empty());
    }
}
