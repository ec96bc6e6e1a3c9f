//! Course seeding functionality.

use anyhow::{Context, Result};
use courseware_models::UserId;
use fake::faker::lorem::en::*;
use fake::{Fake, Faker};
use rayon::prelude::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::models::CourseSeed;

/// Generates `per_user` courses for every user in parallel.
pub fn generate_courses(user_ids: &[UserId], per_user: usize) -> Vec<CourseSeed> {
    user_ids
        .par_iter()
        .flat_map(|&user_id| {
            (0..per_user)
                .map(|_| generate_course(user_id))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn generate_course(user_id: UserId) -> CourseSeed {
    let title: String = Sentence(2..6).fake();
    let description: String = Paragraph(2..5).fake();

    let estimated_time = Faker
        .fake::<bool>()
        .then(|| format!("{} hours", (2..40).fake::<u32>()));

    let materials_needed = Faker.fake::<bool>().then(|| {
        let items: Vec<String> = Words(2..6).fake();
        items
            .iter()
            .map(|item| format!("* {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    });

    CourseSeed {
        title: title.trim_end_matches('.').to_string(),
        description,
        estimated_time,
        materials_needed,
        user_id,
    }
}

/// Seeds courses for the given owners.
pub async fn seed_courses(
    db: &SqlitePool,
    user_ids: &[UserId],
    per_user: usize,
) -> Result<usize> {
    let start_time = Instant::now();
    println!(
        "📚 Seeding {} courses ({} per user)...",
        user_ids.len() * per_user,
        per_user
    );

    let courses = generate_courses(user_ids, per_user);
    let inserted = insert_courses_batch(db, &courses).await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Inserts courses in batches inside one transaction.
pub async fn insert_courses_batch(db: &SqlitePool, courses: &[CourseSeed]) -> Result<usize> {
    let mut tx = db.begin().await.context("Failed to begin transaction")?;

    // 5 params per course
    const BATCH_SIZE: usize = 400;

    let mut inserted = 0;
    for chunk in courses.chunks(BATCH_SIZE) {
        inserted += insert_courses_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await.context("Failed to commit seeded courses")?;
    Ok(inserted)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    courses: &[CourseSeed],
) -> Result<usize> {
    if courses.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["(?, ?, ?, ?, ?)"; courses.len()].join(", ");
    let query = format!(
        "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id) VALUES {placeholders}"
    );

    let mut q = sqlx::query(&query);
    for course in courses {
        q = q
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.estimated_time.as_deref())
            .bind(course.materials_needed.as_deref())
            .bind(course.user_id);
    }

    let result = q
        .execute(&mut **tx)
        .await
        .context("Failed to insert seeded courses")?;

    Ok(result.rows_affected() as usize)
}
