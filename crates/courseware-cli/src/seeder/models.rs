//! Data models for database seeding configuration.

use courseware_models::UserId;

/// Seed data for creating a user.
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_hash: String,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: UserId,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_users: usize,
    pub courses_per_user: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_users: 10,
            courses_per_user: 2,
        }
    }
}

impl SeedConfig {
    pub fn new(num_users: usize) -> Self {
        Self {
            num_users,
            ..Default::default()
        }
    }

    pub fn with_courses_per_user(mut self, courses_per_user: usize) -> Self {
        self.courses_per_user = courses_per_user;
        self
    }

    pub fn total_courses(&self) -> usize {
        self.num_users * self.courses_per_user
    }
}

/// Row counts written by a seeding run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub courses: usize,
}
