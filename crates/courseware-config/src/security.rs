use std::env;

use bcrypt::DEFAULT_COST;

/// Lowest and highest cost bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Copy, Debug)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_COST);

        Self::with_cost(bcrypt_cost)
    }

    pub fn with_cost(cost: u32) -> Self {
        Self {
            bcrypt_cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}
