use std::env;

/// Password hashing configuration.
///
/// Either a numeric bcrypt cost or an explicit salt string can be supplied;
/// the salt, when present, takes precedence and makes hashes deterministic
/// (useful for seeded environments, not recommended in production).
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
    pub bcrypt_salt: Option<String>,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            bcrypt_salt: env::var("BCRYPT_SALT").ok().filter(|s| !s.is_empty()),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 10,
            bcrypt_salt: None,
        }
    }
}
