use bcrypt::{Version, hash, hash_with_salt, verify};

use crate::config::security::SecurityConfig;
use crate::utils::errors::AppError;

/// Hashes a password with bcrypt.
///
/// A configured salt string takes precedence over the numeric cost-only
/// path; hashes are then deterministic for a given password.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String, AppError> {
    match &config.bcrypt_salt {
        Some(salt) => {
            // bcrypt wants exactly 16 salt bytes; repeat or truncate the
            // configured string to fit.
            let mut salt_bytes = [0u8; 16];
            for (dst, src) in salt_bytes.iter_mut().zip(salt.as_bytes().iter().cycle()) {
                *dst = *src;
            }

            hash_with_salt(password, config.bcrypt_cost, salt_bytes)
                .map(|parts| parts.format_for_version(Version::TwoB))
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e))
                })
        }
        None => hash(password, config.bcrypt_cost)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e))),
    }
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    verify(password, hashed)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
