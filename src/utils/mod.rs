//! Shared utilities:
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: access/refresh token creation and verification
//! - [`pagination`]: cursor-based connection pagination
//! - [`password`]: bcrypt hashing and verification

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
