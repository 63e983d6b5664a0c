//! Configuration modules for the Inkpress API.
//!
//! Each submodule covers one concern and loads itself from environment
//! variables with sensible development defaults:
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: access/refresh token secrets and lifetimes
//! - [`security`]: bcrypt cost and optional fixed salt

pub mod cors;
pub mod database;
pub mod jwt;
pub mod security;
