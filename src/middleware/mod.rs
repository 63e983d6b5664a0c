//! Request-processing middleware.
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: Bearer <access token>`
//! 2. [`auth::AuthUser`] verifies the token and extracts its claims
//! 3. [`auth::CurrentUser`] additionally confirms the user still exists
//! 4. The handler runs with the resolved user

pub mod auth;
