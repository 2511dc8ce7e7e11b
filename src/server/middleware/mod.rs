//! Request guards.
//!
//! `AuthGuard` verifies bearer tokens issued by `AuthService`; `require_search` wraps it
//! as an axum middleware for the routes that need the `SEARCH` authority.

pub mod auth;

#[cfg(test)]
mod test;
