//! API-facing data models for users and chirps.

pub mod chirp;
pub mod user;

pub use chirp::Chirp;
pub use user::User;
