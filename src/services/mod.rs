//! Business rules outside the auth core.

pub mod chirp;
