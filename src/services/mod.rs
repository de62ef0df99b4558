//! Core behaviour behind the routes, independent of HTTP plumbing.
pub mod frontend;
pub mod health;
pub mod media;
