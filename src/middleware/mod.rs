//! Middleware enforcing the request policy on every route.
pub mod csrf;
pub mod hosts;
pub mod security;
