//! Small helpers shared by routes and middleware.
pub mod httperror;
