pub mod auth;
pub mod cv;
pub mod session;
