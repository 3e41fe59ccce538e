pub mod check_access;
pub mod dark_mode;
