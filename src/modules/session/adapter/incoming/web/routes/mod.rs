mod dark_mode;
mod dashboard;

pub use dark_mode::{get_dark_mode_handler, toggle_dark_mode_handler};
pub use dashboard::dashboard_handler;
