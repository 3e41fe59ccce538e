pub mod dashboard_teardown;
pub use dashboard_teardown::DashboardTeardown;
