use async_trait::async_trait;

use crate::session::domain::ClientId;

/// Drops whatever the dashboard kept in memory for a client when it
/// leaves the dashboard.
#[async_trait]
pub trait DashboardTeardown: Send + Sync {
    async fn teardown(&self, client: &ClientId);
}
