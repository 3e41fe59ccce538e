use serde::{Serialize, Serializer};
use std::time::Duration;

/// Pause shown after a signup or a login that matched the stored record.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1200);

/// Pause shown after a login accepted by the permissive fallback.
pub const FALLBACK_REDIRECT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Entry,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Where the client should go next, and how long its loading indicator
/// stays up first. The delay is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub route: Route,
    #[serde(rename = "redirectDelayMs", serialize_with = "serialize_millis")]
    pub delay: Duration,
}

impl Navigation {
    pub fn to(route: Route, delay: Duration) -> Self {
        Self { route, delay }
    }

    pub fn immediate(route: Route) -> Self {
        Self::to(route, Duration::ZERO)
    }

    pub fn delay_ms(&self) -> u64 {
        duration_millis(&self.delay)
    }
}

fn duration_millis(delay: &Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

fn serialize_millis<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration_millis(delay))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_serializes_route_path_and_millis() {
        let nav = Navigation::to(Route::Dashboard, REDIRECT_DELAY);

        let json = serde_json::to_value(nav).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "route": "/dashboard", "redirectDelayMs": 1200 })
        );
    }

    #[test]
    fn test_immediate_navigation_has_no_delay() {
        let nav = Navigation::immediate(Route::Entry);

        assert_eq!(nav.delay, Duration::ZERO);
        assert_eq!(nav.route.path(), "/");
    }
}
