use crate::session::application::SessionContext;
use crate::session::domain::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render(Route),
    Redirect(Route),
}

/// The dashboard's on-load check. It looks at the authenticated flag only;
/// it is an access gate, not authorization.
pub struct AccessGate;

impl AccessGate {
    pub fn check(session: &SessionContext, requested: Route) -> GateDecision {
        match requested {
            Route::Entry => GateDecision::Render(Route::Entry),
            Route::Dashboard if session.is_authenticated => GateDecision::Render(Route::Dashboard),
            Route::Dashboard => GateDecision::Redirect(Route::Entry),
        }
    }
}
