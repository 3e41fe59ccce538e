pub mod access_gate;
pub mod ports;
pub mod session_context;
pub mod use_cases;

pub use access_gate::{AccessGate, GateDecision};
pub use session_context::{SessionContext, SessionUpdate};
