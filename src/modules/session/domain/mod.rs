pub mod entities;
pub mod navigation;

pub use entities::{ClientId, CredentialRecord};
pub use navigation::{Navigation, Route};
