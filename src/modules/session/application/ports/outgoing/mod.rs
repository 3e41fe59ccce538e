pub mod client_store;
pub use client_store::{ClientStore, ClientStoreError};
