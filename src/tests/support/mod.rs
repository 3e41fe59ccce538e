pub mod app_state_builder;
pub mod mocks;
pub mod stubs;

use crate::session::adapter::incoming::web::extractors::client::CLIENT_ID_HEADER;
use crate::session::application::ports::outgoing::ClientStore;
use crate::session::application::SessionUpdate;
use crate::session::domain::ClientId;

pub fn client_header(client: &ClientId) -> (&'static str, String) {
    (CLIENT_ID_HEADER, client.to_string())
}

/// Marks `client` as signed in, the way a successful signup leaves it.
pub async fn authenticate(store: &dyn ClientStore, client: &ClientId) {
    SessionUpdate::new()
        .authenticated(true)
        .save(store, client)
    .await
    .expect("test store accepts writes");
}

pub async fn authenticated_client(store: &dyn ClientStore) -> ClientId {
    let client = ClientId::new();
    authenticate(store, &client).await;
    client
}
