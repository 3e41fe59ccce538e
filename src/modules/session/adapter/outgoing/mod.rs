mod client_store_in_memory;
pub use client_store_in_memory::InMemoryClientStore;

mod client_store_redis;
pub use client_store_redis::RedisClientStore;
