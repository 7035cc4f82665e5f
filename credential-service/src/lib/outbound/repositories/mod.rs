pub mod memory;
pub mod postgres;

pub use memory::InMemoryIdentityStore;
pub use postgres::PostgresIdentityStore;
