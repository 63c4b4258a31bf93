//! Persistence providers

pub mod fixed;
pub mod memory;

pub use fixed::FixedIdPersistence;
pub use memory::InMemoryPersistence;
