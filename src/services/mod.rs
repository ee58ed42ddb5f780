// Service exports
pub mod cache;
pub mod measurements;
pub mod storage;
pub mod try_on;

pub use cache::RedisBackend;
pub use measurements::{MeasurementStore, Saved};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError, StorageKey};
pub use try_on::{TryOnCategory, TryOnClient, TryOnError, TryOnStatus, TryOnTask};
